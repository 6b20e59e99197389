//! Reusable presentational components shared across pages.

pub mod nav_bar;
pub mod plan_card;
pub mod session_card;
pub mod video_card;
