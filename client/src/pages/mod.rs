//! Page modules for the mode-switched screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped orchestration and delegates rendering
//! details to `components`. Pages never mutate the enrollment draft
//! directly — they dispatch `EnrollmentEvent`s through the mode signal.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod pricing;
pub mod signup;
pub mod videos;
