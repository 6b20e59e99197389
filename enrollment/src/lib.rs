//! # enrollment
//!
//! Pure domain logic for the Lean Quran enrollment product: the session
//! catalog, the multi-step signup flow, validation, user synthesis, and the
//! top-level application mode.
//!
//! This crate has no I/O and no async. It is consumed by both the Leptos
//! `client` (WASM) and the Axum `server` (native), so everything here must
//! stay platform-neutral.

pub mod catalog;
pub mod draft;
pub mod flow;
pub mod mode;
pub mod user;

pub use catalog::{AgeGroup, Day, LearningLevel, Session, SessionId};
pub use draft::{AccountField, EnrollmentDraft, ValidationIssue};
pub use flow::{EnrollmentEvent, EnrollmentState, FlowAction, Step};
pub use mode::{AppMode, StaticPage};
pub use user::{PaymentStatus, User};
