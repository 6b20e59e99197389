//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The application mode itself lives in the `enrollment` crate (it is pure
//! domain logic); this module holds browser-session state that wraps it.

pub mod catalog;
