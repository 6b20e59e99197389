//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the state plumbing around the pure `enrollment`
//! crate so route handlers can stay focused on protocol translation.

pub mod account;
pub mod flow;
