//! Network helpers for talking to the enrollment API.

pub mod api;
