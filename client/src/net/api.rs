//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the built-in sample
//! catalog already covers rendering.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or failing
//! API silently leaves the built-in data in place.

#![allow(clippy::unused_async)]

use enrollment::Session;

/// Fetch the session catalog from `GET /api/sessions`.
/// Returns `None` on the server or when the request fails.
pub async fn fetch_sessions() -> Option<Vec<Session>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/sessions").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Session>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
