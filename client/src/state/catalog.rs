#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use enrollment::Session;
use enrollment::catalog::sample_catalog;

/// Session catalog as seen by the UI.
///
/// Defaults to the built-in sample catalog so every page renders with data
/// immediately; a server fetch may replace it after hydration.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub sessions: Vec<Session>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { sessions: sample_catalog(), loading: false }
    }
}

impl CatalogState {
    /// Mark a server refresh as in flight.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the result of a server refresh. `None` (fetch failed, or not
    /// running in the browser) keeps the current sessions in place.
    pub fn finish_refresh(&mut self, fetched: Option<Vec<Session>>) {
        self.loading = false;
        if let Some(sessions) = fetched {
            self.sessions = sessions;
        }
    }
}
