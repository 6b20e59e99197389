//! Top-level application mode.
//!
//! DESIGN
//! ======
//! The app's "current page" is a closed sum type rather than a string key
//! plus ad-hoc booleans, so illegal combinations are unrepresentable: a
//! dashboard always carries its user, and an enrollment draft exists only
//! while the signup path is active. Navigating away from `Enrolling`
//! discards the draft.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::flow::{EnrollmentEvent, EnrollmentState, FlowAction};
use crate::user::User;

/// Static display pages reachable without an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaticPage {
    #[default]
    Home,
    SalatVideos,
    Pricing,
}

/// What the app is showing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing a static marketing page, anonymously.
    Browsing(StaticPage),
    /// On the login form.
    SigningIn,
    /// Inside the signup wizard, with its in-progress draft.
    Enrolling(EnrollmentState),
    /// Signed in (or enrolled) and looking at the dashboard.
    Dashboard(User),
}

impl Default for AppMode {
    fn default() -> Self {
        Self::Browsing(StaticPage::Home)
    }
}

impl AppMode {
    /// Navigate to a static page. Discards any in-progress draft.
    pub fn browse(&mut self, page: StaticPage) {
        *self = Self::Browsing(page);
    }

    /// Navigate to the landing page.
    pub fn go_home(&mut self) {
        self.browse(StaticPage::Home);
    }

    /// Open the login form. Discards any in-progress draft.
    pub fn sign_in(&mut self) {
        *self = Self::SigningIn;
    }

    /// Start the signup wizard with a fresh draft.
    pub fn start_enrollment(&mut self) {
        *self = Self::Enrolling(EnrollmentState::new());
    }

    /// Login (or enrollment hand-off) completed: show the dashboard.
    pub fn complete_login(&mut self, user: User) {
        *self = Self::Dashboard(user);
    }

    /// Drop the current user and return to the landing page.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    /// Forward a flow event to the active wizard. A successful submit swaps
    /// this mode to the new user's dashboard. No-op outside `Enrolling`.
    pub fn dispatch(&mut self, event: EnrollmentEvent) -> FlowAction {
        let Self::Enrolling(state) = self else {
            return FlowAction::None;
        };
        let action = state.apply(event);
        if let FlowAction::Submitted(user) = &action {
            *self = Self::Dashboard(user.clone());
        }
        action
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Dashboard(user) => Some(user),
            _ => None,
        }
    }
}
