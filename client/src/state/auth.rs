//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and object views to coordinate login redirects and to
//! hand the credential to every object request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use hierarchy::{Session, UserInfo};

use crate::net::source::HttpObjectSource;

/// Authentication state: the credential, the resolved user, and whether the
/// stored credential is still being checked.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl AuthState {
    /// State used while the stored credential has not been checked yet.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Object source carrying this state's credential.
    #[must_use]
    pub fn source(&self) -> HttpObjectSource {
        HttpObjectSource::new(self.session.clone())
    }

    /// The credential once the stored one has been checked, if signed in.
    #[must_use]
    pub fn ready_session(&self) -> Option<Session> {
        (!self.loading && self.session.is_authenticated()).then(|| self.session.clone())
    }

    /// Drop the credential and the user, e.g. after a rejected request.
    pub fn sign_out(&mut self) {
        self.session = Session::anonymous();
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "me".to_owned(), UserInfo::display_name)
    }
}
