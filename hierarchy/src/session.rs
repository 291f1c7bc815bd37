//! Bearer credential handed to object sources.
//!
//! DESIGN
//! ======
//! Sources receive the session explicitly instead of reading browser storage
//! themselves, so the same source code runs in the browser, in the CLI, and
//! against in-memory fakes in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

/// Credential for one signed-in user. Empty when signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Wrap a raw JWT. Blank tokens produce an anonymous session.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() { Self::anonymous() } else { Self { token: Some(trimmed.to_owned()) } }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if signed in.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub jwt_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl AuthResponse {
    #[must_use]
    pub fn session(&self) -> Session {
        Session::with_token(&self.jwt_token)
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
