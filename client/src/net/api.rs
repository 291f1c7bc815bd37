//! REST helpers for auth and user endpoints of the property backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always through the
//! host's same-origin `/api` prefix.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use hierarchy::{AuthResponse, Session, UserInfo};

/// Prefix under which the host forwards requests to the backend.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    hierarchy::endpoints::join_url(API_BASE, path)
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "Wrong username or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the backend rejects
/// the credentials.
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = hierarchy::LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&api_url(hierarchy::endpoints::LOGIN_PATH))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /auth/logout`. Failures are ignored; the caller clears
/// the local credential regardless.
pub async fn logout(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(&api_url(hierarchy::endpoints::LOGOUT_PATH));
        if let Some(auth) = session.authorization() {
            request = request.header("Authorization", &auth);
        }
        let _ = request.send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Fetch the signed-in user from `/users/info`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(session: &Session) -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let auth = session.authorization()?;
        let resp = gloo_net::http::Request::get(&api_url(hierarchy::endpoints::CURRENT_USER_PATH))
            .header("Authorization", &auth)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}
