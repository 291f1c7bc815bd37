//! Browser localStorage persistence of the signed-in credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that touches the stored token. The app shell loads
//! it once into `AuthState`; every request then receives the `Session`
//! explicitly. SSR paths no-op.

use hierarchy::Session;

#[cfg(any(test, feature = "hydrate"))]
const TOKEN_KEY: &str = "jwtToken";

#[cfg(any(test, feature = "hydrate"))]
const REFRESH_KEY: &str = "refreshToken";

/// Read the stored credential, or an anonymous session.
pub fn load_session() -> Session {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .map_or_else(Session::anonymous, Session::with_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::anonymous()
    }
}

/// Persist the credential of a fresh login.
pub fn store_session(session: &Session, refresh_token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match session.token() {
            Some(token) => {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
            None => {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
        if let Some(refresh) = refresh_token {
            let _ = storage.set_item(REFRESH_KEY, refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, refresh_token);
    }
}

/// Forget every stored credential.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            for key in storage_keys() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn storage_keys() -> [&'static str; 2] {
    [TOKEN_KEY, REFRESH_KEY]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_backend_client_names() {
        assert_eq!(storage_keys(), ["jwtToken", "refreshToken"]);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn ssr_load_is_anonymous() {
        assert_eq!(load_session(), Session::anonymous());
    }
}
