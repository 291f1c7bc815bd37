//! Browser implementation of [`ObjectSource`] over the host's `/api` prefix.
//!
//! The credential is handed in by the caller (taken from `AuthState`), never
//! read from storage here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use hierarchy::endpoints::{
    ancestry_path, assign_responsible_path, children_path, object_path, remove_responsible_path, OBJECTS_PATH,
    USERS_PATH,
};
use hierarchy::{
    NewObject, ObjectId, ObjectSource, ObjectSummary, ObjectUpdate, RealEstateObject, Session, SourceError, UserInfo,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api::API_BASE;

#[cfg(any(test, not(feature = "hydrate")))]
const NOT_IN_BROWSER: &str = "object requests are only available in the browser";

/// Write methods of the object endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Post,
    Put,
    Delete,
}

/// Object-hierarchy source backed by `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpObjectSource {
    base: String,
    session: Session,
}

impl HttpObjectSource {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { base: API_BASE.to_owned(), session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// All objects, for the list page.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails.
    pub async fn list_objects(&self) -> Result<Vec<RealEstateObject>, SourceError> {
        self.get_json(OBJECTS_PATH).await
    }

    /// Ancestor chain of `id`, root first, ending with the object itself.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails.
    pub async fn ancestry(&self, id: &ObjectId) -> Result<Vec<RealEstateObject>, SourceError> {
        self.get_json(&ancestry_path(id)).await
    }

    /// Staff accounts offered in the responsible-user picker.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails.
    pub async fn list_users(&self) -> Result<Vec<UserInfo>, SourceError> {
        self.get_json(USERS_PATH).await
    }

    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend rejects the object.
    pub async fn create_object(&self, object: &NewObject) -> Result<(), SourceError> {
        self.send(Verb::Post, OBJECTS_PATH, Some(object)).await
    }

    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend rejects the update.
    pub async fn update_object(&self, id: &ObjectId, update: &ObjectUpdate) -> Result<(), SourceError> {
        self.send(Verb::Put, &object_path(id), Some(update)).await
    }

    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend refuses the delete.
    pub async fn delete_object(&self, id: &ObjectId) -> Result<(), SourceError> {
        self.send::<()>(Verb::Delete, &object_path(id), None).await
    }

    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails.
    pub async fn assign_responsible(&self, id: &ObjectId, user_id: &ObjectId) -> Result<(), SourceError> {
        self.send::<()>(Verb::Put, &assign_responsible_path(id, user_id), None).await
    }

    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails.
    pub async fn remove_responsible(&self, id: &ObjectId) -> Result<(), SourceError> {
        self.send::<()>(Verb::Put, &remove_responsible_path(id), None).await
    }

    fn url(&self, path: &str) -> String {
        hierarchy::endpoints::join_url(&self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(path));
            if let Some(auth) = self.session.authorization() {
                request = request.header("Authorization", &auth);
            }
            let resp = request.send().await.map_err(|e| SourceError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(SourceError::from_status(resp.status(), path, &body));
            }
            resp.json::<T>().await.map_err(|e| SourceError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(path);
            Err(SourceError::Network(NOT_IN_BROWSER.to_owned()))
        }
    }

    /// Issue a write. Response bodies are ignored; callers reload what they show.
    async fn send<B: Serialize + ?Sized>(&self, verb: Verb, path: &str, body: Option<&B>) -> Result<(), SourceError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match verb {
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(auth) = self.session.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| SourceError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| SourceError::Network(e.to_string()))?;
            log::debug!("{verb:?} {path} -> {}", resp.status());
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(SourceError::from_status(resp.status(), path, &text));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(path), verb, body);
            Err(SourceError::Network(NOT_IN_BROWSER.to_owned()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ObjectSource for HttpObjectSource {
    async fn list_children(&self, id: &ObjectId) -> Result<Vec<ObjectSummary>, SourceError> {
        self.get_json(&children_path(id)).await
    }

    async fn get_object(&self, id: &ObjectId) -> Result<RealEstateObject, SourceError> {
        self.get_json(&object_path(id)).await
    }
}
