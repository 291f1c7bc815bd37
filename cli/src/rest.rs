//! Blocking-free REST client for the property backend.
//!
//! Implements [`ObjectSource`] so the CLI drives the same tree loader as the
//! browser, plus the mutations the console offers.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use hierarchy::endpoints::{
    CURRENT_USER_PATH, LOGIN_PATH, OBJECTS_PATH, USERS_PATH, ancestry_path, assign_responsible_path, children_path,
    join_url, object_path, remove_responsible_path,
};
use hierarchy::{
    AuthResponse, LoginRequest, NewObject, ObjectId, ObjectSource, ObjectSummary, ObjectUpdate, RealEstateObject,
    Session, SourceError, UserInfo,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl RestClient {
    #[must_use]
    pub fn new(base_url: &str, session: Session) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned(), session }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unauthorized`] for rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, SourceError> {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let value = self.send(Method::POST, LOGIN_PATH, Some(&payload)).await?;
        decode(value.unwrap_or(Value::Null))
    }

    pub async fn list_objects(&self) -> Result<Vec<RealEstateObject>, SourceError> {
        self.get_json(OBJECTS_PATH).await
    }

    pub async fn ancestry(&self, id: &ObjectId) -> Result<Vec<RealEstateObject>, SourceError> {
        self.get_json(&ancestry_path(id)).await
    }

    pub async fn current_user(&self) -> Result<UserInfo, SourceError> {
        self.get_json(CURRENT_USER_PATH).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserInfo>, SourceError> {
        self.get_json(USERS_PATH).await
    }

    pub async fn create_object(&self, object: &NewObject) -> Result<Option<Value>, SourceError> {
        self.send(Method::POST, OBJECTS_PATH, Some(object)).await
    }

    pub async fn update_object(&self, id: &ObjectId, update: &ObjectUpdate) -> Result<Option<Value>, SourceError> {
        self.send(Method::PUT, &object_path(id), Some(update)).await
    }

    pub async fn delete_object(&self, id: &ObjectId) -> Result<Option<Value>, SourceError> {
        self.send::<()>(Method::DELETE, &object_path(id), None).await
    }

    pub async fn assign_responsible(&self, id: &ObjectId, user_id: &ObjectId) -> Result<Option<Value>, SourceError> {
        self.send::<()>(Method::PUT, &assign_responsible_path(id, user_id), None).await
    }

    pub async fn remove_responsible(&self, id: &ObjectId) -> Result<Option<Value>, SourceError> {
        self.send::<()>(Method::PUT, &remove_responsible_path(id), None).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let value = self.send::<()>(Method::GET, path, None).await?;
        decode(value.unwrap_or(Value::Null))
    }

    /// Issue a request; an empty success body yields `None`.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Value>, SourceError> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(auth) = self.session.authorization() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| SourceError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| SourceError::Network(e.to_string()))?;
        tracing::debug!(%method, path, status = status.as_u16(), "backend call");
        if !status.is_success() {
            return Err(SourceError::from_status(status.as_u16(), path, &text));
        }
        parse_body(&text)
    }
}

/// Parse a success body. Blank bodies (204, bare 200) are `None`.
pub fn parse_body(text: &str) -> Result<Option<Value>, SourceError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some).map_err(|e| SourceError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SourceError> {
    serde_json::from_value(value).map_err(|e| SourceError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl ObjectSource for RestClient {
    async fn list_children(&self, id: &ObjectId) -> Result<Vec<ObjectSummary>, SourceError> {
        self.get_json(&children_path(id)).await
    }

    async fn get_object(&self, id: &ObjectId) -> Result<RealEstateObject, SourceError> {
        self.get_json(&object_path(id)).await
    }
}
