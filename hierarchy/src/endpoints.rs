//! REST paths of the property backend.
//!
//! Both HTTP clients (browser `gloo-net`, CLI `reqwest`) build URLs from these
//! so the two surfaces cannot drift apart.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::object::ObjectId;

pub const OBJECTS_PATH: &str = "/real-estate-objects";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CURRENT_USER_PATH: &str = "/users/info";
pub const USERS_PATH: &str = "/users/info/all";

#[must_use]
pub fn object_path(id: &ObjectId) -> String {
    format!("{OBJECTS_PATH}/{id}")
}

#[must_use]
pub fn children_path(id: &ObjectId) -> String {
    format!("{OBJECTS_PATH}/{id}/children")
}

/// Ancestor chain of `id`, root first, used for breadcrumbs.
#[must_use]
pub fn ancestry_path(id: &ObjectId) -> String {
    format!("{OBJECTS_PATH}/{id}/path")
}

#[must_use]
pub fn assign_responsible_path(id: &ObjectId, user_id: &ObjectId) -> String {
    format!("{OBJECTS_PATH}/{id}/assign-responsible/{user_id}")
}

#[must_use]
pub fn remove_responsible_path(id: &ObjectId) -> String {
    format!("{OBJECTS_PATH}/{id}/remove-responsible")
}

/// Console route of an object's detail view.
#[must_use]
pub fn object_route(id: &ObjectId) -> String {
    format!("/objects/{id}")
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
