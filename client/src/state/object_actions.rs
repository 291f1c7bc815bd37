//! Edits offered on the object detail page: add a child, rename, delete, and
//! assign or remove the responsible user.
//!
//! DESIGN
//! ======
//! Everything here is plain data so the form rules and toast wording can be
//! tested without a browser. `components::object_actions` owns the signals
//! and the requests.

#[cfg(test)]
#[path = "object_actions_test.rs"]
mod object_actions_test;

use hierarchy::endpoints::object_route;
use hierarchy::{NewObject, ObjectId, ObjectType, ObjectUpdate, RealEstateObject, SourceError, UserInfo};

/// Where the console goes after deleting a top-level object.
pub const OBJECT_LIST_ROUTE: &str = "/objects";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectAction {
    AddChild,
    Rename,
    Delete,
    AssignResponsible,
    RemoveResponsible,
}

impl ObjectAction {
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::AddChild => "Child object created",
            Self::Rename => "Object renamed",
            Self::Delete => "Object deleted",
            Self::AssignResponsible => "Responsible user assigned",
            Self::RemoveResponsible => "Responsible user removed",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::AddChild => "create the object",
            Self::Rename => "rename the object",
            Self::Delete => "delete the object",
            Self::AssignResponsible => "assign the responsible user",
            Self::RemoveResponsible => "remove the responsible user",
        }
    }

    /// Toast text for a rejected request. Backend messages are passed through.
    #[must_use]
    pub fn failure_message(self, err: &SourceError) -> String {
        match err {
            SourceError::Unauthorized => "Your session has expired".to_owned(),
            SourceError::NotFound(_) => "Object not found".to_owned(),
            SourceError::Status { message, .. } if !message.is_empty() => {
                format!("Could not {}: {message}", self.verb())
            }
            _ => format!("Could not {}", self.verb()),
        }
    }
}

/// Payload for a new child of `parent`, or the message to show.
///
/// # Errors
///
/// Returns a user-facing message for a blank name, a missing type, or a type
/// code the console does not know.
pub fn child_draft(parent: &RealEstateObject, name: &str, type_code: &str) -> Result<NewObject, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name.".to_owned());
    }
    let code = type_code.trim();
    if code.is_empty() {
        return Err("Choose a type.".to_owned());
    }
    let object_type = ObjectType::from(code.to_owned());
    if let ObjectType::Other(unknown) = &object_type {
        return Err(format!("Unknown object type: {unknown}"));
    }
    Ok(NewObject { name: name.to_owned(), object_type, parent_id: Some(parent.id.clone()) })
}

/// Rename payload for `object`, or the message to show.
///
/// # Errors
///
/// Returns a user-facing message for a blank or unchanged name.
pub fn rename_draft(object: &RealEstateObject, name: &str) -> Result<ObjectUpdate, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name.".to_owned());
    }
    if name == object.name {
        return Err("The name is unchanged.".to_owned());
    }
    Ok(ObjectUpdate::rename(object, name))
}

/// Selected user id from the responsible picker, or the message to show.
///
/// # Errors
///
/// Returns a user-facing message when nothing is selected.
pub fn assign_target(selected: &str) -> Result<ObjectId, String> {
    let selected = selected.trim();
    if selected.is_empty() {
        return Err("Choose a user.".to_owned());
    }
    Ok(ObjectId::new(selected))
}

/// Route to open once `object` is gone: its parent, or the object list.
#[must_use]
pub fn after_delete_route(object: &RealEstateObject) -> String {
    object.parent_id.as_ref().map_or_else(|| OBJECT_LIST_ROUTE.to_owned(), object_route)
}

#[must_use]
pub fn delete_prompt(object: &RealEstateObject) -> String {
    format!("Delete \"{}\"? This cannot be undone.", object.name)
}

/// Active users as picker options, sorted case-insensitively by name.
#[must_use]
pub fn responsible_choices(users: &[UserInfo]) -> Vec<(ObjectId, String)> {
    let mut choices: Vec<(ObjectId, String)> = users
        .iter()
        .filter(|user| user.active)
        .map(|user| (user.id.clone(), user.display_name()))
        .collect();
    choices.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    choices
}
