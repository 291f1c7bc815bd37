use super::*;

fn object(id: i64, name: &str, parent: Option<i64>) -> RealEstateObject {
    RealEstateObject {
        id: ObjectId::from(id),
        name: name.to_owned(),
        object_type: ObjectType::Floor,
        parent_id: parent.map(ObjectId::from),
        created_at: None,
        created_by_id: None,
        created_by_first_name: None,
        created_by_last_name: None,
        responsible_user_id: None,
        responsible_user_first_name: None,
        responsible_user_last_name: None,
        responsible_user_role: None,
    }
}

fn user(id: i64, first: &str, last: &str, active: bool) -> UserInfo {
    UserInfo {
        id: ObjectId::from(id),
        username: format!("user{id}"),
        email: String::new(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        roles: "USER".to_owned(),
        active,
    }
}

// =============================================================
// Add child
// =============================================================

#[test]
fn child_draft_attaches_to_parent_and_trims_name() {
    let parent = object(7, "Floor 2", Some(3));
    let draft = child_draft(&parent, "  Apt 21 ", "APARTMENT").unwrap();
    assert_eq!(draft.name, "Apt 21");
    assert_eq!(draft.object_type, ObjectType::Apartment);
    assert_eq!(draft.parent_id, Some(ObjectId::from(7)));
}

#[test]
fn child_draft_rejects_blank_name_and_missing_type() {
    let parent = object(7, "Floor 2", None);
    assert_eq!(child_draft(&parent, "   ", "ROOM").unwrap_err(), "Enter a name.");
    assert_eq!(child_draft(&parent, "Room 1", "").unwrap_err(), "Choose a type.");
}

#[test]
fn child_draft_rejects_unknown_type_code() {
    let parent = object(7, "Floor 2", None);
    assert_eq!(child_draft(&parent, "Shed", "SHED").unwrap_err(), "Unknown object type: SHED");
}

// =============================================================
// Rename and delete
// =============================================================

#[test]
fn rename_draft_keeps_type_and_parent() {
    let current = object(7, "Floor 2", Some(3));
    let update = rename_draft(&current, " Floor 2A ").unwrap();
    assert_eq!(update.name, "Floor 2A");
    assert_eq!(update.object_type, ObjectType::Floor);
    assert_eq!(update.parent_id, Some(ObjectId::from(3)));
}

#[test]
fn rename_draft_rejects_blank_or_unchanged_name() {
    let current = object(7, "Floor 2", None);
    assert_eq!(rename_draft(&current, "").unwrap_err(), "Enter a name.");
    assert_eq!(rename_draft(&current, " Floor 2 ").unwrap_err(), "The name is unchanged.");
}

#[test]
fn delete_returns_to_parent_or_list() {
    assert_eq!(after_delete_route(&object(7, "Floor 2", Some(3))), "/objects/3");
    assert_eq!(after_delete_route(&object(3, "Block A", None)), OBJECT_LIST_ROUTE);
}

#[test]
fn delete_prompt_names_object() {
    assert_eq!(delete_prompt(&object(3, "Block A", None)), "Delete \"Block A\"? This cannot be undone.");
}

// =============================================================
// Responsible user
// =============================================================

#[test]
fn assign_target_requires_selection() {
    assert_eq!(assign_target("").unwrap_err(), "Choose a user.");
    assert_eq!(assign_target(" 12 ").unwrap(), ObjectId::from(12));
}

#[test]
fn responsible_choices_skip_inactive_and_sort_by_name() {
    let users = vec![
        user(1, "zoe", "Adams", true),
        user(2, "Anna", "Berg", false),
        user(3, "Boris", "Kim", true),
        user(4, "", "", true),
    ];
    let choices = responsible_choices(&users);
    let names: Vec<&str> = choices.iter().map(|(_, name)| name.as_str()).collect();
    assert_eq!(names, vec!["Boris Kim", "user4", "zoe Adams"]);
    assert_eq!(choices[0].0, ObjectId::from(3));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn failure_message_passes_backend_message_through() {
    let err = SourceError::Status { status: 409, message: "Object has children".to_owned() };
    assert_eq!(ObjectAction::Delete.failure_message(&err), "Could not delete the object: Object has children");
}

#[test]
fn failure_message_for_session_and_network_errors() {
    assert_eq!(ObjectAction::Rename.failure_message(&SourceError::Unauthorized), "Your session has expired");
    assert_eq!(
        ObjectAction::AddChild.failure_message(&SourceError::Network("reset".to_owned())),
        "Could not create the object"
    );
    assert_eq!(
        ObjectAction::AssignResponsible.failure_message(&SourceError::Status { status: 500, message: String::new() }),
        "Could not assign the responsible user"
    );
}

#[test]
fn success_messages_are_distinct() {
    let all = [
        ObjectAction::AddChild,
        ObjectAction::Rename,
        ObjectAction::Delete,
        ObjectAction::AssignResponsible,
        ObjectAction::RemoveResponsible,
    ];
    let mut messages: Vec<&str> = all.iter().map(|action| action.success_message()).collect();
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), all.len());
}
