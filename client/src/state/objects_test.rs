use super::*;
use hierarchy::{ObjectId, ObjectType};

fn object(id: i64, name: &str, parent: Option<i64>) -> RealEstateObject {
    RealEstateObject {
        id: ObjectId::from(id),
        name: name.to_owned(),
        object_type: ObjectType::from("BUILDING"),
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

fn names(state: &ObjectsState) -> Vec<&str> {
    state.items.iter().map(|o| o.name.as_str()).collect()
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn top_level_objects_come_first() {
    let mut state = ObjectsState::default();
    state.finish_load(vec![object(3, "Apartment 1", Some(1)), object(1, "Tower", None), object(2, "Annex", None)]);
    assert_eq!(names(&state), vec!["Annex", "Tower", "Apartment 1"]);
    assert_eq!(state.top_level_count(), 2);
    assert_eq!(state.summary(), "3 objects, 2 top-level");
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn begin_load_clears_previous_error() {
    let mut state = ObjectsState { error: Some("boom".to_owned()), ..ObjectsState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fail_load_drops_items_and_keeps_message() {
    let mut state = ObjectsState::default();
    state.finish_load(vec![object(1, "Tower", None)]);
    state.begin_load();
    state.fail_load("Could not load objects");
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Could not load objects"));
}
