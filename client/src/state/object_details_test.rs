use super::*;
use hierarchy::ObjectType;

fn object(id: i64, name: &str) -> RealEstateObject {
    RealEstateObject {
        id: ObjectId::from(id),
        name: name.to_owned(),
        object_type: ObjectType::from("FLOOR"),
        parent_id: None,
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

fn crumb_names(crumbs: &[Crumb]) -> Vec<&str> {
    crumbs.iter().map(|c| c.name.as_str()).collect()
}

// =============================================================
// Breadcrumbs
// =============================================================

#[test]
fn breadcrumbs_follow_ancestry_and_mark_current() {
    let current = object(3, "Floor 2");
    let crumbs = build_breadcrumbs(&current, vec![object(1, "Tower"), object(2, "Section A"), object(3, "Floor 2")]);
    assert_eq!(crumb_names(&crumbs), vec!["Tower", "Section A", "Floor 2"]);
    assert_eq!(crumbs.iter().filter(|c| c.is_current).count(), 1);
    assert!(crumbs[2].is_current);
}

#[test]
fn breadcrumbs_append_current_when_path_omits_it() {
    let current = object(3, "Floor 2");
    let crumbs = build_breadcrumbs(&current, vec![object(1, "Tower")]);
    assert_eq!(crumb_names(&crumbs), vec!["Tower", "Floor 2"]);
}

#[test]
fn failed_ancestry_falls_back_to_current_only() {
    let mut state = ObjectDetailsState::default();
    state.open(ObjectId::from(3));
    state.finish_load(object(3, "Floor 2"), None);
    assert_eq!(crumb_names(&state.breadcrumbs), vec!["Floor 2"]);
    assert!(!state.loading);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn open_resets_previous_object() {
    let mut state = ObjectDetailsState::default();
    state.open(ObjectId::from(1));
    state.finish_load(object(1, "Tower"), None);
    state.open(ObjectId::from(2));
    assert!(state.object.is_none());
    assert!(state.breadcrumbs.is_empty());
    assert!(state.loading);
    assert!(state.is_current(&ObjectId::from(2)));
    assert!(!state.is_current(&ObjectId::from(1)));
}

#[test]
fn fail_load_sets_error() {
    let mut state = ObjectDetailsState::default();
    state.open(ObjectId::from(1));
    state.fail_load("Object not found");
    assert_eq!(state.error.as_deref(), Some("Object not found"));
    assert!(state.object.is_none());
    assert!(!state.loading);
}
