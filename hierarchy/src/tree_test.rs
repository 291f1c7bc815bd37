use super::*;

// =============================================================
// Helpers
// =============================================================

fn entry(id: i64, name: &str, object_type: ObjectType, has_children: bool) -> ChildEntry {
    ChildEntry {
        summary: ObjectSummary { id: ObjectId::from(id), name: name.to_owned(), object_type },
        has_children,
    }
}

fn id(raw: i64) -> ObjectId {
    ObjectId::from(raw)
}

/// Root object 1 with children A (10, leaf) and B (20, two grandchildren).
fn loaded_tree() -> ObjectTree {
    let mut tree = ObjectTree::new(id(1));
    let ticket = tree.reload();
    let outcome = tree.commit_roots(
        &ticket,
        vec![entry(10, "A", ObjectType::Entrance, false), entry(20, "B", ObjectType::Entrance, true)],
    );
    assert_eq!(outcome, CommitOutcome::Applied);
    tree
}

fn b_children() -> Vec<ChildEntry> {
    vec![entry(21, "Floor 1", ObjectType::Floor, false), entry(22, "Floor 2", ObjectType::Floor, true)]
}

fn fetch_ticket(toggle: Toggle) -> ExpandTicket {
    match toggle {
        Toggle::Fetch(ticket) => ticket,
        other => panic!("expected fetch, got {other:?}"),
    }
}

// =============================================================
// Root list
// =============================================================

#[test]
fn new_tree_is_loading_without_rows() {
    let tree = ObjectTree::new(id(1));
    assert_eq!(tree.phase(), &LoadPhase::Loading);
    assert!(tree.rows().is_empty());
    assert!(!tree.is_empty());
}

#[test]
fn empty_root_list_requests_placeholder() {
    let mut tree = ObjectTree::new(id(1));
    let ticket = tree.reload();
    let _ = tree.commit_roots(&ticket, Vec::new());
    assert!(tree.is_empty());
    assert!(tree.rows().is_empty());
}

#[test]
fn root_failure_replaces_tree_with_error() {
    let mut tree = ObjectTree::new(id(1));
    let ticket = tree.reload();
    let _ = tree.fail_roots(&ticket, "could not load");
    assert_eq!(tree.phase(), &LoadPhase::Failed("could not load".to_owned()));
    assert!(!tree.is_empty());
}

#[test]
fn root_rows_start_collapsed_at_depth_zero() {
    let tree = loaded_tree();
    let rows = tree.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.depth == 0 && !row.is_expanded && !row.is_loading));
    assert!(!rows[0].has_children);
    assert!(rows[1].has_children);
}

#[test]
fn parent_link_commits_for_current_epoch() {
    let mut tree = ObjectTree::new(id(5));
    let ticket = tree.reload();
    let parent = ParentLink { id: id(2), name: "Block A".to_owned() };
    let _ = tree.commit_parent(&ticket, Some(parent.clone()));
    assert_eq!(tree.parent(), Some(&parent));
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn leaf_toggle_is_ignored() {
    let mut tree = loaded_tree();
    assert_eq!(tree.toggle(&id(10)), Toggle::Ignored);
    assert_eq!(tree.toggle(&id(999)), Toggle::Ignored);
    assert!(!tree.node(&id(10)).unwrap().is_loading);
}

#[test]
fn first_expand_fetches_and_marks_only_that_node_loading() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(ticket.node(), &id(20));

    let b = tree.node(&id(20)).unwrap();
    assert!(b.is_loading);
    assert!(!b.is_expanded);
    assert!(!tree.node(&id(10)).unwrap().is_loading);
}

#[test]
fn committed_children_render_one_level_deeper() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(tree.commit_children(&ticket, b_children()), CommitOutcome::Applied);

    let b = tree.node(&id(20)).unwrap();
    assert!(b.is_expanded);
    assert!(!b.is_loading);

    let rows = tree.rows();
    let names: Vec<_> = rows.iter().map(|row| (row.name.as_str(), row.depth)).collect();
    assert_eq!(names, vec![("A", 0), ("B", 0), ("Floor 1", 1), ("Floor 2", 1)]);
}

#[test]
fn double_toggle_round_trips_without_refetch() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.commit_children(&ticket, b_children());

    assert_eq!(tree.toggle(&id(20)), Toggle::Collapsed);
    assert_eq!(tree.rows().len(), 2);
    assert_eq!(tree.toggle(&id(20)), Toggle::Expanded);
    assert_eq!(tree.rows().len(), 4);
}

#[test]
fn failed_expand_reverts_to_collapsed() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(tree.fail_children(&ticket), CommitOutcome::Applied);

    let b = tree.node(&id(20)).unwrap();
    assert!(!b.is_expanded);
    assert!(!b.is_loading);
    assert!(b.load_failed);
    assert_eq!(tree.rows().len(), 2);
}

#[test]
fn toggle_after_failure_clears_marker_and_retries() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.fail_children(&ticket);

    let retry = fetch_ticket(tree.toggle(&id(20)));
    assert!(!tree.node(&id(20)).unwrap().load_failed);
    assert_ne!(retry, ticket);
}

#[test]
fn empty_fetch_turns_node_into_leaf() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.commit_children(&ticket, Vec::new());

    let b = tree.node(&id(20)).unwrap();
    assert!(!b.has_children);
    assert!(!b.is_expanded);
    assert!(!b.is_loading);
}

#[test]
fn nested_expansion_keeps_unrelated_branches() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.commit_children(&ticket, b_children());
    let nested = fetch_ticket(tree.toggle(&id(22)));
    let _ = tree.commit_children(&nested, vec![entry(23, "Apt 5", ObjectType::Apartment, false)]);

    let rows = tree.rows();
    assert_eq!(rows.last().map(|row| (row.name.as_str(), row.depth)), Some(("Apt 5", 2)));
    assert_eq!(tree.node(&id(10)).unwrap().child_ids, Vec::<ObjectId>::new());
}

// =============================================================
// Concurrency guards
// =============================================================

#[test]
fn rapid_double_toggle_settles_collapsed_with_cached_children() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(tree.toggle(&id(20)), Toggle::Deferred);
    let _ = tree.commit_children(&ticket, b_children());

    let b = tree.node(&id(20)).unwrap();
    assert!(!b.is_loading);
    assert!(!b.is_expanded);
    assert_eq!(b.child_ids.len(), 2);
    assert_eq!(tree.toggle(&id(20)), Toggle::Expanded);
}

#[test]
fn triple_toggle_while_loading_settles_expanded() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(tree.toggle(&id(20)), Toggle::Deferred);
    assert_eq!(tree.toggle(&id(20)), Toggle::Deferred);
    let _ = tree.commit_children(&ticket, b_children());
    assert!(tree.node(&id(20)).unwrap().is_expanded);
}

#[test]
fn duplicate_commit_for_same_ticket_is_stale() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    assert_eq!(tree.commit_children(&ticket, b_children()), CommitOutcome::Applied);
    assert_eq!(tree.fail_children(&ticket), CommitOutcome::Stale);
    assert!(tree.node(&id(20)).unwrap().is_expanded);
}

#[test]
fn results_from_previous_epoch_are_dropped() {
    let mut tree = loaded_tree();
    let old_expand = fetch_ticket(tree.toggle(&id(20)));
    let old_root = RootTicket { epoch: tree.epoch(), root: id(1) };

    let fresh = tree.open(id(2));
    assert_eq!(tree.commit_children(&old_expand, b_children()), CommitOutcome::Stale);
    assert_eq!(tree.commit_roots(&old_root, vec![entry(99, "X", ObjectType::Room, false)]), CommitOutcome::Stale);
    assert_eq!(tree.commit_parent(&old_root, None), CommitOutcome::Stale);
    assert_eq!(tree.phase(), &LoadPhase::Loading);

    let _ = tree.commit_roots(&fresh, vec![entry(30, "C", ObjectType::Floor, false)]);
    assert_eq!(tree.rows().len(), 1);
    assert_eq!(tree.current(), &id(2));
}

// =============================================================
// Highlighting
// =============================================================

#[test]
fn current_object_is_highlighted_exactly_once() {
    let mut tree = ObjectTree::new(id(22));
    let ticket = tree.reload();
    let _ = tree.commit_roots(&ticket, vec![entry(20, "B", ObjectType::Entrance, true)]);
    let expand = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.commit_children(&expand, b_children());

    let highlighted: Vec<_> = tree.rows().into_iter().filter(|row| row.is_current).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].id, id(22));
}

#[test]
fn cyclic_children_are_rendered_once() {
    let mut tree = loaded_tree();
    let ticket = fetch_ticket(tree.toggle(&id(20)));
    let _ = tree.commit_children(
        &ticket,
        vec![entry(20, "B again", ObjectType::Entrance, true), entry(21, "Floor 1", ObjectType::Floor, false)],
    );
    let rows = tree.rows();
    assert_eq!(rows.iter().filter(|row| row.id == id(20)).count(), 1);
    assert_eq!(rows.len(), 3);
}
