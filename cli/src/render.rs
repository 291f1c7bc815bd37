//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use hierarchy::{LoadPhase, ObjectTree, RealEstateObject, TreeRow, UserInfo};

const INDENT: &str = "  ";

fn marker(row: &TreeRow) -> &'static str {
    if row.load_failed {
        "!"
    } else if !row.has_children {
        "·"
    } else if row.is_expanded {
        "▾"
    } else {
        "▸"
    }
}

/// Header, then one line per visible row.
pub fn render_tree(tree: &ObjectTree) -> String {
    let mut out = String::new();
    if let Some(parent) = tree.parent() {
        let _ = writeln!(out, "↑ {} (#{})", parent.name, parent.id);
    }
    match tree.phase() {
        LoadPhase::Loading => out.push_str("loading...\n"),
        LoadPhase::Failed(message) => {
            let _ = writeln!(out, "error: {message}");
        }
        LoadPhase::Ready if tree.is_empty() => out.push_str("No child objects\n"),
        LoadPhase::Ready => {
            for row in tree.rows() {
                let _ = writeln!(
                    out,
                    "{}{} {} [{}] #{}",
                    INDENT.repeat(row.depth),
                    marker(&row),
                    row.name,
                    row.object_type.label(),
                    row.id
                );
            }
        }
    }
    out
}

/// One line per object: id, type label, name, then creator when known.
pub fn render_objects(objects: &[RealEstateObject]) -> String {
    let mut out = String::new();
    for object in objects {
        let _ = write!(out, "#{:<6} {:<18} {}", object.id, object.object_type.label(), object.name);
        if let Some(creator) = object.created_by_name() {
            let _ = write!(out, "  (by {creator})");
        }
        out.push('\n');
    }
    out
}

/// Ancestor path joined with `/`.
pub fn render_path(ancestry: &[RealEstateObject]) -> String {
    ancestry.iter().map(|o| o.name.as_str()).collect::<Vec<_>>().join(" / ")
}

pub fn render_users(users: &[UserInfo]) -> String {
    let mut out = String::new();
    for user in users {
        let status = if user.active { "" } else { " (inactive)" };
        let _ = writeln!(out, "#{:<6} {:<16} {}{status}", user.id, user.username, user.display_name());
    }
    out
}
