//! Async fetch flows that feed [`ObjectTree`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser component and the CLI both need the same three flows: load the
//! children of a node together with their existence probes, resolve the
//! back-to-parent link, and commit results with the tickets issued by the
//! tree. The free functions return data only, so a UI can hold the tree in a
//! reactive signal across awaits; [`Navigator`] wires them to an owned tree.
//!
//! ERROR HANDLING
//! ==============
//! Probes are joined with `join_all`, which keeps every per-child outcome, so
//! one failing probe never sinks its siblings. A failed probe reports the
//! child as possibly having children; expanding it then degrades silently
//! like any other failed expansion.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use futures::future::join_all;

use crate::error::SourceError;
use crate::object::{ObjectId, ObjectSummary, ParentLink};
use crate::source::ObjectSource;
use crate::tree::{ChildEntry, CommitOutcome, ExpandTicket, ObjectTree, RootTicket, Toggle};

/// Message shown in place of the tree when the root list cannot be loaded.
pub const ROOT_LOAD_ERROR: &str = "Could not load the object structure";

/// Probe every child concurrently for grandchildren.
pub async fn probe_children<S>(source: &S, children: Vec<ObjectSummary>) -> Vec<ChildEntry>
where
    S: ObjectSource + ?Sized,
{
    let outcomes = join_all(children.iter().map(|child| source.list_children(&child.id))).await;
    children
        .into_iter()
        .zip(outcomes)
        .map(|(summary, outcome)| {
            let has_children = match outcome {
                Ok(grandchildren) => !grandchildren.is_empty(),
                Err(err) => {
                    log::warn!("existence probe for {} failed: {err}", summary.id);
                    true
                }
            };
            ChildEntry { summary, has_children }
        })
        .collect()
}

/// Fetch the children of `id`, then probe each of them.
///
/// # Errors
///
/// Returns the [`SourceError`] of the children fetch itself. Probe failures
/// are absorbed.
pub async fn load_children<S>(source: &S, id: &ObjectId) -> Result<Vec<ChildEntry>, SourceError>
where
    S: ObjectSource + ?Sized,
{
    let children = source.list_children(id).await?;
    Ok(probe_children(source, children).await)
}

/// Look up `id`, then its parent, for the back-to-parent affordance.
///
/// Any failure yields `None`.
pub async fn resolve_parent<S>(source: &S, id: &ObjectId) -> Option<ParentLink>
where
    S: ObjectSource + ?Sized,
{
    let object = match source.get_object(id).await {
        Ok(object) => object,
        Err(err) => {
            log::debug!("parent lookup for {id} failed: {err}");
            return None;
        }
    };
    let parent_id = object.parent_id?;
    match source.get_object(&parent_id).await {
        Ok(parent) => Some(ParentLink { id: parent.id, name: parent.name }),
        Err(err) => {
            log::debug!("parent detail for {parent_id} failed: {err}");
            None
        }
    }
}

/// Commit the outcome of a root load. An unauthorized error is returned to
/// the caller so the app shell can redirect to login, but only when it
/// belongs to the tree's current epoch.
pub fn commit_root_load(
    tree: &mut ObjectTree,
    ticket: &RootTicket,
    loaded: Result<Vec<ChildEntry>, SourceError>,
) -> Result<CommitOutcome, SourceError> {
    match loaded {
        Ok(entries) => Ok(tree.commit_roots(ticket, entries)),
        Err(err) => {
            log::warn!("loading children of {} failed: {err}", ticket.root());
            let outcome = tree.fail_roots(ticket, ROOT_LOAD_ERROR);
            surface_rejection(err, outcome)
        }
    }
}

/// Commit the outcome of an expansion fetch. Failures only revert the node;
/// an unauthorized error is returned when that revert was applied.
pub fn commit_expansion(
    tree: &mut ObjectTree,
    ticket: &ExpandTicket,
    loaded: Result<Vec<ChildEntry>, SourceError>,
) -> Result<CommitOutcome, SourceError> {
    match loaded {
        Ok(entries) => Ok(tree.commit_children(ticket, entries)),
        Err(err) => {
            log::warn!("expanding {} failed: {err}", ticket.node());
            let outcome = tree.fail_children(ticket);
            surface_rejection(err, outcome)
        }
    }
}

/// A stale response never ends the session.
fn surface_rejection(err: SourceError, outcome: CommitOutcome) -> Result<CommitOutcome, SourceError> {
    if outcome == CommitOutcome::Applied && err.is_unauthorized() {
        Err(err)
    } else {
        Ok(outcome)
    }
}

/// Tree plus the source feeding it, for owners that can hold the tree across
/// awaits.
pub struct Navigator<S> {
    source: S,
    tree: ObjectTree,
}

impl<S: ObjectSource> Navigator<S> {
    #[must_use]
    pub fn new(source: S, current: ObjectId) -> Self {
        Self { source, tree: ObjectTree::new(current) }
    }

    #[must_use]
    pub fn tree(&self) -> &ObjectTree {
        &self.tree
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// (Re)load the root list and parent link of the current object.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unauthorized`] when the credential was rejected.
    /// Other root failures are recorded in the tree phase instead.
    pub async fn load(&mut self) -> Result<(), SourceError> {
        let ticket = self.tree.reload();
        self.fetch_root(&ticket).await
    }

    /// Retarget at another object and load it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub async fn open(&mut self, current: ObjectId) -> Result<(), SourceError> {
        let ticket = self.tree.open(current);
        self.fetch_root(&ticket).await
    }

    /// Toggle a node, fetching its children when needed.
    pub async fn toggle(&mut self, id: &ObjectId) -> Toggle {
        let toggle = self.tree.toggle(id);
        if let Toggle::Fetch(ticket) = &toggle {
            let loaded = load_children(&self.source, ticket.node()).await;
            match commit_expansion(&mut self.tree, ticket, loaded) {
                Ok(CommitOutcome::Stale) => log::debug!("expansion of {id} landed after the tree moved on"),
                Ok(CommitOutcome::Applied) => {}
                Err(err) => log::warn!("expansion of {id} rejected: {err}"),
            }
        }
        toggle
    }

    /// Expand every branch down to `depth` levels below the root list.
    ///
    /// Nodes on the same level are fetched concurrently and committed by id.
    pub async fn expand_to_depth(&mut self, depth: usize) {
        for level in 0..depth {
            let tickets: Vec<_> = self
                .tree
                .rows()
                .into_iter()
                .filter(|row| row.depth == level && row.has_children && !row.is_expanded && !row.is_loading)
                .filter_map(|row| match self.tree.toggle(&row.id) {
                    Toggle::Fetch(ticket) => Some(ticket),
                    _ => None,
                })
                .collect();
            if tickets.is_empty() {
                continue;
            }
            let loads = join_all(tickets.iter().map(|ticket| load_children(&self.source, ticket.node()))).await;
            for (ticket, loaded) in tickets.iter().zip(loads) {
                let _ = commit_expansion(&mut self.tree, ticket, loaded);
            }
        }
    }

    async fn fetch_root(&mut self, ticket: &RootTicket) -> Result<(), SourceError> {
        let (loaded, parent) =
            futures::join!(load_children(&self.source, ticket.root()), resolve_parent(&self.source, ticket.root()));
        let _ = self.tree.commit_parent(ticket, parent);
        commit_root_load(&mut self.tree, ticket, loaded).map(|_| ())
    }
}
