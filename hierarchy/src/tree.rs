//! Lazily expanded object tree kept as an arena.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail view of an object shows that object's descendants as a
//! collapsible tree. Children are fetched only when a node is first expanded,
//! and each node carries its own loading/failed state so one slow or broken
//! branch never blocks the rest of the tree.
//!
//! DESIGN
//! ======
//! Nodes live in a flat map keyed by id; each node lists its `child_ids`.
//! Updates are O(1) by key and the owner swaps the whole `ObjectTree` value
//! when it publishes to the UI, so renderers only ever see complete states.
//!
//! Every asynchronous result is committed with a ticket. Root tickets carry
//! the tree epoch, which is bumped whenever the viewed object changes.
//! Expansion tickets additionally carry a per-node request number. A commit
//! with a ticket that no longer matches is dropped and reported as
//! [`CommitOutcome::Stale`].

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::{HashMap, HashSet};

use crate::object::{ObjectId, ObjectSummary, ObjectType, ParentLink};

/// One child returned by a children fetch, with its existence-probe result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildEntry {
    pub summary: ObjectSummary,
    pub has_children: bool,
}

/// Render/state wrapper around one object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub id: ObjectId,
    pub name: String,
    pub object_type: ObjectType,
    /// Populated on first successful expansion; empty until then.
    pub child_ids: Vec<ObjectId>,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_loading: bool,
    /// The most recent expansion attempt failed. Cleared by the next toggle.
    pub load_failed: bool,
    pending: Option<u64>,
    expand_on_commit: bool,
}

impl TreeNode {
    fn from_entry(entry: ChildEntry) -> Self {
        Self {
            id: entry.summary.id,
            name: entry.summary.name,
            object_type: entry.summary.object_type,
            child_ids: Vec::new(),
            has_children: entry.has_children,
            is_expanded: false,
            is_loading: false,
            load_failed: false,
            pending: None,
            expand_on_commit: false,
        }
    }
}

/// Status of the root list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Licence to commit the root list and parent link of one tree epoch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootTicket {
    epoch: u64,
    root: ObjectId,
}

impl RootTicket {
    #[must_use]
    pub fn root(&self) -> &ObjectId {
        &self.root
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Licence to commit one node's children fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandTicket {
    epoch: u64,
    node: ObjectId,
    request: u64,
}

impl ExpandTicket {
    #[must_use]
    pub fn node(&self) -> &ObjectId {
        &self.node
    }
}

/// What a toggle did to the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Expanded node collapsed; cached children kept.
    Collapsed,
    /// Collapsed node expanded from cached children. No fetch needed.
    Expanded,
    /// Node is now loading; the caller must fetch and commit with this ticket.
    Fetch(ExpandTicket),
    /// A fetch is already in flight; the node will settle in the flipped
    /// expanded/collapsed state once it lands.
    Deferred,
    /// Unknown id, or a node without children.
    Ignored,
}

/// Result of committing an async result into the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum CommitOutcome {
    Applied,
    Stale,
}

/// Flattened visible node, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub id: ObjectId,
    pub name: String,
    pub object_type: ObjectType,
    /// 0 for the root list.
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_loading: bool,
    pub load_failed: bool,
    /// The row is the object currently being viewed.
    pub is_current: bool,
}

/// Tree of the descendants of the currently viewed object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectTree {
    current: ObjectId,
    epoch: u64,
    phase: LoadPhase,
    roots: Vec<ObjectId>,
    nodes: HashMap<ObjectId, TreeNode>,
    parent: Option<ParentLink>,
    next_request: u64,
}

impl ObjectTree {
    /// Empty tree in the loading phase for `current`. Call [`Self::reload`]
    /// to obtain the ticket for its first load.
    #[must_use]
    pub fn new(current: ObjectId) -> Self {
        Self {
            current,
            epoch: 0,
            phase: LoadPhase::Loading,
            roots: Vec::new(),
            nodes: HashMap::new(),
            parent: None,
            next_request: 0,
        }
    }

    /// Retarget the tree at `current`, discarding every node and
    /// invalidating all outstanding tickets.
    pub fn open(&mut self, current: ObjectId) -> RootTicket {
        self.epoch += 1;
        self.current = current;
        self.phase = LoadPhase::Loading;
        self.roots.clear();
        self.nodes.clear();
        self.parent = None;
        RootTicket { epoch: self.epoch, root: self.current.clone() }
    }

    /// Start over for the same object.
    pub fn reload(&mut self) -> RootTicket {
        let current = self.current.clone();
        self.open(current)
    }

    #[must_use]
    pub fn current(&self) -> &ObjectId {
        &self.current
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    #[must_use]
    pub fn parent(&self) -> Option<&ParentLink> {
        self.parent.as_ref()
    }

    #[must_use]
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    #[must_use]
    pub fn node(&self, id: &ObjectId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Loaded successfully with no children: render the placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phase == LoadPhase::Ready && self.roots.is_empty()
    }

    pub fn commit_roots(&mut self, ticket: &RootTicket, entries: Vec<ChildEntry>) -> CommitOutcome {
        if ticket.epoch != self.epoch {
            log::debug!("dropping root list for {} from epoch {}", ticket.root, ticket.epoch);
            return CommitOutcome::Stale;
        }
        self.roots = self.adopt(entries);
        self.phase = LoadPhase::Ready;
        CommitOutcome::Applied
    }

    pub fn fail_roots(&mut self, ticket: &RootTicket, message: impl Into<String>) -> CommitOutcome {
        if ticket.epoch != self.epoch {
            return CommitOutcome::Stale;
        }
        self.roots.clear();
        self.phase = LoadPhase::Failed(message.into());
        CommitOutcome::Applied
    }

    pub fn commit_parent(&mut self, ticket: &RootTicket, parent: Option<ParentLink>) -> CommitOutcome {
        if ticket.epoch != self.epoch {
            return CommitOutcome::Stale;
        }
        self.parent = parent;
        CommitOutcome::Applied
    }

    /// Flip a node between expanded and collapsed.
    pub fn toggle(&mut self, id: &ObjectId) -> Toggle {
        let Some(node) = self.nodes.get_mut(id) else {
            return Toggle::Ignored;
        };
        if !node.has_children {
            return Toggle::Ignored;
        }
        node.load_failed = false;

        if node.is_loading {
            node.expand_on_commit = !node.expand_on_commit;
            return Toggle::Deferred;
        }
        if node.is_expanded {
            node.is_expanded = false;
            return Toggle::Collapsed;
        }
        if !node.child_ids.is_empty() {
            node.is_expanded = true;
            return Toggle::Expanded;
        }

        self.next_request += 1;
        node.is_loading = true;
        node.expand_on_commit = true;
        node.pending = Some(self.next_request);
        Toggle::Fetch(ExpandTicket { epoch: self.epoch, node: id.clone(), request: self.next_request })
    }

    /// Land a successful children fetch.
    ///
    /// An empty result turns the node into a leaf.
    pub fn commit_children(&mut self, ticket: &ExpandTicket, entries: Vec<ChildEntry>) -> CommitOutcome {
        if !self.accepts(ticket) {
            log::debug!("dropping stale children for {}", ticket.node);
            return CommitOutcome::Stale;
        }
        let child_ids = self.adopt(entries);
        let Some(node) = self.nodes.get_mut(&ticket.node) else {
            return CommitOutcome::Stale;
        };
        node.pending = None;
        node.is_loading = false;
        node.has_children = !child_ids.is_empty();
        node.is_expanded = node.expand_on_commit && node.has_children;
        node.child_ids = child_ids;
        CommitOutcome::Applied
    }

    /// Land a failed children fetch: the node reverts to collapsed.
    pub fn fail_children(&mut self, ticket: &ExpandTicket) -> CommitOutcome {
        if !self.accepts(ticket) {
            return CommitOutcome::Stale;
        }
        let Some(node) = self.nodes.get_mut(&ticket.node) else {
            return CommitOutcome::Stale;
        };
        node.pending = None;
        node.is_loading = false;
        node.is_expanded = false;
        node.load_failed = true;
        CommitOutcome::Applied
    }

    /// Visible nodes in depth-first display order.
    #[must_use]
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        let mut seen = HashSet::new();
        let mut stack: Vec<(&ObjectId, usize)> = self.roots.iter().rev().map(|id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            // A malformed hierarchy may list an ancestor as a child.
            if !seen.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            rows.push(TreeRow {
                id: node.id.clone(),
                name: node.name.clone(),
                object_type: node.object_type.clone(),
                depth,
                has_children: node.has_children,
                is_expanded: node.is_expanded,
                is_loading: node.is_loading,
                load_failed: node.load_failed,
                is_current: node.id == self.current,
            });
            if node.is_expanded {
                stack.extend(node.child_ids.iter().rev().map(|child| (child, depth + 1)));
            }
        }
        rows
    }

    fn accepts(&self, ticket: &ExpandTicket) -> bool {
        ticket.epoch == self.epoch
            && self
                .nodes
                .get(&ticket.node)
                .is_some_and(|node| node.pending == Some(ticket.request))
    }

    /// Insert fetched children into the arena, keeping the state of nodes
    /// that are already present.
    fn adopt(&mut self, entries: Vec<ChildEntry>) -> Vec<ObjectId> {
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = entry.summary.id.clone();
            match self.nodes.get_mut(&id) {
                Some(existing) => {
                    existing.name = entry.summary.name;
                    existing.object_type = entry.summary.object_type;
                    if existing.child_ids.is_empty() {
                        existing.has_children = entry.has_children;
                    }
                }
                None => {
                    self.nodes.insert(id.clone(), TreeNode::from_entry(entry));
                }
            }
            ids.push(id);
        }
        ids
    }
}
