//! Detail-page state: the opened object, its ancestor breadcrumbs, and load
//! status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the `/objects/:id` page. The navigator tree keeps its own state;
//! this only drives the header and the info card.

#[cfg(test)]
#[path = "object_details_test.rs"]
mod object_details_test;

use hierarchy::{ObjectId, RealEstateObject};

/// One breadcrumb link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub id: ObjectId,
    pub name: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ObjectDetailsState {
    pub id: Option<ObjectId>,
    pub object: Option<RealEstateObject>,
    pub breadcrumbs: Vec<Crumb>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ObjectDetailsState {
    /// Reset for a newly opened object.
    pub fn open(&mut self, id: ObjectId) {
        *self = Self { id: Some(id), loading: true, ..Self::default() };
    }

    /// Whether a response for `id` still belongs to the opened object.
    #[must_use]
    pub fn is_current(&self, id: &ObjectId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Store the loaded object and breadcrumbs built from `ancestry`.
    ///
    /// A failed or empty ancestry lookup falls back to a single crumb for the
    /// object itself.
    pub fn finish_load(&mut self, object: RealEstateObject, ancestry: Option<Vec<RealEstateObject>>) {
        self.breadcrumbs = build_breadcrumbs(&object, ancestry.unwrap_or_default());
        self.object = Some(object);
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.object = None;
        self.breadcrumbs.clear();
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Ancestors root first, ending at `object`, which is marked current.
#[must_use]
pub fn build_breadcrumbs(object: &RealEstateObject, ancestry: Vec<RealEstateObject>) -> Vec<Crumb> {
    let mut crumbs: Vec<Crumb> = ancestry
        .into_iter()
        .take_while(|entry| entry.id != object.id)
        .map(|entry| Crumb { id: entry.id, name: entry.name, is_current: false })
        .collect();
    crumbs.push(Crumb { id: object.id.clone(), name: object.name.clone(), is_current: true });
    crumbs
}
