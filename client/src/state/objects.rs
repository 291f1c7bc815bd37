//! Object-list state for the `/objects` inventory page.
//!
//! DESIGN
//! ======
//! The list is independent from the navigator tree: it holds every object the
//! backend returns, ordered for display, and never tracks expansion.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use hierarchy::RealEstateObject;
use hierarchy::object::sort_for_display;

/// Inventory shown on the objects page.
#[derive(Clone, Debug, Default)]
pub struct ObjectsState {
    pub items: Vec<RealEstateObject>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ObjectsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the inventory with a fresh response, sorted for display.
    pub fn finish_load(&mut self, mut items: Vec<RealEstateObject>) {
        sort_for_display(&mut items);
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    #[must_use]
    pub fn top_level_count(&self) -> usize {
        self.items.iter().filter(|o| o.parent_id.is_none()).count()
    }

    /// Caption above the table, e.g. "12 objects, 3 top-level".
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.items.len();
        let noun = if total == 1 { "object" } else { "objects" };
        format!("{total} {noun}, {} top-level", self.top_level_count())
    }
}
