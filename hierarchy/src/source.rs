//! Read-side contract of the object-hierarchy service.

use crate::error::SourceError;
use crate::object::{ObjectId, ObjectSummary, RealEstateObject};

/// Async lookups the tree navigator needs. Enables fakes in tests.
///
/// Futures are not required to be `Send`: the browser implementation is built
/// on `gloo-net`, whose futures live on the single JS event loop.
#[async_trait::async_trait(?Send)]
pub trait ObjectSource {
    /// Direct children of `id`; empty when it has none.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the lookup fails for any reason.
    async fn list_children(&self, id: &ObjectId) -> Result<Vec<ObjectSummary>, SourceError>;

    /// Detail record of a single object, including its `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the lookup fails for any reason.
    async fn get_object(&self, id: &ObjectId) -> Result<RealEstateObject, SourceError>;
}
