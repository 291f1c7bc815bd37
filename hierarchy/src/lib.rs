//! Shared object-hierarchy model for the property-management console.
//!
//! This crate owns what both the browser client and the CLI need to browse
//! real-estate objects: wire DTOs, REST paths, the credential handed to
//! sources, the [`ObjectSource`] contract, and the lazily expanded
//! [`ObjectTree`] with the async flows that feed it. It has no browser or
//! runtime dependency.

pub mod endpoints;
pub mod error;
pub mod loader;
pub mod object;
pub mod session;
pub mod source;
pub mod tree;

pub use error::SourceError;
pub use loader::Navigator;
pub use object::{NewObject, ObjectId, ObjectSummary, ObjectType, ObjectUpdate, ParentLink, RealEstateObject, UserInfo};
pub use session::{AuthResponse, LoginRequest, Session};
pub use source::ObjectSource;
pub use tree::{ChildEntry, CommitOutcome, ExpandTicket, LoadPhase, ObjectTree, RootTicket, Toggle, TreeNode, TreeRow};
