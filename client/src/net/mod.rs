//! Networking modules for the property backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth and user calls, `source` implements the object-hierarchy
//! contract consumed by the tree navigator and the object pages.

pub mod api;
pub mod source;
