//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `objects`, `toast`, etc.) so individual
//! pages and components can depend on small focused models. The navigator
//! tree itself lives in `hierarchy::ObjectTree`, owned per component.

pub mod auth;
pub mod object_actions;
pub mod object_details;
pub mod objects;
pub mod toast;
