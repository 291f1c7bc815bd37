//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render object views and shared chrome while reading/writing
//! shared state from Leptos context providers.

pub mod back_to_parent;
pub mod object_actions;
pub mod object_info;
pub mod object_tree;
pub mod toast_host;
pub mod top_bar;
