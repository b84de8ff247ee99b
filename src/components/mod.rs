//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and read shared state from their props
//! or Leptos context providers.

pub mod menu;
pub mod menu_entries;
