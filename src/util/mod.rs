//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! attributes, document listeners) from component logic to improve reuse and
//! testability.

pub mod outside_click;
pub mod routes;
pub mod settings;
pub mod theme;
