//! Client-side state models used by the menu.
//!
//! DESIGN
//! ======
//! State is split by concern (`menu` for the component's own chrome,
//! `cluster` for the dashboard selection it reads) so each stays small.

pub mod cluster;
pub mod menu;
