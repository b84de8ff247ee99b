//! Outside-click detection with an explicit subscription lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dropdowns subscribe at mount and release at cleanup. The browser
//! implementation listens on the document for pointer-down events and reports
//! the ones whose target lies outside the boundary element.

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

/// DOM events treated as an interaction.
pub const OUTSIDE_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Handle for an active listener. Dropping it releases the listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Subscription with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now instead of at drop.
    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Whether an event should be reported, given whether the boundary element
/// contains its target. Events with no resolvable boundary are ignored.
pub fn is_outside(boundary_mounted: bool, target_inside: bool) -> bool {
    boundary_mounted && !target_inside
}

/// Notifies `callback` when an interaction lands outside `boundary`.
pub trait OutsideClick: Send + Sync {
    fn on_outside_interaction(&self, boundary: NodeRef<html::Div>, callback: Callback<()>) -> Subscription;
}

/// Document-level listener. Without `hydrate` it never fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentOutsideClick;

impl OutsideClick for DocumentOutsideClick {
    fn on_outside_interaction(&self, boundary: NodeRef<html::Div>, callback: Callback<()>) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Subscription::noop();
            };

            let handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let element = boundary.get_untracked();
                let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                let inside = element
                    .as_ref()
                    .is_some_and(|el| el.contains(target.as_ref()));
                if is_outside(element.is_some(), inside) {
                    callback.run(());
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            for name in OUTSIDE_EVENTS {
                if document
                    .add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())
                    .is_err()
                {
                    leptos::logging::warn!("outside-click listener not attached: {name}");
                }
            }

            Subscription::new(move || {
                for name in OUTSIDE_EVENTS {
                    let _ = document.remove_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
                }
                drop(handler);
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (boundary, callback);
            Subscription::noop()
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopOutsideClick;

impl OutsideClick for NoopOutsideClick {
    fn on_outside_interaction(&self, _boundary: NodeRef<html::Div>, _callback: Callback<()>) -> Subscription {
        Subscription::noop()
    }
}

/// Detector used when the host does not inject one.
pub fn default_detector() -> Arc<dyn OutsideClick> {
    Arc::new(DocumentOutsideClick)
}
