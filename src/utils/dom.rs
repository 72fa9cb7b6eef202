//! DOM and Web API utility functions.
//!
//! Safe access to browser globals plus the listener/clock plumbing the
//! view-state components share.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Storage, Window};

use crate::core::placement::Viewport;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Current viewport dimensions in CSS pixels.
pub fn viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

/// Monotonic-enough wall clock for gesture timing and cool-downs.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Uniform sample in `[0, 1)` for the placement randomizer.
#[inline]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Run `navigate` inside the browser's native view transition when the
/// capability exists, plainly otherwise. Detection goes through
/// `Reflect` so the absence of the API is a silent branch, not an
/// error.
pub fn with_view_transition(navigate: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        navigate();
        return;
    };
    let start = js_sys::Reflect::get(document.as_ref(), &"startViewTransition".into())
        .ok()
        .filter(|value| value.is_function());

    match start {
        Some(function) => {
            let function: js_sys::Function = function.unchecked_into();
            let callback = Closure::once_into_js(navigate);
            let _ = function.call1(document.as_ref(), &callback);
        }
        None => navigate(),
    }
}

/// A DOM event listener detached on drop.
///
/// Components keep the guard alive for their lifetime and drop it in
/// `on_cleanup`, so a listener can never fire into unmounted state.
pub struct EventListenerGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    /// Attach a (passive) listener to `target`.
    pub fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Attach a non-passive listener, for handlers that call
    /// `prevent_default` (the menu's touch-move scroll suppression).
    pub fn attach_active(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
