//! Application router component.
//!
//! Hash-based routing with native `hashchange` events, so browser
//! back/forward buttons and programmatic hash updates flow through the
//! same path.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation state is derived
//!   from `#/path` on every change.
//! - **The menu belt never remounts on navigation**: it sits outside
//!   the routed view and observes the route through [`RouteContext`].
//! - **Page containers remount per route value**: a changed slug or
//!   intro flag builds a fresh page view.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::menu::MenuBelt;
use crate::components::pages::{HomePage, ProjectPage};
use crate::models::AppRoute;

/// The current route, derived from the URL hash.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Hashchange listener (runs for the lifetime of the app).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // The router never unmounts; keep the closure alive.
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    provide_context(RouteContext(route_memo));

    view! {
        <MenuBelt />

        {move || match route_memo.get() {
            AppRoute::Home => view! { <HomePage /> }.into_any(),
            AppRoute::Project { slug, intro } => {
                view! { <ProjectPage slug=slug intro=intro /> }.into_any()
            }
        }}
    }
}
