//! Page transition choreography.
//!
//! [`PageTransitions`] is the app-wide navigation entry point: every
//! link that leaves the current page goes through it so content can
//! fade out before the route actually changes. The fade-out is
//! announced on the event bus, the navigation happens after the fade
//! delay (inside the browser's native view transition when available),
//! and the phase guard swallows re-entrant calls from rapid clicks.
//!
//! [`FadeTransition`] is the matching fade-in wrapper each page mounts
//! its content in.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::fade;
use crate::core::{AppEvent, EventBus, TransitionController};
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/transitions.module.css");

/// App-wide navigation handle, provided as context at the root.
///
/// The controller's own timers are page-lifetime by design: once a
/// transition has begun, the navigation must complete even if the
/// component that requested it unmounts mid-fade, so these timers are
/// intentionally not tied to any component scope.
#[derive(Clone)]
pub struct PageTransitions {
    controller: Arc<TransitionController>,
    bus: EventBus,
}

impl PageTransitions {
    pub fn new(bus: EventBus) -> Self {
        Self {
            controller: Arc::new(TransitionController::new()),
            bus,
        }
    }

    /// Navigate to `route` with the full fade choreography.
    ///
    /// Ignored while another transition is in flight, and when the
    /// target is already the current route.
    pub fn navigate(&self, route: AppRoute, fade_out_project_info: bool) {
        if AppRoute::current() == route {
            return;
        }
        if !self.controller.begin() {
            return;
        }

        self.bus.publish(&AppEvent::PageTransitionStart {
            fade_out_project_info,
        });

        let controller = Arc::clone(&self.controller);
        Timeout::new(fade::PAGE_MS, move || {
            controller.mark_navigating();
            dom::with_view_transition(move || route.push());
            controller.mark_fading_in();

            // The destination fades in on its own; resolve the phase
            // once that fade has had time to finish so the next
            // navigation can start. Finish is safe even if the route
            // turned out not to exist.
            Timeout::new(fade::PAGE_MS, move || controller.finish()).forget();
        })
        .forget();
    }
}

/// A link that navigates through the transition controller.
#[component]
pub fn TransitionLink(
    route: AppRoute,
    #[prop(optional)] fade_out_project_info: bool,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let transitions = use_context::<PageTransitions>().expect("PageTransitions must be provided");

    let href = route.to_hash();
    let on_click = move |event: leptos::ev::MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
        transitions.navigate(route.clone(), fade_out_project_info);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

/// Fade-in wrapper for page content.
///
/// Mounts hidden, fades in after the paint delay, and fades out again
/// when a page transition starts anywhere in the app.
#[component]
pub fn FadeTransition(children: Children) -> impl IntoView {
    let bus = use_context::<EventBus>().expect("EventBus must be provided");
    let visible = RwSignal::new(false);

    // The hidden state must be painted before the class flips, or the
    // CSS transition is skipped entirely. The timer handle lives in
    // arena storage so unmounting cancels it.
    let _paint_timer =
        StoredValue::new_local(Timeout::new(fade::PAINT_DELAY_MS, move || visible.set(true)));

    let subscription = bus.subscribe(move |event| {
        if matches!(event, AppEvent::PageTransitionStart { .. }) {
            visible.set(false);
        }
    });
    on_cleanup(move || drop(subscription));

    let class = move || {
        if visible.get() {
            format!("{} {}", css::fadeWrapper, css::visible)
        } else {
            css::fadeWrapper.to_string()
        }
    };

    view! { <div class=class>{children()}</div> }
}
