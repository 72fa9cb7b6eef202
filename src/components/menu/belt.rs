//! The expandable menu belt.
//!
//! A navigation overlay pinned to the bottom edge: hover expands it on
//! desktop, tap or swipe-up on mobile. All transition decisions live
//! in [`MenuMachine`]; this component translates DOM events into
//! machine calls and machine effects into timers. Timers and listener
//! guards are held in arena-backed storage so they are cancelled and
//! detached when the belt unmounts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::menu::sections::{AboutSection, ProjectInfoSection, ProjectsSection};
use crate::components::router::RouteContext;
use crate::config::{self, menu as menu_cfg};
use crate::core::content;
use crate::core::menu::{MenuEffect, MenuMachine, MenuSection, SwipeTracker, SwipeVerdict};
use crate::core::AppEvent;
use crate::models::Project;
use crate::utils::dom::{self, EventListenerGuard};

stylance::import_crate_style!(css, "src/components/menu/belt.module.css");

/// Pending menu deadlines. Replacing a slot cancels the old timer.
#[derive(Clone, Copy)]
struct MenuTimers {
    close: StoredValue<Option<Timeout>, LocalStorage>,
    reset: StoredValue<Option<Timeout>, LocalStorage>,
}

/// Translate a machine effect into timer work. The machine guards
/// against stale deadlines itself, so a timer that outlives its
/// trigger simply finds nothing to do.
fn apply_effect(machine: RwSignal<MenuMachine>, timers: MenuTimers, effect: MenuEffect) {
    match effect {
        MenuEffect::None => {}
        MenuEffect::CancelClose => timers.close.set_value(None),
        MenuEffect::ScheduleClose => {
            timers.close.set_value(Some(Timeout::new(menu_cfg::CLOSE_DELAY_MS, move || {
                let next = machine
                    .try_update(|m| m.close_elapsed())
                    .unwrap_or(MenuEffect::None);
                apply_effect(machine, timers, next);
            })));
        }
        MenuEffect::ScheduleSectionReset => {
            timers.reset.set_value(Some(Timeout::new(menu_cfg::SECTION_RESET_MS, move || {
                let _ = machine.try_update(|m| m.section_reset_elapsed());
            })));
        }
    }
}

/// Run one machine transition and apply its effect.
fn drive(
    machine: RwSignal<MenuMachine>,
    timers: MenuTimers,
    step: impl FnOnce(&mut MenuMachine) -> MenuEffect,
) {
    let effect = machine.try_update(step).unwrap_or(MenuEffect::None);
    apply_effect(machine, timers, effect);
}

#[component]
pub fn MenuBelt() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let projects = ctx.projects;
    let about = ctx.about;
    let bus = ctx.bus.clone();

    let machine = RwSignal::new(MenuMachine::new());
    let timers = MenuTimers {
        close: StoredValue::new_local(None),
        reset: StoredValue::new_local(None),
    };
    let is_mobile = use_media_query(menu_cfg::MOBILE_QUERY);

    let expanded = Memo::new(move |_| machine.get().is_expanded());
    let section = Memo::new(move |_| machine.get().section());
    let hovered = RwSignal::new(None::<Project>);

    let belt_ref = NodeRef::<leptos::html::Nav>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();

    // Current project: a memoized lookup of the route slug against the
    // project list, never stored separately.
    let detected_project = Memo::new(move |_| {
        let route = route_ctx.0.get();
        route
            .slug()
            .and_then(|slug| projects.with(|list| content::find_by_slug(list, slug).cloned()))
    });
    let current_slug = Memo::new(move |_| detected_project.get().map(|p| p.slug));

    // Route changes re-validate the section invariant: project-info is
    // unusable without a resolvable project.
    Effect::new(move |_| {
        let present = detected_project.get().is_some();
        machine.update(|m| m.sync_project(present));
    });

    // Sibling coordination: external open requests expand directly to
    // a section; a starting page transition or a grid toggle collapses
    // with the force-close flag set.
    let subscription = bus.subscribe(move |event| match event {
        AppEvent::OpenMenuSection(requested) => {
            let present = detected_project.get_untracked().is_some();
            let requested = *requested;
            drive(machine, timers, move |m| m.open_section(requested, present));
        }
        AppEvent::PageTransitionStart { .. } | AppEvent::ToggleGridView => {
            drive(machine, timers, |m| m.force_collapse());
        }
    });
    on_cleanup(move || drop(subscription));

    // Escape collapses the expanded belt. The guard detaches the
    // listener when the belt unmounts.
    if let Some(window) = dom::window() {
        let _escape_guard = StoredValue::new_local(EventListenerGuard::attach(
            &window,
            "keydown",
            move |event| {
                if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>()
                    && key_event.key() == "Escape"
                {
                    drive(machine, timers, |m| m.escape());
                }
            },
        ));
    }

    // Mobile outside-tap: armed shortly after expansion so the opening
    // tap cannot close the menu it just opened.
    let outside_guard: StoredValue<Option<EventListenerGuard>, LocalStorage> =
        StoredValue::new_local(None);
    let arm_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        if is_mobile.get() && expanded.get() {
            arm_timer.set_value(Some(Timeout::new(menu_cfg::OUTSIDE_TAP_ARM_MS, move || {
                let Some(document) = dom::document() else {
                    return;
                };
                let guard = EventListenerGuard::attach(&document, "click", move |event| {
                    let Some(belt) = belt_ref.get_untracked() else {
                        return;
                    };
                    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let inside = target.as_ref().is_some_and(|node| belt.contains(Some(node)));
                    if !inside {
                        drive(machine, timers, |m| m.outside_tap());
                    }
                });
                outside_guard.set_value(guard);
            })));
        } else {
            arm_timer.set_value(None);
            outside_guard.set_value(None);
        }
    });

    // Mobile swipe gestures on the whole document. touchmove is
    // registered non-passive so the open/close gesture can suppress
    // page scrolling; gestures inside the open belt's content keep
    // native scroll.
    let tracker = StoredValue::new(SwipeTracker::new());
    let touch_guards: StoredValue<Vec<EventListenerGuard>, LocalStorage> =
        StoredValue::new_local(Vec::new());
    Effect::new(move |_| {
        if !is_mobile.get() {
            touch_guards.set_value(Vec::new());
            return;
        }
        let Some(document) = dom::document() else {
            return;
        };
        let mut guards = Vec::new();

        if let Some(guard) = EventListenerGuard::attach(&document, "touchstart", move |event| {
            let Some(touch) = event
                .dyn_ref::<web_sys::TouchEvent>()
                .and_then(|e| e.touches().get(0))
            else {
                return;
            };
            let in_content = content_ref.get_untracked().is_some_and(|content| {
                event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| content.contains(Some(&node)))
            });
            tracker.update_value(|t| {
                t.begin(f64::from(touch.client_y()), dom::now_ms(), in_content);
            });
        }) {
            guards.push(guard);
        }

        if let Some(guard) = EventListenerGuard::attach_active(&document, "touchmove", move |event| {
            let Some(touch) = event
                .dyn_ref::<web_sys::TouchEvent>()
                .and_then(|e| e.touches().get(0))
            else {
                return;
            };
            let expanded_now = machine.get_untracked().is_expanded();
            let prevent = tracker
                .with_value(|t| t.should_prevent_scroll(f64::from(touch.client_y()), expanded_now));
            if prevent {
                event.prevent_default();
            }
        }) {
            guards.push(guard);
        }

        if let Some(guard) = EventListenerGuard::attach(&document, "touchend", move |event| {
            let Some(touch) = event
                .dyn_ref::<web_sys::TouchEvent>()
                .and_then(|e| e.changed_touches().get(0))
            else {
                return;
            };
            let expanded_now = machine.get_untracked().is_expanded();
            let verdict = tracker
                .try_update_value(|t| {
                    t.end(f64::from(touch.client_y()), dom::now_ms(), expanded_now)
                })
                .unwrap_or(SwipeVerdict::Pass);
            drive(machine, timers, move |m| m.apply_swipe(verdict));
        }) {
            guards.push(guard);
        }

        touch_guards.set_value(guards);
    });

    // Desktop hover model.
    let on_mouse_enter = move |_| {
        if is_mobile.get_untracked() {
            return;
        }
        drive(machine, timers, |m| m.pointer_enter());
    };
    let on_mouse_leave = move |_| {
        if is_mobile.get_untracked() {
            return;
        }
        drive(machine, timers, |m| m.pointer_leave());
    };

    // Mobile tap on the collapsed belt.
    let on_tap = move |event: leptos::ev::MouseEvent| {
        if !is_mobile.get_untracked() {
            return;
        }
        let opened = machine.try_update(|m| m.tap()).unwrap_or(false);
        if opened {
            event.stop_propagation();
        }
    };

    let set_section = move |requested: MenuSection| {
        let present = detected_project.get_untracked().is_some();
        machine.update(|m| m.set_section(requested, present));
    };
    let open_info = Callback::new(move |_: ()| set_section(MenuSection::ProjectInfo));
    let on_hover = Callback::new(move |project| hovered.set(project));
    let thumbnails_bus = bus.clone();
    let on_thumbnails = Callback::new(move |_: ()| {
        // The belt's own subscription collapses it with force-close.
        thumbnails_bus.publish(&AppEvent::ToggleGridView);
    });

    let belt_class = move || {
        if expanded.get() {
            format!("{} {}", css::menuBelt, css::expanded)
        } else {
            format!("{} {}", css::menuBelt, css::collapsed)
        }
    };

    view! {
        <nav
            node_ref=belt_ref
            class=belt_class
            aria-label="Main navigation"
            on:mouseenter=on_mouse_enter
            on:mouseleave=on_mouse_leave
            on:click=on_tap
        >
            <Show when=move || expanded.get()>
                <div
                    node_ref=content_ref
                    class=css::menuContent
                    on:click=|event| event.stop_propagation()
                >
                    <header class=css::beltHeader>
                        <span class=css::siteTitle>{config::SITE_TITLE}</span>
                        <span class=css::siteSubtitle>{config::SITE_SUBTITLE}</span>
                    </header>

                    <div class=css::leftSection>
                        {move || match section.get() {
                            MenuSection::Projects => view! {
                                <ProjectsSection
                                    current_slug=current_slug
                                    on_open_info=open_info
                                    on_hover=on_hover
                                />
                            }
                            .into_any(),
                            MenuSection::About => view! { <AboutSection /> }.into_any(),
                            MenuSection::ProjectInfo => detected_project
                                .get()
                                .map(|project| view! {
                                    <ProjectInfoSection
                                        project=project
                                        on_thumbnails=on_thumbnails
                                    />
                                })
                                .into_any(),
                        }}
                    </div>

                    <div class=css::rightSection>
                        {move || match section.get() {
                            MenuSection::Projects => view! {
                                <button
                                    class=css::toggleButton
                                    on:click=move |_| set_section(MenuSection::About)
                                >
                                    "About"
                                </button>
                            }
                            .into_any(),
                            _ => view! {
                                <button
                                    class=css::toggleButton
                                    on:click=move |_| set_section(MenuSection::Projects)
                                >
                                    "Projects"
                                </button>
                            }
                            .into_any(),
                        }}
                    </div>

                    <footer class=css::beltFooter>
                        {move || about.get().map(|info| view! {
                            <a href=info.contact.email.link.clone()>
                                {info.contact.email.display.clone()}
                            </a>
                            <a href=info.contact.instagram.link.clone() target="_blank" rel="noopener">
                                {info.contact.instagram.display.clone()}
                            </a>
                        })}
                    </footer>
                </div>
            </Show>

            <Show when=move || expanded.get() && section.get() == MenuSection::Projects>
                {move || hovered.get().map(|project| view! {
                    <div class=css::statsContainer>
                        <p class=css::imageCounter>
                            {format!("{:02} Images", project.media.len())}
                        </p>
                        {project.collaboration.clone().map(|credit| view! {
                            <p class=css::collaboration>{credit}</p>
                        })}
                    </div>
                })}
            </Show>
        </nav>
    }
}
