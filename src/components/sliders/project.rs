//! Project gallery slideshow.
//!
//! One scattered photograph at a time, cross-fading between slides,
//! with a ghost preview of the previous item at its own randomized
//! position. Clicks on the left/right half step backward/forward; the
//! ghost is the one named exception and always steps back. Keyboard
//! arrows mirror the click rule.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::media::{Media, MediaThumbnail};
use crate::components::transitions::TransitionLink;
use crate::config::{placement as placement_cfg, slideshow as slideshow_cfg};
use crate::core::arrow::{self, ArrowDirection};
use crate::core::placement::{PlacementCache, Viewport};
use crate::core::slideshow::{self, Advance, Carousel, ResizeCooldown, SlideMove, SlideStep};
use crate::models::{AppRoute, MediaItem, Project, slide_counter};
use crate::utils::dom::{self, EventListenerGuard};

stylance::import_crate_style!(css, "src/components/sliders/project.module.css");

/// Stable per-epoch placement style for one item.
fn placement_style(
    placements: StoredValue<PlacementCache>,
    index: usize,
    aspect_ratio: f64,
) -> String {
    let viewport = dom::viewport().unwrap_or(Viewport {
        width: 1280.0,
        height: 720.0,
    });
    let media_height = viewport.height * placement_cfg::MEDIA_HEIGHT_FRAC;
    placements
        .try_update_value(|cache| {
            cache.position_for(
                index,
                viewport,
                media_height,
                aspect_ratio,
                placement_cfg::INSET_FRAC,
                &mut dom::random_unit,
            )
        })
        .map(|placement| placement.to_style())
        .unwrap_or_default()
}

#[component]
pub fn ProjectSlider(
    project: Project,
    /// Slide to start from (grid-thumbnail jumps land here).
    #[prop(optional)]
    initial_slide: usize,
    /// Direction affordance shared with the project info panel.
    arrow: RwSignal<ArrowDirection>,
    on_toggle_grid: Callback<()>,
    /// Supplied only in the non-cyclic configuration: advancing past
    /// the last item triggers this instead of wrapping.
    #[prop(optional_no_strip)]
    on_end_reached: Option<Callback<()>>,
) -> impl IntoView {
    let items = StoredValue::new(project.media.clone());
    let len = project.media.len();
    let looping = on_end_reached.is_none();
    let initial = initial_slide.min(len.saturating_sub(1));

    let carousel = RwSignal::new(Carousel::new(len, looping, initial));
    let active = Memo::new(move |_| carousel.get().active());
    let ghost = Memo::new(move |_| slideshow::ghost_index(active.get(), len, looping));

    let placements = StoredValue::new(PlacementCache::new());
    let epoch = RwSignal::new(0u64);
    let cooldown = StoredValue::new(ResizeCooldown::new());

    let decay_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    let resize_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    // Latest call wins: every update replaces (and thereby cancels)
    // the previous decay timer.
    let point_arrow = move |direction: ArrowDirection| {
        arrow.set(direction);
        decay_timer.set_value(Some(Timeout::new(slideshow_cfg::ARROW_DECAY_MS, move || {
            arrow.set(ArrowDirection::None);
        })));
    };

    // Interactive moves update the arrow and scatter the incoming
    // ghost to a fresh position. Moves inside the resize cool-down are
    // layout echoes, not user input, and change neither.
    let handle_move = move |slide_move: SlideMove| {
        let interactive = !cooldown.with_value(|c| c.is_suppressed(dom::now_ms()));
        if !interactive {
            return;
        }
        let direction = carousel.get_untracked().direction_of(slide_move);
        point_arrow(direction);
        if let Some(new_ghost) = slideshow::ghost_index(slide_move.to, len, looping) {
            placements.update_value(|cache| cache.invalidate(new_ghost));
        }
    };

    let step_next = move || {
        let advance = carousel
            .try_update(|c| c.slide_next())
            .unwrap_or(Advance::EndReached);
        match advance {
            Advance::Moved(slide_move) => handle_move(slide_move),
            Advance::EndReached => {
                if let Some(callback) = on_end_reached {
                    callback.run(());
                }
            }
        }
    };
    let step_prev = move || {
        if let Some(slide_move) = carousel.try_update(|c| c.slide_prev()).flatten() {
            handle_move(slide_move);
        }
    };

    let on_container_click = move |event: leptos::ev::MouseEvent| {
        let width = dom::viewport().map(|v| v.width).unwrap_or(1.0);
        match slideshow::classify_click(f64::from(event.client_x()), width) {
            SlideStep::Prev => step_prev(),
            SlideStep::Next => step_next(),
        }
    };

    // Ghost click: always previous, and never also the slide click.
    let on_ghost_click = move |event: leptos::ev::MouseEvent| {
        event.stop_propagation();
        step_prev();
    };

    let on_mouse_move = move |event: leptos::ev::MouseEvent| {
        let width = dom::viewport().map(|v| v.width).unwrap_or(1.0);
        point_arrow(arrow::from_pointer(f64::from(event.client_x()), width));
    };
    let on_mouse_leave = move |_| {
        decay_timer.set_value(None);
        arrow.set(ArrowDirection::None);
    };

    // Listener guards live in arena storage: detached when the
    // slideshow unmounts.
    if let Some(window) = dom::window() {
        let _keyboard_guard = StoredValue::new_local(EventListenerGuard::attach(
            &window,
            "keydown",
            move |event| {
                let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                match key_event.key().as_str() {
                    "ArrowLeft" => step_prev(),
                    "ArrowRight" => step_next(),
                    _ => {}
                }
            },
        ));

        // Resizes open the cool-down immediately; the expensive epoch
        // advance is debounced behind the last resize event.
        let _resize_guard = StoredValue::new_local(EventListenerGuard::attach(
            &window,
            "resize",
            move |_| {
                cooldown.update_value(|c| {
                    c.note_resize(dom::now_ms(), slideshow_cfg::RESIZE_COOLDOWN_MS);
                });
                resize_timer.set_value(Some(Timeout::new(
                    placement_cfg::RESIZE_DEBOUNCE_MS,
                    move || {
                        placements.update_value(|cache| cache.advance_epoch());
                        epoch.update(|e| *e += 1);
                    },
                )));
            },
        ));
    }

    let eager = slideshow::eager_indices(initial, len, looping);

    let slides = project
        .media
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let aspect_ratio = item.aspect_ratio();
            let eager_hint = eager.contains(&index);
            let style = move || {
                epoch.track();
                placement_style(placements, index, aspect_ratio)
            };
            let slide_class = move || {
                if active.get() == index {
                    format!("{} {}", css::slide, css::activeSlide)
                } else {
                    css::slide.to_string()
                }
            };
            view! {
                <div class=slide_class>
                    <div class=css::mediaContainer style=style>
                        <Media item=item.clone() eager=eager_hint />
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let ghost_view = move || {
        ghost.get().and_then(|ghost_index| {
            let item: MediaItem = items.with_value(|media| media.get(ghost_index).cloned())?;
            let aspect_ratio = item.aspect_ratio();
            let style = move || {
                epoch.track();
                placement_style(placements, ghost_index, aspect_ratio)
            };
            Some(view! {
                <div class=css::ghostImage style=style on:click=on_ghost_click>
                    <MediaThumbnail item=item eager=true />
                </div>
            })
        })
    };

    view! {
        <div
            class=css::projectSlider
            role="region"
            aria-label="Project gallery"
            on:click=on_container_click
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
        >
            {slides}
            {ghost_view}

            <div class=css::caption on:click=|event| event.stop_propagation()>
                <button
                    class=css::imageCounter
                    on:click=move |_| on_toggle_grid.run(())
                    title="Toggle grid view"
                >
                    {move || slide_counter(active.get(), len)}
                </button>
                <TransitionLink route=AppRoute::Home class=css::closeProject>
                    "Close project"
                </TransitionLink>
            </div>
        </div>
    }
}
