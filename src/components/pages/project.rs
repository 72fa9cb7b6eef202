//! Project page container.
//!
//! Resolves the routed slug against the loaded content (a missing
//! project renders the not-found fallback and none of the view-state
//! machinery is initialized), owns the slideshow/grid mode machine and
//! its fade lock, and runs the intro presentation when the route
//! carried the transient flag.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::grid::ImageGrid;
use crate::components::project_info::ProjectInfo;
use crate::components::sliders::ProjectSlider;
use crate::components::transitions::{FadeTransition, PageTransitions, TransitionLink};
use crate::config::{fade, intro as intro_cfg, slideshow as slideshow_cfg};
use crate::core::AppEvent;
use crate::core::arrow::ArrowDirection;
use crate::core::content;
use crate::core::gallery::{GalleryMode, GalleryView};
use crate::core::presentation::{IntroEffect, IntroPhase, IntroSequencer};
use crate::models::{AppRoute, PageKind, Project};
use crate::utils::dom::{self, EventListenerGuard};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ProjectPage(slug: String, intro: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let projects = ctx.projects;
    let content_ready = ctx.content_ready;

    let slug = StoredValue::new(slug);
    let project = Memo::new(move |_| {
        slug.with_value(|slug| projects.with(|list| content::find_by_slug(list, slug).cloned()))
    });

    view! {
        <main>
            <Show
                when=move || content_ready.get()
                fallback=|| view! { <div class=css::loading aria-busy="true"></div> }
            >
                {move || match project.get() {
                    Some(project) => view! { <ProjectView project=project intro=intro /> }.into_any(),
                    None => view! { <NotFound /> }.into_any(),
                }}
            </Show>
        </main>
    }
}

/// Fallback for slugs that do not resolve against the loaded content.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1>"Project not found"</h1>
            <p>"The project you are looking for does not exist or is no longer published."</p>
            <TransitionLink route=AppRoute::Home class=css::notFoundLink>
                "Back to all projects"
            </TransitionLink>
        </div>
    }
}

/// The mounted project view. Only constructed for resolvable projects.
#[component]
fn ProjectView(project: Project, intro: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transitions = use_context::<PageTransitions>().expect("PageTransitions must be provided");

    let projects = ctx.projects;
    let page = ctx.page;
    let bus = ctx.bus.clone();

    let slug = StoredValue::new(project.slug.clone());

    // Gallery mode with its fade lock. The lock releases once the
    // cross-fade between views has run its course.
    let mode = RwSignal::new(GalleryMode::new());
    let view_mode = Memo::new(move |_| mode.get().view());
    let lock_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    let initial_slide = RwSignal::new(0usize);
    let arrow = RwSignal::new(ArrowDirection::None);

    let schedule_unlock = move || {
        lock_timer.set_value(Some(Timeout::new(fade::PAGE_MS, move || {
            let _ = mode.try_update(|m| m.release_lock());
        })));
    };

    let toggle_view = move || {
        if mode.try_update(|m| m.toggle()).flatten().is_some() {
            schedule_unlock();
        }
    };
    let jump_to_slide = move |index: usize| {
        if mode.with_untracked(|m| m.is_locked()) {
            return;
        }
        initial_slide.set(index);
        if mode.try_update(|m| m.jump_to_slideshow()).unwrap_or(false) {
            schedule_unlock();
        }
    };

    // Typed page marker: slideshow marks it, grid switches it, and
    // unmount clears it unless a successor page already claimed it.
    Effect::new(move |_| {
        let kind = match view_mode.get() {
            GalleryView::Slideshow => PageKind::ProjectSlideshow,
            GalleryView::Grid => PageKind::ProjectGrid,
        };
        page.set(Some(kind));
    });
    on_cleanup(move || {
        if matches!(
            page.get_untracked(),
            Some(PageKind::ProjectSlideshow | PageKind::ProjectGrid)
        ) {
            page.set(None);
        }
    });

    // Grid toggles also arrive from the menu belt's Thumbnails button.
    let subscription = bus.subscribe(move |event| {
        if matches!(event, AppEvent::ToggleGridView) {
            toggle_view();
        }
    });
    on_cleanup(move || drop(subscription));

    // Intro presentation, armed by the transient route flag.
    let intro_phase = RwSignal::new(if intro { IntroPhase::Hidden } else { IntroPhase::Done });
    if intro {
        let (sequencer, first_effect) = IntroSequencer::begin(intro_cfg::AUTO_ADVANCE);
        let sequencer = StoredValue::new(sequencer);
        let intro_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

        let sync_phase = move || {
            intro_phase.set(sequencer.with_value(|s| s.phase()));
        };

        let complete = {
            let transitions = transitions.clone();
            Callback::new(move |effect: IntroEffect| {
                if let IntroEffect::Complete { advance } = effect {
                    let current = slug.with_value(Clone::clone);
                    // Strip the transient flag without navigating.
                    AppRoute::Project {
                        slug: current.clone(),
                        intro: false,
                    }
                    .replace();
                    if advance
                        && let Some(next) = projects.with_untracked(|list| {
                            content::next_slug(list, &current).map(str::to_string)
                        })
                    {
                        transitions.navigate(AppRoute::Project { slug: next, intro: true }, false);
                    }
                }
            })
        };

        let schedule_reveal = move || {
            intro_timer.set_value(Some(Timeout::new(intro_cfg::REVEAL_MS, move || {
                let effect = sequencer
                    .try_update_value(|s| s.reveal_elapsed())
                    .unwrap_or(IntroEffect::None);
                sync_phase();
                complete.run(effect);
            })));
        };

        if first_effect == IntroEffect::SchedulePaint {
            intro_timer.set_value(Some(Timeout::new(fade::PAINT_DELAY_MS, move || {
                let effect = sequencer
                    .try_update_value(|s| s.paint_elapsed())
                    .unwrap_or(IntroEffect::None);
                sync_phase();
                if effect == IntroEffect::ScheduleReveal {
                    schedule_reveal();
                }
            })));
        }

        // A click or tap anywhere during the presentation skips the
        // remaining wait.
        if let Some(document) = dom::document() {
            let _dismiss_guard = StoredValue::new_local(EventListenerGuard::attach(
                &document,
                "click",
                move |_| {
                    if sequencer.with_value(|s| !s.is_presenting()) {
                        return;
                    }
                    intro_timer.set_value(None);
                    let effect = sequencer
                        .try_update_value(|s| s.dismiss())
                        .unwrap_or(IntroEffect::None);
                    sync_phase();
                    complete.run(effect);
                },
            ));
        }
    }

    let gallery = StoredValue::new(project.clone());
    let toggle_cb = Callback::new(move |_: ()| toggle_view());
    let jump_cb = Callback::new(move |index: usize| jump_to_slide(index));

    // Non-cyclic configuration: the last slide's click hands off to
    // the next project instead of wrapping.
    let on_end = (!slideshow_cfg::LOOP_GALLERY).then(|| {
        let transitions = transitions.clone();
        Callback::new(move |_: ()| {
            let current = slug.with_value(Clone::clone);
            if let Some(next) = projects
                .with_untracked(|list| content::next_slug(list, &current).map(str::to_string))
            {
                transitions.navigate(AppRoute::Project { slug: next, intro: false }, false);
            }
        })
    });

    let gallery_class = move || {
        if intro_phase.get() == IntroPhase::Done {
            css::gallery.to_string()
        } else {
            format!("{} {}", css::gallery, css::galleryConcealed)
        }
    };

    view! {
        <ProjectInfo
            project=project.clone()
            show_info_button=true
            intro=Signal::from(intro_phase)
            arrow=arrow
        />
        <FadeTransition>
            <div class=gallery_class>
                {move || {
                    let project = gallery.with_value(Clone::clone);
                    match view_mode.get() {
                        GalleryView::Slideshow => view! {
                            <ProjectSlider
                                project=project
                                initial_slide=initial_slide.get_untracked()
                                arrow=arrow
                                on_toggle_grid=toggle_cb
                                on_end_reached=on_end
                            />
                        }
                        .into_any(),
                        GalleryView::Grid => view! {
                            <ImageGrid
                                project=project
                                on_media_click=jump_cb
                                on_toggle_view=toggle_cb
                            />
                        }
                        .into_any(),
                    }
                }}
            </div>
        </FadeTransition>
    }
}
