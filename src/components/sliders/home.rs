//! Home slideshow.
//!
//! One slide per project, each showing a randomly chosen image from
//! that project's gallery. The pick for a project re-rolls whenever
//! its slide becomes active again, so returning to a slide shows a
//! different photograph. Clicks on the left/right half navigate, and
//! the cursor itself is the direction affordance.

use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::media::Media;
use crate::components::project_info::ProjectInfo;
use crate::components::transitions::TransitionLink;
use crate::config::slideshow as slideshow_cfg;
use crate::core::slideshow::{self, Advance, Carousel, SlideStep};
use crate::models::{AppRoute, Project, slide_counter};
use crate::utils::dom::{self, EventListenerGuard};

stylance::import_crate_style!(css, "src/components/sliders/home.module.css");

fn random_media_index(project: &Project) -> usize {
    if project.media.is_empty() {
        return 0;
    }
    let sample = dom::random_unit() * project.media.len() as f64;
    (sample as usize).min(project.media.len() - 1)
}

#[component]
pub fn HomeSlider() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The page container mounts this only once content is ready, so a
    // mount-time snapshot is the display order for this page view.
    let projects = ctx.projects.get_untracked();
    let len = projects.len();

    if len == 0 {
        return view! { <div class=css::emptyState>"No projects published yet."</div> }.into_any();
    }

    let carousel = RwSignal::new(Carousel::new(len, true, 0));
    let active = Memo::new(move |_| carousel.get().active());
    let cursor = RwSignal::new("w-resize");

    let picks = RwSignal::new(
        projects
            .iter()
            .map(|project| (project.id.clone(), random_media_index(project)))
            .collect::<HashMap<String, usize>>(),
    );

    let items = StoredValue::new(projects.clone());
    let reroll = move |project_index: usize| {
        items.with_value(|list| {
            if let Some(project) = list.get(project_index) {
                let pick = random_media_index(project);
                picks.update(|map| {
                    map.insert(project.id.clone(), pick);
                });
            }
        });
    };

    let step_next = move || {
        if let Advance::Moved(slide_move) = carousel
            .try_update(|c| c.slide_next())
            .unwrap_or(Advance::EndReached)
        {
            reroll(slide_move.to);
        }
    };
    let step_prev = move || {
        if let Some(slide_move) = carousel.try_update(|c| c.slide_prev()).flatten() {
            reroll(slide_move.to);
        }
    };

    let on_click = move |event: leptos::ev::MouseEvent| {
        let width = dom::viewport().map(|v| v.width).unwrap_or(1.0);
        match slideshow::classify_click(f64::from(event.client_x()), width) {
            SlideStep::Prev => step_prev(),
            SlideStep::Next => step_next(),
        }
    };

    let on_mouse_move = move |event: leptos::ev::MouseEvent| {
        let width = dom::viewport().map(|v| v.width).unwrap_or(1.0);
        cursor.set(match slideshow::classify_click(f64::from(event.client_x()), width) {
            SlideStep::Prev => "w-resize",
            SlideStep::Next => "e-resize",
        });
    };

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
    }

    let slides = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let slide_class = move || {
                if active.get() == index {
                    format!("{} {}", css::slide, css::activeSlide)
                } else {
                    css::slide.to_string()
                }
            };
            let project_id = project.id.clone();
            let media = project.media.clone();
            let media_total = media.len();
            let eager_hint = index < slideshow_cfg::HOME_EAGER_SLIDES;
            let open_route = AppRoute::Project {
                slug: project.slug.clone(),
                intro: false,
            };
            let pick_index =
                Memo::new(move |_| picks.with(|map| map.get(&project_id).copied()).unwrap_or(0));

            view! {
                <div class=slide_class>
                    <div class=css::imageContainer>
                        {move || {
                            media.get(pick_index.get()).cloned().map(|item| view! {
                                <Media item=item eager=eager_hint />
                            })
                        }}
                    </div>
                    <div class=css::caption on:click=|event| event.stop_propagation()>
                        <span class=css::imageCounter>
                            {move || slide_counter(pick_index.get(), media_total)}
                        </span>
                        <TransitionLink
                            route=open_route
                            fade_out_project_info=true
                            class=css::openProject
                        >
                            "Open project"
                        </TransitionLink>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let active_project_info = move || {
        let index = active.get();
        items
            .with_value(|list| list.get(index).cloned())
            .map(|project| view! { <ProjectInfo project=project /> })
    };

    view! {
        <div
            class=css::homeSlider
            role="region"
            aria-label="Project gallery"
            style=move || format!("cursor: {};", cursor.get())
            on:click=on_click
            on:mousemove=on_mouse_move
        >
            {active_project_info}
            {slides}
            <div class=css::navigationHint>"Use arrows or click to navigate"</div>
        </div>
    }
    .into_any()
}
