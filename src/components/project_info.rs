//! Project info panel.
//!
//! The caption block naming the current project: ordinal label, title,
//! location and year, plus the "Project info" button that asks the
//! menu belt to open its info section. During an intro presentation
//! the panel renders in a centered variant; during a page transition
//! it can be asked to fade out alongside the main content.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::arrow::ArrowDirection;
use crate::core::presentation::IntroPhase;
use crate::core::{AppEvent, EventBus};

stylance::import_crate_style!(css, "src/components/project_info.module.css");

#[component]
pub fn ProjectInfo(
    project: crate::models::Project,
    /// Show the "Project info" affordance (project pages only).
    #[prop(optional)]
    show_info_button: bool,
    /// Intro phase, when this panel takes part in a presentation.
    #[prop(optional)]
    intro: Option<Signal<IntroPhase>>,
    /// Direction affordance fed by the slideshow.
    #[prop(optional)]
    arrow: Option<RwSignal<ArrowDirection>>,
) -> impl IntoView {
    let bus = use_context::<EventBus>().expect("EventBus must be provided");

    // Transition links may request this panel to fade with the page.
    let faded = RwSignal::new(false);
    let subscription = bus.subscribe(move |event| {
        if matches!(
            event,
            AppEvent::PageTransitionStart {
                fade_out_project_info: true
            }
        ) {
            faded.set(true);
        }
    });
    on_cleanup(move || drop(subscription));

    let class = move || {
        let mut classes = vec![css::projectInfo];
        match intro.map(|signal| signal.get()) {
            Some(IntroPhase::Hidden) => {
                classes.push(css::presenting);
                classes.push(css::concealed);
            }
            Some(IntroPhase::Presenting) => classes.push(css::presenting),
            Some(IntroPhase::Done) | None => {}
        }
        if faded.get() {
            classes.push(css::fadedOut);
        }
        classes.join(" ")
    };

    let presenting = move || intro.is_some_and(|signal| signal.get() != IntroPhase::Done);

    let open_info = {
        let ctx = use_context::<AppContext>().expect("AppContext must be provided");
        move |event: leptos::ev::MouseEvent| {
            // The panel sits above the slideshow's click surface.
            event.stop_propagation();
            ctx.bus
                .publish(&AppEvent::OpenMenuSection(crate::core::MenuSection::ProjectInfo));
        }
    };

    view! {
        <div class=class>
            <div class=css::content>
                <h1 class=css::number>{project.formatted_number.clone()}</h1>
                <h1 class=css::details>
                    {format!("{}. {}, {}", project.title, project.location, project.year)}
                </h1>

                <Show when=move || show_info_button && !presenting()>
                    <button class=css::link on:click=open_info.clone()>
                        "Project info"
                    </button>
                </Show>

                {move || {
                    arrow.and_then(|signal| {
                        let icon = match signal.get() {
                            ArrowDirection::None => return None,
                            ArrowDirection::Left => ic::ARROW_LEFT,
                            ArrowDirection::Right => ic::ARROW_RIGHT,
                        };
                        Some(view! {
                            <span class=css::arrowIndicator>
                                <Icon icon=icon />
                            </span>
                        })
                    })
                }}
            </div>
        </div>
    }
}
