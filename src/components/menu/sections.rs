//! Menu belt content sections.
//!
//! Three alternating panels inside the expanded belt: the project
//! list, the about panel, and the current project's info. Section
//! switching is owned by the belt's state machine; these components
//! only render and report intent upward through callbacks.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::transitions::TransitionLink;
use crate::models::{AppRoute, Project};
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/menu/sections.module.css");

/// The ordered project list with hover reporting and a "Project info"
/// affordance on the project currently open behind the menu.
#[component]
pub fn ProjectsSection(
    current_slug: Memo<Option<String>>,
    on_open_info: Callback<()>,
    on_hover: Callback<Option<Project>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let projects = ctx.projects;

    view! {
        <ul class=css::projectList>
            {move || {
                projects
                    .get()
                    .into_iter()
                    .map(|project| {
                        let slug = project.slug.clone();
                        let project_route = AppRoute::Project {
                            slug: slug.clone(),
                            intro: false,
                        };
                        let is_current = {
                            let slug = slug.clone();
                            move || current_slug.get().as_deref() == Some(slug.as_str())
                        };
                        let hover_project = project.clone();
                        let enter = {
                            let project = hover_project.clone();
                            move |_| on_hover.run(Some(project.clone()))
                        };
                        let leave = move |_| on_hover.run(None);

                        view! {
                            <li
                                class=move || {
                                    if is_current() {
                                        format!("{} {}", css::projectItem, css::currentProject)
                                    } else {
                                        css::projectItem.to_string()
                                    }
                                }
                                on:mouseenter=enter
                                on:mouseleave=leave
                            >
                                <TransitionLink
                                    route=project_route
                                    class=css::projectLink
                                >
                                    <span class=css::projectTitle>{project.title.clone()}</span>
                                    <span class=css::projectMeta>
                                        {format!("{}, {}", project.location, project.year)}
                                    </span>
                                </TransitionLink>
                                <Show when=is_current.clone()>
                                    <button
                                        class=css::infoButton
                                        on:click=move |_| on_open_info.run(())
                                    >
                                        "Project info"
                                    </button>
                                </Show>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

/// Bio, contact links, and credit lists from the about document.
#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let about = ctx.about;

    view! {
        <div class=css::aboutSection>
            {move || {
                about.get().map(|info| {
                    let bio = markdown_to_html(&info.bio);
                    let contacts = [info.contact.email, info.contact.phone, info.contact.instagram];
                    view! {
                        <h2 class=css::aboutName>{info.name}</h2>
                        <div class=css::bio inner_html=bio />
                        <ul class=css::contactList>
                            {contacts
                                .into_iter()
                                .map(|entry| view! {
                                    <li>
                                        <a href=entry.link target="_blank" rel="noopener">
                                            {entry.display}
                                        </a>
                                    </li>
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h3 class=css::creditHeading>"Selected clients"</h3>
                        <ul class=css::creditList>
                            {info.collaborators
                                .into_iter()
                                .map(|name| view! { <li>{name}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h3 class=css::creditHeading>"Publications"</h3>
                        <ul class=css::creditList>
                            {info.publications
                                .into_iter()
                                .map(|name| view! { <li>{name}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                })
            }}
        </div>
    }
}

/// Description and metadata for the project currently open behind the
/// menu. Only rendered when the belt machine has a resolvable current
/// project.
#[component]
pub fn ProjectInfoSection(project: Project, on_thumbnails: Callback<()>) -> impl IntoView {
    let description = markdown_to_html(&project.description);
    let meta_rows: Vec<(&str, Option<String>)> = vec![
        ("Client", project.client.clone()),
        ("Date", project.date.clone()),
        ("Collaboration", project.collaboration.clone()),
    ];

    view! {
        <div class=css::projectInfoSection>
            <h2 class=css::sectionTitle>
                {format!("{} {}", project.formatted_number, project.title)}
            </h2>
            <div class=css::description inner_html=description />
            <dl class=css::metaList>
                {meta_rows
                    .into_iter()
                    .filter_map(|(label, value)| {
                        value.map(|value| view! {
                            <div class=css::metaRow>
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                    })
                    .collect::<Vec<_>>()}
            </dl>
            <button class=css::thumbnailsButton on:click=move |_| on_thumbnails.run(())>
                "Thumbnails"
            </button>
        </div>
    }
}
