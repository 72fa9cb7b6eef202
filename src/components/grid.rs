//! Thumbnail grid view of a project gallery.

use leptos::prelude::*;

use crate::components::media::MediaThumbnail;
use crate::components::transitions::TransitionLink;
use crate::config::slideshow as slideshow_cfg;
use crate::models::{AppRoute, Project, grid_ordinal};

stylance::import_crate_style!(css, "src/components/grid.module.css");

/// Contact-sheet layout: every item as a small thumbnail with a
/// three-digit ordinal. Clicking a thumbnail jumps the slideshow to
/// that item; the first visible row loads eagerly.
#[component]
pub fn ImageGrid(
    project: Project,
    on_media_click: Callback<usize>,
    on_toggle_view: Callback<()>,
) -> impl IntoView {
    let cells = project
        .media
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let eager = index < slideshow_cfg::GRID_EAGER_COUNT;
            view! {
                <div class=css::gridItem on:click=move |_| on_media_click.run(index)>
                    <div class=css::imageWrapper>
                        <MediaThumbnail item=item.clone() eager=eager />
                    </div>
                    <p class=css::imageNumber>{grid_ordinal(index)}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::gridContainer>
            <div class=css::grid>{cells}</div>

            <div class=css::caption>
                <button class=css::toggleView on:click=move |_| on_toggle_view.run(())>
                    "Slideshow view"
                </button>
                <TransitionLink route=AppRoute::Home class=css::closeProject>
                    "Close project"
                </TransitionLink>
            </div>
        </div>
    }
}
