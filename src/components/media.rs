//! Renderable media.
//!
//! The view-state layer only decides *which* items deserve eager
//! loading; this component turns a CMS media record plus that hint
//! into an `<img>` or an inline autoplaying `<video>`.

use leptos::prelude::*;

use crate::models::{MediaItem, MediaKind};

stylance::import_crate_style!(css, "src/components/media.module.css");

/// Render one gallery item.
#[component]
pub fn Media(
    item: MediaItem,
    /// Eager-load hint from the slideshow engine; everything else
    /// stays lazy.
    #[prop(optional)]
    eager: bool,
) -> impl IntoView {
    // The blur placeholder paints behind the asset until it decodes.
    let backdrop = item
        .blur_data_url
        .as_ref()
        .map(|blur| format!("background-image: url({blur}); background-size: cover;"))
        .unwrap_or_default();

    match item.kind {
        MediaKind::Image => view! {
            <img
                class=css::media
                style=backdrop
                src=item.url
                alt=item.alt
                width=item.width
                height=item.height
                loading=if eager { "eager" } else { "lazy" }
                decoding="async"
            />
        }
        .into_any(),
        MediaKind::Video => view! {
            <video
                class=css::media
                style=backdrop
                src=item.url
                title=item.alt
                width=item.width
                height=item.height
                poster=item.thumbnail_url.clone().unwrap_or_default()
                preload=if eager { "auto" } else { "metadata" }
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            ></video>
        }
        .into_any(),
    }
}

/// Render a small thumbnail for grids and ghost previews, preferring
/// the dedicated thumbnail asset when the CMS provides one.
#[component]
pub fn MediaThumbnail(item: MediaItem, #[prop(optional)] eager: bool) -> impl IntoView {
    let src = item.thumbnail_url.clone().unwrap_or_else(|| item.url.clone());

    view! {
        <img
            class=css::media
            src=src
            alt=item.alt
            loading=if eager { "eager" } else { "lazy" }
            decoding="async"
        />
    }
}
