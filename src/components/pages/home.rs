//! Home page container.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::sliders::HomeSlider;
use crate::components::transitions::FadeTransition;
use crate::models::PageKind;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = ctx.page;
    let content_ready = ctx.content_ready;

    // Typed page marker: the backdrop gradient hides itself on home.
    Effect::new(move |_| {
        page.set(Some(PageKind::Home));
    });
    on_cleanup(move || {
        if page.get_untracked() == Some(PageKind::Home) {
            page.set(None);
        }
    });

    view! {
        <main>
            <Show
                when=move || content_ready.get()
                fallback=|| view! { <div class=css::loading aria-busy="true"></div> }
            >
                <FadeTransition>
                    <HomeSlider />
                </FadeTransition>
            </Show>
        </main>
    }
}
