//! Root application module.
//!
//! Contains the main App component, AppContext definition, the typed
//! page backdrop, and application-level content loading.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::transitions::PageTransitions;
use crate::core::{EventBus, content};
use crate::models::{AboutInfo, PageKind, Project};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Content**: the CMS documents, loaded once per tab session
/// - **Page marker**: typed page context replacing an untyped global
///   marker; set by page containers on mount, cleared on unmount
/// - **Event bus**: cross-component coordination between siblings
#[derive(Clone)]
pub struct AppContext {
    /// Ordered project list from the content provider.
    pub projects: RwSignal<Vec<Project>>,
    /// About document from the content provider.
    pub about: RwSignal<Option<AboutInfo>>,
    /// True once the initial content load has settled (also on
    /// failure, so fallbacks can render instead of spinners).
    pub content_ready: RwSignal<bool>,
    /// Which page is mounted, for page-level styling state.
    pub page: RwSignal<Option<PageKind>>,
    /// Cross-component event bus.
    pub bus: EventBus,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            projects: RwSignal::new(Vec::new()),
            about: RwSignal::new(None),
            content_ready: RwSignal::new(false),
            page: RwSignal::new(None),
            bus: EventBus::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Load CMS content into the context.
///
/// Failures degrade to empty content with a console warning; the
/// page-level fallbacks (empty state, not-found) take over from there.
fn load_content(ctx: AppContext) {
    spawn_local(async move {
        match content::list_projects().await {
            Ok(projects) => ctx.projects.set(projects),
            Err(e) => {
                web_sys::console::warn_1(&format!("project list unavailable: {e}").into());
            }
        }
        match content::get_about_info().await {
            Ok(about) => ctx.about.set(Some(about)),
            Err(e) => {
                web_sys::console::warn_1(&format!("about document unavailable: {e}").into());
            }
        }
        ctx.content_ready.set(true);
    });
}

/// Background gradient reacting to the typed page marker: shown behind
/// the project slideshow, hidden on home and in the grid.
#[component]
fn PageBackdrop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page = ctx.page;

    let class = move || match page.get() {
        Some(PageKind::ProjectSlideshow) => format!("{} {}", css::backdrop, css::backdropVisible),
        _ => css::backdrop.to_string(),
    };

    view! { <div class=class aria-hidden="true"></div> }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext and PageTransitions
/// - Starts the content load
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx.clone());
    provide_context(ctx.bus.clone());
    provide_context(PageTransitions::new(ctx.bus.clone()));
    load_content(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #faf9f6;
                    color: #1a1a1a;
                    font-family: Helvetica, Arial, sans-serif;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="color: #6b6b6b; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #a33; font-size: 0.9rem; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #1a1a1a;
                            color: #faf9f6;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-size: 1rem;
                        "
                    >
                        "Reload page"
                    </button>
                </div>
            }
        >
            <PageBackdrop />
            <AppRouter />
        </ErrorBoundary>
    }
}
