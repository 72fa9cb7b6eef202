//! Hash-based routing for static-host-friendly navigation.

/// Application routes for hash-based navigation.
/// URL format: `#/` (home) or `#/projects/{slug}`, optionally carrying
/// the transient `?intro` flag that arms the presentation sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Home slideshow: `#/` or empty hash.
    Home,
    /// A single project gallery: `#/projects/{slug}`.
    Project {
        slug: String,
        /// One-shot presentation flag (`?intro`), stripped in place
        /// once the intro sequence has run.
        intro: bool,
    },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    ///
    /// Unrecognized hashes fall back to [`AppRoute::Home`]; a missing
    /// project is detected later against the loaded content, not here.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let path = path.trim_end_matches('/');

        match path.strip_prefix("projects/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => Self::Project {
                slug: slug.to_string(),
                intro: query.is_some_and(has_intro_flag),
            },
            _ => Self::Home,
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Project { slug, intro: false } => format!("#/projects/{slug}"),
            Self::Project { slug, intro: true } => format!("#/projects/{slug}?intro"),
        }
    }

    /// The project slug, when this route points at a project.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Project { slug, .. } => Some(slug),
            Self::Home => None,
        }
    }

    pub fn intro_requested(&self) -> bool {
        matches!(self, Self::Project { intro: true, .. })
    }

    /// The same route with the intro flag cleared.
    pub fn without_intro(&self) -> Self {
        match self {
            Self::Project { slug, .. } => Self::Project {
                slug: slug.clone(),
                intro: false,
            },
            Self::Home => Self::Home,
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to this route (adds a history entry).
    ///
    /// Goes through `location.hash` rather than `pushState` so the
    /// router's `hashchange` listener observes programmatic
    /// navigations the same way it observes back/forward buttons.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Replace the browser URL in place (no history entry, no
    /// navigation). Used to strip the transient intro flag.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let hash = self.to_hash();
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&hash));
        }
    }
}

fn has_intro_flag(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair == "intro" || pair.starts_with("intro="))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_variants() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        // Unknown paths fall back to home rather than erroring.
        assert_eq!(AppRoute::from_hash("#/unknown"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/projects/"), AppRoute::Home);
    }

    #[test]
    fn parses_project_routes() {
        assert_eq!(
            AppRoute::from_hash("#/projects/ladakhi-bakers"),
            AppRoute::Project {
                slug: "ladakhi-bakers".to_string(),
                intro: false,
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/projects/morocco/"),
            AppRoute::Project {
                slug: "morocco".to_string(),
                intro: false,
            }
        );
    }

    #[test]
    fn parses_intro_flag() {
        let route = AppRoute::from_hash("#/projects/varanasi?intro");
        assert!(route.intro_requested());
        assert_eq!(route.slug(), Some("varanasi"));

        assert!(AppRoute::from_hash("#/projects/varanasi?intro=1").intro_requested());
        assert!(!AppRoute::from_hash("#/projects/varanasi?introx").intro_requested());
    }

    #[test]
    fn round_trips_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        let route = AppRoute::Project {
            slug: "366-miralls".to_string(),
            intro: true,
        };
        assert_eq!(route.to_hash(), "#/projects/366-miralls?intro");
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn without_intro_strips_only_the_flag() {
        let route = AppRoute::from_hash("#/projects/varanasi?intro");
        assert_eq!(
            route.without_intro(),
            AppRoute::Project {
                slug: "varanasi".to_string(),
                intro: false,
            }
        );
        assert_eq!(AppRoute::Home.without_intro(), AppRoute::Home);
    }
}
