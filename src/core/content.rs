//! Content provider capability.
//!
//! The portfolio's content lives in a headless CMS that publishes two
//! JSON documents: the ordered project list and the about record. Both
//! are fetched with session caching, so in-app navigation never
//! refetches while a fresh tab sees fresh content.
//!
//! The lookup helpers are pure so the route-derived "current project"
//! stays a memoized derivation and is never stored alongside the list.

use crate::config::{CONTENT_BASE_URL, cache};
use crate::core::error::FetchError;
use crate::models::{AboutInfo, Project};
use crate::utils::fetch_json_cached;

/// Fetch the ordered project list.
pub async fn list_projects() -> Result<Vec<Project>, FetchError> {
    let url = format!("{CONTENT_BASE_URL}/projects.json");
    fetch_json_cached(&url, cache::PROJECTS_KEY).await
}

/// Fetch a single project by slug.
pub async fn get_project(slug: &str) -> Result<Option<Project>, FetchError> {
    let projects = list_projects().await?;
    Ok(find_by_slug(&projects, slug).cloned())
}

/// Fetch the about document.
pub async fn get_about_info() -> Result<AboutInfo, FetchError> {
    let url = format!("{CONTENT_BASE_URL}/about.json");
    fetch_json_cached(&url, cache::ABOUT_KEY).await
}

/// All project slugs, in display order.
pub fn list_slugs(projects: &[Project]) -> Vec<String> {
    projects.iter().map(|p| p.slug.clone()).collect()
}

/// Memoizable slug lookup.
pub fn find_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.slug == slug)
}

/// Position of a project in display order.
pub fn project_index(projects: &[Project], slug: &str) -> Option<usize> {
    projects.iter().position(|p| p.slug == slug)
}

/// Slug of the project after `current`, wrapping to the first.
pub fn next_slug<'a>(projects: &'a [Project], current: &str) -> Option<&'a str> {
    let index = project_index(projects, current)?;
    let next = (index + 1) % projects.len();
    Some(projects[next].slug.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str) -> Project {
        Project {
            id: format!("id-{slug}"),
            slug: slug.to_string(),
            title: slug.to_string(),
            location: "Barcelona".to_string(),
            year: "2025".to_string(),
            description: String::new(),
            media: Vec::new(),
            collaboration: None,
            client: None,
            date: None,
            formatted_number: "№ 001".to_string(),
        }
    }

    #[test]
    fn slug_lookup_and_ordering() {
        let projects = vec![project("a"), project("b"), project("c")];
        assert_eq!(find_by_slug(&projects, "b").map(|p| p.slug.as_str()), Some("b"));
        assert_eq!(find_by_slug(&projects, "missing"), None);
        assert_eq!(project_index(&projects, "c"), Some(2));
        assert_eq!(list_slugs(&projects), vec!["a", "b", "c"]);
    }

    #[test]
    fn next_slug_wraps_to_first() {
        let projects = vec![project("a"), project("b"), project("c")];
        assert_eq!(next_slug(&projects, "a"), Some("b"));
        assert_eq!(next_slug(&projects, "c"), Some("a"));
        assert_eq!(next_slug(&projects, "missing"), None);
    }
}
