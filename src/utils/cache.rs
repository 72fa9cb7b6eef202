//! Session caching for CMS documents.
//!
//! sessionStorage-backed, so content is fetched once per tab session
//! and refetched on a fresh visit. Caching is best-effort: a full or
//! unavailable storage degrades to plain refetching, never to an
//! error the user sees.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage (best-effort).
pub fn set<T: Serialize>(key: &str, data: &T) {
    let Some(storage) = dom::session_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(data) {
        let _ = storage.set_item(key, &json);
    }
}
