//! Content records delivered by the headless CMS.
//!
//! These mirror the published document shapes one-to-one so the fetch
//! layer can deserialize responses directly. All fields are plain data;
//! derived values (aspect ratio, ordinal captions) are computed on
//! demand rather than stored twice.

use serde::{Deserialize, Serialize};

/// Discriminator for gallery media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single gallery item (photograph or video loop).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub kind: MediaKind,
    pub url: String,
    /// Alt text for images, display title for videos.
    pub alt: String,
    pub width: u32,
    pub height: u32,
    /// Inline low-res placeholder shown while the full asset loads.
    #[serde(default)]
    pub blur_data_url: Option<String>,
    /// Grid/ghost thumbnail for images, poster frame for videos.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl MediaItem {
    /// Width-over-height ratio used by the placement randomizer.
    ///
    /// Falls back to 3:2 (the portfolio's dominant format) when the CMS
    /// record carries degenerate dimensions.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.5;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// A portfolio project: one gallery plus its descriptive metadata.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub location: String,
    pub year: String,
    /// Markdown, rendered by [`crate::utils::markdown_to_html`].
    pub description: String,
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub collaboration: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    /// Human-facing ordinal label authored in the CMS (e.g. "№ 001").
    pub formatted_number: String,
}

/// A labelled contact link (email, phone, social handle).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactEntry {
    pub display: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactBlock {
    pub email: ContactEntry,
    pub phone: ContactEntry,
    pub instagram: ContactEntry,
}

/// The "about" document: bio plus credit lists.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AboutInfo {
    pub name: String,
    /// Markdown, rendered by [`crate::utils::markdown_to_html`].
    pub bio: String,
    pub contact: ContactBlock,
    pub collaborators: Vec<String>,
    pub publications: Vec<String>,
}

/// Zero-padded `current/total` caption for slideshow counters.
pub fn slide_counter(active: usize, total: usize) -> String {
    format!("{:02}/{:02}", active + 1, total)
}

/// Three-digit ordinal used under grid thumbnails.
pub fn grid_ordinal(index: usize) -> String {
    format!("{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_item_tagged_decoding() {
        let json = r#"{
            "id": "m-1",
            "kind": "video",
            "url": "https://cdn.example.com/loop.mp4",
            "alt": "Tandoor bakery",
            "width": 1920,
            "height": 1080,
            "thumbnailUrl": "https://cdn.example.com/poster.jpg"
        }"#;
        let item: MediaItem = serde_json::from_str(json).expect("valid media item");
        assert!(item.is_video());
        assert_eq!(item.thumbnail_url.as_deref(), Some("https://cdn.example.com/poster.jpg"));
        assert_eq!(item.blur_data_url, None);
    }

    #[test]
    fn aspect_ratio_guards_zero_height() {
        let item = MediaItem {
            id: "m-2".into(),
            kind: MediaKind::Image,
            url: String::new(),
            alt: String::new(),
            width: 1200,
            height: 0,
            blur_data_url: None,
            thumbnail_url: None,
        };
        assert_eq!(item.aspect_ratio(), 1.5);
    }

    #[test]
    fn counters_are_zero_padded() {
        assert_eq!(slide_counter(0, 17), "01/17");
        assert_eq!(slide_counter(11, 12), "12/12");
        assert_eq!(grid_ordinal(0), "001");
        assert_eq!(grid_ordinal(99), "100");
    }
}
