//! Markdown rendering utilities.
//!
//! Project descriptions and the about bio are authored as markdown in
//! the CMS. Rendering goes through `ammonia` so CMS-side content can
//! never inject markup into the page.

use comrak::Options;

/// Convert markdown content to sanitized HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;

    let html = comrak::markdown_to_html(markdown, &options);
    ammonia::clean(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markup() {
        let html = markdown_to_html("A *quiet* morning in **Ladakh**.");
        assert!(html.contains("<em>quiet</em>"));
        assert!(html.contains("<strong>Ladakh</strong>"));
    }

    #[test]
    fn strips_script_injection() {
        let html = markdown_to_html("hello <script>alert(1)</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }
}
