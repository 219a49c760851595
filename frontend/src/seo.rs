//! Document metadata helpers.

use web_sys::{window, Document};

const SITE_NAME: &str = "Vălean & Asociații";

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Set the document title to `page — site`. Pass the page title already
/// localized.
pub fn set_page_title(page: &str) {
    if let Some(doc) = document() {
        if page.is_empty() {
            doc.set_title(SITE_NAME);
        } else {
            doc.set_title(&format!("{} — {}", page, SITE_NAME));
        }
    }
}
