//! SEO metadata extraction from fetched HTML.
//!
//! Parsing is best-effort: html5ever recovers from any malformed markup, and a
//! field that cannot be found is simply left absent.

use std::sync::LazyLock;

use page_analyzer_core::PageMetadata;
use scraper::{ElementRef, Html, Selector};

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("valid h1 selector"));
static META: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name]").expect("valid meta selector"));

/// Extract title, first `<h1>` and meta description from `html`.
///
/// The returned `status_code` is always `None`; the caller attaches the
/// status of the response the HTML came from.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = first_text(&document, &TITLE);
    if title.is_none() {
        tracing::debug!("the <title> tag was not found");
    }
    let h1 = first_text(&document, &H1);
    if h1.is_none() {
        tracing::debug!("the <h1> tag was not found");
    }
    let description = meta_description(&document);
    if description.is_none() {
        tracing::debug!("the <meta name=description> tag was not found");
    }

    PageMetadata { status_code: None, title, h1, description }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().and_then(|element| non_empty(&element_text(element)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn meta_description(document: &Html) -> Option<String> {
    let meta = document.select(&META).find(|element| {
        element
            .value()
            .attr("name")
            .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
    })?;
    meta.value().attr("content").and_then(non_empty)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
