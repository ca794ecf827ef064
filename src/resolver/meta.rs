use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).expect("static selector"));
static TWITTER_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="twitter:image"]"#).expect("static selector"));
static IMAGE_SRC_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"link[rel="image_src"]"#).expect("static selector"));

/// Read the page's declared thumbnail reference from `html`.
///
/// Prefers `og:image`, then `twitter:image`, then `link[rel=image_src]`.
/// Whitespace-only values count as absent.
pub fn extract_meta_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    attr_of(&document, &OG_IMAGE, "content")
        .or_else(|| attr_of(&document, &TWITTER_IMAGE, "content"))
        .or_else(|| attr_of(&document, &IMAGE_SRC_LINK, "href"))
}

fn attr_of(doc: &Html, selector: &Selector, attr: &str) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
