//! One-shot page initialisation: browser-tab title and a generated favicon.
//!
//! `install` runs from a mount effect in the `Home` view, once per page
//! instance. Nothing here is on a correctness-critical path: when the
//! document (or its head) is unavailable every step bails out silently and
//! the page renders without the cosmetic touches.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use once_cell::sync::Lazy;

pub const PAGE_TITLE: &str = "Hotel TTC Vrchlabí | Ubytování, Restaurace & Wellness";

const FAVICON_BACKGROUND: &str = "#2d572c";
const FAVICON_FOREGROUND: &str = "#f7c427";
const FAVICON_WORDMARK: &str = "TTC";

/// Rounded-square badge with the hotel wordmark, synthesised at runtime so
/// the site needs no icon file on the asset host.
pub fn favicon_svg() -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">"#,
            r#"<rect width="100" height="100" rx="20" fill="{bg}"></rect>"#,
            r#"<text x="50%" y="50%" dominant-baseline="central" text-anchor="middle" "#,
            r#"font-size="60" font-weight="bold" fill="{fg}">{mark}</text>"#,
            r#"</svg>"#
        ),
        bg = FAVICON_BACKGROUND,
        fg = FAVICON_FOREGROUND,
        mark = FAVICON_WORDMARK,
    )
}

static FAVICON_DATA_URI: Lazy<String> =
    Lazy::new(|| format!("data:image/svg+xml;base64,{}", BASE64.encode(favicon_svg())));

pub fn favicon_data_uri() -> &'static str {
    &FAVICON_DATA_URI
}

/// Sets the document title and installs the favicon, reusing an existing
/// `link[rel~='icon']` element when one is present. Skips silently when the
/// environment has no document head.
#[cfg(target_arch = "wasm32")]
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(PAGE_TITLE);

    let Some(head) = document.head() else {
        return;
    };
    let link = match document.query_selector("link[rel~='icon']") {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("link") else {
                return;
            };
            let _ = created.set_attribute("rel", "icon");
            if head.append_child(&created).is_err() {
                return;
            }
            created
        }
    };
    let _ = link.set_attribute("href", favicon_data_uri());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_names_the_hotel() {
        assert!(PAGE_TITLE.contains("Hotel TTC Vrchlabí"));
    }

    #[test]
    fn favicon_uri_is_base64_svg() {
        let uri = favicon_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        // Lazy caching hands back the same allocation every time.
        assert!(std::ptr::eq(uri, favicon_data_uri()));
    }

    #[test]
    fn favicon_embeds_the_wordmark() {
        let encoded = favicon_data_uri()
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(svg, favicon_svg());
        assert!(svg.contains(">TTC</text>"));
        assert!(svg.contains(r#"rx="20""#));
        assert!(svg.contains(r##"fill="#2d572c""##));
        assert!(svg.contains(r##"fill="#f7c427""##));
    }
}
