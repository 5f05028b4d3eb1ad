use dioxus::prelude::*;

/// Remote SVG icon rendered as a plain `img`. Decorative only, so the alt
/// text stays empty.
#[component]
pub fn Icon(src: &'static str, #[props(default = "w-6 h-6")] class: &'static str) -> Element {
    rsx! {
        img { src, alt: "", class }
    }
}
