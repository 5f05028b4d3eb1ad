use dioxus::prelude::*;

use crate::content::{GalleryImage, GALLERY_COLUMNS, GALLERY_LEDE, GALLERY_TITLE};

#[component]
pub fn Gallery() -> Element {
    rsx! {
        section { class: "py-16 sm:py-24 bg-white",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center mb-12",
                    h2 { class: "text-3xl sm:text-4xl font-extrabold text-slate-900 tracking-tight",
                        "{GALLERY_TITLE}"
                    }
                    p { class: "mt-4 max-w-2xl mx-auto text-lg text-slate-600", "{GALLERY_LEDE}" }
                }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for (index, column) in GALLERY_COLUMNS.iter().enumerate() {
                        div { key: "{index}", class: "grid gap-4",
                            for shot in column.iter() {
                                GalleryShot { key: "{shot.src}", shot: *shot }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryShot(shot: GalleryImage) -> Element {
    let aspect = shot.aspect.class();
    rsx! {
        img {
            src: shot.src,
            alt: shot.alt,
            class: "h-auto max-w-full rounded-lg object-cover {aspect}",
        }
    }
}
