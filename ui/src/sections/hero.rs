use dioxus::prelude::*;

use crate::content::HERO;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "relative bg-slate-900 text-white",
            div { class: "absolute inset-0",
                img {
                    src: HERO.image,
                    alt: HERO.image_alt,
                    class: "w-full h-full object-cover",
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-slate-900/70 via-slate-900/30 to-transparent" }
            }
            div { class: "relative container mx-auto px-4 sm:px-6 lg:px-8 py-32 md:py-48 text-center",
                h1 { class: "text-4xl md:text-6xl font-extrabold tracking-tight text-shadow-lg",
                    "{HERO.heading}"
                }
                p { class: "mt-6 max-w-3xl mx-auto text-lg md:text-xl text-slate-200 text-shadow",
                    "{HERO.lede}"
                }
                div { class: "mt-10 flex flex-col sm:flex-row gap-4 justify-center",
                    a {
                        href: HERO.primary_cta.href,
                        class: "inline-flex items-center justify-center px-8 py-3 text-lg font-semibold text-slate-900 bg-amber-400 rounded-lg hover:bg-amber-300 transition-all",
                        "{HERO.primary_cta.label}"
                    }
                    a {
                        href: HERO.secondary_cta.href,
                        class: "inline-flex items-center justify-center px-8 py-3 text-lg font-semibold text-white bg-white/20 backdrop-blur-sm rounded-lg hover:bg-white/30 transition-all",
                        "{HERO.secondary_cta.label}"
                    }
                }
            }
        }
    }
}
