use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{ServiceCard, SERVICES_INTRO, SERVICE_CARDS};

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "sluzby", class: "py-16 sm:py-24 bg-white",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center",
                    h2 { class: "text-base font-semibold text-emerald-700 tracking-wider uppercase",
                        "{SERVICES_INTRO.eyebrow}"
                    }
                    p { class: "mt-2 text-3xl sm:text-4xl font-extrabold text-slate-900 tracking-tight",
                        "{SERVICES_INTRO.title}"
                    }
                    p { class: "mt-4 max-w-2xl mx-auto text-lg text-slate-600",
                        "{SERVICES_INTRO.lede}"
                    }
                }
                div { class: "mt-12 grid gap-8 md:grid-cols-2 lg:grid-cols-4",
                    for card in SERVICE_CARDS {
                        ServiceTile { key: "{card.title}", card: *card }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceTile(card: ServiceCard) -> Element {
    rsx! {
        div { class: "flex flex-col items-center text-center p-6 border border-slate-200 rounded-xl",
            div { class: "flex-shrink-0 flex items-center justify-center h-12 w-12 rounded-lg bg-amber-400 text-white",
                Icon { src: card.icon, class: "w-7 h-7" }
            }
            h3 { class: "mt-5 text-xl font-semibold text-slate-900", "{card.title}" }
            p { class: "mt-2 text-base text-slate-600", "{card.body}" }
        }
    }
}
