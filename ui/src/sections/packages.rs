use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{icons, Package, PACKAGES, PACKAGES_FOOTNOTE, PACKAGES_INTRO};
use crate::core::format::format_price_czk;

#[component]
pub fn Packages() -> Element {
    rsx! {
        section { id: "balicky", class: "py-16 sm:py-24 bg-slate-50",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center",
                    h2 { class: "text-base font-semibold text-emerald-700 tracking-wider uppercase",
                        "{PACKAGES_INTRO.eyebrow}"
                    }
                    p { class: "mt-2 text-3xl sm:text-4xl font-extrabold text-slate-900 tracking-tight",
                        "{PACKAGES_INTRO.title}"
                    }
                    p { class: "mt-4 max-w-2xl mx-auto text-lg text-slate-600",
                        "{PACKAGES_INTRO.lede}"
                    }
                }
                div { class: "mt-12 grid gap-8 md:grid-cols-2 lg:grid-cols-3",
                    for package in PACKAGES {
                        PackageCard { key: "{package.name}", package: *package }
                    }
                }
                div { class: "text-center mt-8",
                    p { class: "text-sm text-slate-500", "{PACKAGES_FOOTNOTE}" }
                }
            }
        }
    }
}

#[component]
fn PackageCard(package: Package) -> Element {
    // The badged tier gets a highlight ring and the ribbon.
    let card_class = if package.badge.is_some() {
        "bg-white rounded-2xl shadow-lg p-8 flex flex-col ring-2 ring-emerald-600 relative"
    } else {
        "bg-white rounded-2xl shadow-lg p-8 flex flex-col"
    };
    let price = format_price_czk(package.price_czk);

    rsx! {
        div { class: card_class,
            if let Some(badge) = package.badge {
                div { class: "absolute top-0 -translate-y-1/2 left-1/2 -translate-x-1/2",
                    span { class: "inline-flex items-center px-4 py-1 rounded-full text-sm font-semibold text-white bg-emerald-600",
                        "{badge}"
                    }
                }
            }
            h3 { class: "text-2xl font-bold text-slate-900", "{package.name}" }
            p { class: "mt-2 text-slate-600", "{package.tagline}" }
            ul { class: "mt-6 space-y-3 text-slate-600 flex-grow",
                for feature in package.features {
                    li { key: "{feature}", class: "flex items-start",
                        Icon {
                            src: icons::CHECK,
                            class: "w-5 h-5 text-emerald-600 mr-2 mt-1 flex-shrink-0",
                        }
                        span { "{feature}" }
                    }
                }
            }
            div { class: "mt-8 pt-6 border-t border-slate-200",
                p { class: "text-4xl font-extrabold text-slate-900", "{price}" }
                p { class: "text-slate-500", "{package.price_note}" }
            }
        }
    }
}
