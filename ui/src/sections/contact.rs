use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{ContactChannel, CONTACT, HOURS_TITLE, OPENING_HOURS};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "kontakt", class: "py-16 sm:py-24 bg-white",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "text-center",
                    h2 { class: "text-3xl sm:text-4xl font-extrabold text-slate-900 tracking-tight",
                        "{CONTACT.title}"
                    }
                    p { class: "mt-4 max-w-2xl mx-auto text-lg text-slate-600", "{CONTACT.lede}" }
                }
                div { class: "mt-12 bg-slate-50 rounded-2xl p-8 lg:p-12 lg:grid lg:grid-cols-3 lg:gap-8",
                    div { class: "lg:col-span-1",
                        h3 { class: "text-2xl font-bold text-slate-900", "{CONTACT.hotel_name}" }
                        p { class: "mt-2 text-slate-600", "{CONTACT.operator}" }
                        div { class: "mt-6 space-y-4 text-slate-700",
                            for channel in CONTACT.channels {
                                ContactRow { key: "{channel.label}", channel: *channel }
                            }
                        }
                    }
                    div { class: "mt-10 lg:mt-0 lg:col-span-2",
                        h3 { class: "text-2xl font-bold text-slate-900", "{HOURS_TITLE}" }
                        div { class: "mt-6 grid sm:grid-cols-2 gap-6 text-left",
                            for entry in OPENING_HOURS {
                                div { key: "{entry.facility}",
                                    h4 { class: "text-lg font-semibold text-slate-800",
                                        "{entry.facility}"
                                    }
                                    p { class: "text-slate-600", "{entry.hours}" }
                                    if let Some(note) = entry.note {
                                        p { class: "text-sm text-slate-500", "{note}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactRow(channel: ContactChannel) -> Element {
    // External links leave the page in a new tab; tel:/mailto: stay in place.
    let external = channel.href.is_some_and(|href| href.starts_with("https://"));

    rsx! {
        p { class: "flex items-center",
            Icon {
                src: channel.icon,
                class: "flex-shrink-0 w-6 h-6 text-emerald-700 mr-3",
            }
            if let Some(href) = channel.href {
                a {
                    href,
                    class: "hover:text-emerald-700",
                    target: if external { "_blank" },
                    rel: if external { "noopener noreferrer" },
                    "{channel.label}"
                }
            } else {
                span { "{channel.label}" }
            }
            if let Some(note) = channel.note {
                span { class: "ml-1", "{note}" }
            }
        }
    }
}
