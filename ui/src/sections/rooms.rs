use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{icons, ROOMS};

#[component]
pub fn Rooms() -> Element {
    rsx! {
        section { id: "ubytovani", class: "py-16 sm:py-24 bg-slate-50",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "lg:grid lg:grid-cols-2 lg:gap-16 lg:items-center",
                    div {
                        h2 { class: "text-base font-semibold text-emerald-700 tracking-wider uppercase",
                            "{ROOMS.intro.eyebrow}"
                        }
                        p { class: "mt-2 text-3xl sm:text-4xl font-extrabold text-slate-900 tracking-tight",
                            "{ROOMS.intro.title}"
                        }
                        p { class: "mt-4 text-lg text-slate-600", "{ROOMS.intro.lede}" }
                        dl { class: "mt-8 space-y-6",
                            for feature in ROOMS.features {
                                div { key: "{feature}", class: "flex",
                                    Icon {
                                        src: icons::CHECK_CIRCLE,
                                        class: "flex-shrink-0 w-6 h-6 text-emerald-600",
                                    }
                                    dd { class: "ml-3 text-slate-600", "{feature}" }
                                }
                            }
                        }
                    }
                    div { class: "mt-10 lg:mt-0",
                        img {
                            src: ROOMS.image,
                            alt: ROOMS.image_alt,
                            class: "rounded-2xl shadow-xl",
                        }
                    }
                }
            }
        }
    }
}
