use dioxus::prelude::*;

use crate::content::{FOOTER_CREDIT_LABEL, FOOTER_CREDIT_PREFIX, FOOTER_CREDIT_URL, FOOTER_RIGHTS};

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "bg-slate-800 text-slate-300",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div { class: "sm:flex sm:items-center sm:justify-between",
                    p { class: "text-center text-sm text-slate-400",
                        "© {year} {FOOTER_RIGHTS}"
                    }
                    p { class: "mt-4 text-center text-sm text-slate-400 sm:mt-0",
                        "{FOOTER_CREDIT_PREFIX} "
                        a {
                            href: FOOTER_CREDIT_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "font-medium text-amber-400 hover:text-amber-300",
                            "{FOOTER_CREDIT_LABEL}"
                        }
                    }
                }
            }
        }
    }
}
