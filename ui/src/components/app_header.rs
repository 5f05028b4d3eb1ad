use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{self, icons};
use crate::core::menu::MenuState;

/// Sticky site header: brand, desktop navigation, reservation CTA and the
/// hamburger that opens the mobile drawer.
///
/// The `Home` view owns the menu signal; this component is the only writer.
/// The drawer subtree is mounted only while the menu is open, so a closed
/// menu leaves no trace in the output.
#[component]
pub fn AppHeader(menu: Signal<MenuState>) -> Element {
    rsx! {
        header { class: "bg-white/80 backdrop-blur-lg sticky top-0 z-50 shadow-sm",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-20",
                    a { href: "#", class: "flex items-center space-x-3",
                        img {
                            src: content::LOGO_SRC,
                            alt: content::LOGO_ALT,
                            class: "h-12 w-auto",
                        }
                    }
                    nav { class: "hidden lg:flex items-center space-x-8",
                        for link in content::NAV_LINKS {
                            a {
                                key: "{link.href}",
                                href: link.href,
                                class: "text-slate-600 hover:text-emerald-700 transition-colors font-medium",
                                "{link.label}"
                            }
                        }
                    }
                    a {
                        href: "#kontakt",
                        class: "hidden lg:inline-flex items-center justify-center px-5 py-2.5 text-sm font-semibold text-white bg-emerald-700 rounded-lg hover:bg-emerald-800 focus:outline-none focus:ring-4 focus:ring-emerald-300 transition-all",
                        "Rezervovat"
                    }
                    div { class: "lg:hidden",
                        button {
                            class: "p-2 rounded-md text-slate-600 hover:bg-slate-100",
                            onclick: move |_| menu.write().open(),
                            Icon { src: icons::MENU }
                        }
                    }
                }
            }
        }

        if menu().is_open() {
            MobileMenu { menu }
        }
    }
}

/// Full-screen navigation drawer. Every control in here closes the menu, so
/// it can never stay open once the user picks a destination.
#[component]
fn MobileMenu(menu: Signal<MenuState>) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-50 lg:hidden", role: "dialog", aria_modal: "true",
            // Backdrop blocks interaction with the page and closes on click.
            div {
                class: "fixed inset-0 bg-black/30",
                aria_hidden: "true",
                onclick: move |_| menu.write().close(),
            }
            div { class: "fixed top-0 right-0 h-full w-full max-w-sm bg-white p-6",
                div { class: "flex items-center justify-between mb-8",
                    a { href: "#", onclick: move |_| menu.write().close(),
                        img {
                            src: content::LOGO_SRC,
                            alt: content::LOGO_ALT,
                            class: "h-10 w-auto",
                        }
                    }
                    button {
                        class: "p-2 rounded-md text-slate-600 hover:bg-slate-100",
                        onclick: move |_| menu.write().close(),
                        Icon { src: icons::CLOSE }
                    }
                }
                nav { class: "flex flex-col space-y-4",
                    for link in content::NAV_LINKS {
                        a {
                            key: "{link.href}",
                            href: link.href,
                            class: "block px-4 py-2 rounded-lg text-lg font-medium text-slate-700 hover:bg-emerald-50 hover:text-emerald-700 transition-colors",
                            onclick: move |_| menu.write().close(),
                            "{link.label}"
                        }
                    }
                    a {
                        href: "#kontakt",
                        class: "mt-6 block w-full text-center px-5 py-3 text-lg font-semibold text-white bg-emerald-700 rounded-lg hover:bg-emerald-800 transition-all",
                        onclick: move |_| menu.write().close(),
                        "Rezervovat pobyt"
                    }
                }
            }
        }
    }
}
