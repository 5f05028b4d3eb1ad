use dioxus::prelude::*;

use crate::boot;
use crate::components::AppHeader;
use crate::core::menu::MenuState;
use crate::sections::{Contact, Footer, Gallery, Hero, Packages, Rooms, Services};

/// The whole site is this one view: header (with the drawer state), the
/// anchored sections in order, and the footer.
#[component]
pub fn Home() -> Element {
    let menu = use_signal(MenuState::default);

    // Reads no reactive state, so Dioxus runs it once per mounted instance:
    // later menu writes re-render the header but never repeat the boot work.
    use_effect(|| boot::install());

    rsx! {
        div { class: "bg-slate-50 text-slate-800 font-sans",
            AppHeader { menu }
            main {
                Hero {}
                Services {}
                Rooms {}
                Gallery {}
                Packages {}
                Contact {}
            }
            Footer {}
        }
    }
}
