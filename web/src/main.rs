use dioxus::prelude::*;

use ui::views::Home;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global stylesheet; everything else the page needs ships inside `ui`.
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Home {}
    }
}
