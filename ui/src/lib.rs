//! Shared UI crate for the Hotel TTC site. Content, behaviour and views live here.

pub mod boot;
pub mod content;
pub mod core;
pub mod sections;
pub mod views;

pub mod components {
    // Sticky site header with the mobile navigation drawer (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;

    // Remote SVG icon wrapper (components/icon.rs)
    pub mod icon;
    pub use icon::Icon;
}
