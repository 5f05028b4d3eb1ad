//! Page sections in document order. Each component is a pure function of
//! the content consts in [`crate::content`].

mod contact;
mod footer;
mod gallery;
mod hero;
mod packages;
mod rooms;
mod services;

pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use packages::Packages;
pub use rooms::Rooms;
pub use services::Services;
