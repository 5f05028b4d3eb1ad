pub mod format;
pub mod menu;
