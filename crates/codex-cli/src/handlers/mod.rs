pub mod layout;
pub mod summary;
pub mod tui;
