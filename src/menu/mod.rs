pub mod handlers;
mod main_menu;

pub use handlers::{import_downloads, index_events};
pub use main_menu::show_main_menu;
