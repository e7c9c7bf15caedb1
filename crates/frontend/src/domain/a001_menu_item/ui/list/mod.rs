pub mod state;
pub mod widget;

pub use widget::MenuSection;

/// DOM id of the menu search box (Ctrl+K focuses it)
pub const SEARCH_INPUT_ID: &str = "searchInput";
