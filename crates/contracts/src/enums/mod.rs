pub mod menu_category;

pub use menu_category::MenuCategory;
