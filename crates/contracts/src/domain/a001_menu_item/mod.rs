pub mod aggregate;
pub mod catalog;

pub use aggregate::{MenuItem, MenuItemId};
pub use catalog::{CatalogError, MenuCatalog};
