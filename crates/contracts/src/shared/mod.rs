pub mod cart;
pub mod catalog_filter;
pub mod config;
pub mod hours;
pub mod nav;
pub mod notification;
pub mod scroll;
pub mod video;
