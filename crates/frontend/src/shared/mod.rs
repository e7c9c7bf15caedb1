pub mod cart;
pub mod catalog_sink;
pub mod dom;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod scroll_effects;
pub mod smooth_scroll;
