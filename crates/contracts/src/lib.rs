//! Shared domain layer for the Taste From The Greens site.
//!
//! Everything here is renderer-independent: the frontend feeds browser events in
//! and renders whatever these types project back out.

pub mod domain;
pub mod enums;
pub mod shared;
