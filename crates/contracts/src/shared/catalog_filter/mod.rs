//! Category filter and text search over the fixed menu catalog.
//!
//! The engine never keeps its own copy of the cards: it reads them through a
//! [`CatalogSnapshot`] and pushes every recomputed [`VisibilityProjection`]
//! into a [`VisibilitySink`]. Each operation re-derives the whole projection,
//! so repeated or rapid calls converge on the same result.

pub mod engine;
pub mod projection;
pub mod snapshot;
pub mod state;

pub use engine::CatalogFilter;
pub use projection::VisibilityProjection;
pub use snapshot::{CatalogEntry, CatalogSnapshot, RecordingSink, VisibilitySink};
pub use state::{normalize_query, CategoryFilter, FilterState, SearchPolicy};
