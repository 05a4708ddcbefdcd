//! Catalogue core for crowd-sourced fossil find records.
//!
//! The crate wraps a hosted `shared_finds` table behind [`store::FindStore`]
//! and provides the pure functions the presentation layer consumes:
//! period/activity aggregation ([`stats`]), an approximate grid-reference
//! deriver ([`grid`]) and a BibTeX citation formatter ([`citation`]).

pub mod citation;
pub mod dates;
pub mod export;
pub mod grid;
pub mod record;
pub mod sample;
pub mod stats;
pub mod store;

pub use grid::{GridReference, derive_grid_reference};
pub use record::{FindRecord, Measurements};
pub use stats::{PeriodStat, compute_activity, compute_period_stats};
pub use store::{FindStore, StoreConfig};
