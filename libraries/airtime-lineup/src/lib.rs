//! Airtime - Lineup Engine
//!
//! Channel programming lineup store and transform algorithms.
//!
//! This crate provides:
//! - Lineup store with stable original-order indices and contiguous
//!   start-time offsets re-established after every mutation
//! - Program materialization (condensed-to-detailed join against the
//!   caller-owned lookup table)
//! - Sort transforms (alphabetical, episode, release date)
//! - Random, cyclic and block shuffle, with an LCM-based perfect-sync
//!   chunk planner
//! - Start-time padding to clock-aligned boundaries
//! - Duplicate elimination and criteria-based removal
//! - Flex interspersal and the saved-lineup round trip
//!
//! # Architecture
//!
//! `airtime-lineup` is completely transport-agnostic: every operation is
//! a synchronous pure function (or a method on the owned store) over an
//! in-memory sequence. No I/O, no locking, no subscriptions — the caller
//! applies a transform's output back through the store and owns when to
//! persist or observe the result.
//!
//! # Example
//!
//! ```rust
//! use airtime_core::types::{ContentProgram, ContentSubtype, Program};
//! use airtime_lineup::{sort_alphabetically, LineupStore, SortOrder};
//!
//! let mut store = LineupStore::new();
//! store.set_lineup(vec![
//!     Program::Content(ContentProgram::new(ContentSubtype::Movie, "Bravo", 60_000)),
//!     Program::Content(ContentProgram::new(ContentSubtype::Movie, "Alpha", 90_000)),
//! ]);
//!
//! let sorted = sort_alphabetically(&store.programs(), SortOrder::Asc);
//! store.set_lineup(sorted);
//!
//! assert_eq!(store.items()[0].program.title(), Some("Alpha"));
//! assert_eq!(store.items()[1].start_time_offset_ms, 90_000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod dedupe;
mod error;
mod grouping;
mod intersperse;
mod materialize;
mod padding;
mod persist;
mod removal;
mod shuffle;
mod sort;
mod store;
pub mod types;

// Public exports
pub use block::{
    block_shuffle, can_use_perfect_sync, lcm_all, BlockShuffleOptions, BlockShuffleResult,
    MovieSort,
};
pub use dedupe::remove_duplicates;
pub use error::{LineupError, Result};
pub use grouping::{group_programs, grouping_key};
pub use intersperse::{intersperse_flex, INTERSPERSE_FLEX_MS};
pub use materialize::materialize;
pub use padding::{pad_start_times, PaddedLineup, PaddingOptions, PADDING_THRESHOLD_MS};
pub use persist::{condense, expand};
pub use removal::{remove_programming, RemovalRequest};
pub use shuffle::{cyclic_shuffle, random_shuffle};
pub use sort::{sort_alphabetically, sort_by_episode, sort_by_release_date};
pub use store::LineupStore;
pub use types::{MaterializedProgram, ShuffleType, SortOrder};
