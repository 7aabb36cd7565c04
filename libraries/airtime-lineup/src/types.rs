//! Core types for lineup management

use serde::{Deserialize, Serialize};

use airtime_core::types::Program;

/// A program annotated with its engine-computed lineup position data
///
/// `original_index` is assigned when the item enters the lineup and stays
/// stable across swap-style reorders, which makes it usable as a drag/move
/// correlation key. `start_time_offset_ms` is the cumulative duration of
/// every preceding entry in the current ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterializedProgram {
    /// Position assigned when the item entered the lineup
    pub original_index: usize,

    /// Cumulative duration of all preceding entries, in milliseconds
    pub start_time_offset_ms: u64,

    /// The program itself
    pub program: Program,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,

    /// Descending
    Desc,
}

/// How block shuffle arranges each group internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleType {
    /// Deterministic ordering per the sort options
    Fixed,

    /// Randomize candidates before grouping
    Random,
}
