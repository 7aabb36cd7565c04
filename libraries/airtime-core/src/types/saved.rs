/// Saved-lineup form
///
/// The external persistence contract: a lineup is saved either as
/// references by position into a deduplicated list of unique programs, or
/// as direct persisted references carrying an id, each alongside a
/// duration. Zero-duration entries never reach this form.
use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, ContentProgram, CustomShowId, ProgramId};

/// A lineup in its saved form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLineup {
    /// Deduplicated unique programs referenced by [`SavedLineupItem::Index`]
    pub programs: Vec<ContentProgram>,

    /// Ordered entries
    pub lineup: Vec<SavedLineupItem>,
}

/// One saved lineup entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SavedLineupItem {
    /// Reference by position into [`SavedLineup::programs`]
    #[serde(rename_all = "camelCase")]
    Index {
        /// Position in the unique-program list
        index: usize,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Persisted content referenced by database id
    #[serde(rename_all = "camelCase")]
    Content {
        /// Database id
        id: ProgramId,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Persisted custom-show segment
    #[serde(rename_all = "camelCase")]
    Custom {
        /// Owning custom show
        custom_show_id: CustomShowId,
        /// Program id within the custom show
        id: ProgramId,
        /// Position in the custom show's list
        index: u32,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Redirect, saved whole
    #[serde(rename_all = "camelCase")]
    Redirect {
        /// Target channel
        channel_id: ChannelId,
        /// Target channel name, when known
        channel_name: Option<String>,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Flex gap, saved whole
    #[serde(rename_all = "camelCase")]
    Flex {
        /// Duration in milliseconds
        duration_ms: u64,
    },
}

impl SavedLineupItem {
    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Index { duration_ms, .. }
            | Self::Content { duration_ms, .. }
            | Self::Custom { duration_ms, .. }
            | Self::Redirect { duration_ms, .. }
            | Self::Flex { duration_ms } => *duration_ms,
        }
    }
}
