/// Condensed program form
///
/// The persisted/transmitted shape of a lineup entry. Content and custom
/// entries store only an identifying key and a duration; the full detail
/// is joined back in from a [`ProgramLookup`](crate::types::ProgramLookup)
/// by the materializer. Redirect and flex entries need no lookup and are
/// stored whole.
use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, CustomShowId, Program, ProgramId};

/// Minimal persisted reference to a lineup entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CondensedProgram {
    /// Content referenced by lookup key
    #[serde(rename_all = "camelCase")]
    Content {
        /// Lookup key into the program table
        id: ProgramId,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Custom-show segment referenced by show and program id
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

    /// Redirect, stored in full
    #[serde(rename_all = "camelCase")]
    Redirect {
        /// Target channel
        channel_id: ChannelId,
        /// Target channel name, when known
        channel_name: Option<String>,
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Flex gap, stored in full
    #[serde(rename_all = "camelCase")]
    Flex {
        /// Duration in milliseconds
        duration_ms: u64,
    },
}

impl CondensedProgram {
    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Content { duration_ms, .. }
            | Self::Custom { duration_ms, .. }
            | Self::Redirect { duration_ms, .. }
            | Self::Flex { duration_ms } => *duration_ms,
        }
    }

    /// Condense a full program to its reference form
    ///
    /// Returns `None` for content that has no identity at all (neither a
    /// database id nor an external id) since nothing could ever join it
    /// back.
    pub fn from_program(program: &Program) -> Option<Self> {
        match program {
            Program::Content(c) => c.lookup_key().map(|id| Self::Content {
                id,
                duration_ms: c.duration_ms,
            }),
            Program::Custom(c) => Some(Self::Custom {
                custom_show_id: c.custom_show_id.clone(),
                id: c.id.clone(),
                index: c.index,
                duration_ms: c.duration_ms,
            }),
            Program::Redirect(r) => Some(Self::Redirect {
                channel_id: r.channel_id.clone(),
                channel_name: r.channel_name.clone(),
                duration_ms: r.duration_ms,
            }),
            Program::Flex(f) => Some(Self::Flex {
                duration_ms: f.duration_ms,
            }),
        }
    }
}
