//! Criteria-based removal and replacement

use serde::{Deserialize, Serialize};

use airtime_core::types::{ArtistId, ChannelId, ContentSubtype, CustomShowId, Program, ShowId};

/// Independent predicates for [`remove_programming`]
///
/// Each program is tested only against the predicate relevant to its
/// type; flex entries are governed solely by the `flex` flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemovalRequest {
    /// Remove episodes of these shows
    pub show_ids: Vec<ShowId>,

    /// Remove tracks of these artists
    pub artist_ids: Vec<ArtistId>,

    /// Remove all movies
    pub movies: bool,

    /// Remove redirects targeting these channels
    pub channel_ids: Vec<ChannelId>,

    /// Remove segments of these custom shows
    pub custom_show_ids: Vec<CustomShowId>,

    /// Remove all flex gaps
    pub flex: bool,

    /// Remove all specials (season-zero episodes)
    pub specials: bool,

    /// Convert matches into flex of the same duration instead of
    /// dropping them, preserving total lineup duration
    pub replace_with_flex: bool,
}

/// Remove (or flex-replace) every program matching the request
pub fn remove_programming(programs: &[Program], request: &RemovalRequest) -> Vec<Program> {
    let mut out = Vec::with_capacity(programs.len());
    for program in programs {
        if !matches_request(program, request) {
            out.push(program.clone());
        } else if request.replace_with_flex {
            out.push(Program::flex(program.duration_ms()));
        }
    }
    out
}

fn matches_request(program: &Program, request: &RemovalRequest) -> bool {
    match program {
        Program::Flex(_) => request.flex,
        Program::Redirect(r) => request.channel_ids.contains(&r.channel_id),
        Program::Custom(c) => request.custom_show_ids.contains(&c.custom_show_id),
        Program::Content(c) => match c.subtype {
            ContentSubtype::Movie => request.movies,
            ContentSubtype::Episode => {
                (request.specials && c.is_special())
                    || c
                        .show_id
                        .as_ref()
                        .is_some_and(|id| request.show_ids.contains(id))
            }
            ContentSubtype::Track => c
                .artist_id
                .as_ref()
                .is_some_and(|id| request.artist_ids.contains(id)),
            ContentSubtype::Other => false,
        },
    }
}
