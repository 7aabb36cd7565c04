//! Saved-lineup round trip
//!
//! Converts between the engine's in-memory sequence and the external
//! saved form: unpersisted content referenced by position into a
//! deduplicated unique-program list, persisted content and custom
//! segments referenced directly by id, redirect/flex saved whole.

use std::collections::HashMap;

use tracing::debug;

use airtime_core::types::{
    ContentProgram, CustomProgram, FlexProgram, Program, ProgramLookup, RedirectProgram,
    SavedLineup, SavedLineupItem,
};

use crate::error::{LineupError, Result};

/// Produce the saved form of a lineup
///
/// Zero-duration entries are excluded up front; they would create
/// zero-width slots on playback.
pub fn condense(programs: &[Program]) -> SavedLineup {
    let mut unique: Vec<ContentProgram> = Vec::new();
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();
    let mut lineup = Vec::with_capacity(programs.len());

    for program in programs {
        if program.duration_ms() == 0 {
            continue;
        }
        match program {
            Program::Content(c) => {
                if let (true, Some(id)) = (c.persisted, &c.id) {
                    lineup.push(SavedLineupItem::Content {
                        id: id.clone(),
                        duration_ms: c.duration_ms,
                    });
                } else {
                    let key = unique_key(c);
                    let index = *slot_by_key.entry(key).or_insert_with(|| {
                        unique.push(c.clone());
                        unique.len() - 1
                    });
                    lineup.push(SavedLineupItem::Index {
                        index,
                        duration_ms: c.duration_ms,
                    });
                }
            }
            Program::Custom(c) => {
                lineup.push(SavedLineupItem::Custom {
                    custom_show_id: c.custom_show_id.clone(),
                    id: c.id.clone(),
                    index: c.index,
                    duration_ms: c.duration_ms,
                });
            }
            Program::Redirect(r) => {
                lineup.push(SavedLineupItem::Redirect {
                    channel_id: r.channel_id.clone(),
                    channel_name: r.channel_name.clone(),
                    duration_ms: r.duration_ms,
                });
            }
            Program::Flex(f) => {
                lineup.push(SavedLineupItem::Flex {
                    duration_ms: f.duration_ms,
                });
            }
        }
    }

    SavedLineup {
        programs: unique,
        lineup,
    }
}

fn unique_key(content: &ContentProgram) -> String {
    content
        .lookup_key()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| format!("title|{}", content.title))
}

/// Rebuild a lineup from its saved form
///
/// Index references resolve against the embedded unique-program list and
/// fail loudly when out of range — a saved lineup that cannot address its
/// own program list is corrupt, not eventually consistent. Persisted
/// content references join the caller's lookup table and are dropped when
/// still unresolved, like any other materialization miss.
pub fn expand(saved: &SavedLineup, lookup: &ProgramLookup) -> Result<Vec<Program>> {
    let mut out = Vec::with_capacity(saved.lineup.len());

    for item in &saved.lineup {
        match item {
            SavedLineupItem::Index { index, duration_ms } => {
                let Some(detail) = saved.programs.get(*index) else {
                    return Err(LineupError::InvalidReference {
                        index: *index,
                        len: saved.programs.len(),
                    });
                };
                let mut content = detail.clone();
                content.duration_ms = *duration_ms;
                out.push(Program::Content(content));
            }
            SavedLineupItem::Content { id, duration_ms } => match lookup.get(id) {
                Some(detail) => {
                    let mut content = detail.clone();
                    content.duration_ms = *duration_ms;
                    content.persisted = true;
                    out.push(Program::Content(content));
                }
                None => {
                    debug!(%id, "dropping unresolved saved content reference");
                }
            },
            SavedLineupItem::Custom {
                custom_show_id,
                id,
                index,
                duration_ms,
            } => {
                out.push(Program::Custom(CustomProgram {
                    custom_show_id: custom_show_id.clone(),
                    id: id.clone(),
                    index: *index,
                    duration_ms: *duration_ms,
                    persisted: true,
                    program: lookup.get(id).cloned().map(Box::new),
                }));
            }
            SavedLineupItem::Redirect {
                channel_id,
                channel_name,
                duration_ms,
            } => {
                out.push(Program::Redirect(RedirectProgram {
                    channel_id: channel_id.clone(),
                    channel_name: channel_name.clone(),
                    duration_ms: *duration_ms,
                    persisted: true,
                }));
            }
            SavedLineupItem::Flex { duration_ms } => {
                out.push(Program::Flex(FlexProgram {
                    duration_ms: *duration_ms,
                    persisted: true,
                }));
            }
        }
    }

    Ok(out)
}
