//! Grouping key resolution
//!
//! Maps a program to the stable string identity used by the dedup and
//! shuffle transforms to recognize "the same show" or "the same
//! conceptual unit".

use std::collections::HashMap;

use airtime_core::types::{ContentSubtype, Program};

/// Resolve the grouping identity of a program
///
/// - episodes group per show (`show:`), falling back from show id to show
///   title to a shared `unknown` bucket
/// - tracks group per artist (`track:`) with the same fallback chain
/// - movies (and other content) all share the single `movie` bucket
/// - custom segments group per custom show (`custom:`)
/// - redirects and flex carry no grouping identity at all
pub fn grouping_key(program: &Program) -> Option<String> {
    match program {
        Program::Content(c) => match c.subtype {
            ContentSubtype::Episode => {
                let show = c
                    .show_id
                    .as_ref()
                    .map(|id| id.as_str().to_string())
                    .or_else(|| c.show_title.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                Some(format!("show:{show}"))
            }
            ContentSubtype::Track => {
                let artist = c
                    .artist_id
                    .as_ref()
                    .map(|id| id.as_str().to_string())
                    .or_else(|| c.artist_name.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                Some(format!("track:{artist}"))
            }
            ContentSubtype::Movie | ContentSubtype::Other => Some("movie".to_string()),
        },
        Program::Custom(c) => Some(format!("custom:{}", c.custom_show_id)),
        Program::Redirect(_) | Program::Flex(_) => None,
    }
}

/// Group programs by key, preserving first-encounter order of the groups
///
/// Programs without a grouping identity (redirect, flex) are skipped.
pub fn group_programs(programs: &[Program]) -> Vec<(String, Vec<Program>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Program>> = HashMap::new();

    for program in programs {
        if let Some(key) = grouping_key(program) {
            if !groups.contains_key(&key) {
                order.push(key.clone());
            }
            groups.entry(key).or_default().push(program.clone());
        }
    }

    order
        .into_iter()
        .map(|key| {
            let items = groups.remove(&key).unwrap_or_default();
            (key, items)
        })
        .collect()
}
