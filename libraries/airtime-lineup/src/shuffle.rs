//! Shuffle transforms
//!
//! Pure random (Fisher-Yates) shuffle and the cyclic shuffle, which
//! randomizes overall order while each show's items keep advancing
//! through their own season/episode sequence.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use airtime_core::types::Program;

use crate::dedupe::remove_duplicates;
use crate::grouping::{group_programs, grouping_key};

/// Pure random shuffle using Fisher-Yates
///
/// Each entry has equal probability of appearing at any position.
pub fn random_shuffle(programs: &[Program]) -> Vec<Program> {
    let mut out = programs.to_vec();
    out.shuffle(&mut thread_rng());
    out
}

/// Sort key for a group's internal ordering
///
/// Episodes advance by (season, episode); custom segments by their list
/// index. Movies carry neither and keep their relative order (the sort is
/// stable).
pub(crate) fn group_member_key(program: &Program) -> (u32, u32) {
    match program {
        Program::Content(c) => (
            c.season_number.unwrap_or(0),
            c.episode_number.unwrap_or(0),
        ),
        Program::Custom(c) => (0, c.index),
        Program::Redirect(_) | Program::Flex(_) => (0, 0),
    }
}

/// Cyclic shuffle
///
/// Deduplicates, keeps content/custom entries, groups them, and emits in
/// a globally random order — but each emission takes the *next* item from
/// the owning group's rotating cursor (initialized to a random start), so
/// any one show's items appear in season/episode order, wrapping around.
/// Reruns of a show therefore cycle through its episodes instead of
/// repeating one.
pub fn cyclic_shuffle(programs: &[Program]) -> Vec<Program> {
    let candidates: Vec<Program> = remove_duplicates(programs)
        .into_iter()
        .filter(|p| matches!(p, Program::Content(_) | Program::Custom(_)))
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut rng = thread_rng();

    let mut groups: HashMap<String, Vec<Program>> = HashMap::new();
    for (key, mut items) in group_programs(&candidates) {
        items.sort_by_key(group_member_key);
        groups.insert(key, items);
    }

    let mut cursors: HashMap<String, usize> = groups
        .iter()
        .map(|(key, items)| (key.clone(), rng.gen_range(0..items.len())))
        .collect();

    // One emission per candidate, in globally shuffled order
    let mut emission: Vec<String> = candidates.iter().filter_map(grouping_key).collect();
    emission.shuffle(&mut rng);

    let mut out = Vec::with_capacity(emission.len());
    for key in emission {
        let Some(items) = groups.get(&key) else {
            continue;
        };
        let Some(cursor) = cursors.get_mut(&key) else {
            continue;
        };
        out.push(items[*cursor].clone());
        *cursor = (*cursor + 1) % items.len();
    }

    out
}
