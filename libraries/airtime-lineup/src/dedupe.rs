//! Duplicate elimination
//!
//! A single left-to-right pass with per-type identity rules. First
//! occurrence wins; output order is the input order of the survivors.

use std::collections::HashSet;

use airtime_core::types::Program;

/// Remove duplicate entries from a lineup
///
/// Rules, per entry type:
/// - flex is always removed (it carries no identity and is regenerable)
/// - redirects dedup by target channel
/// - custom segments dedup by the (custom show, program) pair
/// - persisted content with a database id dedups by that id
/// - unpersisted content dedups by its external-id set: an item is a
///   duplicate if *any* of its external ids was seen before, and keeping
///   an item records *all* of its external ids as seen
pub fn remove_duplicates(programs: &[Program]) -> Vec<Program> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(programs.len());

    for program in programs {
        match program {
            Program::Flex(_) => {}
            Program::Redirect(r) => {
                if seen.insert(format!("redirect|{}", r.channel_id)) {
                    out.push(program.clone());
                }
            }
            Program::Custom(c) => {
                if seen.insert(format!("custom|{}|{}", c.custom_show_id, c.id)) {
                    out.push(program.clone());
                }
            }
            Program::Content(c) => {
                if let (true, Some(id)) = (c.persisted, &c.id) {
                    if seen.insert(format!("content|{id}")) {
                        out.push(program.clone());
                    }
                } else {
                    let keys: Vec<String> = c
                        .external_ids
                        .iter()
                        .map(|ext| format!("external|{}", ext.key()))
                        .collect();
                    if keys.iter().any(|key| seen.contains(key)) {
                        continue;
                    }
                    for key in keys {
                        seen.insert(key);
                    }
                    out.push(program.clone());
                }
            }
        }
    }

    out
}
