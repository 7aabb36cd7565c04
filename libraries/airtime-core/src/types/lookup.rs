/// Program lookup table
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{ContentProgram, ProgramId};

/// Caller-owned mapping from program lookup key to full content detail
///
/// Data arrival merges entries in; the engine never evicts. Lifecycle
/// (e.g. clearing on channel switch) is entirely the caller's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramLookup {
    programs: HashMap<ProgramId, ContentProgram>,
}

impl ProgramLookup {
    /// Create an empty lookup table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single entry
    pub fn insert(&mut self, id: ProgramId, program: ContentProgram) {
        self.programs.insert(id, program);
    }

    /// Merge arriving programs, keyed by their own lookup key
    ///
    /// Entries without any identity are skipped. Existing entries with the
    /// same key are overwritten by the newer detail; nothing else changes.
    pub fn merge(&mut self, programs: impl IntoIterator<Item = ContentProgram>) {
        for program in programs {
            if let Some(key) = program.lookup_key() {
                self.programs.insert(key, program);
            }
        }
    }

    /// Look up detail by key
    pub fn get(&self, id: &ProgramId) -> Option<&ContentProgram> {
        self.programs.get(id)
    }

    /// Whether the table holds a key
    pub fn contains(&self, id: &ProgramId) -> bool {
        self.programs.contains_key(id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
