//! Lineup store
//!
//! Owns the authoritative ordered sequence and its offset/index
//! annotations. Every mutation recomputes start-time offsets in O(n)
//! before returning; a mutation is never observable half-applied.

use tracing::warn;

use airtime_core::types::Program;

use crate::types::MaterializedProgram;

/// The authoritative ordered program sequence for one edited entity
/// (channel, custom show, or filler list)
///
/// Invariants re-established after every mutation:
/// - `items[0].start_time_offset_ms == 0`
/// - `items[i + 1].start_time_offset_ms ==
///    items[i].start_time_offset_ms + items[i].program.duration_ms()`
///
/// Out-of-range indices make the operation a no-op (logged, not raised):
/// the editing surface treats a stale index as a stale view, not a fault.
#[derive(Debug, Clone, Default)]
pub struct LineupStore {
    items: Vec<MaterializedProgram>,

    /// Snapshot taken at the most recent `set_lineup`, for reset
    original: Vec<MaterializedProgram>,

    /// Whether in-progress edits diverge from the loaded snapshot
    dirty: bool,
}

impl LineupStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire sequence
    ///
    /// Items are annotated with `original_index = position` and offsets
    /// recomputed from zero. The new sequence also becomes the snapshot
    /// that [`reset_to_original`](Self::reset_to_original) restores.
    pub fn set_lineup(&mut self, programs: Vec<Program>) -> &[MaterializedProgram] {
        self.items = programs
            .into_iter()
            .enumerate()
            .map(|(position, program)| MaterializedProgram {
                original_index: position,
                start_time_offset_ms: 0,
                program,
            })
            .collect();
        self.recompute_offsets();
        self.original = self.items.clone();
        self.dirty = false;
        &self.items
    }

    /// Append programs to the end of the sequence
    ///
    /// Original indices continue from the current length; offsets continue
    /// from the last entry (or zero when empty). `dirty` says whether the
    /// appended items represent an unsaved edit.
    pub fn append(&mut self, programs: Vec<Program>, dirty: bool) {
        let start = self.items.len();
        self.items
            .extend(
                programs
                    .into_iter()
                    .enumerate()
                    .map(|(i, program)| MaterializedProgram {
                        original_index: start + i,
                        start_time_offset_ms: 0,
                        program,
                    }),
            );
        self.recompute_offsets();
        if dirty {
            self.dirty = true;
        }
    }

    /// Replace the entry at `index`
    ///
    /// Every entry at or after `index` is removed and re-appended, the
    /// replacement first and the previously-existing tail after it. This
    /// recomputes every subsequent offset wholesale; a duration change at
    /// `index` shifts every later entry anyway.
    pub fn replace_at(&mut self, program: Program, index: usize) {
        if index >= self.items.len() {
            warn!(index, len = self.items.len(), "replace_at out of range");
            return;
        }
        let tail = self.items.split_off(index);
        let mut replacements = vec![program];
        replacements.extend(tail.into_iter().skip(1).map(|m| m.program));
        self.append(replacements, true);
    }

    /// Move the entry whose `original_index` matches to `to_position`
    ///
    /// Performs a direct two-element swap between the item's current
    /// position and `to_position`, not an insert-shift. Original indices
    /// travel with their items, so the same key keeps addressing the same
    /// entry across moves.
    pub fn move_by_original_index(&mut self, original_index: usize, to_position: usize) {
        let Some(from) = self
            .items
            .iter()
            .position(|m| m.original_index == original_index)
        else {
            warn!(original_index, "move target not found");
            return;
        };
        if to_position >= self.items.len() {
            warn!(to_position, len = self.items.len(), "move position out of range");
            return;
        }
        if from == to_position {
            return;
        }
        self.items.swap(from, to_position);
        self.recompute_offsets();
        self.dirty = true;
    }

    /// Delete the entry at `index`
    pub fn delete_at(&mut self, index: usize) {
        if index >= self.items.len() {
            warn!(index, len = self.items.len(), "delete_at out of range");
            return;
        }
        self.items.remove(index);
        self.recompute_offsets();
        self.dirty = true;
    }

    /// Restore the most recent loaded snapshot, discarding edits
    pub fn reset_to_original(&mut self) {
        self.items = self.original.clone();
        self.recompute_offsets();
        self.dirty = false;
    }

    /// Current sequence
    pub fn items(&self) -> &[MaterializedProgram] {
        &self.items
    }

    /// Current programs without annotations
    pub fn programs(&self) -> Vec<Program> {
        self.items.iter().map(|m| m.program.clone()).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the lineup is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether unsaved edits exist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current state as saved
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total duration of the lineup in milliseconds
    pub fn total_duration_ms(&self) -> u64 {
        self.items.iter().map(|m| m.program.duration_ms()).sum()
    }

    fn recompute_offsets(&mut self) {
        let mut offset = 0u64;
        for item in &mut self.items {
            item.start_time_offset_ms = offset;
            offset += item.program.duration_ms();
        }
    }
}
