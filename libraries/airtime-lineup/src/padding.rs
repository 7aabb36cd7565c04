//! Start-time padding
//!
//! Inserts flex gaps so every real program begins at a clock-aligned
//! boundary (e.g. every 15 minutes).

use serde::{Deserialize, Serialize};

use airtime_core::types::Program;

/// Leftovers under this threshold are absorbed rather than padded
pub const PADDING_THRESHOLD_MS: u64 = 30_000;

const MINUTE_MS: u64 = 60_000;

/// Configuration for start-time padding
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingOptions {
    /// Alignment modulus in minutes; `None` ("no padding" selection)
    /// falls back to a 1-minute modulus, effectively a no-op rounding
    pub mod_minutes: Option<u32>,
}

/// A padded lineup together with its re-aligned start anchor
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedLineup {
    /// Channel start time rounded down to the modulus, epoch milliseconds
    pub start_time_ms: i64,

    /// Programs with flex gaps inserted after under-filled slots
    pub programs: Vec<Program>,
}

/// Pad program start times to clock-aligned boundaries
///
/// The channel start anchor is rounded *down* to the nearest multiple of
/// the modulus. Existing flex entries are stripped first. Each program
/// occupies the smallest whole number of modulus slots that fits it; when
/// the slot outlasts the program by at least 30 seconds, a flex gap of
/// exactly the leftover width follows it.
pub fn pad_start_times(
    programs: &[Program],
    start_time_ms: i64,
    options: &PaddingOptions,
) -> PaddedLineup {
    let modulus = u64::from(options.mod_minutes.unwrap_or(1).max(1)) * MINUTE_MS;
    let aligned_start = start_time_ms - start_time_ms.rem_euclid(modulus as i64);

    let mut out = Vec::with_capacity(programs.len());
    for program in programs {
        if program.is_flex() {
            continue;
        }
        let duration = program.duration_ms();
        let slot = duration.div_ceil(modulus) * modulus;
        let leftover = slot - duration;

        out.push(program.clone());
        if leftover >= PADDING_THRESHOLD_MS {
            out.push(Program::flex(leftover));
        }
    }

    PaddedLineup {
        start_time_ms: aligned_start,
        programs: out,
    }
}
