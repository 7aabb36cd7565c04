//! Flex interspersal

use airtime_core::types::Program;

/// Width of each interspersed gap
pub const INTERSPERSE_FLEX_MS: u64 = 30_000;

/// Insert a 30-second flex gap after every program
///
/// Doubles the lineup length; stateless and configuration-free.
pub fn intersperse_flex(programs: &[Program]) -> Vec<Program> {
    let mut out = Vec::with_capacity(programs.len() * 2);
    for program in programs {
        out.push(program.clone());
        out.push(Program::flex(INTERSPERSE_FLEX_MS));
    }
    out
}
