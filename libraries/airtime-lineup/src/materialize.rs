//! Program materialization
//!
//! The read-side join of a condensed lineup against the caller-owned
//! program lookup table. Pure and deterministic: identical inputs produce
//! identical output.

use tracing::debug;

use airtime_core::types::{
    CondensedProgram, CustomProgram, FlexProgram, Program, ProgramLookup, RedirectProgram,
};

use crate::types::MaterializedProgram;

/// Join condensed entries against the lookup table
///
/// Content and custom entries whose key is absent from the lookup are
/// dropped outright — never emitted as partial placeholders — so the
/// output may be shorter than the input while a fetch is still in flight.
/// Redirect and flex entries always materialize. Offsets are recomputed
/// from scratch over the survivors, and the per-lineup duration overrides
/// whatever duration the looked-up detail carries.
pub fn materialize(
    lineup: &[CondensedProgram],
    lookup: &ProgramLookup,
) -> Vec<MaterializedProgram> {
    let mut out: Vec<MaterializedProgram> = Vec::with_capacity(lineup.len());
    let mut offset = 0u64;

    for condensed in lineup {
        let program = match condensed {
            CondensedProgram::Content { id, duration_ms } => match lookup.get(id) {
                Some(detail) => {
                    let mut content = detail.clone();
                    content.duration_ms = *duration_ms;
                    Program::Content(content)
                }
                None => {
                    debug!(%id, "dropping unresolved content entry");
                    continue;
                }
            },
            CondensedProgram::Custom {
                custom_show_id,
                id,
                index,
                duration_ms,
            } => match lookup.get(id) {
                Some(detail) => Program::Custom(CustomProgram {
                    custom_show_id: custom_show_id.clone(),
                    id: id.clone(),
                    index: *index,
                    duration_ms: *duration_ms,
                    persisted: true,
                    program: Some(Box::new(detail.clone())),
                }),
                None => {
                    debug!(%id, "dropping unresolved custom entry");
                    continue;
                }
            },
            CondensedProgram::Redirect {
                channel_id,
                channel_name,
                duration_ms,
            } => Program::Redirect(RedirectProgram {
                channel_id: channel_id.clone(),
                channel_name: channel_name.clone(),
                duration_ms: *duration_ms,
                persisted: true,
            }),
            CondensedProgram::Flex { duration_ms } => Program::Flex(FlexProgram {
                duration_ms: *duration_ms,
                persisted: true,
            }),
        };

        let duration = program.duration_ms();
        out.push(MaterializedProgram {
            original_index: out.len(),
            start_time_offset_ms: offset,
            program,
        });
        offset += duration;
    }

    out
}
