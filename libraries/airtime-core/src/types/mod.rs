//! Domain types for the Airtime lineup engine

mod condensed;
mod ids;
mod lookup;
mod program;
mod saved;

pub use condensed::CondensedProgram;
pub use ids::{ArtistId, ChannelId, CustomShowId, ProgramId, ShowId};
pub use lookup::ProgramLookup;
pub use program::{
    ContentProgram, ContentSubtype, CustomProgram, ExternalId, FlexProgram, Program,
    RedirectProgram,
};
pub use saved::{SavedLineup, SavedLineupItem};
