//! Airtime Core
//!
//! Domain types and error handling for the Airtime channel lineup engine.
//!
//! This crate defines:
//! - **Program model**: the closed [`Program`] union (content, custom-show
//!   segments, redirects, flex gaps) and its condensed/saved forms
//! - **Ids**: newtype identifiers for programs, shows, artists, channels
//!   and custom shows
//! - **Lookup table**: the caller-owned [`ProgramLookup`] joined against
//!   by the materializer in `airtime-lineup`
//!
//! # Example
//!
//! ```rust
//! use airtime_core::types::{ContentProgram, ContentSubtype, Program};
//!
//! let movie = ContentProgram::new(ContentSubtype::Movie, "Heat", 10_200_000);
//! let program = Program::Content(movie);
//! assert_eq!(program.duration_ms(), 10_200_000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    ArtistId, ChannelId, CondensedProgram, ContentProgram, ContentSubtype, CustomProgram,
    CustomShowId, ExternalId, FlexProgram, Program, ProgramId, ProgramLookup, RedirectProgram,
    SavedLineup, SavedLineupItem, ShowId,
};
