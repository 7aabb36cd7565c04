/// Program domain types
///
/// A lineup is an ordered sequence of [`Program`] values. The union is
/// closed: every transform matches all four variants, so adding a variant
/// is a compile-visible change at each transform boundary.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{ArtistId, ChannelId, CustomShowId, ProgramId, ShowId};

/// Kind of content a [`ContentProgram`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSubtype {
    /// Feature film
    Movie,

    /// Episode of a show
    Episode,

    /// Music track
    Track,

    /// Anything else a media source can serve
    Other,
}

impl ContentSubtype {
    /// Lowercase wire name of the subtype
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Episode => "episode",
            Self::Track => "track",
            Self::Other => "other",
        }
    }
}

impl FromStr for ContentSubtype {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "episode" => Ok(Self::Episode),
            "track" => Ok(Self::Track),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::UnknownSubtype(s.to_string())),
        }
    }
}

impl fmt::Display for ContentSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// External-source identifier for a program
///
/// A program imported from a media source carries one entry per source it
/// is known to (e.g. a server rating key). Unpersisted programs are
/// deduplicated by these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    /// Source system name
    pub source: String,

    /// Identifier within that source
    pub id: String,
}

impl ExternalId {
    /// Create a new external id
    pub fn new(source: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            id: id.into(),
        }
    }

    /// Identity key combining source and id
    pub fn key(&self) -> String {
        format!("{}|{}", self.source, self.id)
    }
}

/// Video or audio content in a lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProgram {
    /// Database id, present once the program is persisted
    pub id: Option<ProgramId>,

    /// Content subtype
    pub subtype: ContentSubtype,

    /// Display title
    pub title: String,

    /// Owning show, for episodes
    pub show_id: Option<ShowId>,

    /// Show title, used as grouping fallback when the id is absent
    pub show_title: Option<String>,

    /// Owning artist, for tracks
    pub artist_id: Option<ArtistId>,

    /// Artist name, used as grouping fallback when the id is absent
    pub artist_name: Option<String>,

    /// Season number (album index for tracks)
    pub season_number: Option<u32>,

    /// Episode number (track index for tracks)
    pub episode_number: Option<u32>,

    /// Original release date
    pub release_date: Option<DateTime<Utc>>,

    /// External-source identifiers
    #[serde(default)]
    pub external_ids: Vec<ExternalId>,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Whether the program is durably stored
    pub persisted: bool,
}

impl ContentProgram {
    /// Create content with minimal metadata
    pub fn new(subtype: ContentSubtype, title: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            id: None,
            subtype,
            title: title.into(),
            show_id: None,
            show_title: None,
            artist_id: None,
            artist_name: None,
            season_number: None,
            episode_number: None,
            release_date: None,
            external_ids: Vec::new(),
            duration_ms,
            persisted: false,
        }
    }

    /// Release date as epoch milliseconds
    pub fn release_date_ms(&self) -> Option<i64> {
        self.release_date.map(|d| d.timestamp_millis())
    }

    /// Whether this is a special (season zero) episode
    pub fn is_special(&self) -> bool {
        self.subtype == ContentSubtype::Episode && self.season_number == Some(0)
    }

    /// Lookup key used by the condensed form
    ///
    /// The database id when persisted, otherwise the first external id.
    /// `None` means the program cannot be referenced from a condensed
    /// lineup at all.
    pub fn lookup_key(&self) -> Option<ProgramId> {
        if let Some(id) = &self.id {
            return Some(id.clone());
        }
        self.external_ids
            .first()
            .map(|ext| ProgramId::new(ext.key()))
    }
}

/// Reference into a custom show's own ordered program list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProgram {
    /// Owning custom show
    pub custom_show_id: CustomShowId,

    /// Program id within the custom show
    pub id: ProgramId,

    /// Position in the custom show's list
    pub index: u32,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Whether the reference is durably stored
    pub persisted: bool,

    /// Full content detail, nested by the materializer
    pub program: Option<Box<ContentProgram>>,
}

/// Hand-off to another channel for the duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectProgram {
    /// Target channel
    pub channel_id: ChannelId,

    /// Target channel name, when known
    pub channel_name: Option<String>,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Whether the redirect is durably stored
    pub persisted: bool,
}

/// Filler time gap carrying no identity beyond its duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexProgram {
    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Whether the gap is durably stored
    pub persisted: bool,
}

impl FlexProgram {
    /// Create an unpersisted flex gap
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            persisted: false,
        }
    }
}

/// A single entry in a channel lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Program {
    /// Video/audio content
    Content(ContentProgram),

    /// Custom-show segment
    Custom(CustomProgram),

    /// Redirect to another channel
    Redirect(RedirectProgram),

    /// Filler gap
    Flex(FlexProgram),
}

impl Program {
    /// Create a flex gap program
    pub fn flex(duration_ms: u64) -> Self {
        Self::Flex(FlexProgram::new(duration_ms))
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Content(c) => c.duration_ms,
            Self::Custom(c) => c.duration_ms,
            Self::Redirect(r) => r.duration_ms,
            Self::Flex(f) => f.duration_ms,
        }
    }

    /// Whether the entry is durably stored
    pub fn persisted(&self) -> bool {
        match self {
            Self::Content(c) => c.persisted,
            Self::Custom(c) => c.persisted,
            Self::Redirect(r) => r.persisted,
            Self::Flex(f) => f.persisted,
        }
    }

    /// Display title, when the entry has one
    ///
    /// Custom entries take the title of their materialized detail;
    /// redirects use the target channel name; flex has none.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Content(c) => Some(c.title.as_str()),
            Self::Custom(c) => c.program.as_deref().map(|p| p.title.as_str()),
            Self::Redirect(r) => r.channel_name.as_deref(),
            Self::Flex(_) => None,
        }
    }

    /// Content detail, for content entries and materialized custom entries
    pub fn content_detail(&self) -> Option<&ContentProgram> {
        match self {
            Self::Content(c) => Some(c),
            Self::Custom(c) => c.program.as_deref(),
            Self::Redirect(_) | Self::Flex(_) => None,
        }
    }

    /// Whether the entry is a flex gap
    pub fn is_flex(&self) -> bool {
        matches!(self, Self::Flex(_))
    }

    /// Whether the entry is a redirect
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}
