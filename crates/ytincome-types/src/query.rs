//! Channel lookup queries.

use std::str::FromStr;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::QueryParseError;

/// Prefix shared by every canonical channel id.
const CHANNEL_ID_PREFIX: &str = "UC";

/// Length of a canonical channel id.
const CHANNEL_ID_LEN: usize = 24;

/// Opaque canonical channel identifier (e.g. `UCX6OQ3DkcsbYNE6H8uQQuVA`).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Creates a channel id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the value has the shape of a canonical channel id.
    #[must_use]
    pub fn looks_canonical(value: &str) -> bool {
        value.starts_with(CHANNEL_ID_PREFIX) && value.chars().count() == CHANNEL_ID_LEN
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A way of naming a channel on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ChannelQuery {
    /// A canonical channel id, fetched directly.
    Id(ChannelId),
    /// A free-form channel name, resolved through search.
    Username(String),
    /// A `@handle`, stored without the leading `@` and resolved through search.
    Handle(String),
}

impl ChannelQuery {
    /// Returns true if this query needs a search round-trip to find the channel id.
    #[must_use]
    pub const fn needs_resolution(&self) -> bool {
        !matches!(self, Self::Id(_))
    }

    /// Returns the search text sent upstream for name-based queries.
    ///
    /// Handles are searched with their `@` prefix restored.
    #[must_use]
    pub fn search_text(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Username(name) => name.clone(),
            Self::Handle(handle) => format!("@{handle}"),
        }
    }

    /// Returns the kind of query as a string slice.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Id(_) => "channel",
            Self::Username(_) => "username",
            Self::Handle(_) => "handle",
        }
    }
}

impl std::fmt::Display for ChannelQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => write!(f, "{name}"),
            Self::Handle(handle) => write!(f, "@{handle}"),
        }
    }
}

impl FromStr for ChannelQuery {
    type Err = QueryParseError;

    /// Classifies raw search input.
    ///
    /// A leading `@` makes a handle, a 24 character value starting with `UC`
    /// makes a channel id, anything else is searched as a username.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(QueryParseError::Empty);
        }

        if let Some(handle) = input.strip_prefix('@') {
            if handle.is_empty() {
                return Err(QueryParseError::EmptyHandle(input.to_string()));
            }
            return Ok(Self::Handle(handle.to_string()));
        }

        if ChannelId::looks_canonical(input) {
            return Ok(Self::Id(ChannelId::new(input)));
        }

        Ok(Self::Username(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle() {
        let query: ChannelQuery = "@mkbhd".parse().unwrap();
        assert_eq!(query, ChannelQuery::Handle("mkbhd".to_string()));
        assert_eq!(query.search_text(), "@mkbhd");
        assert!(query.needs_resolution());
    }

    #[test]
    fn test_parse_channel_id() {
        let query: ChannelQuery = "UCX6OQ3DkcsbYNE6H8uQQuVA".parse().unwrap();
        assert_eq!(
            query,
            ChannelQuery::Id(ChannelId::new("UCX6OQ3DkcsbYNE6H8uQQuVA"))
        );
        assert!(!query.needs_resolution());
    }

    #[test]
    fn test_parse_username() {
        // Starts with UC but too short to be an id
        let query: ChannelQuery = "UCLA".parse().unwrap();
        assert_eq!(query, ChannelQuery::Username("UCLA".to_string()));

        let query: ChannelQuery = "  Linus Tech Tips ".parse().unwrap();
        assert_eq!(query, ChannelQuery::Username("Linus Tech Tips".to_string()));
        assert_eq!(query.kind(), "username");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<ChannelQuery>(), Err(QueryParseError::Empty));
        assert_eq!("   ".parse::<ChannelQuery>(), Err(QueryParseError::Empty));
        assert!(matches!(
            "@".parse::<ChannelQuery>(),
            Err(QueryParseError::EmptyHandle(_))
        ));
    }

    #[test]
    fn test_display_round_trips_handle_prefix() {
        let query = ChannelQuery::Handle("veritasium".to_string());
        assert_eq!(query.to_string(), "@veritasium");
    }

    #[test]
    fn test_channel_id_conversions() {
        let id: ChannelId = String::from("UCabc").into();
        assert_eq!(id.as_str(), "UCabc");
        assert_eq!(id.to_string(), "UCabc");
        let back: String = id.into();
        assert_eq!(back, "UCabc");
    }
}
