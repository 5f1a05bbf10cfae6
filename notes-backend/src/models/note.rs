use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single note. Immutable once created; it can only be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
    #[serde(with = "millis_timestamp")]
    pub date: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u64, content: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            date: date.trunc_subsecs(3),
        }
    }
}

/// Body of `POST /api/notes`.
///
/// `content` is kept as a raw JSON value so a missing field and a field of the
/// wrong type can both be reported as a client error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl CreateNoteRequest {
    /// The text content, if present and a string.
    pub fn content_text(&self) -> Option<&str> {
        self.content.as_ref().and_then(|v| v.as_str())
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2022-01-10T18:39:34.091Z`.
pub mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
