use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Record ID, opaque and unique within one store.
pub type RecordId = String;

/// Day label used when a record's timestamp cannot be parsed.
pub const UNKNOWN_DAY: &str = "unknown";

/// Detected customer sentiment for a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
    Frustrated,
    Excited,
    Confused,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Calm,
        Emotion::Frustrated,
        Emotion::Excited,
        Emotion::Confused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Calm => "calm",
            Emotion::Frustrated => "frustrated",
            Emotion::Excited => "excited",
            Emotion::Confused => "confused",
        }
    }

    /// Parse a lowercase label. Unknown labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }
}

/// Outcome of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Resolved,
    Escalated,
    Pending,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [
        Resolution::Resolved,
        Resolution::Escalated,
        Resolution::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Resolved => "resolved",
            Resolution::Escalated => "escalated",
            Resolution::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

/// A participant in a conversation (vCon party).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Party {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailto: Option<String>,
}

/// A recorded dialog segment (vCon dialog entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogSegment {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub duration_secs: f64,
}

/// A single logged customer-service conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationRecord {
    pub id: RecordId,
    #[serde(default)]
    pub uuid: String,
    pub customer_name: String,
    pub agent_name: String,
    /// RFC 3339 instant, with the offset the call was logged in.
    pub timestamp: String,
    pub duration_secs: u64,
    pub intent: String,
    pub emotion: Emotion,
    pub resolution: Resolution,
    pub satisfaction: f64,
    pub transcript: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<Party>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dialog: Vec<DialogSegment>,
}

impl ConversationRecord {
    /// Zero-padded day of month in the timestamp's own offset, e.g. `"18"`.
    /// Returns [`UNKNOWN_DAY`] when the timestamp is not valid RFC 3339.
    pub fn day_label(&self) -> String {
        match OffsetDateTime::parse(&self.timestamp, &Rfc3339) {
            Ok(ts) => format!("{:02}", ts.day()),
            Err(_) => UNKNOWN_DAY.to_string(),
        }
    }
}
