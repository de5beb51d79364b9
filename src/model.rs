use std::num::IntErrorKind;
use serde::{Deserialize, Serialize};

/// Slot of a record in the store. Assigned once, never reused.
pub type Position = usize;

/// A single log event as loaded from a source file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Identifier of the event
    #[serde(rename = "EventId")]
    pub event_id: String,

    /// Free-text log line
    #[serde(rename = "Message")]
    pub message: String,

    /// Nanoseconds since the epoch, kept as the decimal string the source carried
    #[serde(rename = "NanoTimeStamp")]
    pub nano_timestamp: String,
}

impl Record {
    pub fn new(event_id: impl Into<String>, message: impl Into<String>, nano_timestamp: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            message: message.into(),
            nano_timestamp: nano_timestamp.into(),
        }
    }

    /// Text fed to the tokenizer: message, id and timestamp, space separated.
    pub fn indexable_text(&self) -> String {
        format!("{} {} {}", self.message, self.event_id, self.nano_timestamp)
    }

    /// Timestamp used for ordering. Out-of-range integers saturate to
    /// `i64::MAX`/`i64::MIN`; anything else that is not an integer orders as 0.
    pub fn sort_key(&self) -> i64 {
        match self.nano_timestamp.parse::<i64>() {
            Ok(ts) => ts,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            },
        }
    }
}

/// Body of a `/search` reply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResponse {
    pub results: Vec<Record>,
    pub count: usize,
    pub time_ms: u64,
}
