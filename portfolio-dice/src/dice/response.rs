//! Illustrative response bodies shown next to each result. They document
//! what a dice API would answer; nothing is sent or parsed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::dice::die::DieSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleRollResponse {
    pub dice: String,
    pub result: u32,
    pub timestamp: String,
}

impl SingleRollResponse {
    pub fn new(die: DieSpec, result: u32, rolled_at: DateTime<Utc>) -> Self {
        Self {
            dice: die.to_string(),
            result,
            timestamp: iso_timestamp(rolled_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRollResponse {
    pub dice: String,
    pub rolls: Vec<u32>,
    pub modifier: i32,
    pub total: i64,
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-03-14T09:26:53.589Z`.
pub fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn to_body<T: Serialize>(response: &T) -> String {
    // Plain structs of strings and integers always serialize.
    serde_json::to_string(response).unwrap_or_default()
}
