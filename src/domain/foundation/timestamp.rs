//! UTC timestamps for assessment creation and report generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time in UTC, RFC 3339 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> Timestamp {
        Timestamp::from_datetime(DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc))
    }

    #[test]
    fn round_trips_through_json_as_a_plain_string() {
        let ts = at("2024-03-01T08:15:00Z");

        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.starts_with("\"2024-03-01T08:15:00"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn orders_chronologically() {
        let mut stamps = vec![at("2024-03-02T00:00:00Z"), at("2024-03-01T00:00:00Z")];
        stamps.sort();

        assert_eq!(stamps[0], at("2024-03-01T00:00:00Z"));
        assert!(stamps[1] < Timestamp::now());
    }
}
