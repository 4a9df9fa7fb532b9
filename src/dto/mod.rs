use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod admin;
pub mod catalogue;
pub mod favourites;
pub mod game;
pub mod health;
pub mod search;
pub mod standings;
pub mod validation;

pub(crate) fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Parse an RFC 3339 timestamp such as `2024-08-17T14:00:00Z`.
pub fn parse_timestamp(value: &str) -> Result<SystemTime, time::error::Parse> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).map(SystemTime::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_round_trip_through_rfc3339() {
        let parsed = parse_timestamp("2024-08-17T14:00:00Z").unwrap();
        assert_eq!(format_system_time(parsed), "2024-08-17T14:00:00Z");
        assert!(parse_timestamp("17/08/2024").is_err());
    }
}
