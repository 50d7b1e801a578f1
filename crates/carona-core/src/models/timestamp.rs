//! Serde helpers for message timestamps.
//!
//! Timestamps are written as RFC 3339 strings with as many fractional digits
//! as needed to recover the exact instant. Documents written by older
//! versions of the tool carry naive ISO-8601 strings without an offset;
//! those are read as local time. A naive time that falls in a local
//! daylight-saving gap is moved forward past the gap, and read as UTC if
//! that still does not map.

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, SecondsFormat, TimeZone,
};
use serde::{de, Deserialize, Deserializer, Serializer};

const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Current local time with its offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parse an RFC 3339 timestamp, falling back to a naive local one.
pub fn parse(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    let naive = NaiveDateTime::parse_from_str(text, NAIVE_ISO_FORMAT).ok()?;
    Some(from_local(naive, |n| Local.from_local_datetime(n)))
}

fn from_local<Tz, F>(naive: NaiveDateTime, lookup: F) -> DateTime<FixedOffset>
where
    Tz: TimeZone,
    F: Fn(&NaiveDateTime) -> LocalResult<DateTime<Tz>>,
{
    lookup(&naive)
        .earliest()
        .or_else(|| lookup(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.fixed_offset())
        .unwrap_or_else(|| naive.and_utc().fixed_offset())
}

pub fn format(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

pub fn serialize<S>(dt: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_round_trip_keeps_instant() {
        let dt = DateTime::parse_from_rfc3339("2024-03-01T10:05:07.123456789-03:00").unwrap();
        let text = format(&dt);
        assert_eq!(text, "2024-03-01T10:05:07.123456789-03:00");
        assert_eq!(parse(&text), Some(dt));
    }

    #[test]
    fn test_whole_seconds_have_no_fraction() {
        let dt = DateTime::parse_from_rfc3339("2024-03-01T11:00:00+00:00").unwrap();
        assert_eq!(format(&dt), "2024-03-01T11:00:00+00:00");
    }

    #[test]
    fn test_naive_timestamps_are_local() {
        let parsed = parse("2023-11-20T18:30:00.250000").unwrap();
        let naive = NaiveDateTime::parse_from_str("2023-11-20T18:30:00.25", NAIVE_ISO_FORMAT).unwrap();
        assert_eq!(parsed.naive_local(), naive);

        let no_fraction = parse("2023-11-20T18:30:00").unwrap();
        assert_eq!(no_fraction.naive_local().format("%H:%M:%S").to_string(), "18:30:00");
    }

    /// A zone at -05:00 that springs forward to -04:00 at 2024-03-10 02:00.
    fn spring_forward(n: &NaiveDateTime) -> LocalResult<DateTime<FixedOffset>> {
        let gap_start = NaiveDateTime::parse_from_str("2024-03-10T02:00:00", NAIVE_ISO_FORMAT).unwrap();
        let gap_end = gap_start + Duration::hours(1);
        if *n < gap_start {
            FixedOffset::west_opt(5 * 3600).unwrap().from_local_datetime(n)
        } else if *n < gap_end {
            LocalResult::None
        } else {
            FixedOffset::west_opt(4 * 3600).unwrap().from_local_datetime(n)
        }
    }

    #[test]
    fn test_naive_time_in_dst_gap_moves_past_the_gap() {
        let naive = NaiveDateTime::parse_from_str("2024-03-10T02:30:00.000001", NAIVE_ISO_FORMAT).unwrap();
        let dt = from_local(naive, spring_forward);
        assert_eq!(format(&dt), "2024-03-10T03:30:00.000001-04:00");

        let before = NaiveDateTime::parse_from_str("2024-03-10T01:30:00", NAIVE_ISO_FORMAT).unwrap();
        assert_eq!(format(&from_local(before, spring_forward)), "2024-03-10T01:30:00-05:00");
    }

    #[test]
    fn test_unmappable_naive_time_falls_back_to_utc() {
        let naive = NaiveDateTime::parse_from_str("2024-03-10T02:30:00", NAIVE_ISO_FORMAT).unwrap();
        let dt = from_local(naive, |_| LocalResult::<DateTime<FixedOffset>>::None);
        assert_eq!(format(&dt), "2024-03-10T02:30:00+00:00");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
