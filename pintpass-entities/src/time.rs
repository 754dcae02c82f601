use std::fmt;

use time::OffsetDateTime;

/// A point in time with millisecond precision.
///
/// All persisted timestamps with the `_at` postfix are stored as unix
/// timestamps in **milli**seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn into_millis(self) -> i64 {
        self.0
    }

    pub const fn into_seconds(self) -> i64 {
        self.0.div_euclid(1000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        // Values beyond the supported calendar range collapse to the epoch.
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_millis() {
        let ts = Timestamp::from_millis(1_700_000_000_123);
        assert_eq!(ts.into_millis(), 1_700_000_000_123);
        assert_eq!(ts.into_seconds(), 1_700_000_000);
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_millis(1);
        let later = Timestamp::from_millis(2);
        assert!(earlier < later);
    }
}
