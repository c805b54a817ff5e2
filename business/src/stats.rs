//! Summary counters shown above the table.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use crate::record::UserRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub verified: usize,
    pub profile_complete: usize,
    /// Records whose `last_active` is on or after local midnight of today.
    pub active_today: usize,
}

impl Summary {
    /// Counts over the whole store; `now` fixes both "today" and the time zone.
    pub fn from_records<Tz: TimeZone>(records: &[UserRecord], now: &DateTime<Tz>) -> Self {
        let midnight = start_of_day(now);
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            summary.verified += usize::from(record.email_verified);
            summary.profile_complete += usize::from(record.profile_complete);
            summary.active_today += usize::from(record.last_active >= midnight);
            summary
        })
    }
}

/// Midnight at the start of `now`'s calendar day, in `now`'s zone.
///
/// When a DST change skips midnight, the day starts at the first wall-clock hour
/// that exists.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    (0..=SKIPPED_HOURS)
        .find_map(|hours| {
            tz.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map_or_else(|| now.with_timezone(&Utc), |start| start.with_timezone(&Utc))
}

/// Longest stretch of local time a zone transition is assumed to skip.
const SKIPPED_HOURS: i64 = 2;
