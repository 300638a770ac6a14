use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

use affect_core::models::TimelineBucket;

/// Inclusive UTC start of the bucket containing `timestamp`.
/// Weeks start Monday 00:00.
pub fn bucket_start(timestamp: DateTime<Utc>, bucket: TimelineBucket) -> DateTime<Utc> {
    let day = timestamp.date_naive();
    let start_day = match bucket {
        TimelineBucket::Day => day,
        TimelineBucket::Week => {
            day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
        }
    };
    start_day.and_time(NaiveTime::MIN).and_utc()
}
