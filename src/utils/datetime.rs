//! Date and time utility functions
//!
//! Human-readable relative times, counted down to the largest whole unit.

use chrono::{DateTime, TimeZone, Utc};

use crate::messages::{Messages, TimeUnit};

/// Describe how long ago `then` was, relative to `now`.
///
/// Uses the largest whole unit among days, hours and minutes. Anything under
/// a minute, and any time in the future, reads as "just now".
pub fn format_relative_time_at<Tz1, Tz2>(then: &DateTime<Tz1>, now: &DateTime<Tz2>, messages: &Messages) -> String
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let elapsed = now.clone().with_timezone(&Utc) - then.clone().with_timezone(&Utc);

    let seconds = elapsed.num_seconds();
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if days > 0 {
        messages.ago(days, TimeUnit::Day)
    } else if hours > 0 {
        messages.ago(hours, TimeUnit::Hour)
    } else if minutes > 0 {
        messages.ago(minutes, TimeUnit::Minute)
    } else {
        messages.just_now.to_string()
    }
}

/// [`format_relative_time_at`] against the current time
pub fn format_relative_time<Tz: TimeZone>(then: &DateTime<Tz>, messages: &Messages) -> String {
    format_relative_time_at(then, &Utc::now(), messages)
}
