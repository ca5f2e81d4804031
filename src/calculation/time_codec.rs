//! Conversion between "HH:MM" text and signed minute counts.
//!
//! Every other calculation works in whole minutes; this module is the only
//! place that knows the textual form. Parsing never fails: anything that
//! cannot be read degrades to zero minutes.

/// Display sentinel for a zero minute count.
///
/// Callers branch on this literal, so zero is never rendered as `"00:00"`
/// by [`format_minutes`].
pub const ZERO_SENTINEL: &str = "-";

/// Parses `"H:MM"` or `"-H:MM"` into signed minutes.
///
/// - `None`, an empty string and the sentinel `"-"` yield 0.
/// - A missing or unreadable minute component counts as 0.
/// - An unreadable hour component makes the whole value 0.
/// - Components after the second (e.g. seconds) are ignored.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::parse_time;
///
/// assert_eq!(parse_time(Some("08:30")), 510);
/// assert_eq!(parse_time(Some("-02:15")), -135);
/// assert_eq!(parse_time(Some("7")), 420);
/// assert_eq!(parse_time(Some("-")), 0);
/// assert_eq!(parse_time(Some("lunch")), 0);
/// assert_eq!(parse_time(None), 0);
/// ```
pub fn parse_time(text: Option<&str>) -> i64 {
    let Some(text) = text.map(str::trim) else {
        return 0;
    };
    if text.is_empty() || text == ZERO_SENTINEL {
        return 0;
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = unsigned.split(':');
    let Some(hours) = parts.next().and_then(|h| h.trim().parse::<i64>().ok()) else {
        return 0;
    };
    let minutes = parts
        .next()
        .and_then(|m| m.trim().parse::<i64>().ok())
        .unwrap_or(0);

    let Some(total) = hours.checked_mul(60).and_then(|h| h.checked_add(minutes)) else {
        return 0;
    };
    if negative { -total } else { total }
}

/// Formats signed minutes as `[-]HH:MM`, rendering zero as `"-"`.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "-");
/// assert_eq!(format_minutes(510), "08:30");
/// assert_eq!(format_minutes(-150), "-02:30");
/// assert_eq!(format_minutes(6000), "100:00");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    if minutes == 0 {
        return ZERO_SENTINEL.to_string();
    }
    format_clock(minutes)
}

/// Formats signed minutes as `[-]HH:MM`, rendering zero as `"00:00"`.
///
/// Used where a numeric rendering is always required, such as CSV backups.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(-5), "-00:05");
/// ```
pub fn format_clock(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}
