use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

use crate::core::timestamp;
use crate::types::day_label::DayLabel;
use crate::types::viewer::Viewer;

/// Written in place of any timestamp that failed to parse.
pub const INVALID_DATE: &str = "Invalid Date";

// Full local layout, e.g. "Thu May 27 2021 23:59:00"; no zone annotation.
const FULL_FMT: &str = "%a %b %d %Y %H:%M:%S";
const HM_FMT: &str = "%H:%M";

/// Full local date and time of `ts`, without any offset or zone suffix.
pub fn to_local_full(ts: &DateTime<Utc>, viewer: &Viewer) -> String {
    viewer.to_local(ts).format(FULL_FMT).to_string()
}

/// Local `HH:MM` (24-hour) of `ts`.
pub fn to_local_hm(ts: &DateTime<Utc>, viewer: &Viewer) -> String {
    viewer.to_local(ts).format(HM_FMT).to_string()
}

/// Local `HH:MM` followed by the day label relative to the viewer's today.
pub fn to_local_hm_day(ts: &DateTime<Utc>, viewer: &Viewer) -> String {
    let local: DateTime<FixedOffset> = viewer.to_local(ts);
    let day: DayLabel = readable_day(local.date_naive(), viewer.today());
    format!("{} {}", local.format(HM_FMT), day)
}

/// Names `date` relative to `today`.
///
/// Only the calendar delta matters: same date is `Today`, one day back is
/// `Yesterday`, one day ahead is `Tomorrow`; anything else is its weekday.
pub fn readable_day(date: NaiveDate, today: NaiveDate) -> DayLabel {
    if date == today {
        DayLabel::Today
    } else if today.pred_opt() == Some(date) {
        DayLabel::Yesterday
    } else if today.succ_opt() == Some(date) {
        DayLabel::Tomorrow
    } else {
        DayLabel::Weekday(date.weekday())
    }
}

// ---- text level: parse, then format or fall back to INVALID_DATE ---- //

fn with_parsed(text: &str, render: impl FnOnce(&DateTime<Utc>) -> String) -> String {
    match timestamp::from_text(text) {
        Some(value) => render(&value),
        None => INVALID_DATE.to_string(),
    }
}

pub fn full_from_text(text: &str, viewer: &Viewer) -> String {
    with_parsed(text, |ts| to_local_full(ts, viewer))
}

pub fn hm_from_text(text: &str, viewer: &Viewer) -> String {
    with_parsed(text, |ts| to_local_hm(ts, viewer))
}

pub fn hm_day_from_text(text: &str, viewer: &Viewer) -> String {
    with_parsed(text, |ts| to_local_hm_day(ts, viewer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    // Wednesday 2024-06-12 10:00 UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 10, 0, 0).unwrap()
    }

    fn berlin() -> Viewer {
        Viewer::fixed(FixedOffset::east_opt(2 * 3600).unwrap(), now(), "CEST")
    }

    fn new_york() -> Viewer {
        Viewer::fixed(FixedOffset::west_opt(4 * 3600).unwrap(), now(), "EDT")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[yare::parameterized(
        same_day    = { date(2024, 6, 12), DayLabel::Today },
        day_before  = { date(2024, 6, 11), DayLabel::Yesterday },
        day_after   = { date(2024, 6, 13), DayLabel::Tomorrow },
        two_back    = { date(2024, 6, 10), DayLabel::Weekday(Weekday::Mon) },
        two_ahead   = { date(2024, 6, 14), DayLabel::Weekday(Weekday::Fri) },
        week_ahead  = { date(2024, 6, 19), DayLabel::Weekday(Weekday::Wed) },
    )]
    fn readable_day_by_delta(day: NaiveDate, expected: DayLabel) {
        assert_eq!(readable_day(day, date(2024, 6, 12)), expected);
    }

    #[test]
    fn readable_day_crosses_month_and_year() {
        assert_eq!(readable_day(date(2023, 12, 31), date(2024, 1, 1)), DayLabel::Yesterday);
        assert_eq!(readable_day(date(2024, 3, 1), date(2024, 2, 29)), DayLabel::Tomorrow);
    }

    #[test]
    fn hm_shifts_by_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 12, 18, 5, 0).unwrap();
        assert_eq!(to_local_hm(&ts, &berlin()), "20:05");
        assert_eq!(to_local_hm(&ts, &new_york()), "14:05");
        assert_eq!(to_local_hm(&ts, &Viewer::utc(now())), "18:05");
    }

    #[test]
    fn hm_day_uses_local_date_not_utc_date() {
        // 23:30 UTC on the 12th is already the 13th in Berlin
        let ts = Utc.with_ymd_and_hms(2024, 6, 12, 23, 30, 0).unwrap();
        assert_eq!(to_local_hm_day(&ts, &berlin()), "01:30 Tomorrow");
        assert_eq!(to_local_hm_day(&ts, &new_york()), "19:30 Today");
    }

    #[test]
    fn hm_day_names_weekday_outside_window() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 13, 0, 0).unwrap();
        assert_eq!(to_local_hm_day(&ts, &berlin()), "15:00 Saturday");
        let past = Utc.with_ymd_and_hms(2024, 6, 11, 7, 45, 0).unwrap();
        assert_eq!(to_local_hm_day(&past, &berlin()), "09:45 Yesterday");
    }

    #[test]
    fn winter_timestamp_with_summer_now_uses_winter_offset() {
        let summer_now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let viewer = Viewer::named(chrono_tz::Europe::Berlin, summer_now);
        let winter = Utc.with_ymd_and_hms(2026, 12, 20, 18, 0, 0).unwrap();
        assert_eq!(to_local_hm(&winter, &viewer), "19:00");
        assert_eq!(to_local_hm_day(&winter, &viewer), "19:00 Sunday");
        assert_eq!(to_local_full(&winter, &viewer), "Sun Dec 20 2026 19:00:00");
        // same day, before and after the October change
        let before = Utc.with_ymd_and_hms(2026, 10, 25, 0, 30, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 10, 25, 1, 30, 0).unwrap();
        assert_eq!(to_local_hm(&before, &viewer), "02:30");
        assert_eq!(to_local_hm(&after, &viewer), "02:30");
    }

    #[test]
    fn full_has_no_zone_suffix() {
        let ts = Utc.with_ymd_and_hms(2021, 5, 27, 21, 59, 0).unwrap();
        assert_eq!(to_local_full(&ts, &berlin()), "Thu May 27 2021 23:59:00");
        assert_eq!(to_local_full(&ts, &new_york()), "Thu May 27 2021 17:59:00");
    }

    #[test]
    fn text_wrappers_fall_back_to_invalid_date() {
        let viewer = berlin();
        assert_eq!(full_from_text("not a date", &viewer), INVALID_DATE);
        assert_eq!(hm_from_text("", &viewer), INVALID_DATE);
        assert_eq!(hm_day_from_text("soon", &viewer), INVALID_DATE);
        assert_eq!(hm_from_text("2024-06-12 08:00:00", &viewer), "10:00");
    }
}
