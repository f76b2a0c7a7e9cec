use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;

use crate::models::Timestamp;

pub const ONE_DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Value format of `<input type="datetime-local">`
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// First to last day of the month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let next_first = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let last = next_first.and_then(|d| d.pred_opt()).unwrap_or(first);
        Self { start: first, end: last }
    }

    /// January 1st to December 31st of the year containing `date`
    pub fn year_of(date: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
        let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
        Self { start, end }
    }

    /// Local midnight of the first day
    pub fn start_millis<Tz: TimeZone>(&self, tz: &Tz) -> Timestamp {
        local_midnight_millis(self.start, tz)
    }

    /// Local midnight of the last day (not the end of it)
    pub fn end_millis<Tz: TimeZone>(&self, tz: &Tz) -> Timestamp {
        local_midnight_millis(self.end, tz)
    }
}

/// What the range picker currently holds. Either bound may be cleared,
/// in which case no list fetch is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSelection {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// The resolved range, only when both bounds are set
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }
}

impl From<DateRange> for DateSelection {
    fn from(range: DateRange) -> Self {
        Self { start: Some(range.start), end: Some(range.end) }
    }
}

/// Shortcut buttons next to the flow screen's range picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    Yesterday,
    LastSevenDays,
    PreviousMonth,
    NextMonth,
}

impl QuickRange {
    pub const ALL: [QuickRange; 5] = [
        QuickRange::Today,
        QuickRange::Yesterday,
        QuickRange::LastSevenDays,
        QuickRange::PreviousMonth,
        QuickRange::NextMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::Yesterday => "Yesterday",
            QuickRange::LastSevenDays => "Last 7 days",
            QuickRange::PreviousMonth => "Previous month",
            QuickRange::NextMonth => "Next month",
        }
    }

    /// Resolve the shortcut.
    ///
    /// Day shortcuts are anchored at `today`; month shortcuts step from the
    /// currently selected start, or from `today` when nothing is selected.
    pub fn resolve(&self, today: NaiveDate, selected_start: Option<NaiveDate>) -> DateRange {
        match self {
            QuickRange::Today => DateRange::single(today),
            QuickRange::Yesterday => DateRange::single(today.pred_opt().unwrap_or(today)),
            QuickRange::LastSevenDays => {
                let start = today.checked_sub_days(Days::new(7)).unwrap_or(today);
                DateRange::new(start, today)
            }
            QuickRange::PreviousMonth => {
                let anchor = DateRange::month_of(selected_start.unwrap_or(today)).start;
                DateRange::month_of(anchor.pred_opt().unwrap_or(anchor))
            }
            QuickRange::NextMonth => {
                let anchor = DateRange::month_of(selected_start.unwrap_or(today)).end;
                DateRange::month_of(anchor.succ_opt().unwrap_or(anchor))
            }
        }
    }
}

/// Epoch milliseconds of local midnight on `date`.
///
/// When midnight does not exist locally (a DST gap) the wall-clock value is
/// read as UTC instead of failing.
pub fn local_midnight_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Timestamp {
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| local_datetime_millis(midnight, tz))
        .unwrap_or_default()
}

pub fn local_datetime_millis<Tz: TimeZone>(datetime: NaiveDateTime, tz: &Tz) -> Timestamp {
    tz.from_local_datetime(&datetime)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&datetime))
        .timestamp_millis()
}

/// Render a timestamp in `tz` with a strftime pattern. Out-of-range
/// timestamps render as an empty string.
pub fn format_timestamp<Tz>(millis: Timestamp, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).earliest() {
        Some(datetime) => datetime.format(pattern).to_string(),
        None => String::new(),
    }
}

/// Parse the value of a `datetime-local` input (seconds optional)
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse the value of a `date` input
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(DateRange::month_of(day(2024, 2, 14)), DateRange::new(day(2024, 2, 1), day(2024, 2, 29)));
        assert_eq!(DateRange::month_of(day(2023, 12, 31)), DateRange::new(day(2023, 12, 1), day(2023, 12, 31)));
        assert_eq!(DateRange::month_of(day(2023, 4, 1)).end, day(2023, 4, 30));
    }

    #[test]
    fn test_year_bounds() {
        let range = DateRange::year_of(day(2024, 6, 10));
        assert_eq!(range.start, day(2024, 1, 1));
        assert_eq!(range.end, day(2024, 12, 31));
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let range = DateRange::new(day(2024, 6, 10), day(2024, 6, 1));
        assert_eq!(range.start, day(2024, 6, 1));
        assert_eq!(range.end, day(2024, 6, 10));
    }

    #[test]
    fn test_selection_needs_both_bounds() {
        assert_eq!(DateSelection::cleared().range(), None);
        assert_eq!(DateSelection::new(Some(day(2024, 1, 1)), None).range(), None);
        assert_eq!(DateSelection::new(None, Some(day(2024, 1, 1))).range(), None);
        assert!(DateSelection::new(Some(day(2024, 1, 1)), Some(day(2024, 1, 2))).range().is_some());
    }

    #[test]
    fn test_quick_ranges_anchored_at_today() {
        let today = day(2024, 6, 10);
        assert_eq!(QuickRange::Today.resolve(today, None), DateRange::single(today));
        assert_eq!(QuickRange::Yesterday.resolve(today, None), DateRange::single(day(2024, 6, 9)));
        assert_eq!(
            QuickRange::LastSevenDays.resolve(today, Some(day(2020, 1, 1))),
            DateRange::new(day(2024, 6, 3), day(2024, 6, 10))
        );
    }

    #[test]
    fn test_month_steps_anchored_at_selected_start() {
        let today = day(2024, 6, 10);
        let selected = Some(day(2024, 1, 15));
        assert_eq!(
            QuickRange::PreviousMonth.resolve(today, selected),
            DateRange::new(day(2023, 12, 1), day(2023, 12, 31))
        );
        assert_eq!(
            QuickRange::NextMonth.resolve(today, selected),
            DateRange::new(day(2024, 2, 1), day(2024, 2, 29))
        );
        assert_eq!(
            QuickRange::NextMonth.resolve(today, None),
            DateRange::new(day(2024, 7, 1), day(2024, 7, 31))
        );
    }

    #[test]
    fn test_midnight_millis_respects_offset() {
        let june_10 = day(2024, 6, 10);
        let utc_midnight = local_midnight_millis(june_10, &Utc);
        assert_eq!(utc_midnight, 1_717_977_600_000);

        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(local_midnight_millis(june_10, &plus_eight), utc_midnight - 8 * 3600 * 1000);
    }

    #[test]
    fn test_format_timestamp() {
        let millis = 1_717_977_600_000 + (13 * 60 + 5) * 60 * 1000 + 9000;
        assert_eq!(format_timestamp(millis, &Utc, DATE_MINUTE_FORMAT), "2024-06-10 13:05");
        assert_eq!(format_timestamp(millis, &Utc, DATE_SECOND_FORMAT), "2024-06-10 13:05:09");

        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_timestamp(millis, &plus_eight, DATE_FORMAT), "2024-06-10");
        assert_eq!(format_timestamp(millis, &plus_eight, DATE_MINUTE_FORMAT), "2024-06-10 21:05");
    }

    #[test]
    fn test_parse_inputs() {
        let parsed = parse_datetime_input("2024-06-10T08:30").unwrap();
        assert_eq!(parsed.format(DATE_MINUTE_FORMAT).to_string(), "2024-06-10 08:30");
        assert!(parse_datetime_input("2024-06-10T08:30:15").is_some());
        assert!(parse_datetime_input("yesterday").is_none());

        assert_eq!(parse_date_input("2024-06-10"), Some(day(2024, 6, 10)));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(date_input_value(Some(day(2024, 6, 3))), "2024-06-03");
        assert_eq!(date_input_value(None), "");
    }
}
