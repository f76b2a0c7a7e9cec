use chrono::{Local, NaiveDate};
use shared::dates::{self, DATETIME_INPUT_FORMAT};
use shared::Timestamp;

/// Current time as epoch milliseconds
pub fn now_millis() -> Timestamp {
    js_sys::Date::now() as Timestamp
}

/// Today's date in the browser's time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a timestamp in local time
pub fn format_local(millis: Timestamp, pattern: &str) -> String {
    dates::format_timestamp(millis, &Local, pattern)
}

/// Value for a `datetime-local` input, empty when unset
pub fn datetime_input_value(millis: Option<Timestamp>) -> String {
    millis.map(|millis| format_local(millis, DATETIME_INPUT_FORMAT)).unwrap_or_default()
}

/// Parse a `datetime-local` input value as local time
pub fn parse_datetime_input(value: &str) -> Option<Timestamp> {
    dates::parse_datetime_input(value).map(|datetime| dates::local_datetime_millis(datetime, &Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_datetime_input_round_trip() {
        let millis = parse_datetime_input("2024-06-10T08:30").unwrap();
        assert_eq!(datetime_input_value(Some(millis)), "2024-06-10T08:30");
        assert_eq!(datetime_input_value(None), "");
        assert!(parse_datetime_input("").is_none());
    }

    #[wasm_bindgen_test]
    fn test_now_is_today() {
        let formatted = format_local(now_millis(), dates::DATE_FORMAT);
        assert_eq!(formatted, today().format(dates::DATE_FORMAT).to_string());
    }
}
