use chrono::{NaiveDateTime, Weekday};

/// `date`-style layout after the weekday: `Jan 06 10:00:00 UTC 2025`.
/// `%Z` accepts any zone abbreviation; the zone is not applied.
const DATE_LAYOUT: &str = "%b %d %H:%M:%S %Z %Y";

/// Parse the value of a `Date:` line, e.g. `Mon Jan 06 10:00:00 UTC 2025`.
///
/// The weekday must be a weekday name but is not cross-checked against the
/// calendar date. Runs of whitespace (such as the padded day `Jan  6`) are
/// treated as a single separator.
pub fn parse_report_date(raw: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (weekday, rest) = tokens.split_first()?;
    if rest.len() != 5 {
        return None;
    }
    weekday.parse::<Weekday>().ok()?;

    NaiveDateTime::parse_from_str(&rest.join(" "), DATE_LAYOUT).ok()
}
