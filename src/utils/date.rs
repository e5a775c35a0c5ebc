use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user date: `YYYY-MM-DD` (also `YYYY/MM/DD`), or the keywords
/// `today` / `yesterday`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Some(today()),
        "yesterday" => return today().pred_opt(),
        _ => {}
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
}
