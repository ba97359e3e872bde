use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

/// Both institutions live in the Moscow civil timezone, which has no DST.
const MOSCOW_UTC_OFFSET_SECS: i32 = 3 * 3600;

pub fn moscow_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(MOSCOW_UTC_OFFSET_SECS).expect("offset is in range");
    Utc::now().with_timezone(&offset)
}

/// Current civil date used for "today" filtering and schedule requests.
pub fn moscow_today() -> NaiveDate {
    moscow_now().date_naive()
}

pub fn moscow_tomorrow() -> NaiveDate {
    moscow_today() + Duration::days(1)
}

/// Renders a date the way the upstream API expects it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        assert_eq!(format_date(date), "2024-09-02");
    }

    #[test]
    fn test_tomorrow_is_one_day_ahead() {
        assert_eq!(moscow_tomorrow() - moscow_today(), Duration::days(1));
    }
}
