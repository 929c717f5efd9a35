use chrono::{NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// Bangla name for a weekday.
pub fn bangla_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "শনিবার",
        Weekday::Sun => "রবিবার",
        Weekday::Mon => "সোমবার",
        Weekday::Tue => "মঙ্গলবার",
        Weekday::Wed => "বুধবার",
        Weekday::Thu => "বৃহস্পতিবার",
        Weekday::Fri => "শুক্রবার",
    }
}

/// English long-form date, e.g. `14 April 2024`.
pub fn format_english_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// The current civil date in the given time zone.
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}
