use chrono::{Datelike, NaiveDate};

/// The twelve Bangla months as `(name, start_day, start_gregorian_month)`
/// anchors, in traditional order. Boishakh 1 falls on 14 April.
pub const MONTH_ANCHORS: [(&str, u32, u32); 12] = [
    ("বৈশাখ", 14, 4),
    ("জ্যৈষ্ঠ", 15, 5),
    ("আষাঢ়", 15, 6),
    ("শ্রাবণ", 16, 7),
    ("ভাদ্র", 17, 8),
    ("আশ্বিন", 17, 9),
    ("কার্তিক", 18, 10),
    ("অগ্রহায়ণ", 17, 11),
    ("পৌষ", 16, 12),
    ("মাঘ", 15, 1),
    ("ফাল্গুন", 13, 2),
    ("চৈত্র", 15, 3),
];

/// A date in the Bangla calendar, derived from a Gregorian date.
/// Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanglaDate {
    /// Day of the Bangla month, in Bangla numerals.
    pub day: String,
    /// Bangla month name.
    pub month: &'static str,
    /// Bangla year (Gregorian year minus 593), in Bangla numerals.
    pub year: String,
    /// The season (ritu) the month belongs to.
    pub season: &'static str,
}

impl BanglaDate {
    /// Renders the date as it appears in the daily message,
    /// e.g. `১ বৈশাখ ১৪৩১ বঙ্গাব্দ`.
    pub fn formatted(&self) -> String {
        format!("{} {} {} বঙ্গাব্দ", self.day, self.month, self.year)
    }
}

/// Converts a Gregorian date to its Bangla calendar equivalent.
///
/// The first anchor whose Gregorian month matches and whose start day has
/// been reached wins; day-within-month counts from that anchor. A date
/// before its month's anchor still belongs to the closing month of the
/// Bangla year and falls into চৈত্র.
pub fn convert(date: NaiveDate) -> BanglaDate {
    let year = date.year() - 593;

    // The fallback keeps the raw Gregorian day instead of offsetting from
    // an anchor. TODO: confirm that numbering against a printed almanac;
    // every other branch counts from the anchor day.
    let (month, day) = MONTH_ANCHORS
        .iter()
        .find(|(_, start_day, start_month)| {
            date.month() == *start_month && date.day() >= *start_day
        })
        .map(|(name, start_day, _)| (*name, date.day() - start_day + 1))
        .unwrap_or(("চৈত্র", date.day()));

    BanglaDate {
        day: to_bangla_digits(&day.to_string()),
        month,
        year: to_bangla_digits(&year.to_string()),
        season: season_for(month),
    }
}

/// Season (ritu) for a Bangla month name, two months per season.
/// Unrecognized input maps to an empty string.
pub fn season_for(month: &str) -> &'static str {
    match month {
        "বৈশাখ" | "জ্যৈষ্ঠ" => "গ্রীষ্ম",
        "আষাঢ়" | "শ্রাবণ" => "বর্ষা",
        "ভাদ্র" | "আশ্বিন" => "শরৎ",
        "কার্তিক" | "অগ্রহায়ণ" => "হেমন্ত",
        "পৌষ" | "মাঘ" => "শীত",
        "ফাল্গুন" | "চৈত্র" => "বসন্ত",
        _ => "",
    }
}

/// Transliterates ASCII digits to Bangla numerals, passing every other
/// character through unchanged.
pub fn to_bangla_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0' => '০',
            '1' => '১',
            '2' => '২',
            '3' => '৩',
            '4' => '৪',
            '5' => '৫',
            '6' => '৬',
            '7' => '৭',
            '8' => '৮',
            '9' => '৯',
            other => other,
        })
        .collect()
}
