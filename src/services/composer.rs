use chrono::{Datelike, NaiveDate};

use crate::calendar::bangla::{self, BanglaDate};
use crate::services::prayer::{PrayerData, PrayerTimesClient};
use crate::utils::datetime::{bangla_weekday, format_english_date};

/// Builds the daily almanac message from the calendar conversion and the
/// prayer-times fetch.
pub struct MessageComposer {
    prayer_client: PrayerTimesClient,
    city: String,
}

impl MessageComposer {
    pub fn new(prayer_client: PrayerTimesClient, city: String) -> Self {
        Self { prayer_client, city }
    }

    /// Composes the message for `date`. A failed prayer-times fetch
    /// degrades the affected slots to "N/A" instead of failing the message.
    pub async fn compose(&self, date: NaiveDate) -> String {
        let bangla_date = bangla::convert(date);
        let prayer = self.prayer_client.fetch(date).await;
        render_message(date, &bangla_date, prayer.as_ref(), &self.city)
    }
}

/// Renders the fixed message template. Field order is part of the message
/// contract; every slot is always present, only its value varies.
pub fn render_message(
    date: NaiveDate,
    bangla_date: &BanglaDate,
    prayer: Option<&PrayerData>,
    city: &str,
) -> String {
    let weekday = bangla_weekday(date.weekday());
    let eng_date = format_english_date(date);
    let bn_date = bangla_date.formatted();
    let season = bangla_date.season;

    let hijri = prayer.map_or("N/A", |p| p.hijri.as_str());
    let fajr = prayer.and_then(|p| p.fajr.as_deref()).unwrap_or("N/A");
    let dhuhr = prayer.and_then(|p| p.dhuhr.as_deref()).unwrap_or("N/A");
    let asr = prayer.and_then(|p| p.asr.as_deref()).unwrap_or("N/A");
    let maghrib = prayer.and_then(|p| p.maghrib.as_deref()).unwrap_or("N/A");
    let isha = prayer.and_then(|p| p.isha.as_deref()).unwrap_or("N/A");
    let sunrise = prayer.and_then(|p| p.sunrise.as_deref()).unwrap_or("N/A");
    let sunset = prayer.and_then(|p| p.sunset.as_deref()).unwrap_or("N/A");

    format!(
        "আসসালামু আলাইকুম ওয়ারাহমাতুল্লাহ্।\n\
         🟧আজ {weekday}।\n\
         🟩{eng_date}।\n\
         🟦{bn_date}।\n\
         🟪হিজরী: {hijri}\n\
         🌅ঋতু: {season}\n\
         \n\
         ⬛ফজর: {fajr}\n\
         🟨যোহর: {dhuhr}\n\
         🟫আসর: {asr}\n\
         🔲মাগরিব: {maghrib}\n\
         ⬜ইশা: {isha}\n\
         \n\
         🌄সূর্যোদয়: {sunrise}\n\
         ⏺সূর্যাস্ত: {sunset} ({city})\n"
    )
}
