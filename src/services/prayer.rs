use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Prayer timings and Hijri date for one civil day, fetched fresh per
/// message and never cached.
///
/// Individual timings are optional: the upstream occasionally omits a
/// field, and the composer substitutes a sentinel per missing slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerData {
    pub fajr: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    /// Formatted Hijri date, e.g. `05 شَوّال 1445`.
    pub hijri: String,
}

/// Client for the AlAdhan prayer-times API.
///
/// Every failure mode (connect error, timeout, non-2xx status, undecodable
/// body) collapses to `None`, so a broken upstream can only degrade the
/// daily message, never suppress it.
#[derive(Debug, Clone)]
pub struct PrayerTimesClient {
    http: reqwest::Client,
    base_url: String,
    city: String,
    country: String,
}

impl PrayerTimesClient {
    pub fn new(base_url: &str, city: &str, country: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            city: city.to_string(),
            country: country.to_string(),
        })
    }

    /// Fetches prayer timings and the Hijri date for `date`. One attempt,
    /// no retry; failures are logged and collapse to `None`.
    pub async fn fetch(&self, date: NaiveDate) -> Option<PrayerData> {
        match self.request(date).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Prayer times fetch failed for {}: {}", date, e);
                None
            }
        }
    }

    async fn request(&self, date: NaiveDate) -> Result<PrayerData, reqwest::Error> {
        let url = format!(
            "{}/v1/timingsByCity/{}",
            self.base_url,
            date.format("%d-%m-%Y")
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("city", self.city.as_str()),
                ("country", self.country.as_str()),
                ("method", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: TimingsResponse = response.json().await?;
        Ok(PrayerData::from(body))
    }
}

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Timings,
    date: DateSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Timings {
    fajr: Option<String>,
    dhuhr: Option<String>,
    asr: Option<String>,
    maghrib: Option<String>,
    isha: Option<String>,
    sunrise: Option<String>,
    sunset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DateSection {
    hijri: Hijri,
}

#[derive(Debug, Deserialize)]
struct Hijri {
    day: String,
    month: HijriMonth,
    year: String,
}

#[derive(Debug, Deserialize)]
struct HijriMonth {
    ar: String,
}

impl From<TimingsResponse> for PrayerData {
    fn from(response: TimingsResponse) -> Self {
        let TimingsData { timings, date } = response.data;
        let hijri = date.hijri;

        Self {
            fajr: timings.fajr,
            dhuhr: timings.dhuhr,
            asr: timings.asr,
            maghrib: timings.maghrib,
            isha: timings.isha,
            sunrise: timings.sunrise,
            sunset: timings.sunset,
            hijri: format!("{} {} {}", hijri.day, hijri.month.ar, hijri.year),
        }
    }
}
