use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::cli::IconMode;

/// Units requested from the weather service. The service converts on its
/// side, so toggling units always means a fresh fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }

    #[must_use]
    pub fn temp_suffix(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn wind_suffix(self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub icon: Option<String>,
}

/// One forecast data point at a specific timestamp, as delivered by the
/// service (already in the requested units).
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

/// Aggregated view of one calendar day of forecast samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub day_label: String,
    pub date_label: String,
    pub mean_temperature: i32,
    pub max_temperature: i32,
    pub min_temperature: i32,
    pub description: String,
    pub icon: String,
}

/// The paired result of one successful search.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    pub samples: Vec<ForecastSample>,
    pub fetched_at: DateTime<Utc>,
}

const MAX_SUMMARY_DAYS: usize = 3;

/// Buckets forecast samples into per-day summaries, at most three days.
///
/// Timestamps carrying a UTC offset are normalized to UTC and grouped by UTC
/// calendar date; offset-less timestamps are taken as already being in the
/// location's local time and grouped by that naive date. Samples whose
/// timestamps fail to parse are skipped. Group order follows first
/// occurrence in the input.
#[must_use]
pub fn summarize(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut groups: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let Some(date) = sample_date(&sample.timestamp) else {
            continue;
        };
        match groups.iter_mut().find(|(day, _)| *day == date) {
            Some((_, members)) => members.push(sample),
            None => groups.push((date, vec![sample])),
        }
    }

    groups.truncate(MAX_SUMMARY_DAYS);
    groups
        .iter()
        .map(|(date, members)| summarize_day(*date, members))
        .collect()
}

fn summarize_day(date: NaiveDate, members: &[&ForecastSample]) -> DailySummary {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for sample in members {
        min = min.min(sample.temperature);
        max = max.max(sample.temperature);
        sum += sample.temperature;
    }
    let mean = sum / members.len() as f64;

    let descriptions: Vec<&str> = members.iter().map(|s| s.description.as_str()).collect();
    let icons: Vec<&str> = members.iter().map(|s| s.icon.as_str()).collect();

    DailySummary {
        day_label: date.format("%a").to_string(),
        date_label: date.format("%b %-d").to_string(),
        mean_temperature: round_temp(mean),
        max_temperature: round_temp(max),
        min_temperature: round_temp(min),
        description: mode(&descriptions),
        icon: mode(&icons),
    }
}

/// Most frequent value; the first value to reach the running maximum wins a
/// tie. Empty input yields the empty string, not an error, so callers with
/// partial data stay valid.
#[must_use]
pub fn mode(values: &[&str]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best = "";
    let mut best_count = 0;

    for &value in values {
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        if *count > best_count {
            best_count = *count;
            best = value;
        }
    }

    best.to_string()
}

pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

fn sample_date(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.naive_utc().date());
    }

    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
        .map(|parsed| parsed.date())
}

/// Weather providers ship opaque icon tokens ("01d", "10n", ...); only the
/// leading condition class is meaningful for a terminal glyph.
#[must_use]
pub fn icon_glyph(token: &str, mode: IconMode) -> &'static str {
    let class = token.get(..2).unwrap_or_default();
    match mode {
        IconMode::Ascii => match class {
            "01" => "SUN",
            "02" | "03" | "04" => "CLD",
            "09" | "10" => "RAN",
            "11" => "THN",
            "13" => "SNW",
            "50" => "FOG",
            _ => "---",
        },
        IconMode::Emoji => match class {
            "01" => "☀️",
            "02" | "03" | "04" => "☁️",
            "09" | "10" => "🌧️",
            "11" => "⛈️",
            "13" => "🌨️",
            "50" => "🌫️",
            _ => "☁️",
        },
        IconMode::Unicode => match class {
            "01" => "☀",
            "02" | "03" | "04" => "☁",
            "09" | "10" => "☂",
            "11" => "⚡",
            "13" => "❄",
            "50" => "░",
            _ => "☁",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: &str, temperature: f64, description: &str, icon: &str) -> ForecastSample {
        ForecastSample {
            timestamp: timestamp.to_string(),
            temperature,
            description: description.to_string(),
            icon: icon.to_string(),
            humidity: Some(60.0),
            wind_speed: Some(10.0),
        }
    }

    #[test]
    fn summarize_empty_input_yields_empty_output() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn summarize_single_day_min_mean_max() {
        let samples = vec![
            sample("2026-01-05T06:00:00", 10.0, "clear sky", "01d"),
            sample("2026-01-05T12:00:00", 20.0, "clear sky", "01d"),
            sample("2026-01-05T18:00:00", 30.0, "few clouds", "02d"),
        ];

        let summaries = summarize(&samples);
        assert_eq!(summaries.len(), 1);
        let day = &summaries[0];
        assert_eq!(day.min_temperature, 10);
        assert_eq!(day.max_temperature, 30);
        assert_eq!(day.mean_temperature, 20);
        assert_eq!(day.description, "clear sky");
        assert_eq!(day.icon, "01d");
        assert_eq!(day.day_label, "Mon");
        assert_eq!(day.date_label, "Jan 5");
    }

    #[test]
    fn summarize_caps_output_at_three_days() {
        let samples: Vec<ForecastSample> = (1..=6)
            .map(|day| {
                sample(
                    &format!("2026-01-{day:02}T12:00:00"),
                    15.0,
                    "overcast clouds",
                    "04d",
                )
            })
            .collect();

        assert_eq!(summarize(&samples).len(), 3);
    }

    #[test]
    fn summarize_keeps_first_occurrence_order() {
        let samples = vec![
            sample("2026-01-06T21:00:00", 5.0, "light rain", "10n"),
            sample("2026-01-05T03:00:00", 4.0, "light rain", "10n"),
            sample("2026-01-06T09:00:00", 7.0, "light rain", "10d"),
        ];

        let summaries = summarize(&samples);
        assert_eq!(summaries[0].date_label, "Jan 6");
        assert_eq!(summaries[1].date_label, "Jan 5");
    }

    #[test]
    fn summarize_groups_offset_timestamps_by_utc_date() {
        // 23:30 at +03:00 on Jan 5 is 20:30 UTC the same day -> one group
        let samples = vec![
            sample("2026-01-05T23:30:00+03:00", 8.0, "mist", "50n"),
            sample("2026-01-05T20:30:00Z", 6.0, "mist", "50n"),
        ];

        let summaries = summarize(&samples);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].date_label, "Jan 5");
    }

    #[test]
    fn summarize_skips_unparseable_timestamps() {
        let samples = vec![
            sample("not-a-date", 40.0, "clear sky", "01d"),
            sample("2026-01-05 12:00:00", 12.0, "clear sky", "01d"),
        ];

        let summaries = summarize(&samples);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].max_temperature, 12);
    }

    #[test]
    fn summarize_mean_rounds_half_away_from_zero() {
        let below = vec![
            sample("2026-01-05T06:00:00", -2.0, "snow", "13d"),
            sample("2026-01-05T12:00:00", -3.0, "snow", "13d"),
        ];
        assert_eq!(summarize(&below)[0].mean_temperature, -3);

        let above = vec![
            sample("2026-01-05T06:00:00", 2.0, "snow", "13d"),
            sample("2026-01-05T12:00:00", 3.0, "snow", "13d"),
        ];
        assert_eq!(summarize(&above)[0].mean_temperature, 3);
    }

    #[test]
    fn summarize_equal_temperatures_collapse() {
        let samples = vec![
            sample("2026-01-05T06:00:00", 21.4, "haze", "50d"),
            sample("2026-01-05T12:00:00", 21.4, "haze", "50d"),
        ];

        let day = &summarize(&samples)[0];
        assert_eq!(day.min_temperature, day.mean_temperature);
        assert_eq!(day.mean_temperature, day.max_temperature);
    }

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode(&["a", "b", "a"]), "a");
    }

    #[test]
    fn mode_first_value_retains_tie() {
        assert_eq!(mode(&["a", "b"]), "a");
        // "a" reaches the maximum count first and is not displaced
        assert_eq!(mode(&["b", "a", "a", "b"]), "a");
    }

    #[test]
    fn mode_empty_input_returns_empty_string() {
        assert_eq!(mode(&[]), "");
    }

    #[test]
    fn icon_glyph_maps_token_classes() {
        assert_eq!(icon_glyph("01d", IconMode::Unicode), "☀");
        assert_eq!(icon_glyph("10n", IconMode::Ascii), "RAN");
        assert_eq!(icon_glyph("13d", IconMode::Emoji), "🌨️");
        assert_eq!(icon_glyph("", IconMode::Ascii), "---");
    }
}
