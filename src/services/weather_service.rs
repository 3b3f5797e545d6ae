//! Daily weather around the trip dates.
//!
//! Reads the Open-Meteo daily export (`daily_weather_data.csv`, or
//! `weather.csv`) from the data directory. Rows without both temperatures,
//! with an unreadable date, or carrying a sentinel weather code are dropped.

use crate::error::DataLoadError;
use crate::models::weather::{describe_weather_code, DailyWeather};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const WEATHER_FILES: [&str; 2] = ["daily_weather_data.csv", "weather.csv"];

pub const DEFAULT_DAYS_PAST: usize = 3;
pub const DEFAULT_DAYS_FUTURE: usize = 2;

// Open-Meteo fills gaps with large negative codes.
const MIN_VALID_WEATHER_CODE: f64 = -1000.0;

#[derive(Debug, Deserialize)]
struct WeatherRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    date: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    weather_code: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    weather_description: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    temperature_max: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    temperature_min: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    daylight_duration_h: Option<f64>,
}

impl WeatherRow {
    fn into_daily(self) -> Option<DailyWeather> {
        let date = self.date.as_deref().and_then(parse_day)?;
        let temperature_max = self.temperature_max.filter(|t| t.is_finite())?;
        let temperature_min = self.temperature_min.filter(|t| t.is_finite())?;

        let weather_code = match self.weather_code {
            Some(code) if !code.is_finite() || code <= MIN_VALID_WEATHER_CODE => return None,
            Some(code) => Some(code as i32),
            None => None,
        };
        let weather_description = self
            .weather_description
            .filter(|desc| !desc.is_empty())
            .or_else(|| weather_code.and_then(describe_weather_code).map(String::from));

        Some(DailyWeather {
            date,
            weather_code,
            weather_description,
            temperature_max,
            temperature_min,
            daylight_hours: self.daylight_duration_h.filter(|h| h.is_finite()),
        })
    }
}

/// Accepts plain dates and the timestamps pandas writes
/// (`2026-03-28 00:00:00+00:00`).
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Parse one daily export, keeping file order.
pub fn parse_weather<R: Read>(reader: R) -> Result<Vec<DailyWeather>, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut days = Vec::new();
    let mut dropped = 0;
    for row in csv_reader.deserialize::<WeatherRow>() {
        match row?.into_daily() {
            Some(day) => days.push(day),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} incomplete weather rows", dropped);
    }
    Ok(days)
}

#[derive(Debug, Default)]
pub struct WeatherService {
    days: Vec<DailyWeather>,
}

impl WeatherService {
    pub fn new(days: Vec<DailyWeather>) -> Self {
        Self { days }
    }

    /// Load the first readable weather export in `data_dir`. Weather is
    /// optional: without a usable file the service is simply empty.
    pub fn load(data_dir: &Path) -> Self {
        for name in WEATHER_FILES {
            let path = data_dir.join(name);
            if !path.exists() {
                continue;
            }

            let parsed = File::open(&path)
                .map_err(DataLoadError::from)
                .and_then(parse_weather);
            match parsed {
                Ok(days) => {
                    log::info!("Weather loaded from {}: {} days", path.display(), days.len());
                    return Self::new(days);
                }
                Err(e) => log::error!("Error loading weather data from {}: {}", path.display(), e),
            }
        }

        log::warn!("No weather data in {}", data_dir.display());
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The last `days_past` days before `start_date` followed by the first
    /// `days_future` days from it.
    pub fn forecast(
        &self,
        start_date: NaiveDate,
        days_past: usize,
        days_future: usize,
    ) -> Vec<DailyWeather> {
        let past: Vec<&DailyWeather> = self.days.iter().filter(|d| d.date < start_date).collect();
        let skip = past.len().saturating_sub(days_past);

        past.into_iter()
            .skip(skip)
            .chain(
                self.days
                    .iter()
                    .filter(|d| d.date >= start_date)
                    .take(days_future),
            )
            .cloned()
            .collect()
    }

    /// Days between `first` and `last`, both included.
    pub fn between(&self, first: NaiveDate, last: NaiveDate) -> Vec<DailyWeather> {
        self.days
            .iter()
            .filter(|d| d.date >= first && d.date <= last)
            .cloned()
            .collect()
    }

    /// Most recent row of the export.
    pub fn current(&self) -> Option<&DailyWeather> {
        self.days.last()
    }
}
