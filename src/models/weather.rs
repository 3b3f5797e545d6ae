use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days colder than this are flagged for indoor plans.
pub const COLD_THRESHOLD_C: f64 = 12.0;
const WET_KEYWORDS: [&str; 5] = ["rain", "drizzle", "shower", "thunderstorm", "snow"];

/// One row of the daily weather export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWeather {
    #[serde(with = "super::display_date")]
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub weather_description: Option<String>,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub daylight_hours: Option<f64>,
}

impl DailyWeather {
    /// Cold, or any kind of precipitation in the description.
    pub fn is_cold_or_wet(&self) -> bool {
        if self.temperature_max < COLD_THRESHOLD_C {
            return true;
        }
        self.weather_description
            .as_deref()
            .map(|desc| {
                let desc = desc.to_lowercase();
                WET_KEYWORDS.iter().any(|keyword| desc.contains(keyword))
            })
            .unwrap_or(false)
    }
}

/// WMO weather interpretation codes, as published by Open-Meteo.
pub fn describe_weather_code(code: i32) -> Option<&'static str> {
    let description = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Freezing rain",
        67 => "Heavy freezing rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Rain showers",
        81 => "Heavy rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with hail",
        99 => "Thunderstorm with heavy hail",
        _ => return None,
    };
    Some(description)
}

/*
    GET /api/weather query
*/
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub start_date: NaiveDate,
    pub days_past: Option<usize>,
    pub days_future: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct WeatherReport {
    #[serde(with = "super::display_date")]
    pub start_date: NaiveDate,
    pub forecast: Vec<DailyWeather>,
    pub current: Option<DailyWeather>,
    pub indoor_alert: bool,
}
