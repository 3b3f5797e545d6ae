use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::poi::Poi;
use super::weather::DailyWeather;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(with = "super::display_date")]
    pub date: NaiveDate,
    pub morning_activities: Vec<Poi>,
    pub afternoon_activities: Vec<Poi>,
    pub breakfast: Option<Poi>,
    pub lunch: Option<Poi>,
    pub dinner: Option<Poi>,
}

impl DayPlan {
    pub fn activities(&self) -> impl Iterator<Item = &Poi> {
        self.morning_activities
            .iter()
            .chain(self.afternoon_activities.iter())
    }

    pub fn meals(&self) -> impl Iterator<Item = &Poi> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TripPlan {
    pub days: Vec<DayPlan>,
}

impl TripPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Recap {
    pub hotel: Option<String>,
    pub unique_restaurants: Vec<String>,
    pub unique_activities: Vec<String>,
}

/*
    POST /api/trips/plan body
*/
#[derive(Debug, Deserialize, Serialize)]
pub struct TripRequest {
    pub start_date: NaiveDate,
    pub nb_days: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedTrip {
    pub id: Uuid,
    pub destination: String,
    pub start_date: NaiveDate,
    pub nb_days: u32,
    pub days: TripPlan,
    pub recap: Recap,
    /// Known weather for the trip dates; empty without a weather export.
    pub weather: Vec<DailyWeather>,
}
