use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TrainRoute {
    pub route: &'static str,
    pub price_min: f64,
    pub price_max: f64,
    pub operator: &'static str,
    pub departure_station: &'static str,
    pub arrival_station: &'static str,
    pub duration: &'static str,
}

/// One journey from the cached SNCF search (`train_trips.csv`). Return legs
/// carry no station names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CachedTrip {
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub duration_hours: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub price: Option<f64>,
    #[serde(default)]
    pub departure_station: Option<String>,
    #[serde(default)]
    pub arrival_station: Option<String>,
}

/*
    GET /api/transport/trips query
*/
#[derive(Debug, Deserialize)]
pub struct CachedTripQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Routing profiles understood by the directions provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TravelProfile {
    #[default]
    #[serde(rename = "driving-car")]
    DrivingCar,
    #[serde(rename = "driving-hgv")]
    DrivingHgv,
    #[serde(rename = "cycling-regular")]
    CyclingRegular,
    #[serde(rename = "foot-walking")]
    FootWalking,
}

/*
    GET /api/transport/car query
*/
#[derive(Debug, Deserialize)]
pub struct CarCostQuery {
    pub distance_m: f64,
    pub duration_s: Option<f64>,
    #[serde(default)]
    pub profile: TravelProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub total_cost_eur: f64,
    pub fuel_cost_eur: f64,
    pub toll_cost_eur: f64,
    pub liters_fuel: f64,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct CarCostResponse {
    pub profile: TravelProfile,
    pub estimate: CostEstimate,
    pub distance: String,
    pub duration: String,
}
