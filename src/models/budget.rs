use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Train,
    Car,
}

/*
    GET /api/budget query
*/
#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    pub nb_days: u32,
    pub nb_people: u32,
    pub hotel_stars: u32,
    pub transport_mode: TransportMode,
    pub budget_cap: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBreakdown {
    pub hotel_per_night: f64,
    pub hotel_total: f64,
    pub meals_daily: f64,
    pub meals_total: f64,
    pub transport_total: f64,
    pub local_transport: f64,
    pub grand_total: f64,
}

/// Side-by-side cost of reaching the destination by train or by car.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportComparison {
    pub train_total: f64,
    pub train_local_transport: f64,
    pub car_total: f64,
    pub car_parking: f64,
    pub car_fuel: f64,
}

#[derive(Debug, Serialize)]
pub struct BudgetSummary {
    #[serde(flatten)]
    pub breakdown: BudgetBreakdown,
    pub budget_cap: f64,
    pub remaining: f64,
    pub comparison: TransportComparison,
}
