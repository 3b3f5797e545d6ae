use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    destination: String,
    pois: PoiCounts,
    weather_days: usize,
    cached_train_trips: usize,
}

#[derive(Serialize)]
struct PoiCounts {
    hotels: usize,
    restaurants: usize,
    sites: usize,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let destination = &state.destination;
    let pois = PoiCounts {
        hotels: destination.hotels.len(),
        restaurants: destination.restaurants.len(),
        sites: destination.sites.len(),
    };

    // The planner still answers with an empty pool, just with empty slots.
    let status = if pois.hotels == 0 || pois.restaurants == 0 || pois.sites == 0 {
        "degraded"
    } else {
        "ok"
    };

    HttpResponse::Ok().json(HealthStatus {
        status: status.to_string(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        destination: destination.city.clone(),
        pois,
        weather_days: state.weather.len(),
        cached_train_trips: state.train_trips.len(),
    })
}
