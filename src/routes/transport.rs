use actix_web::{web, HttpResponse, Responder};

use crate::error::ApiError;
use crate::models::transport::{CachedTripQuery, CarCostQuery, CarCostResponse};
use crate::services::transport_service::TransportService;
use crate::state::AppState;

/*
    /api/transport/trains
*/
pub async fn get_trains() -> impl Responder {
    HttpResponse::Ok().json(TransportService::train_routes())
}

/*
    /api/transport/car
*/
pub async fn car_cost(query: web::Query<CarCostQuery>) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    if !query.distance_m.is_finite() || query.distance_m < 0.0 {
        return Err(ApiError::BadRequest(
            "distance_m must be a non-negative number".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(CarCostResponse {
        profile: query.profile,
        estimate: TransportService::estimate_cost(query.distance_m, query.profile),
        distance: TransportService::format_km(Some(query.distance_m)),
        duration: TransportService::format_duration(query.duration_s),
    }))
}

/*
    /api/transport/trips
*/
pub async fn get_cached_trips(
    state: web::Data<AppState>,
    query: web::Query<CachedTripQuery>,
) -> impl Responder {
    let trips = TransportService::filter_trips(
        &state.train_trips,
        query.from.as_deref(),
        query.to.as_deref(),
    );
    HttpResponse::Ok().json(trips)
}
