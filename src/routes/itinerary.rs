use actix_web::{web, HttpResponse};
use chrono::Days;
use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::itinerary::{GeneratedTrip, TripRequest};
use crate::state::AppState;

pub const MAX_TRIP_DAYS: u32 = 7;

/*
    /api/trips/plan
*/
pub async fn plan(
    state: web::Data<AppState>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();

    if !(1..=MAX_TRIP_DAYS).contains(&request.nb_days) {
        return Err(ApiError::BadRequest(format!(
            "nb_days must be between 1 and {}",
            MAX_TRIP_DAYS
        )));
    }

    let last_offset = Days::new(u64::from(request.nb_days - 1));
    let Some(last_date) = request.start_date.checked_add_days(last_offset) else {
        return Err(ApiError::BadRequest(format!(
            "A {}-day trip starting on {} ends past the last supported date",
            request.nb_days, request.start_date
        )));
    };

    // A seed makes the plan reproducible; otherwise draw from entropy.
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let destination = &state.destination;
    let (days, recap) = state.generator.build_trip(
        &mut rng,
        request.start_date,
        request.nb_days,
        &destination.hotels,
        &destination.restaurants,
        &destination.sites,
    );

    Ok(HttpResponse::Ok().json(GeneratedTrip {
        id: Uuid::new_v4(),
        destination: destination.city.clone(),
        start_date: request.start_date,
        nb_days: request.nb_days,
        days,
        recap,
        weather: state.weather.between(request.start_date, last_date),
    }))
}
