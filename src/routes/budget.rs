use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::budget::BudgetQuery;
use crate::routes::itinerary::MAX_TRIP_DAYS;
use crate::services::pricing_service::PricingService;
use crate::state::AppState;

const MAX_TRAVELERS: u32 = 10;
const MAX_HOTEL_STARS: u32 = 5;

/*
    /api/budget
*/
pub async fn estimate(
    state: web::Data<AppState>,
    query: web::Query<BudgetQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    if !(1..=MAX_TRIP_DAYS).contains(&query.nb_days) {
        return Err(ApiError::BadRequest(format!(
            "nb_days must be between 1 and {}",
            MAX_TRIP_DAYS
        )));
    }
    if !(1..=MAX_TRAVELERS).contains(&query.nb_people) {
        return Err(ApiError::BadRequest(format!(
            "nb_people must be between 1 and {}",
            MAX_TRAVELERS
        )));
    }
    if !(1..=MAX_HOTEL_STARS).contains(&query.hotel_stars) {
        return Err(ApiError::BadRequest(format!(
            "hotel_stars must be between 1 and {}",
            MAX_HOTEL_STARS
        )));
    }

    let budget_cap = query.budget_cap.unwrap_or(state.config.budget_cap);
    if !budget_cap.is_finite() {
        return Err(ApiError::BadRequest(
            "budget_cap must be a finite number".to_string(),
        ));
    }
    let summary = PricingService::summarize(
        query.nb_days,
        query.nb_people,
        query.hotel_stars,
        query.transport_mode,
        budget_cap,
    );

    Ok(HttpResponse::Ok().json(summary))
}
