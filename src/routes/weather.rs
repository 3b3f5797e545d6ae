use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::weather::{WeatherQuery, WeatherReport};
use crate::services::weather_service::{DEFAULT_DAYS_FUTURE, DEFAULT_DAYS_PAST};
use crate::state::AppState;

const MAX_WINDOW_DAYS: usize = 14;

/*
    /api/weather
*/
pub async fn get_weather(
    state: web::Data<AppState>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let days_past = query.days_past.unwrap_or(DEFAULT_DAYS_PAST);
    let days_future = query.days_future.unwrap_or(DEFAULT_DAYS_FUTURE);

    if days_past > MAX_WINDOW_DAYS || days_future > MAX_WINDOW_DAYS {
        return Err(ApiError::BadRequest(format!(
            "days_past and days_future must be at most {}",
            MAX_WINDOW_DAYS
        )));
    }

    let current = state.weather.current().cloned();
    let indoor_alert = current.as_ref().map_or(false, |day| day.is_cold_or_wet());

    Ok(HttpResponse::Ok().json(WeatherReport {
        start_date: query.start_date,
        forecast: state
            .weather
            .forecast(query.start_date, days_past, days_future),
        current,
        indoor_alert,
    }))
}
