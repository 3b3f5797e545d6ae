pub mod budget;
pub mod health;
pub mod itinerary;
pub mod poi;
pub mod transport;
pub mod weather;

use actix_web::web;

use crate::error::ApiError;

/// Every route of the API, shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/api")
            .route("/pois/{kind}", web::get().to(poi::get_pois))
            .route("/trips/plan", web::post().to(itinerary::plan))
            .route("/budget", web::get().to(budget::estimate))
            .route("/weather", web::get().to(weather::get_weather))
            .service(
                web::scope("/transport")
                    .route("/trains", web::get().to(transport::get_trains))
                    .route("/car", web::get().to(transport::car_cost))
                    .route("/trips", web::get().to(transport::get_cached_trips)),
            ),
    );
}
