use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use lille_planner_api::{
    config::AppConfig,
    routes,
    services::{
        poi_service::PoiService, transport_service::TransportService,
        weather_service::WeatherService,
    },
    state::AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!(
        "Loading {} POIs from {}",
        config.destination_city,
        config.data_dir.display()
    );

    let destination = PoiService::new(&config.data_dir)
        .load_destination(&config.destination_city)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if destination.is_empty() {
        log::warn!("No POIs loaded, generated trips will be empty");
    }

    let weather = WeatherService::load(&config.data_dir);
    let train_trips = TransportService::load_cached_trips(&config.data_dir)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(
        AppState::new(config, destination)
            .with_weather(weather)
            .with_train_trips(train_trips),
    );

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
