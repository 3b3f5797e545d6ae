#![allow(dead_code)]

use actix_web::{web, App};

use chrono::NaiveDate;
use lille_planner_api::{
    config::AppConfig,
    models::{
        poi::{Destination, Poi, PoiKind},
        transport::CachedTrip,
        weather::DailyWeather,
    },
    routes,
    services::weather_service::WeatherService,
    state::AppState,
};

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_destination(fixture_destination())
    }

    pub fn with_destination(destination: Destination) -> Self {
        let state = AppState::new(AppConfig::default(), destination)
            .with_weather(WeatherService::new(fixture_weather()))
            .with_train_trips(fixture_train_trips());
        Self::with_state(state)
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }
}

fn located(name: &str, kind: PoiKind, lat: f64, lon: f64) -> Poi {
    Poi::new(name, kind).with_location(lat, lon)
}

pub fn fixture_sites() -> Vec<Poi> {
    vec![
        located("Vieille Bourse", PoiKind::Site, 50.6371, 3.0636).with_metadata("type", "building"),
        located("Opéra de Lille", PoiKind::Site, 50.6377, 3.0660),
        located("Beffroi de Lille", PoiKind::Site, 50.6345, 3.0702),
        located("Cathédrale Notre-Dame-de-la-Treille", PoiKind::Site, 50.6404, 3.0622),
        located("Hospice Comtesse", PoiKind::Site, 50.6410, 3.0630),
        located("Palais Rihour", PoiKind::Site, 50.6358, 3.0603),
        located("Palais des Beaux-Arts", PoiKind::Site, 50.6306, 3.0624),
        located("Porte de Paris", PoiKind::Site, 50.6320, 3.0700),
        located("Citadelle de Lille", PoiKind::Site, 50.6414, 3.0445),
        located("Maison natale Charles de Gaulle", PoiKind::Site, 50.6403, 3.0614),
        located("Église Saint-Maurice", PoiKind::Site, 50.6361, 3.0674),
        located("Musée de l'Hospice", PoiKind::Site, 50.6412, 3.0641),
        located("Porte de Roubaix", PoiKind::Site, 50.6391, 3.0748),
        Poi::new("Porte de Gand", PoiKind::Site),
    ]
}

pub fn fixture_restaurants() -> Vec<Poi> {
    (0..12)
        .map(|i| {
            located(
                &format!("Estaminet {}", i),
                PoiKind::Restaurant,
                50.632 + (i as f64) * 0.0008,
                3.058 + (i as f64) * 0.0005,
            )
            .with_metadata("cuisine", "regional")
        })
        .collect()
}

pub fn fixture_hotels() -> Vec<Poi> {
    vec![
        located("Grand Hôtel Bellevue", PoiKind::Hotel, 50.6368, 3.0627)
            .with_metadata("stars", "4"),
        located("Hôtel Carlton", PoiKind::Hotel, 50.6366, 3.0653).with_metadata("stars", "4"),
        Poi::new("Hôtel sans adresse", PoiKind::Hotel),
    ]
}

pub fn fixture_destination() -> Destination {
    Destination {
        city: "Lille".to_string(),
        hotels: fixture_hotels(),
        restaurants: fixture_restaurants(),
        sites: fixture_sites(),
    }
}

/// Ten days from 2026-03-24 to 2026-04-02, rainy from the 31st.
pub fn fixture_weather() -> Vec<DailyWeather> {
    (0..10)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2026, 3, 24).unwrap() + chrono::Duration::days(i);
            let (code, description) = if i < 7 { (1, "Mainly clear") } else { (61, "Slight rain") };
            DailyWeather {
                date,
                weather_code: Some(code),
                weather_description: Some(description.to_string()),
                temperature_max: 14.0 + i as f64,
                temperature_min: 6.0,
                daylight_hours: Some(12.0),
            }
        })
        .collect()
}

fn trip(from: &str, to: &str, departure: &str, price: Option<f64>) -> CachedTrip {
    CachedTrip {
        from: from.to_string(),
        to: to.to_string(),
        departure: departure.to_string(),
        arrival: departure.to_string(),
        duration_hours: Some(1.03),
        price,
        departure_station: None,
        arrival_station: None,
    }
}

pub fn fixture_train_trips() -> Vec<CachedTrip> {
    vec![
        trip("Paris", "Lille", "28-03-2026 07:16", Some(29.0)),
        trip("London", "Lille", "28-03-2026 08:01", Some(64.0)),
        trip("Lille", "Paris", "31-03-2026 18:46", None),
    ]
}
