use crate::config::AppConfig;
use crate::models::poi::Destination;
use crate::models::transport::CachedTrip;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::weather_service::WeatherService;

/// Shared, read-only state handed to every worker.
pub struct AppState {
    pub config: AppConfig,
    pub destination: Destination,
    pub generator: ItineraryGenerator,
    pub weather: WeatherService,
    pub train_trips: Vec<CachedTrip>,
}

impl AppState {
    pub fn new(config: AppConfig, destination: Destination) -> Self {
        Self {
            config,
            destination,
            generator: ItineraryGenerator::new(),
            weather: WeatherService::default(),
            train_trips: Vec::new(),
        }
    }

    pub fn with_weather(mut self, weather: WeatherService) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_train_trips(mut self, train_trips: Vec<CachedTrip>) -> Self {
        self.train_trips = train_trips;
        self
    }
}
