pub mod distance_service;
pub mod itinerary_generation_service;
pub mod poi_service;
pub mod pricing_service;
pub mod selection_service;
pub mod transport_service;
pub mod weather_service;
