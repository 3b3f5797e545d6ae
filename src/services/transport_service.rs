//! Getting to the destination: the train routes catalogue and the cost of
//! driving a known distance.
//!
//! Distances and durations come from the directions provider upstream; this
//! module only turns them into money and display strings. Journeys from the
//! last SNCF search are read back from `train_trips.csv`.

use crate::error::DataLoadError;
use crate::models::transport::{CachedTrip, CostEstimate, TrainRoute, TravelProfile};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const TRAIN_TRIPS_FILE: &str = "train_trips.csv";

const FUEL_PRICE_EUR_L: f64 = 1.75;
const AVG_CONSUMPTION_L_100KM: f64 = 6.0;
const TOLL_EUR_KM: f64 = 9.5 / 100.0;

static TRAIN_ROUTES: [TrainRoute; 3] = [
    TrainRoute {
        route: "Paris → Lille",
        price_min: 10.50,
        price_max: 30.00,
        operator: "OUIGO / TGV",
        departure_station: "Paris Gare du Nord",
        arrival_station: "Lille Flandres",
        duration: "~1h02",
    },
    TrainRoute {
        route: "London → Lille",
        price_min: 44.00,
        price_max: 126.00,
        operator: "Eurostar",
        departure_station: "London St Pancras",
        arrival_station: "Lille Europe",
        duration: "~1h22",
    },
    TrainRoute {
        route: "Brussels → Lille",
        price_min: 15.00,
        price_max: 24.00,
        operator: "TGV / Thalys",
        departure_station: "Bruxelles-Midi",
        arrival_station: "Lille Europe",
        duration: "~0h35",
    },
];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub struct TransportService;

impl TransportService {
    pub fn train_routes() -> &'static [TrainRoute] {
        &TRAIN_ROUTES
    }

    /// Fuel and toll cost of driving `distance_m` meters. Tolls only apply
    /// to the car profile.
    pub fn estimate_cost(distance_m: f64, profile: TravelProfile) -> CostEstimate {
        let km = distance_m / 1000.0;
        let liters = (km / 100.0) * AVG_CONSUMPTION_L_100KM;
        let fuel = liters * FUEL_PRICE_EUR_L;
        let toll = if profile == TravelProfile::DrivingCar {
            km * TOLL_EUR_KM
        } else {
            0.0
        };

        CostEstimate {
            total_cost_eur: round_to(fuel + toll, 2),
            fuel_cost_eur: round_to(fuel, 2),
            toll_cost_eur: round_to(toll, 2),
            liters_fuel: round_to(liters, 2),
            distance_km: round_to(km, 1),
        }
    }

    pub fn format_duration(seconds: Option<f64>) -> String {
        let Some(seconds) = seconds else {
            return "N/A".to_string();
        };
        let minutes = (seconds / 60.0).round() as i64;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        if hours > 0 {
            format!("{}h{:02}", hours, minutes)
        } else {
            format!("{} min", minutes)
        }
    }

    pub fn format_km(meters: Option<f64>) -> String {
        match meters {
            Some(m) => format!("{:.1} km", m / 1000.0),
            None => "N/A".to_string(),
        }
    }

    /// Journeys cached by the last SNCF search. No cache means no trips.
    pub fn load_cached_trips(data_dir: &Path) -> Result<Vec<CachedTrip>, DataLoadError> {
        let path = data_dir.join(TRAIN_TRIPS_FILE);
        if !path.exists() {
            log::warn!("{} not found, no cached train trips", path.display());
            return Ok(Vec::new());
        }

        let trips = parse_cached_trips(File::open(&path)?)?;
        log::info!("Loaded {} cached train trips", trips.len());
        Ok(trips)
    }

    /// Trips matching the optional endpoints, case-insensitively.
    pub fn filter_trips<'a>(
        trips: &'a [CachedTrip],
        from: Option<&str>,
        to: Option<&str>,
    ) -> Vec<&'a CachedTrip> {
        let matches = |wanted: Option<&str>, city: &str| {
            wanted.map_or(true, |w| w.trim().eq_ignore_ascii_case(city.trim()))
        };

        trips
            .iter()
            .filter(|trip| matches(from, &trip.from) && matches(to, &trip.to))
            .collect()
    }
}

/// Rows missing an endpoint or a time are skipped.
pub fn parse_cached_trips<R: Read>(reader: R) -> Result<Vec<CachedTrip>, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trips = Vec::new();
    for (line, row) in csv_reader.deserialize::<CachedTrip>().enumerate() {
        match row {
            Ok(trip) => trips.push(trip),
            Err(e) => log::warn!("Skipping cached trip row {}: {}", line + 1, e),
        }
    }
    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_targets_lille() {
        let routes = TransportService::train_routes();
        assert_eq!(routes.len(), 3);
        assert!(routes.iter().all(|r| r.route.ends_with("Lille")));
        assert!(routes.iter().all(|r| r.price_min <= r.price_max));
    }

    #[test]
    fn test_car_cost_includes_toll() {
        let est = TransportService::estimate_cost(200_000.0, TravelProfile::DrivingCar);
        assert_eq!(est.distance_km, 200.0);
        assert_eq!(est.liters_fuel, 12.0);
        assert_eq!(est.fuel_cost_eur, 21.0);
        assert_eq!(est.toll_cost_eur, 19.0);
        assert_eq!(est.total_cost_eur, 40.0);
    }

    #[test]
    fn test_no_toll_off_the_car_profile() {
        let est = TransportService::estimate_cost(100_000.0, TravelProfile::DrivingHgv);
        assert_eq!(est.toll_cost_eur, 0.0);
        assert_eq!(est.total_cost_eur, est.fuel_cost_eur);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(TransportService::format_duration(None), "N/A");
        assert_eq!(TransportService::format_duration(Some(45.0 * 60.0)), "45 min");
        assert_eq!(TransportService::format_duration(Some(2.0 * 3600.0 + 5.0 * 60.0)), "2h05");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(TransportService::format_km(Some(12_345.0)), "12.3 km");
        assert_eq!(TransportService::format_km(None), "N/A");
    }

    const TRIPS_CSV: &str = "from,to,departure,arrival,duration_hours,price,departure_station,arrival_station\n\
        Paris,Lille,28-03-2026 07:16,28-03-2026 08:18,1.03,29.0,Paris Nord,Lille Flandres\n\
        Lyon,Lille,28-03-2026 06:04,28-03-2026 09:08,3.07,0.0,Lyon Part Dieu,Lille Europe\n\
        Lille,Paris,31-03-2026 18:46,31-03-2026 19:48,1.03,N/A\n\
        Lille\n";

    #[test]
    fn test_parse_cached_trips() {
        let trips = parse_cached_trips(TRIPS_CSV.as_bytes()).unwrap();
        assert_eq!(trips.len(), 3);

        assert_eq!(trips[0].price, Some(29.0));
        assert_eq!(trips[0].departure_station.as_deref(), Some("Paris Nord"));

        // Return leg: unreadable price, no stations
        let back = &trips[2];
        assert_eq!(back.from, "Lille");
        assert_eq!(back.duration_hours, Some(1.03));
        assert_eq!(back.price, None);
        assert_eq!(back.arrival_station, None);
    }

    #[test]
    fn test_filter_trips() {
        let trips = parse_cached_trips(TRIPS_CSV.as_bytes()).unwrap();

        assert_eq!(TransportService::filter_trips(&trips, None, None).len(), 3);

        let to_lille = TransportService::filter_trips(&trips, None, Some("lille"));
        assert_eq!(to_lille.len(), 2);

        let from_paris = TransportService::filter_trips(&trips, Some(" PARIS "), Some("Lille"));
        assert_eq!(from_paris.len(), 1);
        assert_eq!(from_paris[0].arrival, "28-03-2026 08:18");
    }

    #[test]
    fn test_missing_cache_is_empty() {
        let trips = TransportService::load_cached_trips(Path::new("/nonexistent/lille-planner"));
        assert!(trips.unwrap().is_empty());
    }
}
