//! POI Service
//!
//! Loads the destination's hotels, restaurants and historical sites from the
//! OpenDataSoft CSV exports kept in the data directory:
//!
//! - `hotels_<city>.csv`
//! - `restaurants_<city>.csv`
//! - `historical_sites_<city>.csv`
//!
//! Files are `;`-delimited UTF-8, possibly BOM-prefixed. A missing file
//! yields an empty pool. Coordinates that are absent or not numeric leave the
//! POI unlocated; the planner skips those on its own.

use crate::error::DataLoadError;
use crate::models::poi::{Destination, Poi, PoiKind};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

const UTF8_BOM: char = '\u{feff}';

pub struct PoiService {
    data_dir: PathBuf,
}

impl PoiService {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load every POI pool for `city`.
    pub fn load_destination(&self, city: &str) -> Result<Destination, DataLoadError> {
        let slug = city.to_lowercase();

        let mut destination = Destination::new(city);
        destination.hotels = self.load_kind(&slug, PoiKind::Hotel)?;
        destination.restaurants = self.load_kind(&slug, PoiKind::Restaurant)?;
        destination.sites = self.load_kind(&slug, PoiKind::Site)?;

        log::info!(
            "Destination {} loaded: {} hotels, {} restaurants, {} sites",
            city,
            destination.hotels.len(),
            destination.restaurants.len(),
            destination.sites.len()
        );

        Ok(destination)
    }

    fn load_kind(&self, slug: &str, kind: PoiKind) -> Result<Vec<Poi>, DataLoadError> {
        let path = self
            .data_dir
            .join(format!("{}_{}.csv", kind.file_prefix(), slug));

        if !path.exists() {
            log::warn!("{} not found, continuing without it", path.display());
            return Ok(Vec::new());
        }

        let pois = parse_pois(File::open(&path)?, kind)?;
        let located = pois.iter().filter(|poi| poi.is_located()).count();

        let mut names = HashSet::new();
        let repeated = pois
            .iter()
            .filter(|&poi| poi.has_name() && !names.insert(poi.name.as_str()))
            .count();
        if repeated > 0 {
            // The planner keys on names, so only the first row of each is ever picked.
            log::warn!("{}: {} rows repeat an earlier name", path.display(), repeated);
        }
        log::debug!(
            "{}: {} rows, {} with coordinates",
            path.display(),
            pois.len(),
            located
        );

        Ok(pois)
    }
}

/// Parse one export. Columns other than `name`, `latitude` and `longitude`
/// are kept as metadata; empty cells are dropped.
pub fn parse_pois<R: Read>(reader: R, kind: PoiKind) -> Result<Vec<Poi>, DataLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(UTF8_BOM).to_string())
        .collect();

    let mut pois = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut poi = Poi::new("", kind);

        for (header, value) in headers.iter().zip(record.iter()) {
            if value.is_empty() {
                continue;
            }
            match header.as_str() {
                "name" => poi.name = value.to_string(),
                "latitude" => poi.latitude = parse_coordinate(value),
                "longitude" => poi.longitude = parse_coordinate(value),
                // reserved for the POI's own kind
                "kind" => {}
                _ => {
                    poi.metadata.insert(header.clone(), value.to_string());
                }
            }
        }

        pois.push(poi);
    }

    Ok(pois)
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|c| c.is_finite())
}
