use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiKind {
    Hotel,
    Restaurant,
    Site,
}

impl PoiKind {
    /// Prefix of the destination export holding this kind of POI.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            PoiKind::Hotel => "hotels",
            PoiKind::Restaurant => "restaurants",
            PoiKind::Site => "historical_sites",
        }
    }

    /// Path segment used by `/api/pois/{kind}`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment.to_lowercase().as_str() {
            "hotels" | "hotel" => Some(PoiKind::Hotel),
            "restaurants" | "restaurant" => Some(PoiKind::Restaurant),
            "sites" | "site" | "historical_sites" => Some(PoiKind::Site),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A hotel, restaurant or historical site of the destination.
///
/// `name` is the identity key used by the planner's no-repeat rules. The
/// coordinates stay optional because the upstream exports are not reliably
/// geocoded; [`Poi::location`] is the single place that decides whether a POI
/// can be placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poi {
    pub name: String,
    pub kind: PoiKind,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, String>,
}

impl Poi {
    pub fn new(name: impl Into<String>, kind: PoiKind) -> Self {
        Self {
            name: name.into(),
            kind,
            latitude: None,
            longitude: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Both coordinates, when present and finite.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GeoPoint::new(lat, lon))
            }
            _ => None,
        }
    }

    pub fn is_located(&self) -> bool {
        self.location().is_some()
    }
}

/// All POIs loaded for one destination city.
#[derive(Debug, Clone, Default)]
pub struct Destination {
    pub city: String,
    pub hotels: Vec<Poi>,
    pub restaurants: Vec<Poi>,
    pub sites: Vec<Poi>,
}

impl Destination {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Default::default()
        }
    }

    pub fn pool(&self, kind: PoiKind) -> &[Poi] {
        match kind {
            PoiKind::Hotel => &self.hotels,
            PoiKind::Restaurant => &self.restaurants,
            PoiKind::Site => &self.sites,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.restaurants.is_empty() && self.sites.is_empty()
    }
}
