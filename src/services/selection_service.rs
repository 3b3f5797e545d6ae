//! Venue selection for the trip planner.
//!
//! Activities are picked as small geographic clusters: a random seed venue,
//! then a greedy nearest-neighbour chain from the last venue picked. The
//! chain order approximates a walkable route and callers keep it as-is.
//! Dining and hotel slots are plain random picks.
//!
//! A name is a venue's identity: when several rows share one, only the first
//! in pool order is a candidate.
//!
//! None of these functions fail. When fewer venues are eligible than asked
//! for, the caller simply gets fewer.

use crate::models::poi::{GeoPoint, Poi};
use crate::services::distance_service::nearest_index;
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// Pick up to `k` located venues from `pool` whose names are not in
/// `excluded`, clustered by proximity.
///
/// When `k` or more venues are eligible the result starts with a random seed
/// followed by nearest-first picks. Otherwise every eligible venue is
/// returned in pool order.
pub fn select_nearby<'a, R, I>(
    rng: &mut R,
    pool: I,
    k: usize,
    excluded: &HashSet<String>,
) -> Vec<&'a Poi>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Poi>,
{
    let mut seen = HashSet::new();
    let mut remaining: Vec<(&'a Poi, GeoPoint)> = pool
        .into_iter()
        .filter(|poi| poi.has_name() && !excluded.contains(&poi.name))
        .filter_map(|poi| poi.location().map(|point| (poi, point)))
        .filter(|&(poi, _)| seen.insert(poi.name.as_str()))
        .collect();

    if remaining.is_empty() || k == 0 {
        return Vec::new();
    }
    if remaining.len() <= k {
        return remaining.into_iter().map(|(poi, _)| poi).collect();
    }

    let seed_idx = rng.gen_range(0..remaining.len());
    let (seed, mut current) = remaining.remove(seed_idx);
    let mut selected = Vec::with_capacity(k);
    selected.push(seed);

    while selected.len() < k {
        let Some(idx) = nearest_index(current, remaining.iter().map(|(_, point)| *point)) else {
            break;
        };
        let (poi, point) = remaining.remove(idx);
        selected.push(poi);
        current = point;
    }

    selected
}

/// Pick one named venue not in `excluded`. Coordinates are not required.
pub fn select_one<'a, R, I>(rng: &mut R, pool: I, excluded: &HashSet<String>) -> Option<&'a Poi>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Poi>,
{
    let mut seen = HashSet::new();
    let available: Vec<&'a Poi> = pool
        .into_iter()
        .filter(|poi| poi.has_name() && !excluded.contains(&poi.name))
        .filter(|&poi| seen.insert(poi.name.as_str()))
        .collect();

    available.choose(rng).copied()
}

/// Pick the trip's hotel among the located ones.
pub fn select_hotel<'a, R, I>(rng: &mut R, hotels: I) -> Option<&'a Poi>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Poi>,
{
    let located: Vec<&'a Poi> = hotels.into_iter().filter(|hotel| hotel.is_located()).collect();
    located.choose(rng).copied()
}
