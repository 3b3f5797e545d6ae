use crate::models::itinerary::{DayPlan, Recap, TripPlan};
use crate::models::poi::Poi;
use crate::services::selection_service::{select_hotel, select_nearby, select_one};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::collections::HashSet;

const ACTIVITIES_PER_SLOT: usize = 2;

#[derive(Debug, Clone)]
pub struct ItineraryGenerationConfig {
    /// Venues visited per half-day (morning, afternoon).
    pub activities_per_slot: usize,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            activities_per_slot: ACTIVITIES_PER_SLOT,
        }
    }
}

/// Names committed so far while building one trip. Only grows.
#[derive(Debug, Default)]
struct UsageSets {
    activities: HashSet<String>,
    restaurants: HashSet<String>,
}

impl UsageSets {
    fn record_activities(&mut self, picked: &[&Poi]) {
        self.activities
            .extend(picked.iter().map(|poi| poi.name.clone()));
    }

    fn record_meal(&mut self, picked: Option<&Poi>) {
        if let Some(poi) = picked {
            self.restaurants.insert(poi.name.clone());
        }
    }

    fn into_recap(self, hotel: Option<&Poi>) -> Recap {
        let mut unique_restaurants: Vec<String> = self.restaurants.into_iter().collect();
        unique_restaurants.sort();
        let mut unique_activities: Vec<String> = self.activities.into_iter().collect();
        unique_activities.sort();

        Recap {
            hotel: hotel.map(|h| h.name.clone()),
            unique_restaurants,
            unique_activities,
        }
    }
}

pub struct ItineraryGenerator {
    config: ItineraryGenerationConfig,
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryGenerator {
    pub fn new() -> Self {
        Self {
            config: ItineraryGenerationConfig::default(),
        }
    }

    pub fn with_config(config: ItineraryGenerationConfig) -> Self {
        Self { config }
    }

    /// Build a day-by-day plan starting on `start_date`.
    ///
    /// Every day gets two proximity-clustered activity slots and three
    /// dining slots. No activity and no restaurant is used twice within the
    /// trip. Once the pools run dry the remaining slots stay empty; this
    /// never fails. Days that would fall past the last representable date
    /// are left out.
    ///
    /// The hotel is drawn once, outside the no-repeat bookkeeping, and only
    /// shows up in the recap.
    pub fn build_trip<R>(
        &self,
        rng: &mut R,
        start_date: NaiveDate,
        nb_days: u32,
        hotels: &[Poi],
        restaurants: &[Poi],
        sites: &[Poi],
    ) -> (TripPlan, Recap)
    where
        R: Rng + ?Sized,
    {
        let hotel = select_hotel(rng, hotels);

        // Filtered once, reused for every day.
        let restaurants_pool: Vec<&Poi> = restaurants.iter().filter(|r| r.is_located()).collect();
        let sites_pool: Vec<&Poi> = sites.iter().filter(|s| s.is_located()).collect();

        let mut used = UsageSets::default();
        let mut days = Vec::with_capacity(nb_days as usize);
        let per_slot = self.config.activities_per_slot;

        for i in 0..nb_days {
            let Some(date) = start_date.checked_add_signed(Duration::days(i as i64)) else {
                log::warn!(
                    "Trip from {} ends past the calendar, stopping at day {}",
                    start_date,
                    i
                );
                break;
            };

            let morning =
                select_nearby(rng, sites_pool.iter().copied(), per_slot, &used.activities);
            used.record_activities(&morning);

            let afternoon =
                select_nearby(rng, sites_pool.iter().copied(), per_slot, &used.activities);
            used.record_activities(&afternoon);

            let breakfast = select_one(rng, restaurants_pool.iter().copied(), &used.restaurants);
            used.record_meal(breakfast);
            let lunch = select_one(rng, restaurants_pool.iter().copied(), &used.restaurants);
            used.record_meal(lunch);
            let dinner = select_one(rng, restaurants_pool.iter().copied(), &used.restaurants);
            used.record_meal(dinner);

            log::debug!(
                "Day {} ({}): {} morning, {} afternoon, {} meals",
                i + 1,
                date,
                morning.len(),
                afternoon.len(),
                [breakfast, lunch, dinner].iter().flatten().count()
            );

            days.push(DayPlan {
                day: i + 1,
                date,
                morning_activities: morning.into_iter().cloned().collect(),
                afternoon_activities: afternoon.into_iter().cloned().collect(),
                breakfast: breakfast.cloned(),
                lunch: lunch.cloned(),
                dinner: dinner.cloned(),
            });
        }

        let recap = used.into_recap(hotel);
        log::info!(
            "Generated {}-day trip: {} activities, {} restaurants, hotel {}",
            nb_days,
            recap.unique_activities.len(),
            recap.unique_restaurants.len(),
            recap.hotel.as_deref().unwrap_or("none")
        );

        (TripPlan { days }, recap)
    }
}
