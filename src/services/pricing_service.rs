use crate::models::budget::{BudgetBreakdown, BudgetSummary, TransportComparison, TransportMode};

pub const MEAL_BREAKFAST_EUR: f64 = 9.0;
pub const MEAL_LUNCH_EUR: f64 = 14.0;
pub const MEAL_DINNER_EUR: f64 = 14.0;
pub const DAILY_MEAL_TOTAL: f64 = MEAL_BREAKFAST_EUR + MEAL_LUNCH_EUR + MEAL_DINNER_EUR;

pub const HOTEL_BASE_EUR: f64 = 50.0;
pub const HOTEL_STAR_INCREMENT_EUR: f64 = 10.0;

pub const METRO_DAY_PASS_EUR: f64 = 4.64;
pub const PARKING_DAILY_EUR: f64 = 15.0;
pub const CAR_FUEL_BASE_EUR: f64 = 20.0;
pub const TRAIN_BASE_EUR: f64 = 25.0;
pub const TRAIN_TGV_MULTIPLIER: f64 = 1.5;

pub const DEFAULT_BUDGET_CAP_EUR: f64 = 1500.0;

pub struct PricingService;

impl PricingService {
    /// Nightly rate for a hotel of the given star rating
    pub fn hotel_per_night(hotel_stars: u32) -> f64 {
        HOTEL_BASE_EUR + hotel_stars as f64 * HOTEL_STAR_INCREMENT_EUR
    }

    /// One train ticket to the destination
    pub fn train_fare() -> f64 {
        TRAIN_BASE_EUR * TRAIN_TGV_MULTIPLIER
    }

    /// Parking for the whole stay plus the fuel allowance
    pub fn car_cost(nb_days: u32) -> f64 {
        PARKING_DAILY_EUR * nb_days as f64 + CAR_FUEL_BASE_EUR
    }

    /// Full trip budget breakdown
    pub fn estimate_budget(
        nb_days: u32,
        nb_people: u32,
        hotel_stars: u32,
        transport_mode: TransportMode,
    ) -> BudgetBreakdown {
        let days = nb_days as f64;

        let hotel_per_night = Self::hotel_per_night(hotel_stars);
        let hotel_total = hotel_per_night * days;

        let meals_total = DAILY_MEAL_TOTAL * days * nb_people as f64;

        let (transport_total, local_transport) = match transport_mode {
            TransportMode::Train => (Self::train_fare(), METRO_DAY_PASS_EUR * days),
            TransportMode::Car => (Self::car_cost(nb_days), 0.0),
        };

        let grand_total = hotel_total + meals_total + transport_total + local_transport;

        BudgetBreakdown {
            hotel_per_night,
            hotel_total,
            meals_daily: DAILY_MEAL_TOTAL,
            meals_total,
            transport_total,
            local_transport,
            grand_total,
        }
    }

    /// Train for every traveller vs one car for the group
    pub fn compare_transport(nb_days: u32, nb_people: u32) -> TransportComparison {
        TransportComparison {
            train_total: Self::train_fare() * nb_people as f64,
            train_local_transport: METRO_DAY_PASS_EUR * nb_days as f64,
            car_total: Self::car_cost(nb_days),
            car_parking: PARKING_DAILY_EUR * nb_days as f64,
            car_fuel: CAR_FUEL_BASE_EUR,
        }
    }

    pub fn summarize(
        nb_days: u32,
        nb_people: u32,
        hotel_stars: u32,
        transport_mode: TransportMode,
        budget_cap: f64,
    ) -> BudgetSummary {
        let breakdown = Self::estimate_budget(nb_days, nb_people, hotel_stars, transport_mode);
        let remaining = budget_cap - breakdown.grand_total;

        BudgetSummary {
            breakdown,
            budget_cap,
            remaining,
            comparison: Self::compare_transport(nb_days, nb_people),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hotel_rate() {
        assert_eq!(PricingService::hotel_per_night(0), 50.0);
        assert_eq!(PricingService::hotel_per_night(3), 80.0);
        assert_eq!(PricingService::hotel_per_night(5), 100.0);
    }

    #[test]
    fn test_train_budget() {
        let budget = PricingService::estimate_budget(2, 2, 3, TransportMode::Train);

        assert_eq!(budget.hotel_per_night, 80.0);
        assert_eq!(budget.hotel_total, 160.0);
        assert_eq!(budget.meals_daily, 37.0);
        assert_eq!(budget.meals_total, 148.0);
        assert_eq!(budget.transport_total, 37.5);
        assert!(approx_eq(budget.local_transport, 9.28));
        assert!(approx_eq(budget.grand_total, 160.0 + 148.0 + 37.5 + 9.28));
    }

    #[test]
    fn test_car_budget() {
        let budget = PricingService::estimate_budget(3, 1, 1, TransportMode::Car);

        assert_eq!(budget.hotel_total, 180.0);
        assert_eq!(budget.meals_total, 111.0);
        assert_eq!(budget.transport_total, 65.0);
        assert_eq!(budget.local_transport, 0.0);
        assert_eq!(budget.grand_total, 356.0);
    }

    #[test]
    fn test_summary_remaining_against_cap() {
        let summary =
            PricingService::summarize(3, 1, 1, TransportMode::Car, DEFAULT_BUDGET_CAP_EUR);
        assert_eq!(summary.remaining, 1144.0);

        let over = PricingService::summarize(7, 10, 5, TransportMode::Car, 500.0);
        assert!(over.remaining < 0.0);
    }

    #[test]
    fn test_transport_comparison() {
        let cmp = PricingService::compare_transport(2, 4);
        assert_eq!(cmp.train_total, 150.0);
        assert_eq!(cmp.car_total, 50.0);
        assert_eq!(cmp.car_parking, 30.0);
        assert!(approx_eq(cmp.train_local_transport, 9.28));
    }
}
