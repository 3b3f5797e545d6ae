pub mod budget;
pub mod itinerary;
pub mod poi;
pub mod transport;
pub mod weather;

// Dates go out in the dashboard's display format.
pub(crate) mod display_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }
}
