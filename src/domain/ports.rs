use crate::domain::model::{Driver, Passenger};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// The analytical questions asked of a taxi park. Implementations must not
/// mutate the park and must not fail on well-formed input.
pub trait ParkQueries {
    /// Drivers that performed no trips.
    fn find_fake_drivers(&self) -> HashSet<Driver>;

    /// Passengers that completed at least `min_trips` trips.
    fn find_faithful_passengers(&self, min_trips: u32) -> HashSet<Passenger>;

    /// Passengers taken by `driver` more than once.
    fn find_frequent_passengers(&self, driver: &Driver) -> HashSet<Passenger>;

    /// Passengers that had a discount for the majority of their trips.
    fn find_smart_passengers(&self) -> HashSet<Passenger>;

    /// Most frequent ten-minute duration period (0..=9, 10..=19, ...).
    /// `None` when there are no trips.
    fn find_the_most_frequent_trip_duration_period(&self) -> Option<RangeInclusive<u32>>;

    /// Whether 20% of the drivers earn at least 80% of the income.
    fn check_pareto_principle(&self) -> bool;
}
