use crate::core::ParkQueries;
use crate::domain::model::{Driver, Passenger, TaxiPark};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;

const PERIOD_MINUTES: u32 = 10;

impl ParkQueries for TaxiPark {
    fn find_fake_drivers(&self) -> HashSet<Driver> {
        let active: HashSet<&Driver> = self.trips.iter().map(|trip| &trip.driver).collect();

        let fake: HashSet<Driver> = self
            .all_drivers
            .iter()
            .filter(|driver| !active.contains(driver))
            .cloned()
            .collect();

        tracing::debug!("Found {} fake drivers", fake.len());
        fake
    }

    fn find_faithful_passengers(&self, min_trips: u32) -> HashSet<Passenger> {
        let counts = trips_per_passenger(self.trips.iter().flat_map(|trip| &trip.passengers));

        let faithful: HashSet<Passenger> = self
            .all_passengers
            .iter()
            .filter(|passenger| counts.get(passenger).copied().unwrap_or(0) >= min_trips as usize)
            .cloned()
            .collect();

        tracing::debug!(
            "Found {} passengers with at least {} trips",
            faithful.len(),
            min_trips
        );
        faithful
    }

    fn find_frequent_passengers(&self, driver: &Driver) -> HashSet<Passenger> {
        let counts = trips_per_passenger(
            self.trips
                .iter()
                .filter(|trip| &trip.driver == driver)
                .flat_map(|trip| &trip.passengers),
        );

        let frequent: HashSet<Passenger> = self
            .all_passengers
            .iter()
            .filter(|passenger| counts.get(passenger).copied().unwrap_or(0) > 1)
            .cloned()
            .collect();

        tracing::debug!(
            "Found {} frequent passengers of driver {}",
            frequent.len(),
            driver
        );
        frequent
    }

    fn find_smart_passengers(&self) -> HashSet<Passenger> {
        // (with discount, without discount)
        let mut tally: HashMap<&Passenger, (usize, usize)> = HashMap::new();
        for trip in &self.trips {
            for passenger in &trip.passengers {
                let entry = tally.entry(passenger).or_default();
                if trip.has_discount() {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        let smart: HashSet<Passenger> = self
            .all_passengers
            .iter()
            .filter(|passenger| {
                tally
                    .get(passenger)
                    .is_some_and(|(discounted, full_price)| discounted > full_price)
            })
            .cloned()
            .collect();

        tracing::debug!("Found {} smart passengers", smart.len());
        smart
    }

    fn find_the_most_frequent_trip_duration_period(&self) -> Option<RangeInclusive<u32>> {
        let mut periods: BTreeMap<u32, usize> = BTreeMap::new();
        for trip in &self.trips {
            *periods.entry(trip.duration / PERIOD_MINUTES).or_insert(0) += 1;
        }

        // Equal counts resolve to the earliest period.
        let (period, count) = periods
            .into_iter()
            .max_by(|(a_period, a), (b_period, b)| a.cmp(b).then(b_period.cmp(a_period)))?;

        let start = period * PERIOD_MINUTES;
        let end = start.saturating_add(PERIOD_MINUTES - 1);
        tracing::debug!("Most frequent duration period {}..={} ({} trips)", start, end, count);
        Some(start..=end)
    }

    fn check_pareto_principle(&self) -> bool {
        if self.trips.is_empty() {
            return false;
        }

        let total = self.total_income();
        // floor(20% of all drivers)
        let top_drivers = self.all_drivers.len() / 5;
        let top_income: f64 = self
            .driver_incomes()
            .into_iter()
            .take(top_drivers)
            .map(|(_, income)| income)
            .sum();

        tracing::debug!(
            "Top {} drivers earn {:.2} of {:.2} total income",
            top_drivers,
            top_income,
            total
        );
        top_income >= 0.8 * total
    }
}

fn trips_per_passenger<'a>(
    passengers: impl Iterator<Item = &'a Passenger>,
) -> HashMap<&'a Passenger, usize> {
    let mut counts = HashMap::new();
    for passenger in passengers {
        *counts.entry(passenger).or_insert(0) += 1;
    }
    counts
}
