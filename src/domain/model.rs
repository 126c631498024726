use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passenger(pub String);

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single ride. `discount` is present only when a discount was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub driver: Driver,
    #[serde(default)]
    pub passengers: HashSet<Passenger>,
    /// Minutes.
    pub duration: u32,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Trip {
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration: u32,
        cost: f64,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some()
    }

    pub fn carries(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }
}

/// Read-only dataset the queries run against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    pub all_drivers: HashSet<Driver>,
    pub all_passengers: HashSet<Passenger>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    pub fn new(
        all_drivers: impl IntoIterator<Item = Driver>,
        all_passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: all_drivers.into_iter().collect(),
            all_passengers: all_passengers.into_iter().collect(),
            trips,
        }
    }

    pub fn total_income(&self) -> f64 {
        self.trips.iter().map(|trip| trip.cost).sum()
    }

    /// Income per driver, highest first. Drivers without trips are listed
    /// with zero; equal incomes are ordered by driver name.
    pub fn driver_incomes(&self) -> Vec<(Driver, f64)> {
        let mut incomes: HashMap<&Driver, f64> =
            self.all_drivers.iter().map(|driver| (driver, 0.0)).collect();

        for trip in &self.trips {
            *incomes.entry(&trip.driver).or_insert(0.0) += trip.cost;
        }

        let mut sorted: Vec<(Driver, f64)> = incomes
            .into_iter()
            .map(|(driver, income)| (driver.clone(), income))
            .collect();
        sorted.sort_by(|(a_driver, a), (b_driver, b)| {
            b.total_cmp(a).then_with(|| a_driver.cmp(b_driver))
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_and_passenger_are_distinct_by_name() {
        assert_eq!(Driver::new("A"), Driver::new("A"));
        assert_ne!(Driver::new("A"), Driver::new("B"));
        assert_eq!(Passenger::new("P1").to_string(), "P1");
    }

    #[test]
    fn test_trip_discount_flag() {
        let trip = Trip::new(Driver::new("D"), vec![Passenger::new("P")], 10, 5.0);
        assert!(!trip.has_discount());
        assert!(trip.carries(&Passenger::new("P")));

        let discounted = trip.with_discount(0.1);
        assert!(discounted.has_discount());
        assert_eq!(discounted.discount, Some(0.1));
    }

    #[test]
    fn test_driver_incomes_sorted_descending() {
        let park = TaxiPark::new(
            vec![Driver::new("A"), Driver::new("B"), Driver::new("C")],
            vec![],
            vec![
                Trip::new(Driver::new("A"), vec![], 5, 10.0),
                Trip::new(Driver::new("B"), vec![], 5, 30.0),
                Trip::new(Driver::new("A"), vec![], 5, 5.0),
            ],
        );

        let incomes = park.driver_incomes();
        assert_eq!(
            incomes,
            vec![
                (Driver::new("B"), 30.0),
                (Driver::new("A"), 15.0),
                (Driver::new("C"), 0.0),
            ]
        );
        assert_eq!(park.total_income(), 45.0);
    }

    #[test]
    fn test_park_deserializes_without_discount() {
        let json = r#"{
            "all_drivers": ["D0"],
            "all_passengers": ["P0"],
            "trips": [{"driver": "D0", "passengers": ["P0"], "duration": 12, "cost": 3.5}]
        }"#;

        let park: TaxiPark = serde_json::from_str(json).unwrap();
        assert_eq!(park.trips.len(), 1);
        assert_eq!(park.trips[0].discount, None);
        assert!(park.trips[0].carries(&Passenger::new("P0")));
    }
}
