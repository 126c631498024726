use crate::config::ReportConfig;
use crate::core::ParkQueries;
use crate::domain::model::{Driver, Passenger, TaxiPark};
use crate::utils::error::{Result, TaxiParkError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverIncome {
    pub driver: Driver,
    pub income: f64,
}

/// Answers to all park queries, with sets flattened into sorted lists.
#[derive(Debug, Clone, Serialize)]
pub struct ParkReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub driver_count: usize,
    pub passenger_count: usize,
    pub trip_count: usize,
    pub total_income: f64,
    pub fake_drivers: Vec<Driver>,
    pub min_trips: u32,
    pub faithful_passengers: Vec<Passenger>,
    pub frequent_passengers: BTreeMap<Driver, Vec<Passenger>>,
    pub smart_passengers: Vec<Passenger>,
    pub most_frequent_duration_period: Option<RangeInclusive<u32>>,
    pub driver_incomes: Vec<DriverIncome>,
    pub pareto_principle: bool,
}

fn sorted<T: Ord>(set: HashSet<T>) -> Vec<T> {
    let mut items: Vec<T> = set.into_iter().collect();
    items.sort();
    items
}

impl ParkReport {
    pub fn generate(park: &TaxiPark, config: &ReportConfig) -> Self {
        tracing::info!(
            "📊 Generating report '{}' for {} drivers, {} passengers, {} trips",
            config.report.name,
            park.all_drivers.len(),
            park.all_passengers.len(),
            park.trips.len()
        );

        let focus: Vec<Driver> = match &config.report.frequent_passengers_of {
            Some(names) => names.iter().map(Driver::new).collect(),
            None => sorted(park.all_drivers.clone()),
        };

        let frequent_passengers = focus
            .into_iter()
            .map(|driver| {
                if !park.all_drivers.contains(&driver) {
                    tracing::warn!("⚠️ Driver '{}' is not part of the park", driver);
                }
                let passengers = sorted(park.find_frequent_passengers(&driver));
                (driver, passengers)
            })
            .collect();

        let driver_incomes = park
            .driver_incomes()
            .into_iter()
            .map(|(driver, income)| DriverIncome { driver, income })
            .collect();

        let report = Self {
            name: config.report.name.clone(),
            generated_at: Utc::now(),
            driver_count: park.all_drivers.len(),
            passenger_count: park.all_passengers.len(),
            trip_count: park.trips.len(),
            total_income: park.total_income(),
            fake_drivers: sorted(park.find_fake_drivers()),
            min_trips: config.min_trips(),
            faithful_passengers: sorted(park.find_faithful_passengers(config.min_trips())),
            frequent_passengers,
            smart_passengers: sorted(park.find_smart_passengers()),
            most_frequent_duration_period: park.find_the_most_frequent_trip_duration_period(),
            driver_incomes,
            pareto_principle: park.check_pareto_principle(),
        };

        tracing::info!("✅ Report '{}' generated", report.name);
        report
    }

    /// Renders the report in the configured output format.
    pub fn render(&self, config: &ReportConfig) -> Result<String> {
        match config.format() {
            "text" => Ok(self.to_text()),
            "json" => self.to_json(config.output.pretty),
            "csv" => self.income_csv(),
            other => Err(TaxiParkError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported output format".to_string(),
            }),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Driver income table, highest earner first.
    pub fn income_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["driver", "income"])?;
        for row in &self.driver_incomes {
            let income = format!("{:.2}", row.income);
            writer.write_record([row.driver.name(), income.as_str()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| TaxiParkError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Report: {} ({})", self.name, self.generated_at.to_rfc3339());
        let _ = writeln!(
            out,
            "Park: {} drivers, {} passengers, {} trips, income {:.2}",
            self.driver_count, self.passenger_count, self.trip_count, self.total_income
        );
        let _ = writeln!(out, "Fake drivers: {}", join(&self.fake_drivers));
        let _ = writeln!(
            out,
            "Faithful passengers (>= {} trips): {}",
            self.min_trips,
            join(&self.faithful_passengers)
        );
        let _ = writeln!(out, "Frequent passengers:");
        for (driver, passengers) in &self.frequent_passengers {
            let _ = writeln!(out, "  {}: {}", driver, join(passengers));
        }
        let _ = writeln!(out, "Smart passengers: {}", join(&self.smart_passengers));
        let period = match &self.most_frequent_duration_period {
            Some(period) => format!("{}..{} min", period.start(), period.end()),
            None => "-".to_string(),
        };
        let _ = writeln!(out, "Most frequent trip duration: {}", period);
        let _ = writeln!(
            out,
            "Pareto principle (20% of drivers earn 80%): {}",
            if self.pareto_principle { "yes" } else { "no" }
        );
        out
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
