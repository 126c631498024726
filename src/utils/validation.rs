use crate::domain::model::TaxiPark;
use crate::utils::error::{Result, TaxiParkError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaxiParkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TaxiParkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

fn validate_amount(trip_index: usize, what: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TaxiParkError::InvalidTripError {
            trip_index,
            reason: format!("{} must be a finite, non-negative number (got {})", what, amount),
        });
    }
    Ok(())
}

/// Checks the invariants the queries assume: every trip refers to known
/// drivers and passengers and carries sane amounts.
impl Validate for TaxiPark {
    fn validate(&self) -> Result<()> {
        for (trip_index, trip) in self.trips.iter().enumerate() {
            if !self.all_drivers.contains(&trip.driver) {
                return Err(TaxiParkError::UnknownDriverError {
                    trip_index,
                    driver: trip.driver.to_string(),
                });
            }

            let mut unknown: Vec<_> = trip
                .passengers
                .iter()
                .filter(|passenger| !self.all_passengers.contains(*passenger))
                .collect();
            unknown.sort();
            if let Some(passenger) = unknown.first() {
                return Err(TaxiParkError::UnknownPassengerError {
                    trip_index,
                    passenger: passenger.to_string(),
                });
            }

            validate_amount(trip_index, "cost", trip.cost)?;
            if let Some(discount) = trip.discount {
                validate_amount(trip_index, "discount", discount)?;
            }
        }

        tracing::debug!("Validated taxi park with {} trips", self.trips.len());
        Ok(())
    }
}
