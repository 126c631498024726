use crate::domain::model::TaxiPark;
use crate::utils::error::Result;
use std::path::Path;

/// Reads a park from a JSON file of the form
/// `{"all_drivers": [...], "all_passengers": [...], "trips": [...]}`.
pub fn load_park<P: AsRef<Path>>(path: P) -> Result<TaxiPark> {
    let path = path.as_ref();
    tracing::info!("📁 Loading taxi park from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    parse_park(&content)
}

pub fn parse_park(content: &str) -> Result<TaxiPark> {
    let park: TaxiPark = serde_json::from_str(content)?;
    tracing::debug!(
        "Parsed park: {} drivers, {} passengers, {} trips",
        park.all_drivers.len(),
        park.all_passengers.len(),
        park.trips.len()
    );
    Ok(park)
}
