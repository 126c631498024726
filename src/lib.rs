pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::park_file::{load_park, parse_park};
pub use crate::config::ReportConfig;
pub use crate::core::report::{DriverIncome, ParkReport};
pub use crate::domain::model::{Driver, Passenger, TaxiPark, Trip};
pub use crate::domain::ports::ParkQueries;
pub use crate::utils::error::{Result, TaxiParkError};
