pub mod queries;
pub mod report;

pub use crate::domain::model::{Driver, Passenger, TaxiPark, Trip};
pub use crate::domain::ports::ParkQueries;
pub use crate::utils::error::Result;
