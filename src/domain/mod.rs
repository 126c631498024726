// Domain layer: dataset model and the query port. No I/O here.

pub mod model;
pub mod ports;
