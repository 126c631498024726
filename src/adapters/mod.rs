// Adapters layer: getting a park in from the outside world.

pub mod park_file;
