pub mod plot;
pub mod tsplib;
