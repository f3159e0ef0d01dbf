//! Single-day load-shedding simulator: load a demand profile, apply a
//! threshold control rule, and summarize the peak reduction.

pub mod config;
pub mod io;
pub mod profile;
pub mod report;
/// Table types, controllers, pipeline, and summary.
pub mod sim;
