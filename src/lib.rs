//! Monster Stats - creature inspection for a simulation engine
//!
//! This module exposes the inspection core and the bundled engine for
//! testing and external use.

pub mod build_info;
pub mod cli;
pub mod colour;
pub mod constants;
pub mod engine;
pub mod error;
pub mod simulator;
pub mod telemetry;

pub use error::{StatsError, StatsResult};
