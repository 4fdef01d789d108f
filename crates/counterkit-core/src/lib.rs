//! # CounterKit Core
//!
//! Core types shared by the CounterKit crates: the error hierarchy,
//! layout constants and measurement-unit helpers.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{Error, LayoutError, Result};
pub use units::MeasurementSystem;
