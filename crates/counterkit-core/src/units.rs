//! Unit conversion utilities
//!
//! Layout dimensions are stored in inches. These helpers format them for
//! display in either system and parse user input (including fractional
//! inches such as `1 1/2`) back into inches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MM_PER_IN, SQ_IN_PER_SQ_FT};

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    #[default]
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a layout length for display, with its unit label.
///
/// * `value_in` - Value in inches
/// * `system` - Target measurement system
pub fn format_dimension(value_in: f64, system: MeasurementSystem) -> String {
    let label = get_unit_label(system);
    match system {
        MeasurementSystem::Metric => format!("{:.1} {}", value_in * MM_PER_IN, label),
        MeasurementSystem::Imperial => format!("{:.2} {}", value_in, label),
    }
}

/// Format an area given in square inches as square feet.
pub fn format_area(value_sq_in: f64) -> String {
    format!("{:.2} ft²", value_sq_in / SQ_IN_PER_SQ_FT)
}

/// Parse a length string to inches
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    match system {
        MeasurementSystem::Metric => {
            let mm = input.parse::<f64>().map_err(|e| e.to_string())?;
            Ok(mm / MM_PER_IN)
        }
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                return input.parse::<f64>().map_err(|e| e.to_string());
            }

            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if let Some((num, den)) = part.split_once('/') {
                    let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total_inches)
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
