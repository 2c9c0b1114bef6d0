// File: crates/heatmap-core/src/dataset.rs
// Summary: Temperature dataset model with schema validation and derived extents.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("dataset contains no observations")]
    Empty,
    #[error("observation {year}-{month:02} has month outside 1..=12")]
    InvalidObservation { year: i32, month: u32 },
}

/// Root entity of the remote JSON document. Immutable after load; the
/// renderer only reads it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    /// Reference temperature in degrees Celsius.
    pub base_temperature: f64,
    /// Observations in the order received; not required to be sorted.
    pub monthly_variance: Vec<Observation>,
}

/// One monthly reading: deviation from the base temperature.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Observation {
    pub year: i32,
    /// One-based calendar month (1..=12).
    pub month: u32,
    pub variance: f64,
}

impl Observation {
    /// Absolute temperature under the given base.
    pub fn temperature(&self, base: f64) -> f64 {
        base + self.variance
    }
}

impl TemperatureDataset {
    /// Enforce the schema invariants: at least one observation and every
    /// month inside the calendar range.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        for obs in &self.monthly_variance {
            if !(1..=12).contains(&obs.month) {
                return Err(DatasetError::InvalidObservation { year: obs.year, month: obs.month });
            }
        }
        Ok(())
    }

    /// Min/max calendar year over all observations. (0, 0) when empty.
    pub fn year_extent(&self) -> (i32, i32) {
        let mut min_y = i32::MAX;
        let mut max_y = i32::MIN;
        for obs in &self.monthly_variance {
            min_y = min_y.min(obs.year);
            max_y = max_y.max(obs.year);
        }
        if min_y > max_y {
            return (0, 0);
        }
        (min_y, max_y)
    }

    /// Min/max absolute temperature (base + variance) over all observations.
    /// (base, base) when empty.
    pub fn temperature_extent(&self) -> (f64, f64) {
        let mut min_t = f64::INFINITY;
        let mut max_t = f64::NEG_INFINITY;
        for obs in &self.monthly_variance {
            let t = obs.temperature(self.base_temperature);
            min_t = min_t.min(t);
            max_t = max_t.max(t);
        }
        if !min_t.is_finite() || !max_t.is_finite() {
            return (self.base_temperature, self.base_temperature);
        }
        (min_t, max_t)
    }
}
