//! Sample grids over a plotting interval.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of sample points used when nothing else is configured.
pub const DEFAULT_POINTS: usize = 100;

/// Closed plotting interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    /// Create a validated interval. `low` must be strictly below `high`.
    pub fn new(low: f64, high: f64) -> Result<Self, ConfigError> {
        let interval = Self { low, high };
        interval.validate()?;
        Ok(interval)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low.is_finite() && self.high.is_finite() && self.low < self.high {
            Ok(())
        } else {
            Err(ConfigError::EmptyInterval {
                low: self.low,
                high: self.high,
            })
        }
    }

    /// Evenly spaced sample points over this interval.
    pub fn grid(&self, count: usize) -> Vec<f64> {
        linspace(self.low, self.high, count)
    }
}

/// `count` evenly spaced values from `low` to `high` inclusive.
///
/// The first value is exactly `low` and the last exactly `high`. Degenerate
/// inputs are not guarded: `count == 0` yields an empty grid, `count == 1`
/// yields `[low]`, and `low >= high` yields a non-increasing sequence.
pub fn linspace(low: f64, high: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| low + i as f64 * step).collect();
            points[count - 1] = high;
            points
        }
    }
}

/// Validate a configured grid point count.
pub fn validate_points(count: usize) -> Result<usize, ConfigError> {
    if count < 2 {
        Err(ConfigError::TooFewPoints(count))
    } else {
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_exact() {
        let grid = linspace(-10.0, 10.0, DEFAULT_POINTS);
        assert_eq!(grid.len(), DEFAULT_POINTS);
        assert_eq!(grid[0], -10.0);
        assert_eq!(grid[DEFAULT_POINTS - 1], 10.0);
    }

    #[test]
    fn test_linspace_strictly_increasing() {
        for (low, high) in [(0.0, 1.0), (-10.0, 10.0), (0.0, 100.0), (1e-6, 2e-6), (-3.5, -3.4)] {
            let grid = linspace(low, high, DEFAULT_POINTS);
            assert_eq!(grid.len(), DEFAULT_POINTS);
            assert!(
                grid.windows(2).all(|w| w[0] < w[1]),
                "grid over [{low}, {high}] is not strictly increasing"
            );
        }
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn test_linspace_inverted_interval_is_not_guarded() {
        let grid = linspace(1.0, 0.0, 5);
        assert_eq!(grid.len(), 5);
        assert!(grid.windows(2).all(|w| w[0] > w[1]));

        let flat = linspace(2.0, 2.0, 3);
        assert_eq!(flat, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_interval_validation() {
        assert!(Interval::new(0.0, 1.0).is_ok());
        assert_eq!(
            Interval::new(1.0, 1.0),
            Err(ConfigError::EmptyInterval { low: 1.0, high: 1.0 })
        );
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Interval::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_points() {
        assert_eq!(validate_points(100), Ok(100));
        assert_eq!(validate_points(2), Ok(2));
        assert_eq!(validate_points(1), Err(ConfigError::TooFewPoints(1)));
    }
}
