//! Per-family plot configurations.
//!
//! A [`FamilyConfig`] is the explicit, setup-time description of one
//! distribution plot: the family, the plotting interval, the initial mode and
//! one slider per parameter the family requires.

use serde::{Deserialize, Serialize};

use crate::distribution::Family;
use crate::error::ConfigError;
use crate::grid::Interval;
use crate::mode::RenderMode;
use crate::slider::SliderSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub family: Family,
    pub interval: Interval,
    #[serde(default)]
    pub mode: RenderMode,
    pub sliders: Vec<SliderSpec>,
}

impl FamilyConfig {
    /// Check the interval, every slider, and that the slider names are
    /// exactly the family's parameter names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.interval.validate()?;

        let family = self.family.name().to_string();
        let required = self.family.parameter_names();

        for (i, spec) in self.sliders.iter().enumerate() {
            spec.validate()?;
            if !required.contains(&spec.name.as_str()) {
                return Err(ConfigError::UnknownParameter {
                    family,
                    name: spec.name.clone(),
                });
            }
            if self.sliders[..i].iter().any(|s| s.name == spec.name) {
                return Err(ConfigError::DuplicateSlider(spec.name.clone()));
            }
        }

        if let Some(missing) = required
            .iter()
            .find(|name| !self.sliders.iter().any(|s| s.name == **name))
        {
            return Err(ConfigError::MissingParameter {
                family,
                name: missing.to_string(),
            });
        }

        Ok(())
    }

    pub fn slider(&self, name: &str) -> Option<&SliderSpec> {
        self.sliders.iter().find(|s| s.name == name)
    }
}

fn loc(value: f64, min: f64, max: f64, step: f64) -> SliderSpec {
    SliderSpec::new("loc", value, min, max, step).label("Location")
}

fn scale(max: f64) -> SliderSpec {
    SliderSpec::new("scale", 1.0, 0.1, max, 0.1).label("Scale")
}

fn interval(low: f64, high: f64) -> Interval {
    Interval { low, high }
}

/// Built-in configuration for `family`.
pub fn default_config(family: Family) -> FamilyConfig {
    let (interval, sliders) = match family {
        Family::Normal => (
            interval(-10.0, 10.0),
            vec![loc(0.0, -5.0, 5.0, 0.1), scale(5.0)],
        ),
        Family::Logistic => (
            interval(-10.0, 10.0),
            vec![loc(0.0, -5.0, 5.0, 0.1), scale(5.0)],
        ),
        Family::Beta => (
            interval(0.0, 1.0),
            vec![
                SliderSpec::new("a", 2.0, 0.1, 10.0, 0.1).label("Alpha (a)"),
                SliderSpec::new("b", 2.0, 0.1, 10.0, 0.1).label("Beta (b)"),
                loc(0.0, -0.5, 0.5, 0.05),
                SliderSpec::new("scale", 1.0, 0.1, 2.0, 0.05).label("Scale"),
            ],
        ),
        Family::Exponential => (
            interval(0.0, 10.0),
            vec![loc(0.0, 0.0, 5.0, 0.1), scale(5.0)],
        ),
        Family::Cosine => (
            interval(-10.0, 10.0),
            vec![loc(0.0, -5.0, 5.0, 0.1), scale(3.0)],
        ),
        Family::ChiSquared => (
            interval(0.0, 100.0),
            vec![
                SliderSpec::new("df", 1.0, 1.0, 50.0, 1.0).label("Degrees of freedom"),
                loc(0.0, 0.0, 20.0, 0.5),
                scale(5.0),
            ],
        ),
        Family::F => (
            interval(0.0, 5.0),
            vec![
                SliderSpec::new("dfn", 5.0, 1.0, 100.0, 1.0).label("Numerator df"),
                SliderSpec::new("dfd", 2.0, 1.0, 100.0, 1.0).label("Denominator df"),
                loc(0.0, 0.0, 2.0, 0.1),
                scale(3.0),
            ],
        ),
        Family::Gamma => (
            interval(0.0, 20.0),
            vec![
                SliderSpec::new("a", 2.0, 0.1, 10.0, 0.1).label("Shape (a)"),
                loc(0.0, 0.0, 5.0, 0.1),
                scale(5.0),
            ],
        ),
        Family::InverseGaussian => (
            interval(0.0, 5.0),
            vec![
                SliderSpec::new("mu", 1.0, 0.1, 5.0, 0.1).label("Mean (mu)"),
                loc(0.0, 0.0, 2.0, 0.1),
                scale(3.0),
            ],
        ),
    };

    FamilyConfig {
        family,
        interval,
        mode: RenderMode::Density,
        sliders,
    }
}

/// Built-in configurations for every family, in [`Family::ALL`] order.
pub fn default_catalog() -> Vec<FamilyConfig> {
    Family::ALL.iter().copied().map(default_config).collect()
}
