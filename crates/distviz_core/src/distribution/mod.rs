//! Distribution families and their parameter records.
//!
//! Each family declares the parameter names it needs up front
//! ([`Family::parameter_names`]); [`DistributionParams`] is the typed record
//! built from those names, and [`DistributionParams::build`] turns it into an
//! immutable [`Distribution`] for a single render.
//!
//! Every family is a standard form shifted by `loc` and stretched by `scale`:
//! `pdf(x) = f((x - loc) / scale) / scale` and `cdf(x) = F((x - loc) / scale)`.
//! Families whose `statrs` implementation is numerically sound delegate to
//! it; Logistic, Cosine, Inverse Gaussian and F live in [`extra`].

pub mod extra;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use statrs::distribution as sd;
use statrs::distribution::{Continuous, ContinuousCDF};

use crate::error::{ConfigError, DistError};
use extra::{Cosine, FisherSnedecor, InverseGaussian, Logistic};

/// Density and cumulative evaluation over a scalar argument.
///
/// Evaluation outside the support returns a defined value (usually zero for
/// the density and zero or one for the cumulative); it never fails.
pub trait Distribution {
    fn pdf(&self, x: f64) -> f64;
    fn cdf(&self, x: f64) -> f64;
}

macro_rules! delegate_to_statrs {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Distribution for $ty {
                fn pdf(&self, x: f64) -> f64 {
                    Continuous::pdf(self, x)
                }

                fn cdf(&self, x: f64) -> f64 {
                    ContinuousCDF::cdf(self, x)
                }
            }
        )*
    };
}

delegate_to_statrs!(
    sd::Normal,
    sd::Beta,
    sd::Exp,
    sd::ChiSquared,
    sd::Gamma,
);

/// Standard-form distribution shifted by `loc` and stretched by `scale`.
pub struct LocScale {
    inner: Box<dyn Distribution>,
    loc: f64,
    scale: f64,
}

impl LocScale {
    fn standardize(&self, x: f64) -> f64 {
        (x - self.loc) / self.scale
    }
}

impl Distribution for LocScale {
    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(self.standardize(x)) / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(self.standardize(x))
    }
}

/// Supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Normal,
    Logistic,
    Beta,
    Exponential,
    Cosine,
    ChiSquared,
    F,
    Gamma,
    InverseGaussian,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Normal,
        Family::Logistic,
        Family::Beta,
        Family::Exponential,
        Family::Cosine,
        Family::ChiSquared,
        Family::F,
        Family::Gamma,
        Family::InverseGaussian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Normal => "Normal",
            Family::Logistic => "Logistic",
            Family::Beta => "Beta",
            Family::Exponential => "Exponential",
            Family::Cosine => "Cosine",
            Family::ChiSquared => "Chi-Squared",
            Family::F => "F",
            Family::Gamma => "Gamma",
            Family::InverseGaussian => "Inverse Gaussian",
        }
    }

    /// Identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Family::Normal => "normal",
            Family::Logistic => "logistic",
            Family::Beta => "beta",
            Family::Exponential => "exponential",
            Family::Cosine => "cosine",
            Family::ChiSquared => "chi_squared",
            Family::F => "f",
            Family::Gamma => "gamma",
            Family::InverseGaussian => "inverse_gaussian",
        }
    }

    /// Parameter names this family's record is built from, shape parameters first.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Family::Normal | Family::Logistic | Family::Exponential | Family::Cosine => {
                &["loc", "scale"]
            }
            Family::Beta => &["a", "b", "loc", "scale"],
            Family::ChiSquared => &["df", "loc", "scale"],
            Family::F => &["dfn", "dfd", "loc", "scale"],
            Family::Gamma => &["a", "loc", "scale"],
            Family::InverseGaussian => &["mu", "loc", "scale"],
        }
    }

    pub fn index(self) -> usize {
        Family::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let family = match normalized.as_str() {
            "normal" | "norm" | "gaussian" => Family::Normal,
            "logistic" => Family::Logistic,
            "beta" => Family::Beta,
            "exponential" | "expon" | "exp" => Family::Exponential,
            "cosine" => Family::Cosine,
            "chi_squared" | "chisquared" | "chi2" => Family::ChiSquared,
            "f" | "fisher_snedecor" => Family::F,
            "gamma" => Family::Gamma,
            "inverse_gaussian" | "invgauss" | "wald" => Family::InverseGaussian,
            _ => return Err(ConfigError::UnknownFamily(s.to_string())),
        };
        Ok(family)
    }
}

/// Explicit parameter record for one family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionParams {
    Normal { loc: f64, scale: f64 },
    Logistic { loc: f64, scale: f64 },
    Beta { a: f64, b: f64, loc: f64, scale: f64 },
    Exponential { loc: f64, scale: f64 },
    Cosine { loc: f64, scale: f64 },
    ChiSquared { df: f64, loc: f64, scale: f64 },
    F { dfn: f64, dfd: f64, loc: f64, scale: f64 },
    Gamma { a: f64, loc: f64, scale: f64 },
    InverseGaussian { mu: f64, loc: f64, scale: f64 },
}

impl DistributionParams {
    /// Build the record for `family` by looking up each of its parameter names.
    pub fn from_lookup(
        family: Family,
        get: impl Fn(&str) -> Option<f64>,
    ) -> Result<Self, DistError> {
        let value = |name: &str| {
            get(name).ok_or_else(|| DistError::MissingValue {
                family: family.name(),
                name: name.to_string(),
            })
        };

        let params = match family {
            Family::Normal => DistributionParams::Normal {
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::Logistic => DistributionParams::Logistic {
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::Beta => DistributionParams::Beta {
                a: value("a")?,
                b: value("b")?,
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::Exponential => DistributionParams::Exponential {
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::Cosine => DistributionParams::Cosine {
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::ChiSquared => DistributionParams::ChiSquared {
                df: value("df")?,
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::F => DistributionParams::F {
                dfn: value("dfn")?,
                dfd: value("dfd")?,
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::Gamma => DistributionParams::Gamma {
                a: value("a")?,
                loc: value("loc")?,
                scale: value("scale")?,
            },
            Family::InverseGaussian => DistributionParams::InverseGaussian {
                mu: value("mu")?,
                loc: value("loc")?,
                scale: value("scale")?,
            },
        };
        Ok(params)
    }

    pub fn family(&self) -> Family {
        match self {
            DistributionParams::Normal { .. } => Family::Normal,
            DistributionParams::Logistic { .. } => Family::Logistic,
            DistributionParams::Beta { .. } => Family::Beta,
            DistributionParams::Exponential { .. } => Family::Exponential,
            DistributionParams::Cosine { .. } => Family::Cosine,
            DistributionParams::ChiSquared { .. } => Family::ChiSquared,
            DistributionParams::F { .. } => Family::F,
            DistributionParams::Gamma { .. } => Family::Gamma,
            DistributionParams::InverseGaussian { .. } => Family::InverseGaussian,
        }
    }

    fn loc_scale(&self) -> (f64, f64) {
        match *self {
            DistributionParams::Normal { loc, scale }
            | DistributionParams::Logistic { loc, scale }
            | DistributionParams::Beta { loc, scale, .. }
            | DistributionParams::Exponential { loc, scale }
            | DistributionParams::Cosine { loc, scale }
            | DistributionParams::ChiSquared { loc, scale, .. }
            | DistributionParams::F { loc, scale, .. }
            | DistributionParams::Gamma { loc, scale, .. }
            | DistributionParams::InverseGaussian { loc, scale, .. } => (loc, scale),
        }
    }

    /// Construct a fresh distribution from this record.
    ///
    /// Shape-parameter errors are reported exactly as the underlying
    /// implementation reports them.
    pub fn build(&self) -> Result<Box<dyn Distribution>, DistError> {
        let family = self.family();
        let invalid = |reason: String| DistError::InvalidParameters {
            family: family.name(),
            reason,
        };

        let (loc, scale) = self.loc_scale();
        if !loc.is_finite() {
            return Err(invalid(format!("loc must be finite, got {loc}")));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(invalid(format!("scale must be finite and > 0, got {scale}")));
        }

        let standard: Box<dyn Distribution> = match *self {
            DistributionParams::Normal { .. } => {
                Box::new(sd::Normal::new(0.0, 1.0).map_err(|e| invalid(e.to_string()))?)
            }
            DistributionParams::Logistic { .. } => Box::new(Logistic),
            DistributionParams::Beta { a, b, .. } => {
                Box::new(sd::Beta::new(a, b).map_err(|e| invalid(e.to_string()))?)
            }
            DistributionParams::Exponential { .. } => {
                Box::new(sd::Exp::new(1.0).map_err(|e| invalid(e.to_string()))?)
            }
            DistributionParams::Cosine { .. } => Box::new(Cosine),
            DistributionParams::ChiSquared { df, .. } => {
                Box::new(sd::ChiSquared::new(df).map_err(|e| invalid(e.to_string()))?)
            }
            DistributionParams::F { dfn, dfd, .. } => {
                Box::new(FisherSnedecor::new(dfn, dfd).map_err(invalid)?)
            }
            DistributionParams::Gamma { a, .. } => {
                Box::new(sd::Gamma::new(a, 1.0).map_err(|e| invalid(e.to_string()))?)
            }
            DistributionParams::InverseGaussian { mu, .. } => {
                Box::new(InverseGaussian::new(mu).map_err(invalid)?)
            }
        };

        Ok(Box::new(LocScale {
            inner: standard,
            loc,
            scale,
        }))
    }
}
