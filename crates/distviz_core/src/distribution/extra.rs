//! Standard-form families evaluated on top of `statrs` special functions.

use std::f64::consts::{PI, SQRT_2, TAU};

use statrs::function::beta::{beta_reg, ln_beta};
use statrs::function::erf::erfc;

use super::Distribution;

/// Standard normal CDF.
fn phi(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard logistic distribution.
#[derive(Debug, Clone, Copy)]
pub struct Logistic;

impl Distribution for Logistic {
    fn pdf(&self, x: f64) -> f64 {
        // Symmetric, so evaluate on |x| to keep exp() from overflowing
        let e = (-x.abs()).exp();
        e / ((1.0 + e) * (1.0 + e))
    }

    fn cdf(&self, x: f64) -> f64 {
        if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        }
    }
}

/// Standard raised-cosine distribution on `[-pi, pi]`.
#[derive(Debug, Clone, Copy)]
pub struct Cosine;

impl Distribution for Cosine {
    fn pdf(&self, x: f64) -> f64 {
        if x.abs() > PI {
            0.0
        } else {
            (1.0 + x.cos()) / TAU
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= -PI {
            0.0
        } else if x >= PI {
            1.0
        } else {
            ((PI + x + x.sin()) / TAU).clamp(0.0, 1.0)
        }
    }
}

/// Inverse Gaussian (Wald) distribution with mean `mu` and unit shape.
#[derive(Debug, Clone, Copy)]
pub struct InverseGaussian {
    mu: f64,
}

impl InverseGaussian {
    pub fn new(mu: f64) -> Result<Self, String> {
        if mu.is_finite() && mu > 0.0 {
            Ok(Self { mu })
        } else {
            Err(format!("mu must be finite and > 0, got {mu}"))
        }
    }
}

impl Distribution for InverseGaussian {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        let mu = self.mu;
        let ln_norm = -0.5 * (TAU.ln() + 3.0 * x.ln());
        (ln_norm - (x - mu).powi(2) / (2.0 * x * mu * mu)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let mu = self.mu;
        let s = x.sqrt().recip();
        let lower = phi(s * (x / mu - 1.0));
        // exp(2/mu) overflows for small mu; combine in log space
        let tail = phi(-s * (x / mu + 1.0));
        let upper = if tail > 0.0 {
            (2.0 / mu + tail.ln()).exp()
        } else {
            0.0
        };
        (lower + upper).clamp(0.0, 1.0)
    }
}

/// Fisher-Snedecor F distribution, evaluated in log space so large degrees
/// of freedom do not overflow.
#[derive(Debug, Clone, Copy)]
pub struct FisherSnedecor {
    dfn: f64,
    dfd: f64,
}

impl FisherSnedecor {
    pub fn new(dfn: f64, dfd: f64) -> Result<Self, String> {
        for (name, df) in [("dfn", dfn), ("dfd", dfd)] {
            if !(df.is_finite() && df > 0.0) {
                return Err(format!("{name} must be finite and > 0, got {df}"));
            }
        }
        Ok(Self { dfn, dfd })
    }
}

impl Distribution for FisherSnedecor {
    fn pdf(&self, x: f64) -> f64 {
        let (d1, d2) = (self.dfn, self.dfd);
        if x < 0.0 || !x.is_finite() {
            return 0.0;
        }
        if x == 0.0 {
            return match d1 {
                d if d < 2.0 => f64::INFINITY,
                d if d == 2.0 => 1.0,
                _ => 0.0,
            };
        }
        let ln_pdf = 0.5 * (d1 * (d1 * x).ln() + d2 * d2.ln() - (d1 + d2) * (d1 * x + d2).ln())
            - x.ln()
            - ln_beta(d1 / 2.0, d2 / 2.0);
        ln_pdf.exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let (d1, d2) = (self.dfn, self.dfd);
        let t = d1 * x / (d1 * x + d2);
        beta_reg(d1 / 2.0, d2 / 2.0, t).clamp(0.0, 1.0)
    }
}
