use serde::{Deserialize, Serialize};

/// Which distribution capability a render evaluates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Probability density function
    #[default]
    Density,
    /// Cumulative distribution function
    Cumulative,
}

impl RenderMode {
    pub const ALL: [RenderMode; 2] = [RenderMode::Density, RenderMode::Cumulative];

    pub fn toggle(self) -> Self {
        match self {
            RenderMode::Density => RenderMode::Cumulative,
            RenderMode::Cumulative => RenderMode::Density,
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            RenderMode::Density => "PDF",
            RenderMode::Cumulative => "CDF",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Density => "Density",
            RenderMode::Cumulative => "Cumulative",
        }
    }
}
