//! Interactive distribution plotting core
//!
//! This crate provides everything needed to drive an interactive plot of a
//! continuous probability distribution, independent of any UI toolkit:
//! - Evenly spaced sample grids over a plotting interval
//! - Bounded, step-snapped parameter sliders with debounced change events
//! - Distribution families with explicit per-family parameter records
//! - A function/distribution renderer that draws onto a caller-owned target
//! - A visualizer that re-renders on every committed control change
//!
//! # Example
//!
//! ```ignore
//! use distviz_core::{catalog, ControlEvent, Family, LineSeries, Visualizer};
//!
//! let config = catalog::default_config(Family::Normal);
//! let mut viz = Visualizer::for_distribution(&config, 100)?;
//!
//! let mut target: Option<LineSeries> = None;
//! viz.handle(ControlEvent::Refresh, &mut target)?;
//! viz.handle(ControlEvent::ToggleMode, &mut target)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod distribution;
pub mod grid;
pub mod plot;
pub mod slider;
pub mod visualizer;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod mode;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::FamilyConfig;
pub use distribution::{Distribution, DistributionParams, Family};
pub use error::{ConfigError, DistError};
pub use grid::{DEFAULT_POINTS, Interval, linspace};
pub use mode::RenderMode;
pub use plot::{
    DistributionCurve, DrawTarget, Evaluate, LineSeries, Plottable, plot_distribution,
    plot_function, plot_function_with, sample,
};
pub use slider::{Slider, SliderChange, SliderSpec};
pub use visualizer::{
    ControlEvent, Outcome, ParameterPanel, ParameterSnapshot, RenderFn, Visualizer,
    VisualizerState,
};
