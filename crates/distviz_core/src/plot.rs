//! Grid sampling and line-series rendering.
//!
//! Nothing here owns a figure. Every render draws exactly one [`LineSeries`]
//! onto a [`DrawTarget`] the caller passes in, so two visualizers never share
//! a drawing surface.

use crate::distribution::{Distribution, DistributionParams, Family};
use crate::error::DistError;
use crate::grid::Interval;
use crate::mode::RenderMode;
use crate::visualizer::ParameterSnapshot;

/// A single connected `(x, y)` line series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    /// Points whose `y` is finite. Densities can be infinite at a support edge.
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect()
    }

    /// Smallest and largest finite `y`, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.ys()
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}

/// Surface a renderer draws onto. Owned by whoever drives the render.
pub trait DrawTarget {
    fn draw_line(&mut self, series: LineSeries);
}

/// Keeps only the most recent draw.
impl DrawTarget for Option<LineSeries> {
    fn draw_line(&mut self, series: LineSeries) {
        *self = Some(series);
    }
}

/// Records every draw in order.
impl DrawTarget for Vec<LineSeries> {
    fn draw_line(&mut self, series: LineSeries) {
        self.push(series);
    }
}

/// One-argument evaluable.
pub trait Evaluate {
    fn evaluate(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Evaluate for F {
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A built distribution viewed through one of its capabilities.
pub struct DistributionCurve<'a> {
    dist: &'a dyn Distribution,
    mode: RenderMode,
}

impl<'a> DistributionCurve<'a> {
    pub fn new(dist: &'a dyn Distribution, mode: RenderMode) -> Self {
        Self { dist, mode }
    }
}

impl Evaluate for DistributionCurve<'_> {
    fn evaluate(&self, x: f64) -> f64 {
        match self.mode {
            RenderMode::Density => self.dist.pdf(x),
            RenderMode::Cumulative => self.dist.cdf(x),
        }
    }
}

/// Evaluate `f` over `points` evenly spaced values of `interval`.
pub fn sample<E: Evaluate + ?Sized>(f: &E, interval: Interval, points: usize) -> Vec<(f64, f64)> {
    interval
        .grid(points)
        .into_iter()
        .map(|x| (x, f.evaluate(x)))
        .collect()
}

/// Sample `f` and draw it as one line series.
pub fn plot_function<E: Evaluate + ?Sized>(
    target: &mut dyn DrawTarget,
    f: &E,
    interval: Interval,
    points: usize,
    label: &str,
) {
    target.draw_line(LineSeries::new(label, sample(f, interval, points)));
}

/// Like [`plot_function`], forwarding `args` unchanged to every evaluation.
pub fn plot_function_with<A: ?Sized, F: Fn(f64, &A) -> f64>(
    target: &mut dyn DrawTarget,
    f: F,
    args: &A,
    interval: Interval,
    points: usize,
    label: &str,
) {
    plot_function(target, &|x: f64| f(x, args), interval, points, label);
}

/// Build a fresh distribution from `params` and draw its density or
/// cumulative curve. `None` draws the density.
pub fn plot_distribution(
    target: &mut dyn DrawTarget,
    params: &DistributionParams,
    interval: Interval,
    mode: impl Into<Option<RenderMode>>,
    points: usize,
) -> Result<(), DistError> {
    let mode = mode.into().unwrap_or_default();
    let dist = params.build()?;
    let curve = DistributionCurve::new(dist.as_ref(), mode);
    let label = format!("{} {}", params.family().name(), mode.short_label());
    plot_function(target, &curve, interval, points, &label);
    Ok(())
}

/// What a visualizer draws.
pub enum Plottable {
    /// Raw function of `x` and the current parameter values
    Function {
        label: String,
        f: Box<dyn Fn(f64, &ParameterSnapshot) -> f64>,
    },
    /// Distribution family rebuilt from the parameter values on every render
    Distribution(Family),
}

impl Plottable {
    pub fn function(
        label: impl Into<String>,
        f: impl Fn(f64, &ParameterSnapshot) -> f64 + 'static,
    ) -> Self {
        Plottable::Function {
            label: label.into(),
            f: Box::new(f),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Plottable::Function { label, .. } => label,
            Plottable::Distribution(family) => family.name(),
        }
    }

    /// Draw this plottable for one snapshot of parameter values.
    pub fn render(
        &self,
        snapshot: &ParameterSnapshot,
        interval: Interval,
        points: usize,
        target: &mut dyn DrawTarget,
    ) -> Result<(), DistError> {
        match self {
            Plottable::Function { label, f } => {
                plot_function_with(target, f, snapshot, interval, points, label);
                Ok(())
            }
            Plottable::Distribution(family) => {
                let params = DistributionParams::from_lookup(*family, |name| snapshot.get(name))?;
                plot_distribution(target, &params, interval, snapshot.mode(), points)
            }
        }
    }
}
