//! Concrete distribution scenarios
//!
//! Each test renders one family through the public renderer and checks the
//! drawn series against known closed-form behavior.

use std::f64::consts::PI;

use crate::distribution::DistributionParams;
use crate::error::DistError;
use crate::grid::{DEFAULT_POINTS, Interval};
use crate::mode::RenderMode;
use crate::plot::{LineSeries, plot_distribution};

fn render(params: DistributionParams, low: f64, high: f64, mode: RenderMode) -> LineSeries {
    let mut target: Option<LineSeries> = None;
    plot_distribution(
        &mut target,
        &params,
        Interval::new(low, high).unwrap(),
        mode,
        DEFAULT_POINTS,
    )
    .unwrap();
    target.expect("renderer draws exactly one series")
}

fn argmax(series: &LineSeries) -> (f64, f64) {
    series
        .finite_points()
        .into_iter()
        .fold((f64::NAN, f64::NEG_INFINITY), |best, p| {
            if p.1 > best.1 { p } else { best }
        })
}

#[test]
fn test_standard_normal_density_peak_and_symmetry() {
    let series = render(
        DistributionParams::Normal {
            loc: 0.0,
            scale: 1.0,
        },
        -10.0,
        10.0,
        RenderMode::Density,
    );

    assert_eq!(series.len(), DEFAULT_POINTS);

    let (x_peak, y_peak) = argmax(&series);
    let expected_peak = 1.0 / (2.0 * PI).sqrt();
    assert!(x_peak.abs() < 0.2, "peak at {x_peak}");
    assert!(
        (y_peak - expected_peak).abs() < 0.005,
        "peak {y_peak} vs {expected_peak}"
    );

    let ys: Vec<f64> = series.ys().collect();
    let n = ys.len();
    for i in 0..n / 2 {
        assert!(
            (ys[i] - ys[n - 1 - i]).abs() < 1e-9,
            "asymmetric at {i}: {} vs {}",
            ys[i],
            ys[n - 1 - i]
        );
    }
}

#[test]
fn test_beta_two_two_density_shape() {
    let series = render(
        DistributionParams::Beta {
            a: 2.0,
            b: 2.0,
            loc: 0.0,
            scale: 1.0,
        },
        0.0,
        1.0,
        RenderMode::Density,
    );

    let first = series.points[0];
    let last = series.points[series.len() - 1];
    assert_eq!(first.0, 0.0);
    assert_eq!(last.0, 1.0);
    assert!(first.1.abs() < 1e-12, "pdf(0) = {}", first.1);
    assert!(last.1.abs() < 1e-12, "pdf(1) = {}", last.1);

    let (x_peak, y_peak) = argmax(&series);
    assert!((x_peak - 0.5).abs() < 0.01, "peak at {x_peak}");
    // Beta(2,2) density is 6x(1-x), 1.5 at the mode
    assert!((y_peak - 1.5).abs() < 0.001, "peak value {y_peak}");
}

#[test]
fn test_chi_squared_one_df_cumulative() {
    let series = render(
        DistributionParams::ChiSquared {
            df: 1.0,
            loc: 0.0,
            scale: 1.0,
        },
        0.0,
        100.0,
        RenderMode::Cumulative,
    );

    let first = series.points[0];
    let last = series.points[series.len() - 1];
    assert_eq!(first.0, 0.0);
    assert!(first.1.abs() < 1e-9, "cdf(0) = {}", first.1);
    assert!((last.1 - 1.0).abs() < 1e-9, "cdf(100) = {}", last.1);
    assert!(series.ys().all(|y| (0.0..=1.0).contains(&y)));
}

#[test]
fn test_chi_squared_one_df_density_renders_past_the_origin() {
    let series = render(
        DistributionParams::ChiSquared {
            df: 1.0,
            loc: 0.0,
            scale: 1.0,
        },
        0.0,
        100.0,
        RenderMode::Density,
    );

    // The density diverges at x = 0; every point past it is finite and positive
    for (x, y) in series.points.iter().skip(1) {
        assert!(y.is_finite() && *y > 0.0, "pdf({x}) = {y}");
    }
    assert!(series.y_range().is_some());
}

#[test]
fn test_beta_zero_shape_is_a_construction_error() {
    // Pinned: Beta with a = 0 is rejected when the distribution is built,
    // and nothing is drawn.
    let params = DistributionParams::Beta {
        a: 0.0,
        b: 2.0,
        loc: 0.0,
        scale: 1.0,
    };
    let mut draws: Vec<LineSeries> = Vec::new();
    let result = plot_distribution(
        &mut draws,
        &params,
        Interval::new(0.0, 1.0).unwrap(),
        RenderMode::Density,
        DEFAULT_POINTS,
    );

    assert!(matches!(
        result,
        Err(DistError::InvalidParameters { family: "Beta", .. })
    ));
    assert!(draws.is_empty());
}

#[test]
fn test_cosine_density_vanishes_outside_support() {
    let series = render(
        DistributionParams::Cosine {
            loc: 0.0,
            scale: 1.0,
        },
        -10.0,
        10.0,
        RenderMode::Density,
    );

    for (x, y) in &series.points {
        if x.abs() > PI {
            assert_eq!(*y, 0.0, "pdf({x}) should be zero");
        }
    }
    let (x_peak, _) = argmax(&series);
    assert!(x_peak.abs() < 0.2);
}

#[test]
fn test_exponential_cumulative_with_location() {
    let series = render(
        DistributionParams::Exponential {
            loc: 2.0,
            scale: 1.0,
        },
        0.0,
        10.0,
        RenderMode::Cumulative,
    );

    for (x, y) in &series.points {
        if *x <= 2.0 {
            assert_eq!(*y, 0.0);
        } else {
            assert!((y - (1.0 - (-(x - 2.0)).exp())).abs() < 1e-9);
        }
    }
}
