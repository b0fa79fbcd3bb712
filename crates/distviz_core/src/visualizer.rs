//! Binding controls to renders.
//!
//! A [`Visualizer`] owns its parameter panel, its render callback and a
//! two-state machine:
//!
//! ```text
//!   IDLE --(committed control change)--> RENDERING --(draw done or failed)--> IDLE
//! ```
//!
//! Renders always see a [`ParameterSnapshot`] taken before the callback runs,
//! so in-flight drags never leak into a render.

use crate::catalog::FamilyConfig;
use crate::error::{ConfigError, DistError};
use crate::grid::{Interval, validate_points};
use crate::mode::RenderMode;
use crate::plot::{DrawTarget, Plottable};
use crate::slider::{Slider, SliderSpec};

/// Committed parameter values and mode at the moment a render fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    values: Vec<(String, f64)>,
    mode: RenderMode,
}

impl ParameterSnapshot {
    pub fn new(values: Vec<(String, f64)>, mode: RenderMode) -> Self {
        Self { values, mode }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}

/// Ordered sliders plus the optional mode selector.
#[derive(Debug, Clone)]
pub struct ParameterPanel {
    sliders: Vec<Slider>,
    mode: Option<RenderMode>,
}

impl ParameterPanel {
    /// Build sliders from specs. Fails on the first invalid spec or a
    /// repeated name. `mode` is `None` for plain functions, which have no
    /// mode selector.
    pub fn new(specs: Vec<SliderSpec>, mode: Option<RenderMode>) -> Result<Self, ConfigError> {
        let mut sliders: Vec<Slider> = Vec::with_capacity(specs.len());
        for spec in specs {
            if sliders.iter().any(|s| s.name() == spec.name) {
                return Err(ConfigError::DuplicateSlider(spec.name));
            }
            sliders.push(Slider::new(spec)?);
        }
        Ok(Self { sliders, mode })
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, name: &str) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn mode(&self) -> Option<RenderMode> {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.sliders.iter().any(Slider::is_dragging)
    }

    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot::new(
            self.sliders
                .iter()
                .map(|s| (s.name().to_string(), s.value()))
                .collect(),
            self.mode.unwrap_or_default(),
        )
    }

    /// Apply one event. Returns `true` if a committed value changed.
    fn apply(&mut self, event: &ControlEvent) -> bool {
        match *event {
            ControlEvent::Drag { slider, value } => {
                if let Some(s) = self.sliders.get_mut(slider) {
                    s.drag_to(value);
                }
                false
            }
            ControlEvent::DragBy { slider, steps } => {
                if let Some(s) = self.sliders.get_mut(slider) {
                    s.drag_by(steps);
                }
                false
            }
            ControlEvent::Release { slider } => self
                .sliders
                .get_mut(slider)
                .and_then(Slider::release)
                .is_some(),
            ControlEvent::ReleaseAll => self
                .sliders
                .iter_mut()
                .filter_map(Slider::release)
                .count()
                > 0,
            ControlEvent::Set { slider, value } => self
                .sliders
                .get_mut(slider)
                .and_then(|s| s.set_value(value))
                .is_some(),
            ControlEvent::SetMode(mode) => match self.mode {
                Some(current) if current != mode => {
                    self.mode = Some(mode);
                    true
                }
                _ => false,
            },
            ControlEvent::ToggleMode => match self.mode {
                Some(current) => {
                    self.mode = Some(current.toggle());
                    true
                }
                None => false,
            },
            ControlEvent::Reset => self.sliders.iter_mut().filter_map(Slider::reset).count() > 0,
            ControlEvent::Refresh => true,
        }
    }
}

/// Input delivered to a visualizer's controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Move a slider's pending value; never renders
    Drag { slider: usize, value: f64 },
    /// Move a slider's pending value by whole steps; never renders
    DragBy { slider: usize, steps: i32 },
    /// End a drag; renders if the value changed
    Release { slider: usize },
    /// End every in-flight drag
    ReleaseAll,
    /// Drag and release in one go
    Set { slider: usize, value: f64 },
    SetMode(RenderMode),
    ToggleMode,
    /// Return every slider to its initial value
    Reset,
    /// Render the current snapshot unconditionally
    Refresh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualizerState {
    #[default]
    Idle,
    Rendering,
}

/// Result of handling a control event that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No committed value changed; nothing was drawn
    Unchanged,
    /// A full render ran to completion
    Rendered,
}

pub type RenderFn = Box<dyn FnMut(&ParameterSnapshot, &mut dyn DrawTarget) -> Result<(), DistError>>;

/// One interactive plot: controls, render callback and state.
pub struct Visualizer {
    title: String,
    panel: ParameterPanel,
    render: RenderFn,
    state: VisualizerState,
    renders: u64,
}

impl Visualizer {
    pub fn new(title: impl Into<String>, panel: ParameterPanel, render: RenderFn) -> Self {
        Self {
            title: title.into(),
            panel,
            render,
            state: VisualizerState::Idle,
            renders: 0,
        }
    }

    /// Visualizer for a distribution family. The config is validated here so
    /// every later render finds all the parameters its family needs.
    pub fn for_distribution(config: &FamilyConfig, points: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let points = validate_points(points)?;
        let panel = ParameterPanel::new(config.sliders.clone(), Some(config.mode))?;
        Ok(Self::for_plottable(
            Plottable::Distribution(config.family),
            config.interval,
            panel,
            points,
        ))
    }

    /// Visualizer for a plain function of `x` and the slider values.
    pub fn for_function(
        label: impl Into<String>,
        interval: Interval,
        sliders: Vec<SliderSpec>,
        points: usize,
        f: impl Fn(f64, &ParameterSnapshot) -> f64 + 'static,
    ) -> Result<Self, ConfigError> {
        interval.validate()?;
        let points = validate_points(points)?;
        let panel = ParameterPanel::new(sliders, None)?;
        Ok(Self::for_plottable(
            Plottable::function(label, f),
            interval,
            panel,
            points,
        ))
    }

    fn for_plottable(
        plottable: Plottable,
        interval: Interval,
        panel: ParameterPanel,
        points: usize,
    ) -> Self {
        let title = plottable.label().to_string();
        let render: RenderFn = Box::new(move |snapshot, target| {
            plottable.render(snapshot, interval, points, target)
        });
        Self::new(title, panel, render)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panel(&self) -> &ParameterPanel {
        &self.panel
    }

    pub fn state(&self) -> VisualizerState {
        self.state
    }

    /// Number of renders attempted so far, failed ones included.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Apply `event` and re-render if any committed value changed.
    pub fn handle(
        &mut self,
        event: ControlEvent,
        target: &mut dyn DrawTarget,
    ) -> Result<Outcome, DistError> {
        if !self.panel.apply(&event) {
            return Ok(Outcome::Unchanged);
        }
        self.render_now(target)?;
        Ok(Outcome::Rendered)
    }

    /// Render the current snapshot. The visualizer is back in
    /// [`VisualizerState::Idle`] when this returns, whatever the result.
    pub fn render_now(&mut self, target: &mut dyn DrawTarget) -> Result<(), DistError> {
        let snapshot = self.panel.snapshot();
        self.state = VisualizerState::Rendering;
        self.renders += 1;
        let result = (self.render)(&snapshot, target);
        self.state = VisualizerState::Idle;
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::plot::LineSeries;

    fn line_visualizer() -> Visualizer {
        Visualizer::for_function(
            "line",
            Interval::new(0.0, 1.0).unwrap(),
            vec![
                SliderSpec::new("slope", 1.0, -5.0, 5.0, 0.5),
                SliderSpec::new("intercept", 0.0, -5.0, 5.0, 0.5),
            ],
            5,
            |x, p| p.get("slope").unwrap_or(0.0) * x + p.get("intercept").unwrap_or(0.0),
        )
        .unwrap()
    }

    #[test]
    fn test_panel_rejects_duplicate_names() {
        let result = ParameterPanel::new(
            vec![
                SliderSpec::new("loc", 0.0, -1.0, 1.0, 0.1),
                SliderSpec::new("loc", 0.5, -1.0, 1.0, 0.1),
            ],
            None,
        );
        assert_eq!(result.err(), Some(ConfigError::DuplicateSlider("loc".into())));
    }

    #[test]
    fn test_drag_does_not_render_until_release() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();

        for value in [1.5, 2.0, 2.5, 3.0] {
            let outcome = viz
                .handle(ControlEvent::Drag { slider: 0, value }, &mut draws)
                .unwrap();
            assert_eq!(outcome, Outcome::Unchanged);
        }
        assert!(draws.is_empty());
        assert!(viz.panel().is_dragging());

        let outcome = viz
            .handle(ControlEvent::Release { slider: 0 }, &mut draws)
            .unwrap();
        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].points.last(), Some(&(1.0, 3.0)));
    }

    #[test]
    fn test_release_all_commits_every_drag_with_one_render() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();

        viz.handle(ControlEvent::DragBy { slider: 0, steps: 2 }, &mut draws)
            .unwrap();
        viz.handle(ControlEvent::DragBy { slider: 1, steps: -2 }, &mut draws)
            .unwrap();
        viz.handle(ControlEvent::ReleaseAll, &mut draws).unwrap();

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].points[0], (0.0, -1.0));
        assert_eq!(draws[0].points[4], (1.0, 1.0));
    }

    #[test]
    fn test_unchanged_set_does_not_render() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();

        let outcome = viz
            .handle(ControlEvent::Set { slider: 0, value: 1.0 }, &mut draws)
            .unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(viz.render_count(), 0);
    }

    #[test]
    fn test_out_of_range_slider_index_is_ignored() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();
        let outcome = viz
            .handle(ControlEvent::Set { slider: 9, value: 1.0 }, &mut draws)
            .unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_function_panel_has_no_mode() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();

        assert_eq!(viz.panel().mode(), None);
        let outcome = viz.handle(ControlEvent::ToggleMode, &mut draws).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_render_receives_consistent_snapshot() {
        let seen: Rc<RefCell<Vec<ParameterSnapshot>>> = Rc::default();
        let log = Rc::clone(&seen);
        let panel = ParameterPanel::new(
            vec![
                SliderSpec::new("a", 1.0, 0.0, 10.0, 1.0),
                SliderSpec::new("b", 1.0, 0.0, 10.0, 1.0),
            ],
            Some(RenderMode::Density),
        )
        .unwrap();
        let mut viz = Visualizer::new(
            "recorder",
            panel,
            Box::new(move |snapshot, _target| {
                log.borrow_mut().push(snapshot.clone());
                Ok(())
            }),
        );
        let mut target: Option<LineSeries> = None;

        // `b` is mid-drag when `a` commits; the render must see b's committed value
        viz.handle(ControlEvent::Drag { slider: 1, value: 7.0 }, &mut target)
            .unwrap();
        viz.handle(ControlEvent::Set { slider: 0, value: 4.0 }, &mut target)
            .unwrap();
        viz.handle(ControlEvent::SetMode(RenderMode::Cumulative), &mut target)
            .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].get("a"), Some(4.0));
        assert_eq!(seen[0].get("b"), Some(1.0));
        assert_eq!(seen[0].mode(), RenderMode::Density);
        assert_eq!(seen[1].mode(), RenderMode::Cumulative);
    }

    #[test]
    fn test_failed_render_returns_to_idle() {
        let panel =
            ParameterPanel::new(vec![SliderSpec::new("x", 1.0, 0.0, 2.0, 1.0)], None).unwrap();
        let mut viz = Visualizer::new(
            "failing",
            panel,
            Box::new(|snapshot, target| {
                if snapshot.get("x") == Some(0.0) {
                    return Err(DistError::InvalidParameters {
                        family: "Test",
                        reason: "x must be positive".into(),
                    });
                }
                target.draw_line(LineSeries::default());
                Ok(())
            }),
        );
        let mut draws: Vec<LineSeries> = Vec::new();

        let err = viz.handle(ControlEvent::Set { slider: 0, value: 0.0 }, &mut draws);
        assert!(err.is_err());
        assert_eq!(viz.state(), VisualizerState::Idle);
        assert!(draws.is_empty());

        let ok = viz.handle(ControlEvent::Set { slider: 0, value: 2.0 }, &mut draws);
        assert_eq!(ok, Ok(Outcome::Rendered));
        assert_eq!(viz.state(), VisualizerState::Idle);
        assert_eq!(draws.len(), 1);
        assert_eq!(viz.render_count(), 2);
    }

    #[test]
    fn test_reset_renders_only_when_something_moved() {
        let mut viz = line_visualizer();
        let mut draws: Vec<LineSeries> = Vec::new();

        assert_eq!(viz.handle(ControlEvent::Reset, &mut draws), Ok(Outcome::Unchanged));
        viz.handle(ControlEvent::Set { slider: 1, value: 2.0 }, &mut draws)
            .unwrap();
        assert_eq!(viz.handle(ControlEvent::Reset, &mut draws), Ok(Outcome::Rendered));
        assert_eq!(viz.panel().snapshot().get("intercept"), Some(0.0));
    }

    #[test]
    fn test_zero_points_rejected_at_setup() {
        let result = Visualizer::for_function(
            "bad",
            Interval::new(0.0, 1.0).unwrap(),
            vec![],
            1,
            |x, _| x,
        );
        assert_eq!(result.err(), Some(ConfigError::TooFewPoints(1)));
    }
}
