//! Chart panel for the active family.
//!
//! [`ChartSurface`] is the draw target a visualizer renders into. The panel
//! only reads it, so a failed render leaves the last good curve on screen.

use crossterm::event::KeyEvent;
use distviz_core::{DrawTarget, LineSeries, RenderMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_axis;
use crate::util::styles::{HELP_COLOR, focused_block, mode_color};

/// Owned drawing surface for one visualizer. Keeps the latest series.
#[derive(Debug, Clone, Default)]
pub struct ChartSurface {
    series: Option<LineSeries>,
    draws: u64,
}

impl ChartSurface {
    pub fn series(&self) -> Option<&LineSeries> {
        self.series.as_ref()
    }

    /// Number of series drawn onto this surface so far.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl DrawTarget for ChartSurface {
    fn draw_line(&mut self, series: LineSeries) {
        self.series = Some(series);
        self.draws += 1;
    }
}

/// `[x_min, x_max]` and `[y_min, y_max]` covering the finite points, padded
/// vertically. `None` if no point is finite.
pub fn axis_bounds(series: &LineSeries) -> Option<([f64; 2], [f64; 2])> {
    let points = series.finite_points();
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let (y_lo, y_hi) = series.y_range()?;

    // Curves are non-negative; keep zero on the axis
    let y_min = y_lo.min(0.0);
    let y_max = if y_hi > y_min {
        y_hi + (y_hi - y_min) * 0.05
    } else {
        y_min + 1.0
    };
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

    Some(([x_min, x_max], [y_min, y_max]))
}

fn tick_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [lo, hi] = bounds;
    vec![
        Span::raw(format_axis(lo)),
        Span::raw(format_axis((lo + hi) / 2.0)),
        Span::raw(format_axis(hi)),
    ]
}

pub struct PlotPanel;

impl PlotPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlotPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PlotPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(visualizer) = state.active_visualizer() else {
            return;
        };
        let mode = visualizer.panel().mode().unwrap_or_default();
        let block = focused_block(
            &format!("{} ({})", visualizer.title(), mode.name()),
            false,
        );

        let series = state.active_surface().and_then(ChartSurface::series);
        let Some((series, (x_bounds, y_bounds))) =
            series.and_then(|s| axis_bounds(s).map(|b| (s, b)))
        else {
            let empty = Paragraph::new("Nothing to plot yet")
                .style(Style::default().fg(HELP_COLOR))
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let data = series.finite_points();
        let dataset = Dataset::default()
            .name(series.label.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(mode_color(mode)))
            .data(&data);

        let y_title = match mode {
            RenderMode::Density => "f(x)",
            RenderMode::Cumulative => "F(x)",
        };

        let x_axis = Axis::default()
            .title("x".dark_gray())
            .bounds(x_bounds)
            .labels(tick_labels(x_bounds));

        let y_axis = Axis::default()
            .title(y_title.dark_gray())
            .bounds(y_bounds)
            .labels(tick_labels(y_bounds));

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}
