//! Slider rows and the mode selector for the active family.

use super::{Component, EventResult};
use crate::keybindings::{ControlBindings, KeybindingsConfig};
use crate::state::AppState;
use crate::util::format::format_value;
use crate::util::styles::{
    FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, PENDING_COLOR, focused_block_with_help,
};
use crossterm::event::KeyEvent;
use distviz_core::{RenderMode, Slider};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
};

/// Steps moved per coarse adjustment
pub const COARSE_STEPS: i32 = 10;

const LABEL_WIDTH: usize = 20;

pub struct ParameterPanelView {
    bindings: ControlBindings,
}

impl ParameterPanelView {
    pub fn new(bindings: ControlBindings) -> Self {
        Self { bindings }
    }

    fn slider_row(slider: &Slider, focused: bool) -> LineGauge<'static> {
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if slider.is_dragging() {
            Style::default().fg(PENDING_COLOR)
        } else {
            Style::default()
        };

        let label = Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{:<width$}", slider.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(
                format!("{:>9} ", format_value(slider.displayed(), slider.step())),
                value_style,
            ),
        ]);

        LineGauge::default()
            .label(label)
            .ratio(slider.fraction())
            .filled_style(Style::default().fg(if focused { FOCUS_COLOR } else { HEADER_COLOR }))
            .unfilled_style(Style::default().fg(HELP_COLOR))
    }

    fn mode_row(mode: RenderMode) -> Line<'static> {
        let mut spans = vec![Span::raw(format!("  {:<width$}", "Mode", width = LABEL_WIDTH))];
        for option in RenderMode::ALL {
            let style = if option == mode {
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HELP_COLOR)
            };
            spans.push(Span::styled(format!(" {} ", option.short_label()), style));
        }
        Line::from(spans)
    }
}

impl Component for ParameterPanelView {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let b = &self.bindings;
        let matches = |bindings: &Vec<String>| KeybindingsConfig::matches(&key, bindings);

        if matches(&b.up) {
            state.focus_prev();
        } else if matches(&b.down) {
            state.focus_next();
        } else if matches(&b.decrease) {
            state.drag_focused(-1);
        } else if matches(&b.increase) {
            state.drag_focused(1);
        } else if matches(&b.coarse_decrease) {
            state.drag_focused(-COARSE_STEPS);
        } else if matches(&b.coarse_increase) {
            state.drag_focused(COARSE_STEPS);
        } else if matches(&b.toggle_mode) {
            state.toggle_mode();
        } else if matches(&b.reset) {
            state.reset();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(visualizer) = state.active_visualizer() else {
            return;
        };
        let sliders = visualizer.panel().sliders();

        let help = sliders
            .get(state.focus)
            .map(|s| {
                format!(
                    "[{}, {}] step {}",
                    format_value(s.min(), s.step()),
                    format_value(s.max(), s.step()),
                    format_value(s.step(), s.step())
                )
            })
            .unwrap_or_default();
        let block = focused_block_with_help("Parameters", true, &help);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1); sliders.len()];
        constraints.extend([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]);
        let rows = Layout::vertical(constraints).split(inner);

        for (i, slider) in sliders.iter().enumerate() {
            frame.render_widget(Self::slider_row(slider, i == state.focus), rows[i]);
        }

        if let Some(mode) = visualizer.panel().mode() {
            frame.render_widget(Paragraph::new(Self::mode_row(mode)), rows[sliders.len() + 1]);
        }
    }
}
