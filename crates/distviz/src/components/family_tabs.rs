use super::{Component, EventResult};
use crate::keybindings::{KeybindingsConfig, TabBindings};
use crate::state::AppState;
use crate::util::styles::FOCUS_COLOR;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// One tab per distribution family.
pub struct FamilyTabs {
    bindings: TabBindings,
}

impl FamilyTabs {
    pub fn new(bindings: TabBindings) -> Self {
        Self { bindings }
    }
}

impl Component for FamilyTabs {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if KeybindingsConfig::matches(&key, &self.bindings.next) {
            state.next_family();
            return EventResult::Handled;
        }
        if KeybindingsConfig::matches(&key, &self.bindings.prev) {
            state.prev_family();
            return EventResult::Handled;
        }
        if let Some(index) = self
            .bindings
            .select
            .iter()
            .position(|b| KeybindingsConfig::matches(&key, std::slice::from_ref(b)))
        {
            state.switch_family(index);
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = state
            .visualizers
            .iter()
            .enumerate()
            .map(|(idx, visualizer)| {
                let content = match self.bindings.select.get(idx) {
                    Some(key) => format!("[{}] {}", key, visualizer.title()),
                    None => visualizer.title().to_string(),
                };

                if idx == state.active {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(FOCUS_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active)
            .style(Style::default())
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
