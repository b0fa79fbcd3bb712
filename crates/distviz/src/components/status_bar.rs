use super::{Component, EventResult};
use crate::keybindings::KeybindingsConfig;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar {
    help_text: String,
}

impl StatusBar {
    /// Build the help line from the first binding of each command.
    pub fn new(keybindings: &KeybindingsConfig) -> Self {
        let hint = KeybindingsConfig::hint;
        let tabs = &keybindings.tabs;
        let controls = &keybindings.controls;
        let help_text = format!(
            "{}/{}: family | {}/{}: select | {}/{}: adjust ({}/{} coarse) | {}: pdf/cdf | {}: reset | {}: quit",
            hint(&tabs.prev),
            hint(&tabs.next),
            hint(&controls.up),
            hint(&controls.down),
            hint(&controls.decrease),
            hint(&controls.increase),
            hint(&controls.coarse_decrease),
            hint(&controls.coarse_increase),
            hint(&controls.toggle_mode),
            hint(&controls.reset),
            hint(&keybindings.global.quit),
        );
        Self { help_text }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = state.active_error() {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error),
            ])
        } else {
            Line::from(Span::styled(
                self.help_text.as_str(),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
