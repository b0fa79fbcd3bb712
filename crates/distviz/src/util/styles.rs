//! Common styling utilities for TUI components

use distviz_core::RenderMode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels and the selected tab
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers and axis titles
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for error text
pub const ERROR_COLOR: Color = Color::Red;

/// Slider value while a drag is still pending
pub const PENDING_COLOR: Color = Color::LightYellow;

/// Create a block with a title that shows focused state via border color.
///
/// # Example
/// ```ignore
/// let block = focused_block("Parameters", is_focused);
/// frame.render_widget(Paragraph::new("...").block(block), area);
/// ```
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Like [`focused_block`], with help text on the bottom border while focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Curve color per render mode, so PDF and CDF are told apart at a glance.
pub fn mode_color(mode: RenderMode) -> Color {
    match mode {
        RenderMode::Density => Color::Cyan,
        RenderMode::Cumulative => Color::Magenta,
    }
}
