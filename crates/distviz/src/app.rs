use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use distviz_core::ConfigError;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, family_tabs::FamilyTabs, parameter_panel::ParameterPanelView,
    plot_panel::PlotPanel, status_bar::StatusBar,
};
use crate::config::AppConfig;
use crate::keybindings::{GlobalBindings, KeybindingsConfig};
use crate::state::AppState;

/// Width of the parameter panel left of the chart
const PARAMETER_PANEL_WIDTH: u16 = 56;

/// Input gap that ends a drag. Longer than terminal key auto-repeat.
const DEBOUNCE: Duration = Duration::from_millis(150);

pub struct App {
    state: AppState,
    global: GlobalBindings,
    family_tabs: FamilyTabs,
    parameter_panel: ParameterPanelView,
    plot_panel: PlotPanel,
    status_bar: StatusBar,
}

impl App {
    /// Build every family's visualizer and draw its initial curve.
    pub fn new(config: &AppConfig, keybindings: KeybindingsConfig) -> Result<Self, ConfigError> {
        let visualizers = config.build_visualizers()?;
        let mut state = AppState::new(visualizers, config.initial_family.index());
        state.refresh_all();

        tracing::info!(
            family = %config.initial_family,
            points = config.grid_points,
            "visualizers ready"
        );

        let status_bar = StatusBar::new(&keybindings);
        Ok(Self {
            state,
            global: keybindings.global,
            family_tabs: FamilyTabs::new(keybindings.tabs),
            parameter_panel: ParameterPanelView::new(keybindings.controls),
            plot_panel: PlotPanel::new(),
            status_bar,
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Family tabs
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.family_tabs.render(frame, chunks[0], &self.state);
        self.render_content(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PARAMETER_PANEL_WIDTH),
                Constraint::Min(0),
            ])
            .split(area);

        self.parameter_panel.render(frame, columns[0], &self.state);
        self.plot_panel.render(frame, columns[1], &self.state);
    }

    /// Wait for the next event and handle everything already queued with it.
    /// While a drag is pending the wait is capped by [`App::quiet_period`];
    /// if it runs out, the drag is over and the sliders commit.
    fn handle_events(&mut self) -> io::Result<()> {
        if let Some(quiet) = self.quiet_period() {
            if !event::poll(quiet)? {
                self.end_interaction();
                return Ok(());
            }
        }

        self.handle_event(event::read()?);
        while !self.state.exit && event::poll(Duration::ZERO)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    /// How long to wait for more input before committing pending drags.
    /// `None` when nothing is pending, so the loop blocks until the next event.
    fn quiet_period(&self) -> Option<Duration> {
        self.state.is_dragging().then_some(DEBOUNCE)
    }

    fn end_interaction(&mut self) {
        tracing::trace!("input went quiet, committing drags");
        self.state.commit_pending();
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                self.handle_key_event(key_event)
            }
            // Resizes need no handling; the next loop iteration redraws
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if KeybindingsConfig::matches(&key_event, &self.global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key_event, &self.global.cancel) {
            self.state.dismiss_error();
            return;
        }

        let result = self.family_tabs.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = self.parameter_panel.handle_key(key_event, &mut self.state);
        if result == EventResult::NotHandled {
            tracing::trace!(
                key = %KeybindingsConfig::key_to_string(&key_event),
                "unbound key"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use distviz_core::catalog::default_config;
    use distviz_core::{Family, SliderSpec};
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn default_app() -> App {
        App::new(&AppConfig::default(), KeybindingsConfig::default()).unwrap()
    }

    /// Replay key presses separated by the given gaps, the way the event
    /// loop would see them, then let the input go quiet.
    fn replay(app: &mut App, presses: &[(KeyCode, Duration)]) {
        for &(code, gap) in presses {
            if app.quiet_period().is_some_and(|quiet| gap >= quiet) {
                app.end_interaction();
            }
            press(app, code);
        }
        if app.quiet_period().is_some() {
            app.end_interaction();
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_on_configured_family() {
        let config = AppConfig {
            initial_family: Family::F,
            ..AppConfig::default()
        };
        let app = App::new(&config, KeybindingsConfig::default()).unwrap();
        assert_eq!(app.state.active, Family::F.index());
        assert!(app.state.surfaces.iter().all(|s| s.series().is_some()));
    }

    #[test]
    fn test_key_burst_commits_once() {
        let mut app = default_app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Char('l'));
        }
        assert_eq!(app.state.surfaces[0].draw_count(), 1);

        app.state.commit_pending();
        assert_eq!(app.state.surfaces[0].draw_count(), 2);
    }

    #[test]
    fn test_held_key_renders_once_after_release() {
        let mut app = default_app();
        let repeat = Duration::from_millis(30);
        replay(&mut app, &[(KeyCode::Char('l'), repeat); 5]);

        assert_eq!(app.state.surfaces[0].draw_count(), 2);
        let loc = app.state.visualizers[0].panel().slider("loc").unwrap().value();
        assert!((loc - 0.5).abs() < 1e-9);
        assert_eq!(app.quiet_period(), None);
    }

    #[test]
    fn test_separate_presses_render_separately() {
        let mut app = default_app();
        let pause = Duration::from_millis(400);
        replay(
            &mut app,
            &[(KeyCode::Char('l'), pause), (KeyCode::Char('l'), pause)],
        );
        assert_eq!(app.state.surfaces[0].draw_count(), 3);
    }

    #[test]
    fn test_pending_drag_waits_for_quiet_period() {
        let mut app = default_app();
        assert_eq!(app.quiet_period(), None);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.quiet_period(), Some(DEBOUNCE));
        assert_eq!(app.state.surfaces[0].draw_count(), 1);

        // Mode toggles are not drags and render straight away
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state.surfaces[0].draw_count(), 2);
        assert_eq!(app.quiet_period(), Some(DEBOUNCE));
    }

    #[test]
    fn test_digit_selects_family_tab() {
        let mut app = default_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state.active, Family::Beta.index());

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state.active, Family::Exponential.index());
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = default_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state.exit);
    }

    #[test]
    fn test_draws_tabs_parameters_and_chart() {
        let mut app = default_app();
        let text = screen(&mut app);

        assert!(text.contains("[1] Normal"));
        assert!(text.contains("[9] Inverse Gaussian"));
        assert!(text.contains("Parameters"));
        assert!(text.contains("Location"));
        assert!(text.contains("Normal (Density)"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn test_render_error_shown_until_cancelled() {
        let mut beta = default_config(Family::Beta);
        beta.sliders[0] = SliderSpec::new("a", 0.5, 0.0, 1.0, 0.5).label("Alpha (a)");
        let config = AppConfig {
            initial_family: Family::Beta,
            distributions: vec![beta],
            ..AppConfig::default()
        };
        let mut app = App::new(&config, KeybindingsConfig::default()).unwrap();

        press(&mut app, KeyCode::Char('h'));
        app.state.commit_pending();
        assert!(screen(&mut app).contains("Error: Beta: invalid Beta parameters"));
        assert!(app.state.active_surface().unwrap().series().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(!screen(&mut app).contains("Error:"));
    }
}
