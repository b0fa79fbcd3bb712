use distviz_core::{ControlEvent, Outcome, Visualizer};

use crate::components::plot_panel::ChartSurface;

/// Everything the UI reads and the key handlers mutate.
///
/// Visualizer `i` always draws onto `surfaces[i]` and reports its last
/// render failure in `errors[i]`.
pub struct AppState {
    pub visualizers: Vec<Visualizer>,
    pub surfaces: Vec<ChartSurface>,
    pub errors: Vec<Option<String>>,
    /// Index of the family tab on screen
    pub active: usize,
    /// Slider row with keyboard focus in the active tab
    pub focus: usize,
    pub exit: bool,
}

impl AppState {
    pub fn new(visualizers: Vec<Visualizer>, active: usize) -> Self {
        let surfaces = visualizers.iter().map(|_| ChartSurface::default()).collect();
        let errors = vec![None; visualizers.len()];
        let active = active.min(visualizers.len().saturating_sub(1));
        Self {
            visualizers,
            surfaces,
            errors,
            active,
            focus: 0,
            exit: false,
        }
    }

    pub fn active_visualizer(&self) -> Option<&Visualizer> {
        self.visualizers.get(self.active)
    }

    pub fn active_surface(&self) -> Option<&ChartSurface> {
        self.surfaces.get(self.active)
    }

    /// Last render failure of the tab on screen.
    pub fn active_error(&self) -> Option<&str> {
        self.errors.get(self.active)?.as_deref()
    }

    /// Whether any slider in any tab holds an uncommitted drag.
    pub fn is_dragging(&self) -> bool {
        self.visualizers.iter().any(|v| v.panel().is_dragging())
    }

    pub fn switch_family(&mut self, index: usize) {
        if index < self.visualizers.len() && index != self.active {
            self.active = index;
            self.focus = 0;
            tracing::debug!(family = self.visualizers[index].title(), "switched tab");
        }
    }

    pub fn next_family(&mut self) {
        if !self.visualizers.is_empty() {
            self.switch_family((self.active + 1) % self.visualizers.len());
        }
    }

    pub fn prev_family(&mut self) {
        let count = self.visualizers.len();
        if count > 0 {
            self.switch_family((self.active + count - 1) % count);
        }
    }

    fn slider_count(&self) -> usize {
        self.active_visualizer().map_or(0, |v| v.panel().len())
    }

    pub fn focus_next(&mut self) {
        let count = self.slider_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.slider_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Move the focused slider's pending value. Nothing renders until
    /// [`AppState::commit_pending`].
    pub fn drag_focused(&mut self, steps: i32) {
        self.send(
            self.active,
            ControlEvent::DragBy {
                slider: self.focus,
                steps,
            },
        );
    }

    pub fn toggle_mode(&mut self) {
        self.send(self.active, ControlEvent::ToggleMode);
    }

    pub fn reset(&mut self) {
        self.send(self.active, ControlEvent::Reset);
    }

    /// End every in-flight drag. Each visualizer with a changed value
    /// renders once.
    pub fn commit_pending(&mut self) {
        for index in 0..self.visualizers.len() {
            self.send(index, ControlEvent::ReleaseAll);
        }
    }

    /// Draw every visualizer's initial curve.
    pub fn refresh_all(&mut self) {
        for index in 0..self.visualizers.len() {
            self.send(index, ControlEvent::Refresh);
        }
    }

    pub fn set_error(&mut self, index: usize, message: String) {
        if let Some(slot) = self.errors.get_mut(index) {
            *slot = Some(message);
        }
    }

    pub fn clear_error(&mut self, index: usize) {
        if let Some(slot) = self.errors.get_mut(index) {
            *slot = None;
        }
    }

    /// Hide the error shown for the active tab.
    pub fn dismiss_error(&mut self) {
        self.clear_error(self.active);
    }

    /// Deliver `event` to visualizer `index`, drawing onto its own surface.
    fn send(&mut self, index: usize, event: ControlEvent) {
        let (Some(visualizer), Some(surface)) =
            (self.visualizers.get_mut(index), self.surfaces.get_mut(index))
        else {
            return;
        };

        match visualizer.handle(event, surface) {
            Ok(Outcome::Rendered) => {
                tracing::debug!(
                    family = visualizer.title(),
                    renders = visualizer.render_count(),
                    ?event,
                    "rendered"
                );
                self.clear_error(index);
            }
            Ok(Outcome::Unchanged) => {}
            Err(err) => {
                tracing::warn!(family = visualizer.title(), ?event, "render failed: {err}");
                let message = format!("{}: {err}", visualizer.title());
                self.set_error(index, message);
            }
        }
    }
}
