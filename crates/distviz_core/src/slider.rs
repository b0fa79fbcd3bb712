//! Bounded numeric sliders with debounced change events.
//!
//! A slider keeps two values: the *committed* value, which renders read, and
//! an optional *pending* value that moves while the user is dragging. Only
//! [`Slider::release`] turns a pending value into a committed one, so a drag
//! produces at most one change no matter how many positions it passes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Setup-time description of a slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    /// Parameter name the value is bound to (e.g. `loc`, `df`)
    pub name: String,
    /// Text shown next to the control; falls back to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    pub fn new(name: impl Into<String>, value: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            label: None,
            value,
            min,
            max,
            step,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Check `min <= value <= max`, `step > 0` and that everything is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = || self.name.clone();

        if ![self.value, self.min, self.max, self.step]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::NonFiniteSlider { name: name() });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                name: name(),
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep {
                name: name(),
                step: self.step,
            });
        }
        if self.value < self.min || self.value > self.max {
            return Err(ConfigError::ValueOutOfBounds {
                name: name(),
                value: self.value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// A committed value change emitted when a slider is released.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderChange {
    pub name: String,
    pub old: f64,
    pub new: f64,
}

/// Runtime slider control built from a validated [`SliderSpec`].
#[derive(Debug, Clone)]
pub struct Slider {
    spec: SliderSpec,
    committed: f64,
    pending: Option<f64>,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> Result<Self, ConfigError> {
        spec.validate()?;
        Ok(Self {
            committed: spec.value,
            pending: None,
            spec,
        })
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn label(&self) -> &str {
        self.spec.display_label()
    }

    pub fn min(&self) -> f64 {
        self.spec.min
    }

    pub fn max(&self) -> f64 {
        self.spec.max
    }

    pub fn step(&self) -> f64 {
        self.spec.step
    }

    /// Last committed value. This is what renders see.
    pub fn value(&self) -> f64 {
        self.committed
    }

    /// Value to display: the pending drag position if any, else the committed value.
    pub fn displayed(&self) -> f64 {
        self.pending.unwrap_or(self.committed)
    }

    pub fn is_dragging(&self) -> bool {
        self.pending.is_some()
    }

    /// Position of the displayed value within `[min, max]`, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.displayed() - self.spec.min) / span).clamp(0.0, 1.0)
    }

    /// Snap `value` onto the step grid anchored at `min`, then clamp into bounds.
    ///
    /// NaN snaps to the currently displayed value.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.displayed();
        }
        let SliderSpec { min, max, step, .. } = self.spec;
        let clamped = value.clamp(min, max);
        let steps = ((clamped - min) / step).round();
        (min + steps * step).clamp(min, max)
    }

    /// Move the pending value without committing it.
    pub fn drag_to(&mut self, value: f64) {
        self.pending = Some(self.snap(value));
    }

    /// Move the pending value by a whole number of steps.
    pub fn drag_by(&mut self, steps: i32) {
        let target = self.displayed() + f64::from(steps) * self.spec.step;
        self.drag_to(target);
    }

    /// End the current interaction. Emits a change only if the committed
    /// value actually moved.
    pub fn release(&mut self) -> Option<SliderChange> {
        let pending = self.pending.take()?;
        if pending == self.committed {
            return None;
        }
        let old = std::mem::replace(&mut self.committed, pending);
        Some(SliderChange {
            name: self.spec.name.clone(),
            old,
            new: pending,
        })
    }

    /// Drag and release in one step.
    pub fn set_value(&mut self, value: f64) -> Option<SliderChange> {
        self.drag_to(value);
        self.release()
    }

    /// Return to the initial value.
    pub fn reset(&mut self) -> Option<SliderChange> {
        self.pending = Some(self.spec.value);
        self.release()
    }
}
