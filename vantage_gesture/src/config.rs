// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;
use core::fmt;

/// Tuning parameters for gesture interpretation.
///
/// The defaults reproduce the classic feel: a two-finger pinch credits half
/// of the change in finger distance and angle, a full-width rotation drag
/// turns the view by π, and 1000 units of scroll double the zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Multiplier on the change in distance between two contacts.
    pub pinch_zoom_scale: f64,
    /// Multiplier on the change in angle of the line joining two contacts.
    pub pinch_rotation_scale: f64,
    /// Radians of rotation per normalized unit of horizontal rotation drag.
    pub drag_rotation_scale: f64,
    /// Scroll amount per unit of relative zoom.
    pub wheel_divisor: f64,
    /// Undo buffer capacity; `None` keeps every step.
    pub history_capacity: Option<usize>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_zoom_scale: 0.5,
            pinch_rotation_scale: 0.5,
            drag_rotation_scale: PI,
            wheel_divisor: 1000.0,
            history_capacity: Some(256),
        }
    }
}

impl GestureConfig {
    /// Sets [`GestureConfig::pinch_zoom_scale`].
    #[must_use]
    pub fn with_pinch_zoom_scale(mut self, scale: f64) -> Self {
        self.pinch_zoom_scale = scale;
        self
    }

    /// Sets [`GestureConfig::pinch_rotation_scale`].
    #[must_use]
    pub fn with_pinch_rotation_scale(mut self, scale: f64) -> Self {
        self.pinch_rotation_scale = scale;
        self
    }

    /// Sets [`GestureConfig::drag_rotation_scale`].
    #[must_use]
    pub fn with_drag_rotation_scale(mut self, scale: f64) -> Self {
        self.drag_rotation_scale = scale;
        self
    }

    /// Sets [`GestureConfig::wheel_divisor`].
    #[must_use]
    pub fn with_wheel_divisor(mut self, divisor: f64) -> Self {
        self.wheel_divisor = divisor;
        self
    }

    /// Sets [`GestureConfig::history_capacity`].
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: Option<usize>) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("pinch_zoom_scale", self.pinch_zoom_scale),
            ("pinch_rotation_scale", self.pinch_rotation_scale),
            ("drag_rotation_scale", self.drag_rotation_scale),
            ("wheel_divisor", self.wheel_divisor),
        ];
        for (parameter, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { parameter, value });
            }
        }
        if self.wheel_divisor == 0.0 {
            return Err(ConfigError::ZeroWheelDivisor);
        }
        Ok(())
    }
}

/// Error returned by [`GestureConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A scalar parameter is NaN or infinite.
    NonFinite {
        /// Field name.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The wheel divisor is zero.
    ZeroWheelDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { parameter, value } => {
                write!(f, "gesture parameter `{parameter}` must be finite, got {value}")
            }
            Self::ZeroWheelDivisor => f.write_str("wheel divisor must be nonzero"),
        }
    }
}

impl core::error::Error for ConfigError {}
