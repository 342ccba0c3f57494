// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifier thresholds.

use core::fmt;
use core::time::Duration;

/// Thresholds that decide when a contact stops being a tap.
///
/// Distances are in the same units as the positions fed to the classifier
/// (usually logical pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// How long a contact must stay down, undragged, before it becomes a hold.
    pub hold_threshold: Duration,
    /// How far a contact must travel from its start before it becomes a drag.
    pub drag_distance_threshold: f64,
    /// How far apart two contact points must be before they become a pinch.
    pub pinch_distance_threshold: f64,
}

impl GestureConfig {
    /// Default hold threshold: 500ms.
    pub const DEFAULT_HOLD_THRESHOLD: Duration = Duration::from_millis(500);
    /// Default drag distance threshold.
    pub const DEFAULT_DRAG_DISTANCE_THRESHOLD: f64 = 0.5;
    /// Default pinch distance threshold.
    pub const DEFAULT_PINCH_DISTANCE_THRESHOLD: f64 = 0.5;

    /// Returns a copy with a different hold threshold.
    #[must_use]
    pub fn with_hold_threshold(mut self, threshold: Duration) -> Self {
        self.hold_threshold = threshold;
        self
    }

    /// Returns a copy with a different drag distance threshold.
    #[must_use]
    pub fn with_drag_distance_threshold(mut self, threshold: f64) -> Self {
        self.drag_distance_threshold = threshold;
        self
    }

    /// Returns a copy with a different pinch distance threshold.
    #[must_use]
    pub fn with_pinch_distance_threshold(mut self, threshold: f64) -> Self {
        self.pinch_distance_threshold = threshold;
        self
    }

    /// Checks that every distance threshold is finite and non-negative.
    ///
    /// The hold threshold cannot be negative by construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance(Threshold::DragDistance, self.drag_distance_threshold)?;
        check_distance(Threshold::PinchDistance, self.pinch_distance_threshold)?;
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hold_threshold: Self::DEFAULT_HOLD_THRESHOLD,
            drag_distance_threshold: Self::DEFAULT_DRAG_DISTANCE_THRESHOLD,
            pinch_distance_threshold: Self::DEFAULT_PINCH_DISTANCE_THRESHOLD,
        }
    }
}

fn check_distance(threshold: Threshold, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { threshold, value })
    }
}

/// Names a distance threshold in [`GestureConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// [`GestureConfig::drag_distance_threshold`].
    DragDistance,
    /// [`GestureConfig::pinch_distance_threshold`].
    PinchDistance,
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragDistance => f.write_str("drag distance threshold"),
            Self::PinchDistance => f.write_str("pinch distance threshold"),
        }
    }
}

/// Error returned when a [`GestureConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A distance threshold was negative, NaN or infinite.
    InvalidThreshold {
        /// Which threshold was rejected.
        threshold: Threshold,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { threshold, value } => write!(
                f,
                "{threshold} must be finite and non-negative, got {value}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GestureConfig::default();
        assert_eq!(config.hold_threshold, Duration::from_millis(500));
        assert_eq!(config.drag_distance_threshold, 0.5);
        assert_eq!(config.pinch_distance_threshold, 0.5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_setters_replace_single_fields() {
        let config = GestureConfig::default()
            .with_hold_threshold(Duration::from_secs(1))
            .with_drag_distance_threshold(8.0);
        assert_eq!(config.hold_threshold, Duration::from_secs(1));
        assert_eq!(config.drag_distance_threshold, 8.0);
        assert_eq!(
            config.pinch_distance_threshold,
            GestureConfig::DEFAULT_PINCH_DISTANCE_THRESHOLD
        );
    }

    #[test]
    fn zero_thresholds_are_accepted() {
        let config = GestureConfig::default()
            .with_hold_threshold(Duration::ZERO)
            .with_drag_distance_threshold(0.0)
            .with_pinch_distance_threshold(0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_drag_distance_is_rejected() {
        let config = GestureConfig::default().with_drag_distance_threshold(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                threshold: Threshold::DragDistance,
                value: -1.0,
            })
        );
    }

    #[test]
    fn non_finite_pinch_distance_is_rejected() {
        let config = GestureConfig::default().with_pinch_distance_threshold(f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                threshold: Threshold::PinchDistance,
                ..
            })
        ));

        let config = GestureConfig::default().with_pinch_distance_threshold(f64::NAN);
        assert!(config.validate().is_err(), "NaN must be rejected");
    }

    #[test]
    fn error_message_names_the_threshold() {
        let err = ConfigError::InvalidThreshold {
            threshold: Threshold::DragDistance,
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "drag distance threshold must be finite and non-negative, got -2"
        );
    }
}
