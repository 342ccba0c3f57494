// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick gesture classifier.
//!
//! ## Usage
//!
//! 1) Create one [`GestureState`] per input surface.
//! 2) Once per frame, call [`GestureState::advance`] with that frame's [`InputSample`].
//! 3) Between frames, read the query surface (`tapped`, `is_dragging`, ...).
//!
//! ## Evaluation order
//!
//! Each tick runs, in order: frame-local reset, contact-down, contact-up,
//! hold, pinch, drag, carry-forward. Hold, pinch and drag compete for the
//! same contact; whichever claims it first keeps it until release, so at most
//! one of them is active at a time. Pulses (`tapped`, `held`, `drag_started`,
//! `dropped`, `pressed`) are true for the single tick on which their
//! transition happened.

use core::time::Duration;

use crate::config::{ConfigError, GestureConfig};
use crate::contact::ContactKind;
use crate::input::{InputSample, InputSource};
use crate::motion::Motion;

/// Gesture state for one input surface.
///
/// The state is a plain value: advance it with [`GestureState::advance`] and
/// read it through the query methods. It never reads a clock or an input
/// device itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub(crate) config: GestureConfig,
    pub(crate) touching: Option<ContactKind>,
    pub(crate) touched_this_frame: Option<ContactKind>,
    pub(crate) pressed_this_frame: Option<ContactKind>,
    pub(crate) holding: Option<ContactKind>,
    pub(crate) held_this_frame: Option<ContactKind>,
    pub(crate) dragging: Option<ContactKind>,
    pub(crate) dragged_this_frame: bool,
    pub(crate) dropped_this_frame: bool,
    pub(crate) pinching: bool,
    pub(crate) pinch_delta: f64,
    pub(crate) last_pinch_distance: f64,
    pub(crate) multi_touch: bool,
    pub(crate) motion: Motion,
    pub(crate) time_of_last_touch_down: Duration,
}

impl GestureState {
    /// Creates a classifier with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(GestureConfig::default())
    }

    /// Creates a classifier with custom thresholds.
    ///
    /// Returns an error if `config` fails [`GestureConfig::validate`].
    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        validate(&config)?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GestureConfig) -> Self {
        Self {
            config,
            touching: None,
            touched_this_frame: None,
            pressed_this_frame: None,
            holding: None,
            held_this_frame: None,
            dragging: None,
            dragged_this_frame: false,
            dropped_this_frame: false,
            pinching: false,
            pinch_delta: 0.0,
            last_pinch_distance: 0.0,
            multi_touch: false,
            motion: Motion::default(),
            time_of_last_touch_down: Duration::ZERO,
        }
    }

    /// Replaces the thresholds.
    ///
    /// The new thresholds apply from the next tick. A rejected `config`
    /// leaves the current one in place.
    pub fn set_config(&mut self, config: GestureConfig) -> Result<(), ConfigError> {
        validate(&config)?;
        self.config = config;
        Ok(())
    }

    /// Advances the classifier by one tick.
    pub fn advance(&mut self, input: &InputSample<'_>) {
        let was_holding = self.holding;
        let was_dragging = self.dragging;

        self.motion.update(input.pointer_position);
        self.touched_this_frame = None;
        self.pressed_this_frame = None;
        self.held_this_frame = None;
        self.dragged_this_frame = false;
        self.dropped_this_frame = false;
        self.multi_touch = input.multi_touch;

        self.detect_down(input);
        self.detect_up(input);
        self.detect_hold(input.time);
        self.detect_pinch(input);
        self.detect_drag();

        // Hold and drag pulses fire on the claim edge only.
        if was_holding.is_none() && self.holding.is_some() {
            self.held_this_frame = self.holding;
            log::debug!("{} hold entered", DisplayKind(self.holding));
        }
        if was_dragging.is_none() && self.dragging.is_some() {
            self.dragged_this_frame = true;
            log::debug!("{} drag started", DisplayKind(self.dragging));
        }

        self.motion.carry_forward();
    }

    /// Returns the state one tick after `self`, leaving `self` untouched.
    #[must_use]
    pub fn advanced(&self, input: &InputSample<'_>) -> Self {
        let mut next = *self;
        next.advance(input);
        next
    }

    /// Advances the classifier with the current sample from `source`.
    pub fn advance_from<S: InputSource + ?Sized>(&mut self, source: &S) {
        self.advance(&source.sample());
    }

    fn detect_down(&mut self, input: &InputSample<'_>) {
        let count = input.contact_count();
        let Some(kind) = ContactKind::classify(input.primary_down, input.secondary_down, count)
        else {
            return;
        };
        // A down mid-contact re-tags the contact; any claim stays until release.
        log::debug!("{kind} down at {:?}", self.motion.current());
        self.touching = Some(kind);
        self.pressed_this_frame = Some(kind);
        self.time_of_last_touch_down = input.time;
        self.motion.begin();
    }

    fn detect_up(&mut self, input: &InputSample<'_>) {
        if !input.contact_ended() {
            return;
        }
        if self.holding.is_none() && self.dragging.is_none() {
            self.touched_this_frame = self.touching;
            if let Some(kind) = self.touching {
                log::debug!("{kind} tap at {:?}", self.motion.current());
            }
        } else if self.dragging.is_some() {
            self.dropped_this_frame = true;
            log::debug!(
                "{} drop at {:?}",
                DisplayKind(self.dragging),
                self.motion.current()
            );
        }
        self.touching = None;
        self.clear_claims();
        self.motion.end();
    }

    fn detect_hold(&mut self, now: Duration) {
        if self.touching.is_none()
            || self.holding.is_some()
            || self.dragging.is_some()
            || self.pinching
        {
            return;
        }
        let elapsed = now.saturating_sub(self.time_of_last_touch_down);
        if elapsed > self.config.hold_threshold {
            self.holding = self.touching;
        }
    }

    fn detect_pinch(&mut self, input: &InputSample<'_>) {
        if !input.multi_touch {
            // Without genuine contacts the scroll wheel stands in for the spread.
            self.pinch_delta = input.scroll_delta;
            return;
        }
        self.pinch_delta = 0.0;
        if self.touching != Some(ContactKind::Secondary) {
            return;
        }
        let Some(distance) = input.contact_spread() else {
            return;
        };
        if self.pinching {
            self.pinch_delta = distance - self.last_pinch_distance;
            self.last_pinch_distance = distance;
        } else if self.holding.is_none()
            && self.dragging.is_none()
            && distance > self.config.pinch_distance_threshold
        {
            self.pinching = true;
            self.last_pinch_distance = distance;
            log::debug!("pinch started at spread {distance}");
        }
    }

    fn detect_drag(&mut self) {
        if self.pinching
            || self.touching.is_none()
            || self.holding.is_some()
            || self.dragging.is_some()
        {
            return;
        }
        if self.motion.travelled() > self.config.drag_distance_threshold {
            self.dragging = self.touching;
        }
    }

    fn clear_claims(&mut self) {
        self.holding = None;
        self.dragging = None;
        self.pinching = false;
        self.pinch_delta = 0.0;
        self.last_pinch_distance = 0.0;
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(config: &GestureConfig) -> Result<(), ConfigError> {
    config.validate().inspect_err(|err| {
        log::warn!("rejected gesture config: {err}");
    })
}

/// Formats an optional contact kind for log lines.
struct DisplayKind(Option<ContactKind>);

impl core::fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(kind) => write!(f, "{kind}"),
            None => f.write_str("no"),
        }
    }
}
