// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input samples fed to the classifier once per tick.
//!
//! The classifier never talks to a windowing or touch backend directly. The
//! host reads its backend once per frame, fills an [`InputSample`], and hands
//! it to [`GestureState::advance`](crate::GestureState::advance). Backends that
//! already keep their own per-frame input snapshot can implement
//! [`InputSource`] instead and use
//! [`GestureState::advance_from`](crate::GestureState::advance_from).
//!
//! A tick with nothing to report is [`InputSample::default`]: no triggers, no
//! contact points, the pointer at the origin and no scroll.

use core::time::Duration;

use kurbo::Point;

/// Point-in-time input for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample<'a> {
    /// The primary trigger (left button, first finger) went down this tick.
    pub primary_down: bool,
    /// The primary trigger was released this tick.
    pub primary_up: bool,
    /// The alternate trigger (right button, platform two-finger tap) fired this tick.
    pub secondary_down: bool,
    /// The alternate trigger was released this tick.
    pub secondary_up: bool,
    /// Positions of the simultaneous contact points, first contact first.
    pub contacts: &'a [Point],
    /// Position of the primary contact or pointer.
    pub pointer_position: Point,
    /// Scroll wheel delta this tick, used as the pinch surrogate on devices
    /// without multi-touch.
    pub scroll_delta: f64,
    /// The device reports genuine simultaneous contacts.
    pub multi_touch: bool,
    /// Monotonic timestamp of this tick.
    pub time: Duration,
}

impl<'a> InputSample<'a> {
    /// Creates a neutral sample taken at `time` with the pointer at `position`.
    #[must_use]
    pub fn at(time: Duration, position: Point) -> Self {
        Self {
            time,
            pointer_position: position,
            ..Self::default()
        }
    }

    /// Number of simultaneous contact points.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if any trigger was released this tick.
    #[must_use]
    pub fn contact_ended(&self) -> bool {
        self.primary_up || self.secondary_up
    }

    /// Distance between the first two contact points, if two are present.
    #[must_use]
    pub fn contact_spread(&self) -> Option<f64> {
        match self.contacts {
            [first, second, ..] => Some(first.distance(*second)),
            _ => None,
        }
    }

    /// Marks the primary trigger as pressed.
    #[must_use]
    pub fn with_primary_down(mut self) -> Self {
        self.primary_down = true;
        self
    }

    /// Marks the primary trigger as released.
    #[must_use]
    pub fn with_primary_up(mut self) -> Self {
        self.primary_up = true;
        self
    }

    /// Marks the alternate trigger as pressed.
    #[must_use]
    pub fn with_secondary_down(mut self) -> Self {
        self.secondary_down = true;
        self
    }

    /// Marks the alternate trigger as released.
    #[must_use]
    pub fn with_secondary_up(mut self) -> Self {
        self.secondary_up = true;
        self
    }

    /// Sets the simultaneous contact points and marks the device multi-touch.
    #[must_use]
    pub fn with_contacts(mut self, contacts: &'a [Point]) -> Self {
        self.contacts = contacts;
        self.multi_touch = true;
        self
    }

    /// Sets the scroll delta.
    #[must_use]
    pub fn with_scroll(mut self, delta: f64) -> Self {
        self.scroll_delta = delta;
        self
    }

    /// Sets the multi-touch capability flag.
    #[must_use]
    pub fn with_multi_touch(mut self, multi_touch: bool) -> Self {
        self.multi_touch = multi_touch;
        self
    }
}

/// A host input backend that can produce one [`InputSample`] per tick.
pub trait InputSource {
    /// Returns this tick's sample.
    fn sample(&self) -> InputSample<'_>;
}

impl InputSource for InputSample<'_> {
    fn sample(&self) -> InputSample<'_> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_neutral() {
        let sample = InputSample::default();
        assert!(!sample.primary_down && !sample.primary_up);
        assert!(!sample.secondary_down && !sample.secondary_up);
        assert_eq!(sample.contact_count(), 0);
        assert_eq!(sample.pointer_position, Point::ZERO);
        assert_eq!(sample.scroll_delta, 0.0);
        assert!(!sample.multi_touch);
        assert!(!sample.contact_ended());
    }

    #[test]
    fn either_release_ends_the_contact() {
        let at = InputSample::at(Duration::ZERO, Point::ZERO);
        assert!(at.with_primary_up().contact_ended());
        assert!(at.with_secondary_up().contact_ended());
    }

    #[test]
    fn spread_needs_two_contacts() {
        let one = [Point::new(0.0, 0.0)];
        let two = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let at = InputSample::at(Duration::ZERO, Point::ZERO);

        assert_eq!(at.contact_spread(), None);
        assert_eq!(at.with_contacts(&one).contact_spread(), None);
        assert_eq!(at.with_contacts(&two).contact_spread(), Some(5.0));
    }

    #[test]
    fn with_contacts_marks_multi_touch() {
        let two = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let sample = InputSample::default().with_contacts(&two);
        assert!(sample.multi_touch);
        assert_eq!(sample.contact_count(), 2);
    }
}
