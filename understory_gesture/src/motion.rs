// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact motion: where a contact started, where it is, where it ended.
//!
//! [`Motion`] is the positional half of the classifier. It is fed the pointer
//! position once per tick with [`Motion::update`], which also derives the
//! per-tick delta from the position saved by the previous
//! [`Motion::carry_forward`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::Motion;
//!
//! let mut motion = Motion::default();
//!
//! motion.update(Point::new(10.0, 20.0));
//! motion.begin();
//! motion.carry_forward();
//!
//! motion.update(Point::new(15.0, 25.0));
//! assert_eq!(motion.delta(), Vec2::new(5.0, 5.0));
//! assert_eq!(motion.offset(), Vec2::new(5.0, 5.0));
//! motion.carry_forward();
//!
//! motion.update(Point::new(18.0, 29.0));
//! assert_eq!(motion.delta(), Vec2::new(3.0, 4.0));
//! assert_eq!(motion.offset(), Vec2::new(8.0, 9.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks contact positions across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    start: Point,
    current: Point,
    end: Point,
    last: Point,
    delta: Vec2,
}

impl Motion {
    /// Records this tick's pointer position.
    ///
    /// The delta is measured against the position carried forward from the
    /// previous tick, whether or not a contact is in progress.
    pub fn update(&mut self, pos: Point) {
        self.current = pos;
        self.delta = pos - self.last;
    }

    /// Marks the current position as the start of a new contact.
    pub fn begin(&mut self) {
        self.start = self.current;
    }

    /// Marks the current position as where the contact was released.
    pub fn end(&mut self) {
        self.end = self.current;
    }

    /// Carries the current position forward for the next tick's delta.
    pub fn carry_forward(&mut self) {
        self.last = self.current;
    }

    /// Position where the most recent contact began.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position reported this tick.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Position where the most recent contact was released.
    #[must_use]
    pub fn end_position(&self) -> Point {
        self.end
    }

    /// Change in position since the previous tick.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Offset of the current position from the contact start.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.current - self.start
    }

    /// Straight-line distance from the contact start.
    #[must_use]
    pub fn travelled(&self) -> f64 {
        self.start.distance(self.current)
    }
}
