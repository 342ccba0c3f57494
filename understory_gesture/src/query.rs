// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only queries on [`GestureState`].
//!
//! Every query reads the snapshot left by the most recent
//! [`GestureState::advance`]. The boolean shorthands (`tapped`, `held`,
//! `is_dragging`, ...) answer for [`ContactKind::Primary`]; the `secondary_`
//! variants answer for [`ContactKind::Secondary`], and the kind-returning
//! accessors answer for either.

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::config::GestureConfig;
use crate::contact::ContactKind;
use crate::state::GestureState;

impl GestureState {
    /// Active thresholds.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Kind of tap completed this tick, if any.
    ///
    /// A tap is a release on a tick where neither a hold nor a drag had
    /// claimed the contact.
    #[must_use]
    pub fn tap(&self) -> Option<ContactKind> {
        self.touched_this_frame
    }

    /// A primary tap completed this tick.
    #[must_use]
    pub fn tapped(&self) -> bool {
        self.touched_this_frame == Some(ContactKind::Primary)
    }

    /// A secondary tap completed this tick.
    #[must_use]
    pub fn secondary_tapped(&self) -> bool {
        self.touched_this_frame == Some(ContactKind::Secondary)
    }

    /// Kind of contact that went down this tick, if any.
    #[must_use]
    pub fn press(&self) -> Option<ContactKind> {
        self.pressed_this_frame
    }

    /// A primary contact went down this tick.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed_this_frame == Some(ContactKind::Primary)
    }

    /// A secondary contact went down this tick.
    #[must_use]
    pub fn secondary_pressed(&self) -> bool {
        self.pressed_this_frame == Some(ContactKind::Secondary)
    }

    /// Kind of contact in progress, whatever it has been claimed as.
    #[must_use]
    pub fn touching(&self) -> Option<ContactKind> {
        self.touching
    }

    /// A primary contact is in progress.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.touching == Some(ContactKind::Primary)
    }

    /// Kind of hold entered this tick, if any.
    #[must_use]
    pub fn hold_entered(&self) -> Option<ContactKind> {
        self.held_this_frame
    }

    /// A primary hold was entered this tick.
    #[must_use]
    pub fn held(&self) -> bool {
        self.held_this_frame == Some(ContactKind::Primary)
    }

    /// A secondary hold was entered this tick.
    #[must_use]
    pub fn secondary_held(&self) -> bool {
        self.held_this_frame == Some(ContactKind::Secondary)
    }

    /// Kind of contact currently claimed as a hold.
    #[must_use]
    pub fn holding(&self) -> Option<ContactKind> {
        self.holding
    }

    /// A primary hold is in progress.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding == Some(ContactKind::Primary)
    }

    /// Kind of contact currently claimed as a drag.
    #[must_use]
    pub fn dragging(&self) -> Option<ContactKind> {
        self.dragging
    }

    /// A primary drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging == Some(ContactKind::Primary)
    }

    /// A secondary drag is in progress.
    #[must_use]
    pub fn is_secondary_dragging(&self) -> bool {
        self.dragging == Some(ContactKind::Secondary)
    }

    /// A drag began this tick.
    #[must_use]
    pub fn drag_started(&self) -> bool {
        self.dragged_this_frame
    }

    /// A drag was released this tick.
    ///
    /// This is the tick on which [`dragging`](Self::dragging) returns to `None`.
    #[must_use]
    pub fn dropped(&self) -> bool {
        self.dropped_this_frame
    }

    /// A pinch is in progress.
    ///
    /// Devices without multi-touch have no way to start a pinch, so the scroll
    /// wheel stands in for one and this is always `true` there.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinching || !self.multi_touch
    }

    /// Change in contact spread this tick, or the scroll delta on devices
    /// without multi-touch.
    ///
    /// Positive when the contacts move apart.
    #[must_use]
    pub fn pinch_delta(&self) -> f64 {
        self.pinch_delta
    }

    /// Position reported this tick.
    #[must_use]
    pub fn position(&self) -> Point {
        self.motion.current()
    }

    /// Position where the most recent contact began.
    #[must_use]
    pub fn start_position(&self) -> Point {
        self.motion.start()
    }

    /// Position where the most recent contact was released.
    #[must_use]
    pub fn end_position(&self) -> Point {
        self.motion.end_position()
    }

    /// Change in position since the previous tick.
    #[must_use]
    pub fn position_delta(&self) -> Vec2 {
        self.motion.delta()
    }

    /// Time since the contact in progress went down, or `None` without one.
    #[must_use]
    pub fn hold_elapsed(&self, now: Duration) -> Option<Duration> {
        self.touching
            .map(|_| now.saturating_sub(self.time_of_last_touch_down))
    }

    /// Something the application should react to happened this tick.
    ///
    /// That is an active drag, a completed tap, a hold entered this tick, or
    /// pinch activity. On devices without multi-touch, pinch activity means
    /// a non-zero scroll this tick.
    #[must_use]
    pub fn interacted(&self) -> bool {
        let pinch_activity = if self.multi_touch {
            self.pinching
        } else {
            self.pinch_delta != 0.0
        };
        self.dragging.is_some()
            || self.touched_this_frame.is_some()
            || self.held_this_frame.is_some()
            || pinch_activity
    }

    /// A primary drag is in progress and it started inside `region`.
    ///
    /// `region` is in its own local space, and `to_screen` maps that space
    /// into the coordinates positions are reported in.
    #[must_use]
    pub fn is_dragging_within(&self, region: Rect, to_screen: Affine) -> bool {
        self.is_dragging() && contains(region, to_screen, self.motion.start())
    }

    /// The current position lies inside `region`.
    ///
    /// See [`is_dragging_within`](Self::is_dragging_within) for `to_screen`.
    #[must_use]
    pub fn touch_within(&self, region: Rect, to_screen: Affine) -> bool {
        contains(region, to_screen, self.motion.current())
    }
}

fn contains(region: Rect, to_screen: Affine, screen_pos: Point) -> bool {
    if to_screen.determinant() == 0.0 {
        return false;
    }
    region.contains(to_screen.inverse() * screen_pos)
}
