// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: per-frame tap, hold, drag and pinch classification.
//!
//! This crate turns raw pointer and touch samples into debounced gesture
//! signals for applications that poll input once per rendered frame. A
//! single [`GestureState`] is advanced once per tick with an [`InputSample`]
//! and then queried as often as needed until the next tick.
//!
//! ## Gestures
//!
//! - **Tap**: a contact that is released before it becomes anything else.
//! - **Hold**: a contact that stays down longer than the hold threshold
//!   without being claimed as a drag or pinch.
//! - **Drag**: a contact that travels further than the drag distance
//!   threshold from where it began, before a hold or pinch claims it.
//! - **Pinch**: two contacts further apart than the pinch distance threshold.
//!   On devices without multi-touch, the scroll wheel stands in for a pinch.
//!
//! Each gesture comes in a [`ContactKind::Primary`] flavour (one finger, left
//! button) and a [`ContactKind::Secondary`] flavour (two fingers, right
//! button).
//!
//! Hold, drag and pinch are mutually exclusive: they are checked in that
//! order every tick, and whichever claims a contact first keeps it until the
//! contact is released.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::Point;
//! use understory_gesture::{GestureState, InputSample};
//!
//! let mut gestures = GestureState::new();
//!
//! // Finger down at (10, 10).
//! let t0 = Duration::ZERO;
//! gestures.advance(&InputSample::at(t0, Point::new(10.0, 10.0)).with_primary_down());
//! assert!(gestures.pressed());
//!
//! // Lifted 100ms later without moving: a tap.
//! let t1 = Duration::from_millis(100);
//! gestures.advance(&InputSample::at(t1, Point::new(10.0, 10.0)).with_primary_up());
//! assert!(gestures.tapped());
//! assert_eq!(gestures.touching(), None);
//!
//! // Pulses last a single tick.
//! let t2 = Duration::from_millis(116);
//! gestures.advance(&InputSample::at(t2, Point::new(10.0, 10.0)));
//! assert!(!gestures.tapped());
//! ```
//!
//! ## Dragging and dropping
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::Point;
//! use understory_gesture::{GestureConfig, GestureState, InputSample};
//!
//! let config = GestureConfig::default().with_drag_distance_threshold(8.0);
//! let mut gestures = GestureState::with_config(config).unwrap();
//! let at = |ms: u64, x: f64| InputSample::at(Duration::from_millis(ms), Point::new(x, 0.0));
//!
//! gestures.advance(&at(0, 0.0).with_primary_down());
//! gestures.advance(&at(16, 4.0));
//! assert!(!gestures.is_dragging());
//!
//! gestures.advance(&at(32, 12.0));
//! assert!(gestures.drag_started());
//! assert!(gestures.is_dragging());
//!
//! gestures.advance(&at(48, 20.0).with_primary_up());
//! assert!(gestures.dropped());
//! assert!(!gestures.tapped());
//! ```
//!
//! ## Integration
//!
//! The classifier never reads a device or a clock. Hosts translate their
//! windowing or touch events into one [`InputSample`] per frame, or implement
//! [`InputSource`] for their own per-frame snapshot. Each input surface gets
//! its own [`GestureState`].
//!
//! Gesture transitions are reported through the [`log`] facade at `debug`
//! level.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod contact;
mod input;
mod motion;
mod query;
mod state;

pub use config::{ConfigError, GestureConfig, Threshold};
pub use contact::ContactKind;
pub use input::{InputSample, InputSource};
pub use motion::Motion;
pub use state::GestureState;
