// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable context of a single replay.

use alloc::vec::Vec;

use crate::common::normalize_angle;
use crate::{PathBuilder, Point, Vec2};

/// Position and heading saved by [`Command::PushState`].
///
/// [`Command::PushState`]: crate::Command::PushState
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedState {
    /// The saved position, in logical units.
    pub position: Point,
    /// The saved heading, in degrees.
    pub angle: f64,
}

/// The turtle: where it is, where it faces, and whether it is drawing.
///
/// A fresh state is created for every replay and dropped when the replay
/// ends. Positions are logical; `measure` is only applied when a point is
/// emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct TurtleState {
    /// Location of the turtle in logical (unscaled) units.
    pub position: Point,
    /// Heading in degrees, always in `[0, 360)` when set through
    /// [`rotate`](TurtleState::rotate) or [`set_angle`](TurtleState::set_angle).
    ///
    /// 0° faces +y and angles grow clockwise.
    pub angle: f64,
    /// Whether moves draw.
    pub pen_down: bool,
    /// Multiplier from logical to output coordinates.
    pub measure: f64,
    /// Target of [`Command::Home`](crate::Command::Home).
    pub origin: Point,
    saved: Vec<SavedState>,
}

impl TurtleState {
    /// The initial state of a replay with the given measure.
    ///
    /// The turtle sits at (0, 0) facing 0° with the pen up, and the home
    /// origin is (0, 0).
    pub fn new(measure: f64) -> TurtleState {
        TurtleState {
            position: Point::ZERO,
            angle: 0.0,
            pen_down: false,
            measure,
            origin: Point::ZERO,
            saved: Vec::new(),
        }
    }

    /// Turn by `delta` degrees, clockwise for positive values.
    #[inline]
    pub fn rotate(&mut self, delta: f64) {
        self.angle = normalize_angle(self.angle + delta);
    }

    /// Face `degrees`.
    #[inline]
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = normalize_angle(degrees);
    }

    /// The unit vector the turtle is facing.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::from_heading(self.angle)
    }

    /// The point `distance` logical units ahead of the turtle.
    #[inline]
    pub fn ahead(&self, distance: f64) -> Point {
        self.position + distance * self.heading()
    }

    /// Move to `to`, drawing a line if the pen is down.
    ///
    /// If `ctrl` is given and the pen is down, a quadratic curve with that
    /// control point is drawn instead of a line. With the pen up only a
    /// move is emitted and `ctrl` is ignored. The position is updated in
    /// either case.
    pub fn travel<B: PathBuilder + ?Sized>(
        &mut self,
        sink: &mut B,
        to: Point,
        ctrl: Option<Point>,
    ) {
        let target = to.scale(self.measure);
        match (self.pen_down, ctrl) {
            (true, Some(ctrl)) => sink.quad_to(ctrl.scale(self.measure), target),
            (true, None) => sink.line_to(target),
            (false, _) => sink.move_to(target),
        }
        self.position = to;
    }

    /// Save the current position and heading.
    pub fn push(&mut self) {
        self.saved.push(SavedState {
            position: self.position,
            angle: self.angle,
        });
    }

    /// Restore the most recently saved position and heading.
    ///
    /// Returns the restored entry, or `None` if nothing was saved, in which
    /// case the state is unchanged.
    pub fn pop(&mut self) -> Option<SavedState> {
        let saved = self.saved.pop()?;
        self.position = saved.position;
        self.angle = saved.angle;
        Some(saved)
    }

    /// Number of saved entries.
    #[inline]
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }
}

impl Default for TurtleState {
    fn default() -> Self {
        TurtleState::new(1.0)
    }
}
