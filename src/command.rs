// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turtle commands.

use alloc::vec;
use alloc::vec::Vec;

use crate::{PathBuilder, Point, TurtleState};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single turtle command.
///
/// Commands are plain values; [`execute`](Command::execute) applies one to a
/// [`TurtleState`], emitting into a [`PathBuilder`] as needed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Start drawing on subsequent moves.
    PenDown,
    /// Stop drawing on subsequent moves.
    PenUp,
    /// Move the given distance along the current heading.
    Forward(f64),
    /// Turn by the given number of degrees, clockwise for positive values.
    Rotate(f64),
    /// Face the given heading in degrees.
    SetAngle(f64),
    /// Move to an absolute logical position.
    ///
    /// With the pen down this draws a line, or a quadratic curve when
    /// `ctrl` is present.
    MoveTo {
        /// Destination.
        to: Point,
        /// Optional quadratic control point.
        ctrl: Option<Point>,
    },
    /// Set the point [`Home`](Command::Home) returns to.
    ///
    /// `None` records the turtle's position at the time of execution.
    SetOrigin(Option<Point>),
    /// Move to the recorded origin, drawing if the pen is down.
    Home,
    /// Sweep through `angle` degrees in one-degree steps while covering
    /// `size` logical units in total.
    Arc {
        /// Total distance travelled along the arc.
        size: f64,
        /// Total turn in degrees; the sign gives the direction.
        angle: f64,
    },
    /// Run `commands` in order, `count` times.
    ///
    /// Non-positive counts run nothing.
    Repeat {
        /// Number of iterations.
        count: i64,
        /// The body.
        commands: Vec<Command>,
    },
    /// Save the current position and heading.
    PushState,
    /// Restore the most recently saved position and heading.
    ///
    /// A [`PathEl::MoveTo`] to the restored position is emitted so the
    /// path's current point follows the turtle, whatever the pen state. The
    /// pen state itself is not saved or restored. Popping an empty stack
    /// emits nothing and leaves the state unchanged.
    ///
    /// [`PathEl::MoveTo`]: crate::PathEl::MoveTo
    PopState,
}

impl Command {
    /// [`Command::Forward`].
    #[inline]
    pub fn forward(distance: f64) -> Command {
        Command::Forward(distance)
    }

    /// [`Command::Rotate`].
    #[inline]
    pub fn rotate(delta: f64) -> Command {
        Command::Rotate(delta)
    }

    /// [`Command::SetAngle`].
    #[inline]
    pub fn set_angle(degrees: f64) -> Command {
        Command::SetAngle(degrees)
    }

    /// A [`Command::MoveTo`] to `(x, y)`.
    #[inline]
    pub fn move_to(x: f64, y: f64) -> Command {
        Command::MoveTo {
            to: Point::new(x, y),
            ctrl: None,
        }
    }

    /// A [`Command::MoveTo`] to `(x, y)` curving through control point
    /// `(cx, cy)` when the pen is down.
    #[inline]
    pub fn curve_to(x: f64, y: f64, cx: f64, cy: f64) -> Command {
        Command::MoveTo {
            to: Point::new(x, y),
            ctrl: Some(Point::new(cx, cy)),
        }
    }

    /// A [`Command::SetOrigin`] capturing the position at execution time.
    #[inline]
    pub fn set_origin() -> Command {
        Command::SetOrigin(None)
    }

    /// A [`Command::SetOrigin`] with an explicit point.
    #[inline]
    pub fn set_origin_at(origin: impl Into<Point>) -> Command {
        Command::SetOrigin(Some(origin.into()))
    }

    /// [`Command::Arc`].
    #[inline]
    pub fn arc(size: f64, angle: f64) -> Command {
        Command::Arc { size, angle }
    }

    /// [`Command::Repeat`].
    #[inline]
    pub fn repeat(count: i64, commands: impl IntoIterator<Item = Command>) -> Command {
        Command::Repeat {
            count,
            commands: commands.into_iter().collect(),
        }
    }

    /// Translate an arc into the primitive commands it stands for.
    ///
    /// The sweep is split into `trunc(|angle|)` steps, each turning
    /// `angle / steps` degrees and then moving `size / steps` units. Less
    /// than one whole degree of sweep, or a non-finite sweep, yields an
    /// empty repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo_turtle::Command;
    ///
    /// assert_eq!(
    ///     Command::expand_arc(8.0, -4.0),
    ///     Command::repeat(4, [Command::rotate(-1.0), Command::forward(2.0)]),
    /// );
    /// assert_eq!(Command::expand_arc(50.0, 0.0), Command::repeat(0, Vec::new()));
    /// ```
    pub fn expand_arc(size: f64, angle: f64) -> Command {
        let steps = arc_steps(angle);
        if steps == 0 {
            return Command::repeat(0, Vec::new());
        }
        let n = steps as f64;
        Command::Repeat {
            count: steps,
            commands: vec![Command::Rotate(angle / n), Command::Forward(size / n)],
        }
    }

    /// Apply this command to `state`, emitting any drawing into `sink`.
    ///
    /// Commands never fail: degenerate input such as a zero-degree arc or
    /// a negative repeat count does nothing, and non-finite numbers are
    /// carried through as they are.
    pub fn execute<B: PathBuilder + ?Sized>(&self, sink: &mut B, state: &mut TurtleState) {
        match self {
            Command::PenDown => state.pen_down = true,
            Command::PenUp => state.pen_down = false,
            Command::Forward(distance) => {
                let to = state.ahead(*distance);
                state.travel(sink, to, None);
            }
            Command::Rotate(delta) => state.rotate(*delta),
            Command::SetAngle(degrees) => state.set_angle(*degrees),
            Command::MoveTo { to, ctrl } => state.travel(sink, *to, *ctrl),
            Command::SetOrigin(origin) => state.origin = origin.unwrap_or(state.position),
            Command::Home => {
                let origin = state.origin;
                state.travel(sink, origin, None);
            }
            Command::Arc { size, angle } => {
                Command::expand_arc(*size, *angle).execute(sink, state);
            }
            Command::Repeat { count, commands } => {
                for _ in 0..*count {
                    for command in commands {
                        command.execute(sink, state);
                    }
                }
            }
            Command::PushState => state.push(),
            Command::PopState => match state.pop() {
                Some(_) => sink.move_to(state.position.scale(state.measure)),
                None => tracing::warn!("pop_state on empty stack"),
            },
        }
    }
}

/// Whole degrees in an arc sweep.
///
/// Non-finite sweeps have no steps; otherwise the cast saturates.
#[allow(
    clippy::cast_possible_truncation,
    reason = "truncating to whole degrees is intended"
)]
fn arc_steps(angle: f64) -> i64 {
    if !angle.is_finite() {
        return 0;
    }
    angle.abs().trunc() as i64
}
