// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The turtle engine: an append-only command list and its replay.

use alloc::vec::Vec;
use core::fmt;

use crate::{Command, Path, PathBuilder, PathEl, Point, TurtleState};

/// The measure used when none is given: one output unit per logical unit.
pub const DEFAULT_MEASURE: f64 = 1.0;

/// An ordered list of turtle commands that can be replayed into paths.
///
/// Commands are only ever appended; their insertion order is their
/// execution order. Every replay starts from a fresh [`TurtleState`], so
/// replaying the same turtle with the same measure always produces the same
/// path.
///
/// # Examples
///
/// ```
/// use kurbo_turtle::{Command, PathEl, Point, Turtle};
///
/// let mut turtle = Turtle::new();
/// turtle.append([
///     Command::PenDown,
///     Command::repeat(4, [Command::forward(1.0), Command::rotate(90.0)]),
/// ]);
/// let path = turtle.build_path(10.0);
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.elements()[0], PathEl::LineTo(Point::new(0.0, 10.0)));
/// ```
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Turtle {
    commands: Vec<Command>,
}

/// An error from [`Turtle::try_build_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReplayError {
    /// The measure was NaN or infinite.
    NonFiniteMeasure(f64),
    /// The path element at this index had a NaN or infinite coordinate.
    NonFinite {
        /// Index of the offending element in the path.
        element: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::NonFiniteMeasure(measure) => {
                write!(f, "Measure {measure} is not finite")
            }
            ReplayError::NonFinite { element } => {
                write!(f, "Path element {element} has a non-finite coordinate")
            }
        }
    }
}

impl core::error::Error for ReplayError {}

impl Turtle {
    /// Create a turtle with no commands.
    #[inline]
    pub fn new() -> Turtle {
        Turtle::default()
    }

    /// Add commands to the end of the list.
    ///
    /// Commands are not validated.
    pub fn append(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    /// Add a single command to the end of the list.
    #[inline]
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The stored commands, in execution order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of top-level commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands have been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command into `sink` and return the final turtle state.
    ///
    /// This is the primitive the other replay methods are built on; use it
    /// to draw straight into a renderer's own path type.
    pub fn replay<B: PathBuilder + ?Sized>(&self, sink: &mut B, measure: f64) -> TurtleState {
        tracing::debug!(commands = self.commands.len(), measure, "turtle replay");
        let mut state = TurtleState::new(measure);
        for command in &self.commands {
            command.execute(sink, &mut state);
        }
        state
    }

    /// Replay every command and collect the result into a new [`Path`].
    ///
    /// Coordinates in the path are logical coordinates multiplied by
    /// `measure`. Negative, zero, or non-finite measures are used as given.
    pub fn build_path(&self, measure: f64) -> Path {
        let mut path = Path::new();
        self.replay(&mut path, measure);
        tracing::debug!(elements = path.len(), "turtle replay done");
        path
    }

    /// [`build_path`](Turtle::build_path) with [`DEFAULT_MEASURE`].
    #[inline]
    pub fn path(&self) -> Path {
        self.build_path(DEFAULT_MEASURE)
    }

    /// Like [`build_path`](Turtle::build_path), but reject paths with
    /// non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::NonFiniteMeasure`] if `measure` is NaN or
    /// infinite, and [`ReplayError::NonFinite`] for the first emitted
    /// element with a NaN or infinite coordinate.
    pub fn try_build_path(&self, measure: f64) -> Result<Path, ReplayError> {
        if !measure.is_finite() {
            tracing::debug!(measure, "rejecting non-finite measure");
            return Err(ReplayError::NonFiniteMeasure(measure));
        }
        let mut sink = FiniteSink::default();
        self.replay(&mut sink, measure);
        match sink.error {
            Some(err) => {
                tracing::debug!(%err, "rejecting replay");
                Err(err)
            }
            None => Ok(sink.path),
        }
    }
}

/// Records elements until the first non-finite one.
#[derive(Default)]
struct FiniteSink {
    path: Path,
    error: Option<ReplayError>,
}

impl FiniteSink {
    fn push(&mut self, el: PathEl) {
        if self.error.is_some() {
            return;
        }
        if el.is_finite() {
            self.path.push(el);
        } else {
            self.error = Some(ReplayError::NonFinite {
                element: self.path.len(),
            });
        }
    }
}

impl PathBuilder for FiniteSink {
    fn move_to(&mut self, p: Point) {
        self.push(PathEl::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push(PathEl::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.push(PathEl::QuadTo(ctrl, p));
    }
}

impl Extend<Command> for Turtle {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl FromIterator<Command> for Turtle {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Turtle {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Command, Path, PathEl, Point, ReplayError, Turtle, DEFAULT_MEASURE};

    #[test]
    fn empty_turtle_builds_empty_path() {
        let turtle = Turtle::new();
        assert!(turtle.is_empty());
        assert!(turtle.path().is_empty());
        assert_eq!(turtle.try_build_path(3.0), Ok(Path::new()));
    }

    #[test]
    fn append_keeps_order() {
        let mut turtle = Turtle::new();
        turtle.append([Command::PenDown, Command::forward(1.)]);
        turtle.push(Command::rotate(90.));
        turtle.extend([Command::PenUp]);
        assert_eq!(
            turtle.commands(),
            &[
                Command::PenDown,
                Command::forward(1.),
                Command::rotate(90.),
                Command::PenUp,
            ]
        );
        assert_eq!(turtle.len(), 4);
    }

    #[test]
    fn pen_up_move_is_a_single_move() {
        let turtle: Turtle = [Command::PenUp, Command::move_to(5., 5.)].into_iter().collect();
        assert_eq!(
            turtle.path().elements(),
            &[PathEl::MoveTo(Point::new(5., 5.))]
        );
    }

    #[test]
    fn scale_applies_only_at_emission() {
        let turtle: Turtle = [Command::PenDown, Command::move_to(2., 0.)]
            .into_iter()
            .collect();
        let mut path = Path::new();
        let state = turtle.replay(&mut path, 10.0);
        assert_eq!(path.elements(), &[PathEl::LineTo(Point::new(20., 0.))]);
        assert_eq!(state.position, Point::new(2., 0.));
        assert_eq!(state.measure, 10.0);
    }

    #[test]
    fn default_measure_is_one() {
        let turtle: Turtle = [Command::PenDown, Command::move_to(3., 4.)]
            .into_iter()
            .collect();
        assert_eq!(turtle.path(), turtle.build_path(DEFAULT_MEASURE));
        assert_eq!(
            turtle.path().elements(),
            &[PathEl::LineTo(Point::new(3., 4.))]
        );
    }

    #[test]
    fn negative_measure_is_literal() {
        let turtle: Turtle = [Command::PenDown, Command::move_to(1., 2.)]
            .into_iter()
            .collect();
        assert_eq!(
            turtle.try_build_path(-2.0).unwrap().elements(),
            &[PathEl::LineTo(Point::new(-2., -4.))]
        );
    }

    #[test]
    fn each_replay_starts_fresh() {
        let mut turtle = Turtle::new();
        turtle.append([
            Command::PenDown,
            Command::forward(3.),
            Command::rotate(45.),
            Command::set_origin(),
            Command::PushState,
        ]);
        let mut first = Path::new();
        let state = turtle.replay(&mut first, 1.0);
        assert_eq!(state.saved_depth(), 1);
        let state = turtle.replay(&mut Path::new(), 1.0);
        assert_eq!(state.saved_depth(), 1);
        assert_eq!(state.position, Point::new(0., 3.));
        assert_eq!(state.angle, 45.0);
    }

    fn random_command(rng: &mut StdRng, depth: u32) -> Command {
        let number = |rng: &mut StdRng| rng.random_range(-100.0..100.0);
        match rng.random_range(0..12) {
            0 => Command::PenDown,
            1 => Command::PenUp,
            2 => Command::forward(number(rng)),
            3 => Command::rotate(number(rng) * 10.0),
            4 => Command::set_angle(number(rng)),
            5 => Command::move_to(number(rng), number(rng)),
            6 => Command::curve_to(number(rng), number(rng), number(rng), number(rng)),
            7 => Command::set_origin(),
            8 => Command::Home,
            9 => Command::arc(number(rng), number(rng)),
            10 if depth < 2 => {
                let body: Vec<_> = (0..rng.random_range(0..4))
                    .map(|_| random_command(rng, depth + 1))
                    .collect();
                Command::repeat(rng.random_range(-1..4), body)
            }
            10 => Command::PushState,
            _ => Command::PopState,
        }
    }

    #[test]
    fn replay_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let turtle: Turtle = (0..rng.random_range(0..30))
                .map(|_| random_command(&mut rng, 0))
                .collect();
            let measure = rng.random_range(0.1..10.0);
            let first = turtle.build_path(measure);
            let second = turtle.build_path(measure);
            assert_eq!(first, second);
            assert_eq!(turtle.try_build_path(measure), Ok(first));
        }
    }

    #[test]
    fn random_replays_keep_angle_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let turtle: Turtle = (0..rng.random_range(1..30))
                .map(|_| random_command(&mut rng, 0))
                .collect();
            let state = turtle.replay(&mut Path::new(), 1.0);
            assert!(
                (0.0..360.0).contains(&state.angle),
                "angle {} out of range",
                state.angle
            );
        }
    }

    #[test]
    fn non_finite_measure_is_rejected() {
        let turtle: Turtle = [Command::forward(1.)].into_iter().collect();
        assert_eq!(
            turtle.try_build_path(f64::INFINITY),
            Err(ReplayError::NonFiniteMeasure(f64::INFINITY))
        );
        assert!(turtle.build_path(f64::NAN).elements()[0]
            .end_point()
            .is_nan());
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let turtle: Turtle = [
            Command::PenDown,
            Command::forward(1.),
            Command::forward(f64::INFINITY),
            Command::forward(1.),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            turtle.try_build_path(1.0),
            Err(ReplayError::NonFinite { element: 1 })
        );
        // The total entry point propagates the value instead.
        let path = turtle.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first_non_finite(), Some(1));
    }

    #[test]
    fn infinite_arc_terminates() {
        let turtle: Turtle = [
            Command::PenDown,
            Command::arc(10., f64::INFINITY),
            Command::forward(1.),
        ]
        .into_iter()
        .collect();
        let path = turtle.try_build_path(1.0).unwrap();
        assert_eq!(path.elements(), &[PathEl::LineTo(Point::new(0., 1.))]);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ReplayError::NonFinite { element: 3 }.to_string(),
            "Path element 3 has a non-finite coordinate"
        );
        assert_eq!(
            ReplayError::NonFiniteMeasure(f64::NAN).to_string(),
            "Measure NaN is not finite"
        );
    }

    #[test]
    fn replay_into_svg() {
        let turtle: Turtle = [
            Command::forward(1.),
            Command::PenDown,
            Command::curve_to(2., 2., 0., 2.),
        ]
        .into_iter()
        .collect();
        let mut pen = crate::SvgPen::new(alloc::string::String::new());
        turtle.replay(&mut pen, 2.0);
        assert_eq!(pen.finish().unwrap(), "M0 2 Q0 4 4 4");
        assert_eq!(turtle.path().to_svg(), "M0 1 Q0 2 2 2");
    }
}
