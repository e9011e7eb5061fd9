// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data output.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{Path, PathBuilder, Point};

/// Path builder that writes SVG path data.
///
/// The target may be any type that implements [`fmt::Write`], such as
/// [`String`]. Commands are separated by single spaces and always use
/// absolute coordinates, e.g. `M0 0 L0 10 Q5 15 10 10`.
///
/// [`PathBuilder`] methods cannot fail, so the first write error is
/// remembered and reported by [`SvgPen::finish`].
#[derive(Debug)]
pub struct SvgPen<W> {
    target: W,
    space: &'static str,
    result: fmt::Result,
}

impl<W: Write> SvgPen<W> {
    /// Create a pen writing into `target`.
    pub fn new(target: W) -> Self {
        SvgPen {
            target,
            space: "",
            result: Ok(()),
        }
    }

    /// Return the target, or the first error hit while writing to it.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] if any write to the target failed.
    pub fn finish(self) -> Result<W, fmt::Error> {
        self.result.map(|()| self.target)
    }

    fn command(&mut self, letter: char, points: &[Point]) {
        if self.result.is_err() {
            return;
        }
        self.result = write_command(&mut self.target, self.space, letter, points);
        self.space = " ";
    }
}

fn write_command<W: Write>(
    target: &mut W,
    space: &str,
    letter: char,
    points: &[Point],
) -> fmt::Result {
    target.write_str(space)?;
    target.write_char(letter)?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            target.write_char(' ')?;
        }
        write!(target, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

impl<W: Write> PathBuilder for SvgPen<W> {
    fn move_to(&mut self, p: Point) {
        self.command('M', &[p]);
    }

    fn line_to(&mut self, p: Point) {
        self.command('L', &[p]);
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.command('Q', &[ctrl, p]);
    }
}

impl Path {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo_turtle::{Path, PathBuilder, Point};
    ///
    /// let mut path = Path::new();
    /// path.move_to(Point::new(0., 0.));
    /// path.line_to(Point::new(0., 10.));
    /// assert_eq!(path.to_svg(), "M0 0 L0 10");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut pen = SvgPen::new(String::new());
        self.build_into(&mut pen);
        // Writing into a `String` never fails.
        pen.finish().unwrap_or_default()
    }
}
