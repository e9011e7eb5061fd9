// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path output: the elements a replay emits and the sink they are emitted into.

use alloc::vec::Vec;
use core::slice;

use crate::{Point, Rect};

/// The element of a turtle path.
///
/// Coordinates are output coordinates, i.e. already multiplied by the
/// replay measure.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic bezier using the current location and the two points:
    /// the control point first, then the end point.
    QuadTo(Point, Point),
}

impl PathEl {
    /// The point this element ends at.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) => p,
        }
    }

    /// Is this element [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
            PathEl::QuadTo(p1, p2) => p1.is_finite() && p2.is_finite(),
        }
    }

    /// Send this element to a builder.
    #[inline]
    pub fn build_into<B: PathBuilder + ?Sized>(&self, builder: &mut B) {
        match *self {
            PathEl::MoveTo(p) => builder.move_to(p),
            PathEl::LineTo(p) => builder.line_to(p),
            PathEl::QuadTo(p1, p2) => builder.quad_to(p1, p2),
        }
    }
}

/// A sink for path elements.
///
/// Turtle replay only ever talks to this trait, so the same command list can
/// be recorded into a [`Path`], written out as SVG with [`SvgPen`], or fed
/// into a renderer's own path type.
///
/// Implementations must keep elements in the order they are received; that
/// order is the drawing order.
///
/// [`SvgPen`]: crate::SvgPen
pub trait PathBuilder {
    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Draw a line to `p`.
    fn line_to(&mut self, p: Point);

    /// Draw a quadratic bezier to `p` with control point `ctrl`.
    ///
    /// The control point comes first and the end point second. This is the
    /// reverse of [`Command::curve_to`], which takes the target first; an
    /// adapter for an API shaped like `quadCurveTo(to, control)` has to swap
    /// the arguments.
    ///
    /// [`Command::curve_to`]: crate::Command::curve_to
    fn quad_to(&mut self, ctrl: Point, p: Point);
}

impl<B: PathBuilder + ?Sized> PathBuilder for &mut B {
    #[inline]
    fn move_to(&mut self, p: Point) {
        (**self).move_to(p);
    }

    #[inline]
    fn line_to(&mut self, p: Point) {
        (**self).line_to(p);
    }

    #[inline]
    fn quad_to(&mut self, ctrl: Point, p: Point) {
        (**self).quad_to(ctrl, p);
    }
}

/// The path produced by a turtle replay.
///
/// A path is a plain ordered record of [`PathEl`]s. Unlike a general bezier
/// path there is no requirement that it begin with a `MoveTo`: a turtle
/// starts at the origin, so a replay beginning with the pen down starts
/// with a `LineTo` from (0, 0).
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<PathEl>);

impl Path {
    /// Create a new, empty path.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a path from a vector of path elements.
    #[inline]
    pub fn from_vec(v: Vec<PathEl>) -> Path {
        Path(v)
    }

    /// Push a generic path element onto the path.
    #[inline]
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Get the path elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Iterate over the path elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PathEl> {
        self.0.iter()
    }

    /// Number of elements in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path contains no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path contains at least one visible segment,
    /// i.e. anything other than moves.
    pub fn has_strokes(&self) -> bool {
        self.0.iter().any(|el| !matches!(el, PathEl::MoveTo(_)))
    }

    /// The end point of the last element, if any.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        self.0.last().map(PathEl::end_point)
    }

    /// The smallest rectangle containing every end point and control point.
    ///
    /// Returns `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut points = self.0.iter().flat_map(|el| {
            let (first, second) = match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => (p, None),
                PathEl::QuadTo(ctrl, p) => (ctrl, Some(p)),
            };
            core::iter::once(first).chain(second)
        });
        let first = points.next()?;
        Some(points.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
    }

    /// Replay every element, in order, into another builder.
    pub fn build_into<B: PathBuilder + ?Sized>(&self, builder: &mut B) {
        for el in &self.0 {
            el.build_into(builder);
        }
    }

    /// Index of the first element with a non-finite coordinate, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|el| !el.is_finite())
    }
}

impl PathBuilder for Path {
    #[inline]
    fn move_to(&mut self, p: Point) {
        self.push(PathEl::MoveTo(p));
    }

    #[inline]
    fn line_to(&mut self, p: Point) {
        self.push(PathEl::LineTo(p));
    }

    #[inline]
    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.push(PathEl::QuadTo(ctrl, p));
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathEl;
    type IntoIter = core::iter::Cloned<slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().cloned()
    }
}

impl IntoIterator for Path {
    type Item = PathEl;
    type IntoIter = alloc::vec::IntoIter<PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Path> for Vec<PathEl> {
    fn from(path: Path) -> Self {
        path.0
    }
}
