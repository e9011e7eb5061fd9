// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turtle graphics, replayed into vector paths.
//!
//! A [`Turtle`] holds an ordered list of [`Command`]s: pen up and down,
//! forward moves, turns, absolute moves and curves, arcs, and (possibly
//! nested) repeats. Building a path replays the whole list against a fresh
//! [`TurtleState`], and every visible or invisible move the turtle makes is
//! emitted into a [`PathBuilder`]. The built-in builders are [`Path`], a plain
//! record of [`PathEl`]s, and [`SvgPen`], which writes SVG path data.
//!
//! Headings are in degrees; 0° faces +y and angles grow clockwise.
//!
//! # Examples
//!
//! Drawing a square, then returning home:
//! ```
//! use kurbo_turtle::{Command, PathEl, Point, Turtle};
//!
//! let mut turtle = Turtle::new();
//! turtle.append([
//!     Command::set_origin(),
//!     Command::move_to(5.0, 5.0),
//!     Command::PenDown,
//!     Command::repeat(4, [Command::forward(10.0), Command::rotate(90.0)]),
//!     Command::Home,
//! ]);
//!
//! let path = turtle.build_path(2.0);
//! assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(10.0, 10.0)));
//! assert_eq!(path.elements()[1], PathEl::LineTo(Point::new(10.0, 30.0)));
//! assert_eq!(path.end_point(), Some(Point::ZERO));
//! assert_eq!(path.len(), 6);
//! ```
//!
//! Rendering straight into SVG path data:
//! ```
//! use kurbo_turtle::{Command, SvgPen, Turtle};
//!
//! let turtle: Turtle = [Command::PenDown, Command::forward(3.0)].into_iter().collect();
//! let mut pen = SvgPen::new(String::new());
//! turtle.replay(&mut pen, 1.0);
//! assert_eq!(pen.finish().unwrap(), "L0 3");
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [libm][] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate still uses the `alloc` crate regardless.
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm][].
//! - `mint`: Enable `From`/`Into` conversion of points and vectors with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on commands, paths and geometry.
//! - `schemars`: Add best-effort support for using these types in JSON schemas using [schemars][].
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber in the
//! application to see them.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [`tracing`]: https://docs.rs/tracing

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::exhaustive_enums,
    clippy::partial_pub_fields,
    clippy::return_self_not_must_use,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("kurbo_turtle requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only exercised by the serde tests.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

extern crate alloc;

mod command;
pub mod common;
mod path;
mod point;
mod rect;
mod state;
mod svg;
mod turtle;

pub use crate::command::Command;
pub use crate::path::{Path, PathBuilder, PathEl};
pub use crate::point::{Point, Vec2};
pub use crate::rect::Rect;
pub use crate::state::{SavedState, TurtleState};
pub use crate::svg::SvgPen;
pub use crate::turtle::{ReplayError, Turtle, DEFAULT_MEASURE};
