// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("kurbo_turtle requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
    fn trunc(self) -> Self => trunc;
}

/// Number of degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Wrap an angle in degrees into the half-open range `[0, 360)`.
///
/// This is modulo arithmetic, so it takes constant time no matter how far
/// outside the range the input lies. The result is congruent to the input
/// modulo 360.
///
/// Non-finite input has no congruent value in range and yields NaN.
///
/// # Examples
///
/// ```
/// use kurbo_turtle::common::normalize_angle;
///
/// assert_eq!(normalize_angle(370.0), 10.0);
/// assert_eq!(normalize_angle(-90.0), 270.0);
/// assert_eq!(normalize_angle(360.0), 0.0);
/// assert_eq!(normalize_angle(-720.0), 0.0);
/// ```
#[inline]
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees % FULL_TURN;
    let wrapped = if wrapped < 0.0 {
        wrapped + FULL_TURN
    } else {
        wrapped
    };
    // A tiny negative remainder rounds up to exactly 360 when shifted.
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}
