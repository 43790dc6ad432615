// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small 2D vector kernel shared by the resolver and the view model.
//!
//! Addition, subtraction and scaling are kurbo's operators; they are mirrored
//! here as functions so gesture code reads uniformly. Angles always use the
//! four-quadrant arctangent, and the zero vector has no angle.

use core::f64::consts::{PI, TAU};

use kurbo::{Affine, Point, Vec2};

/// Squared length below which a vector is treated as having no direction.
const DEGENERATE_HYPOT2: f64 = 1e-24;

/// `a + b`.
#[inline]
#[must_use]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// `a - b`.
#[inline]
#[must_use]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// `v * k`.
#[inline]
#[must_use]
pub fn scale(v: Vec2, k: f64) -> Vec2 {
    v * k
}

/// Rotates `v` counterclockwise by `theta` radians (Y up).
#[must_use]
pub fn rotate(v: Vec2, theta: f64) -> Vec2 {
    if theta == 0.0 {
        return v;
    }
    (Affine::rotate(theta) * v.to_point()).to_vec2()
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Angle of `v` from the positive X axis, in `(-π, π]`.
///
/// Returns `None` for a zero (or vanishingly short) vector, or one with a
/// non-finite component, where the direction is undefined.
#[must_use]
pub fn angle_of(v: Vec2) -> Option<f64> {
    if !v.is_finite() || v.hypot2() <= DEGENERATE_HYPOT2 {
        return None;
    }
    Some(v.atan2())
}

/// Signed angle that turns `from` onto `to`, wrapped into `(-π, π]`.
///
/// `None` if either vector has no direction.
#[must_use]
pub fn angle_between(from: Vec2, to: Vec2) -> Option<f64> {
    Some(wrap_half_turn(angle_of(to)? - angle_of(from)?))
}

/// Wraps an angle in `[-2π, 2π]` into `(-π, π]`.
#[must_use]
pub fn wrap_half_turn(theta: f64) -> f64 {
    if theta > PI {
        theta - TAU
    } else if theta <= -PI {
        theta + TAU
    } else {
        theta
    }
}
