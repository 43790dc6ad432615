// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between surface pixels and normalized device coordinates.
//!
//! Pixel space has its origin at the top-left corner of the surface with Y
//! pointing down. Normalized space maps the surface onto `[-1, 1] × [-1, 1]`
//! with the origin at the center and Y pointing up:
//!
//! ```text
//! x' = 2x / w - 1
//! y' = 1 - 2y / h
//! ```
//!
//! Non-square surfaces are stretched; one normalized unit is half the surface
//! width horizontally and half the surface height vertically.

use core::fmt;

use kurbo::{Affine, Point, Size};

/// Maps a pixel position on a `size` surface to normalized coordinates.
///
/// `size` must have nonzero components.
#[must_use]
pub fn to_normalized(pixel: Point, size: Size) -> Point {
    Point::new(
        2.0 * pixel.x / size.width - 1.0,
        1.0 - 2.0 * pixel.y / size.height,
    )
}

/// Maps normalized coordinates back to a pixel position on a `size` surface.
///
/// Exact inverse of [`to_normalized`] up to floating-point rounding.
#[must_use]
pub fn to_pixel(normalized: Point, size: Size) -> Point {
    Point::new(
        (1.0 + normalized.x) * size.width / 2.0,
        (1.0 - normalized.y) * size.height / 2.0,
    )
}

/// The affine form of [`to_pixel`], for composing with a view transform.
#[must_use]
pub fn normalized_to_pixel(size: Size) -> Affine {
    let hw = size.width / 2.0;
    let hh = size.height / 2.0;
    Affine::new([hw, 0.0, 0.0, -hh, hw, hh])
}

/// The affine form of [`to_normalized`].
#[must_use]
pub fn pixel_to_normalized(size: Size) -> Affine {
    Affine::new([2.0 / size.width, 0.0, 0.0, -2.0 / size.height, -1.0, 1.0])
}

/// Error returned when a surface size cannot be used for coordinate mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSizeError {
    /// The rejected size.
    pub size: Size,
}

impl fmt::Display for SurfaceSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "surface size must be finite and positive, got {}x{}",
            self.size.width, self.size.height
        )
    }
}

impl core::error::Error for SurfaceSizeError {}

/// Coordinate mapper bound to one validated surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMapper {
    size: Size,
}

impl SurfaceMapper {
    /// Creates a mapper for a surface of `size` pixels.
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(size: Size) -> Result<Self, SurfaceSizeError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(size.width) && ok(size.height) {
            Ok(Self { size })
        } else {
            Err(SurfaceSizeError { size })
        }
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// See [`to_normalized`].
    #[must_use]
    pub fn to_normalized(&self, pixel: Point) -> Point {
        to_normalized(pixel, self.size)
    }

    /// See [`to_pixel`].
    #[must_use]
    pub fn to_pixel(&self, normalized: Point) -> Point {
        to_pixel(normalized, self.size)
    }

    /// See [`normalized_to_pixel`].
    #[must_use]
    pub fn normalized_to_pixel(&self) -> Affine {
        normalized_to_pixel(self.size)
    }
}
