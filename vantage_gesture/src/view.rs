// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::coords::normalized_to_pixel;
use crate::math::rotate;

/// Pan, zoom and rotation of the content under a surface.
///
/// All quantities live in normalized coordinates (see [`crate::coords`]). A
/// content point `w` appears on screen at
///
/// ```text
/// offset + zoom · R(−rotation) · w
/// ```
///
/// where `R` is a counterclockwise rotation, so a positive `rotation` turns
/// the content clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// Screen position of the content origin.
    pub offset: Vec2,
    /// Uniform scale, always strictly positive.
    pub zoom: f64,
    /// Clockwise rotation in radians, unbounded.
    pub rotation: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewState {
    /// No pan, unit zoom, no rotation.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        zoom: 1.0,
        rotation: 0.0,
    };

    /// Creates a view state.
    #[must_use]
    pub fn new(offset: Vec2, zoom: f64, rotation: f64) -> Self {
        Self {
            offset,
            zoom,
            rotation,
        }
    }

    /// Folds `delta` into this state.
    ///
    /// Offsets and rotations add; zoom multiplies by [`ViewDelta::zoom_factor`].
    #[must_use]
    pub fn apply(&self, delta: &ViewDelta) -> Self {
        debug_assert!(
            delta.zoom_factor() > 0.0,
            "zoom factor must stay positive, got {}",
            delta.zoom_factor()
        );
        Self {
            offset: self.offset + delta.offset,
            zoom: self.zoom * delta.zoom_factor(),
            rotation: self.rotation + delta.rotation,
        }
    }

    /// Returns `true` if zoom is positive and every field is finite.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.offset.is_finite()
            && self.zoom.is_finite()
            && self.zoom > 0.0
            && self.rotation.is_finite()
    }

    /// Content-to-screen transform in normalized coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom) * Affine::rotate(-self.rotation)
    }

    /// Content-to-pixel transform for a surface of `size`, ready for a renderer.
    #[must_use]
    pub fn pixel_transform(&self, size: Size) -> Affine {
        normalized_to_pixel(size) * self.transform()
    }

    /// Where a content point appears on screen (normalized coordinates).
    #[must_use]
    pub fn world_to_view(&self, world: Point) -> Point {
        (self.offset + rotate(world.to_vec2(), -self.rotation) * self.zoom).to_point()
    }

    /// Which content point sits under a screen point (normalized coordinates).
    #[must_use]
    pub fn view_to_world(&self, view: Point) -> Point {
        (rotate(view.to_vec2() - self.offset, self.rotation) / self.zoom).to_point()
    }
}

/// Incremental change to a [`ViewState`], produced by one input event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewDelta {
    /// Added to the offset.
    pub offset: Vec2,
    /// Relative zoom growth: the zoom is multiplied by `1 + zoom`.
    pub zoom: f64,
    /// Added to the rotation, in radians.
    pub rotation: f64,
}

impl Default for ViewDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewDelta {
    /// Leaves the view unchanged.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        zoom: 0.0,
        rotation: 0.0,
    };

    /// A pure pan.
    #[must_use]
    pub fn pan(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::IDENTITY
        }
    }

    /// A pure rotation.
    #[must_use]
    pub fn rotate(rotation: f64) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Multiplicative zoom factor, `1` when the zoom is unchanged.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        1.0 + self.zoom
    }

    /// Returns `true` if applying this delta changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if every field is finite and the zoom factor positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.offset.is_finite()
            && self.zoom.is_finite()
            && self.rotation.is_finite()
            && self.zoom_factor() > 0.0
    }
}
