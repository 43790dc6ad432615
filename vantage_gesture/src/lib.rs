// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Gesture: multi-pointer pan, pinch and rotate for a 2D view.
//!
//! This crate turns raw pointer and wheel events on one surface into
//! incremental changes of a [`ViewState`] (pan offset, zoom and rotation),
//! and folds those changes into a running view with a bounded undo history.
//!
//! It focuses on:
//! - Mapping pixel positions into a resolution independent, Y-up space
//!   (see [`coords`]).
//! - Tracking which contacts are down and where each one started.
//! - Deciding which gesture an event continues and computing its
//!   [`ViewDelta`], keeping the pinch or wheel anchor fixed on screen.
//! - Integrating deltas with exact undo through `vantage_integrate`.
//!
//! It does **not** render anything or read platform events. Callers are
//! expected to:
//! - Convert their windowing system's pointer events into [`PointerEvent`]
//!   and [`WheelEvent`].
//! - Read [`GestureSurface::pixel_transform`] (or [`GestureSurface::view`])
//!   once per frame and hand it to their renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_gesture::{GestureConfig, GestureSurface, PointerButton, PointerEvent};
//!
//! let mut surface =
//!     GestureSurface::new(Size::new(300.0, 300.0), GestureConfig::default()).unwrap();
//!
//! // Drag one finger 30px right and 15px up from the center.
//! let center = Point::new(150.0, 150.0);
//! surface.handle_pointer(PointerEvent::press(0_u32, PointerButton::Primary, center));
//! surface.handle_pointer(PointerEvent::moved(0, Point::new(180.0, 135.0)));
//! surface.handle_pointer(PointerEvent::release(0, Point::new(180.0, 135.0)));
//!
//! // Normalized space spans [-1, 1] across the surface, Y up.
//! let view = surface.view();
//! assert!((view.offset - Vec2::new(0.2, 0.1)).hypot() < 1e-12);
//!
//! // The drag can be taken back exactly.
//! assert!(surface.undo().is_some());
//! assert_eq!(surface.view().offset, Vec2::ZERO);
//! ```
//!
//! ## Gestures
//!
//! - One primary contact pans by its displacement.
//! - One secondary contact rotates by its horizontal displacement.
//! - Two contacts pinch: zoom follows their distance, rotation follows the
//!   angle of the line joining them and the pan follows their midpoint.
//! - The wheel zooms about the pointer.
//! - A third contact pauses gestures until the count drops back to two.
//! - A move reporting an unrecognized button drops every contact.
//!
//! Lower level pieces ([`ContactTracker`], [`GestureResolver`]) are public
//! for callers that keep their own view state.
//!
//! This crate is `no_std` (with `alloc`). Enable the `libm` feature when
//! building without `std`.

#![no_std]

extern crate alloc;

pub mod coords;
pub mod math;

mod config;
mod contact;
mod event;
mod resolve;
mod surface;
mod view;

pub use config::{ConfigError, GestureConfig};
pub use contact::{Contact, ContactShape, ContactTracker, InputClass};
pub use coords::{SurfaceMapper, SurfaceSizeError};
pub use event::{GestureEvent, PointerButton, PointerEvent, PointerPhase, WheelEvent};
pub use resolve::{GestureCase, GestureResolver, IgnoreReason};
pub use surface::{GestureSurface, GestureSurfaceDebugInfo, SurfaceError};
pub use vantage_integrate::UndoEntry;
pub use view::{ViewDelta, ViewState};
