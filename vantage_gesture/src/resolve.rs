// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning one input event into a view delta.
//!
//! Resolution happens in two steps. [`GestureResolver::classify`] looks at the
//! contact set *before* the event is applied and decides which gesture the
//! event continues, as a [`GestureCase`]. [`GestureResolver::resolve`] then
//! computes the [`ViewDelta`] for that case against the current view.
//!
//! | contacts | event | case |
//! |---|---|---|
//! | any | move with an unrecognized button | [`GestureCase::Reset`] |
//! | any | move of an untracked id | ignored |
//! | one, primary | move | [`GestureCase::Pan`] |
//! | one, secondary | move | [`GestureCase::Turn`] |
//! | two | move of either | [`GestureCase::Pinch`] |
//! | three or more | move | ignored |
//! | any | press, release | ignored |
//! | any | wheel | [`GestureCase::WheelZoom`] |
//!
//! Pinch and wheel zoom keep their anchor fixed on screen: after the delta is
//! applied, the content point that was under the anchor is still under it (for
//! a pinch, it follows the midpoint of the two contacts).

use kurbo::{Point, Vec2};

use crate::math::{angle_between, distance, midpoint, rotate};
use crate::{
    ContactShape, ContactTracker, GestureConfig, GestureEvent, InputClass, PointerButton,
    ViewDelta, ViewState,
};

/// Why an event leaves the view unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Press or release: only the contact set changes.
    Bookkeeping,
    /// The event names a contact that is not down.
    UnknownContact,
    /// More than two contacts are down.
    TooManyContacts,
    /// A contact whose class has no drag gesture.
    UnsupportedClass,
}

/// The gesture an event continues, with the positions it needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureCase {
    /// No view change.
    Ignored(IgnoreReason),
    /// Stray input mid-gesture: drop all contacts, no view change.
    Reset,
    /// Single primary contact moved.
    Pan {
        /// Position before the move.
        from: Point,
        /// Position after the move.
        to: Point,
    },
    /// Single secondary contact moved.
    Turn {
        /// Position before the move.
        from: Point,
        /// Position after the move.
        to: Point,
    },
    /// One of two contacts moved.
    Pinch {
        /// Moving contact before the move.
        from: Point,
        /// Moving contact after the move.
        to: Point,
        /// The contact that stayed put.
        anchor: Point,
    },
    /// Scroll at a point.
    WheelZoom {
        /// Normalized position of the pointer.
        at: Point,
        /// Relative zoom growth.
        amount: f64,
    },
}

/// Stateless gesture interpretation with a fixed configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureResolver {
    config: GestureConfig,
}

impl GestureResolver {
    /// Creates a resolver using `config`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Decides which gesture `event` continues, given the contacts before it.
    pub fn classify<K: Copy + PartialEq>(
        &self,
        contacts: &ContactTracker<K>,
        event: &GestureEvent<K>,
    ) -> GestureCase {
        match *event {
            GestureEvent::Press { .. } | GestureEvent::Release { .. } => {
                GestureCase::Ignored(IgnoreReason::Bookkeeping)
            }
            GestureEvent::Wheel { at, scroll } => GestureCase::WheelZoom {
                at,
                amount: -scroll / self.config.wheel_divisor,
            },
            GestureEvent::Move {
                button: PointerButton::Other(_),
                ..
            } => GestureCase::Reset,
            GestureEvent::Move { id, at, .. } => {
                let Some(moving) = contacts.get(&id) else {
                    return GestureCase::Ignored(IgnoreReason::UnknownContact);
                };
                let from = moving.current;
                match contacts.shape() {
                    ContactShape::Idle => GestureCase::Ignored(IgnoreReason::UnknownContact),
                    ContactShape::Single(only) => match only.class {
                        InputClass::Primary => GestureCase::Pan { from, to: at },
                        InputClass::Secondary => GestureCase::Turn { from, to: at },
                        InputClass::Wheel => GestureCase::Ignored(IgnoreReason::UnsupportedClass),
                    },
                    ContactShape::Pair(first, second) => {
                        let other = if first.id == id { second } else { first };
                        GestureCase::Pinch {
                            from,
                            to: at,
                            anchor: other.current,
                        }
                    }
                    ContactShape::Crowd(_) => GestureCase::Ignored(IgnoreReason::TooManyContacts),
                }
            }
        }
    }

    /// Computes the view change for `case` applied to `view`.
    ///
    /// Never returns a delta that would make the view ill-formed, including
    /// one that would underflow the zoom to zero; such results degrade to
    /// [`ViewDelta::IDENTITY`].
    #[must_use]
    pub fn resolve(&self, case: &GestureCase, view: &ViewState) -> ViewDelta {
        let delta = match *case {
            GestureCase::Ignored(_) | GestureCase::Reset => ViewDelta::IDENTITY,
            GestureCase::Pan { from, to } => ViewDelta::pan(to - from),
            GestureCase::Turn { from, to } => {
                ViewDelta::rotate((to.x - from.x) * self.config.drag_rotation_scale)
            }
            GestureCase::Pinch { from, to, anchor } => self.pinch(from, to, anchor, view),
            GestureCase::WheelZoom { at, amount } => ViewDelta {
                offset: zoom_compensation(at, view.offset, amount, 0.0),
                zoom: amount,
                rotation: 0.0,
            },
        };
        if delta.is_usable() && view.apply(&delta).is_well_formed() {
            delta
        } else {
            log::debug!("discarding degenerate delta {delta:?} for {case:?} on {view:?}");
            ViewDelta::IDENTITY
        }
    }

    /// Classifies and resolves in one step.
    pub fn delta_for<K: Copy + PartialEq>(
        &self,
        contacts: &ContactTracker<K>,
        event: &GestureEvent<K>,
        view: &ViewState,
    ) -> ViewDelta {
        self.resolve(&self.classify(contacts, event), view)
    }

    fn pinch(&self, from: Point, to: Point, anchor: Point, view: &ViewState) -> ViewDelta {
        let zoom = self.config.pinch_zoom_scale * (distance(to, anchor) - distance(from, anchor));
        // Clockwise finger motion lowers the angle in Y-up space; rotation grows clockwise.
        let rotation = angle_between(from - anchor, to - anchor)
            .map_or(0.0, |turn| -self.config.pinch_rotation_scale * turn);
        let before = midpoint(from, anchor);
        let after = midpoint(to, anchor);
        let offset = (after - before) + zoom_compensation(before, view.offset, zoom, rotation);
        ViewDelta {
            offset,
            zoom,
            rotation,
        }
    }
}

/// Offset change that keeps `anchor` fixed while zooming by `1 + zoom` and
/// rotating clockwise by `rotation` about the view origin `offset`.
///
/// With no rotation this is `-(anchor - offset) · zoom`.
fn zoom_compensation(anchor: Point, offset: Vec2, zoom: f64, rotation: f64) -> Vec2 {
    let arm = anchor.to_vec2() - offset;
    arm - rotate(arm, -rotation) * (1.0 + zoom)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use kurbo::{Point, Vec2};

    use super::*;
    use crate::{ContactTracker, GestureEvent, InputClass, PointerButton, ViewState};

    const EPS: f64 = 1e-12;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn mv(id: u32, at: Point) -> GestureEvent<u32> {
        GestureEvent::Move {
            id,
            button: PointerButton::None,
            at,
        }
    }

    fn vclose(a: Vec2, b: Vec2) -> bool {
        (a - b).hypot() < EPS
    }

    #[test]
    fn single_primary_move_is_a_pan() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        t.press(1, InputClass::Primary, p(0.0, 0.0));
        let case = r.classify(&t, &mv(1, p(0.2, 0.1)));
        assert_eq!(
            case,
            GestureCase::Pan {
                from: p(0.0, 0.0),
                to: p(0.2, 0.1)
            }
        );
        let d = r.resolve(&case, &ViewState::IDENTITY);
        assert!(vclose(d.offset, Vec2::new(0.2, 0.1)));
        assert_eq!(d.zoom, 0.0);
        assert_eq!(d.rotation, 0.0);
    }

    #[test]
    fn single_secondary_move_rotates_by_pi_per_unit() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        t.press(1, InputClass::Secondary, p(-0.5, 0.0));
        let d = r.delta_for(&t, &mv(1, p(0.5, 0.7)), &ViewState::IDENTITY);
        assert!((d.rotation - PI).abs() < EPS);
        assert_eq!(d.offset, Vec2::ZERO);
        assert_eq!(d.zoom, 0.0);
    }

    #[test]
    fn unknown_contact_is_ignored() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        t.press(1, InputClass::Primary, p(0.0, 0.0));
        assert_eq!(
            r.classify(&t, &mv(2, p(0.3, 0.3))),
            GestureCase::Ignored(IgnoreReason::UnknownContact)
        );
    }

    #[test]
    fn unrecognized_button_on_move_resets() {
        let r = GestureResolver::default();
        let t = ContactTracker::<u32>::new();
        let ev = GestureEvent::Move {
            id: 5,
            button: PointerButton::Other(3),
            at: p(0.0, 0.0),
        };
        assert_eq!(r.classify(&t, &ev), GestureCase::Reset);
        assert!(r.resolve(&GestureCase::Reset, &ViewState::IDENTITY).is_identity());
    }

    #[test]
    fn press_and_release_only_do_bookkeeping() {
        let r = GestureResolver::default();
        let t = ContactTracker::<u32>::new();
        let press = GestureEvent::Press {
            id: 1,
            button: PointerButton::Primary,
            at: p(0.1, 0.1),
        };
        assert_eq!(r.classify(&t, &press), GestureCase::Ignored(IgnoreReason::Bookkeeping));
        assert_eq!(
            r.classify(&t, &GestureEvent::Release { id: 1 }),
            GestureCase::Ignored(IgnoreReason::Bookkeeping)
        );
    }

    #[test]
    fn crowd_is_ignored() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        for id in 1..=3 {
            t.press(id, InputClass::Primary, p(0.1 * f64::from(id), 0.0));
        }
        assert_eq!(
            r.classify(&t, &mv(2, p(0.5, 0.5))),
            GestureCase::Ignored(IgnoreReason::TooManyContacts)
        );
    }

    #[test]
    fn pinch_apart_along_a_line_zooms_by_half_the_distance_change() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        t.press(1, InputClass::Primary, p(-0.1, 0.0));
        t.press(2, InputClass::Primary, p(0.1, 0.0));
        let case = r.classify(&t, &mv(1, p(-0.2, 0.0)));
        assert_eq!(
            case,
            GestureCase::Pinch {
                from: p(-0.1, 0.0),
                to: p(-0.2, 0.0),
                anchor: p(0.1, 0.0)
            }
        );
        let d = r.resolve(&case, &ViewState::IDENTITY);
        assert!((d.zoom - 0.05).abs() < EPS);
        assert!(d.rotation.abs() < EPS);
    }

    #[test]
    fn either_contact_of_a_pair_can_drive_the_pinch() {
        let r = GestureResolver::default();
        let mut t = ContactTracker::new();
        t.press(1, InputClass::Primary, p(-0.1, 0.0));
        t.press(2, InputClass::Primary, p(0.1, 0.0));
        let case = r.classify(&t, &mv(2, p(0.3, 0.0)));
        assert_eq!(
            case,
            GestureCase::Pinch {
                from: p(0.1, 0.0),
                to: p(0.3, 0.0),
                anchor: p(-0.1, 0.0)
            }
        );
    }

    #[test]
    fn clockwise_pinch_increases_rotation() {
        let r = GestureResolver::default();
        // Contact at the top swings a quarter turn clockwise around the anchor.
        let case = GestureCase::Pinch {
            from: p(0.0, 0.5),
            to: p(0.5, 0.0),
            anchor: p(0.0, 0.0),
        };
        let d = r.resolve(&case, &ViewState::IDENTITY);
        assert!((d.rotation - FRAC_PI_2 / 2.0).abs() < EPS, "{}", d.rotation);
        assert!(d.zoom.abs() < EPS);
    }

    #[test]
    fn coincident_contacts_give_no_rotation() {
        let r = GestureResolver::default();
        let case = GestureCase::Pinch {
            from: p(0.2, 0.2),
            to: p(0.4, 0.2),
            anchor: p(0.2, 0.2),
        };
        let d = r.resolve(&case, &ViewState::IDENTITY);
        assert_eq!(d.rotation, 0.0);
        assert!(d.is_usable());
    }

    #[test]
    fn pinch_keeps_content_under_the_midpoint_following_it() {
        let r = GestureResolver::default();
        let view = ViewState::new(Vec2::new(0.1, -0.2), 1.5, 0.4);
        let (from, to, anchor) = (p(-0.3, 0.1), p(-0.45, 0.3), p(0.25, -0.05));
        let d = r.resolve(&GestureCase::Pinch { from, to, anchor }, &view);
        let after = view.apply(&d);
        let under_before = view.view_to_world(midpoint(from, anchor));
        let under_after = after.view_to_world(midpoint(to, anchor));
        assert!((under_before - under_after).hypot() < 1e-9);
    }

    #[test]
    fn wheel_zoom_preserves_anchor() {
        let r = GestureResolver::default();
        let view = ViewState::IDENTITY;
        let a = p(0.3, 0.3);
        let wheel = GestureEvent::Wheel {
            at: a,
            scroll: -100.0,
        };
        let case = r.classify::<u32>(&ContactTracker::new(), &wheel);
        assert_eq!(case, GestureCase::WheelZoom { at: a, amount: 0.1 });
        let d = r.resolve(&case, &view);
        assert!(vclose(d.offset, Vec2::new(-0.03, -0.03)));
        assert!((d.zoom - 0.1).abs() < EPS);
        assert_eq!(d.rotation, 0.0);
        let after = view.apply(&d);
        assert!((after.view_to_world(a) - view.view_to_world(a)).hypot() < EPS);
    }

    #[test]
    fn wheel_zoom_preserves_anchor_on_a_rotated_view() {
        let r = GestureResolver::default();
        let view = ViewState::new(Vec2::new(-0.2, 0.4), 0.8, 2.0);
        let a = p(-0.6, 0.1);
        let d = r.resolve(&GestureCase::WheelZoom { at: a, amount: -0.25 }, &view);
        let after = view.apply(&d);
        assert!((after.view_to_world(a) - view.view_to_world(a)).hypot() < 1e-9);
    }

    #[test]
    fn collapsing_pinch_degrades_to_identity() {
        let r = GestureResolver::new(GestureConfig::default().with_pinch_zoom_scale(1.0));
        // Distance shrinks by more than one unit: zoom factor would be negative.
        let case = GestureCase::Pinch {
            from: p(-1.0, 0.0),
            to: p(0.9, 0.0),
            anchor: p(1.0, 0.0),
        };
        assert!(r.resolve(&case, &ViewState::IDENTITY).is_identity());
    }

    #[test]
    fn zoom_that_would_underflow_to_zero_is_discarded() {
        let r = GestureResolver::default();
        // Smallest positive subnormal: any further shrink rounds the zoom to zero.
        let view = ViewState::new(Vec2::ZERO, f64::from_bits(1), 0.0);
        let case = GestureCase::WheelZoom {
            at: p(0.0, 0.0),
            amount: -0.999,
        };
        assert!(r.resolve(&case, &view).is_identity());

        // The same zoom-out on an ordinary view goes through.
        let d = r.resolve(&case, &ViewState::IDENTITY);
        assert!((d.zoom + 0.999).abs() < EPS);
        assert!(ViewState::IDENTITY.apply(&d).is_well_formed());
    }
}
