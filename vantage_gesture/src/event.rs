// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::InputClass;
use crate::coords::to_normalized;

/// Button reported with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, pen tip or touch.
    Primary,
    /// Auxiliary button used for rotation drags.
    Secondary,
    /// Any other button, identified by the platform's button number.
    Other(u16),
    /// No button change; typical for move events.
    None,
}

impl PointerButton {
    /// The contact class this button starts, if it starts one at all.
    #[must_use]
    pub fn input_class(self) -> Option<InputClass> {
        match self {
            Self::Primary => Some(InputClass::Primary),
            Self::Secondary => Some(InputClass::Secondary),
            Self::Other(_) | Self::None => None,
        }
    }
}

/// What happened to a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer went down.
    Press,
    /// The pointer moved.
    Move,
    /// The pointer went up.
    Release,
    /// The pointer left the surface.
    Leave,
}

/// A raw pointer event in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Caller-supplied contact id.
    pub id: K,
    /// Event kind.
    pub phase: PointerPhase,
    /// Button reported with the event.
    pub button: PointerButton,
    /// Position relative to the surface's top-left corner, in pixels.
    pub position: Point,
}

impl<K> PointerEvent<K> {
    /// A press of `button` at `position`.
    pub fn press(id: K, button: PointerButton, position: Point) -> Self {
        Self {
            id,
            phase: PointerPhase::Press,
            button,
            position,
        }
    }

    /// A move to `position` with no button change.
    pub fn moved(id: K, position: Point) -> Self {
        Self {
            id,
            phase: PointerPhase::Move,
            button: PointerButton::None,
            position,
        }
    }

    /// A release at `position`.
    pub fn release(id: K, position: Point) -> Self {
        Self {
            id,
            phase: PointerPhase::Release,
            button: PointerButton::None,
            position,
        }
    }

    /// The pointer left the surface at `position`.
    pub fn leave(id: K, position: Point) -> Self {
        Self {
            id,
            phase: PointerPhase::Leave,
            button: PointerButton::None,
            position,
        }
    }

    /// Same event with a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Converts to a [`GestureEvent`] in normalized coordinates.
    pub fn normalize(self, size: Size) -> GestureEvent<K> {
        let at = to_normalized(self.position, size);
        match self.phase {
            PointerPhase::Press => GestureEvent::Press {
                id: self.id,
                button: self.button,
                at,
            },
            PointerPhase::Move => GestureEvent::Move {
                id: self.id,
                button: self.button,
                at,
            },
            PointerPhase::Release | PointerPhase::Leave => GestureEvent::Release { id: self.id },
        }
    }
}

/// A raw scroll event in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position relative to the surface's top-left corner, in pixels.
    pub position: Point,
    /// Signed vertical scroll amount as reported by the platform.
    ///
    /// Negative values scroll up and zoom in.
    pub delta_y: f64,
}

impl WheelEvent {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(position: Point, delta_y: f64) -> Self {
        Self { position, delta_y }
    }

    /// Converts to a [`GestureEvent`] in normalized coordinates.
    #[must_use]
    pub fn normalize<K>(self, size: Size) -> GestureEvent<K> {
        GestureEvent::Wheel {
            at: to_normalized(self.position, size),
            scroll: self.delta_y,
        }
    }
}

/// An input event after coordinate normalization.
///
/// Release and leave are folded together since both end a contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent<K> {
    /// A contact went down.
    Press {
        /// Contact id.
        id: K,
        /// Button that went down.
        button: PointerButton,
        /// Normalized position.
        at: Point,
    },
    /// A contact moved.
    Move {
        /// Contact id.
        id: K,
        /// Button reported with the move.
        button: PointerButton,
        /// Normalized position.
        at: Point,
    },
    /// A contact was released or left the surface.
    Release {
        /// Contact id.
        id: K,
    },
    /// A one-shot scroll at a point.
    Wheel {
        /// Normalized position.
        at: Point,
        /// Signed scroll amount, negative to zoom in.
        scroll: f64,
    },
}
