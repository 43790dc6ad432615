// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::vec_deque;
use core::fmt;

use kurbo::{Affine, Size};
use vantage_integrate::{Integrator, UndoEntry};

use crate::coords::{SurfaceMapper, SurfaceSizeError};
use crate::{
    ConfigError, ContactTracker, GestureCase, GestureConfig, GestureEvent, GestureResolver,
    PointerEvent, ViewDelta, ViewState, WheelEvent,
};

/// Error returned when a [`GestureSurface`] cannot be created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceError {
    /// The surface size is unusable.
    Size(SurfaceSizeError),
    /// The gesture configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "invalid surface: {err}"),
            Self::Config(err) => write!(f, "invalid gesture configuration: {err}"),
        }
    }
}

impl core::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Size(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<SurfaceSizeError> for SurfaceError {
    fn from(err: SurfaceSizeError) -> Self {
        Self::Size(err)
    }
}

impl From<ConfigError> for SurfaceError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Everything one interactive surface needs to turn input into a view.
///
/// A `GestureSurface` owns the contact set, the view state and its undo
/// history for a single surface. Feed it every pointer and wheel event in
/// arrival order, then read [`GestureSurface::view`] once per frame.
///
/// Surfaces share nothing, so independent canvases each get their own.
pub struct GestureSurface<K> {
    mapper: SurfaceMapper,
    resolver: GestureResolver,
    contacts: ContactTracker<K>,
    view: Integrator<ViewState, ViewDelta>,
}

impl<K: Copy + PartialEq + fmt::Debug> GestureSurface<K> {
    /// Creates a surface of `size` pixels with an identity view.
    pub fn new(size: Size, config: GestureConfig) -> Result<Self, SurfaceError> {
        config.validate()?;
        let mapper = SurfaceMapper::new(size)?;
        Ok(Self {
            mapper,
            resolver: GestureResolver::new(config),
            contacts: ContactTracker::new(),
            view: Integrator::new(
                ViewState::IDENTITY,
                ViewState::apply as fn(&ViewState, &ViewDelta) -> ViewState,
                config.history_capacity,
            ),
        })
    }

    /// Handles a raw pointer event and returns the delta applied to the view.
    pub fn handle_pointer(&mut self, event: PointerEvent<K>) -> ViewDelta {
        self.dispatch(event.normalize(self.mapper.size()))
    }

    /// Handles a raw wheel event and returns the delta applied to the view.
    pub fn handle_wheel(&mut self, event: WheelEvent) -> ViewDelta {
        self.dispatch(event.normalize(self.mapper.size()))
    }

    /// Handles an event already in normalized coordinates.
    ///
    /// The delta is computed against the contact set as it was before the
    /// event, then the contact set is updated. Only deltas that change the
    /// view are integrated and recorded for undo.
    pub fn dispatch(&mut self, event: GestureEvent<K>) -> ViewDelta {
        let case = self.resolver.classify(&self.contacts, &event);
        let delta = self.resolver.resolve(&case, self.view.state());

        if case == GestureCase::Reset {
            log::debug!(
                "resetting gesture on {event:?}, dropping {} contacts",
                self.contacts.len()
            );
            self.contacts.clear();
        } else {
            self.track(&event);
        }

        if !delta.is_identity() {
            self.view.integrate(delta);
        }
        delta
    }

    fn track(&mut self, event: &GestureEvent<K>) {
        if let GestureEvent::Press { id, at, .. } | GestureEvent::Move { id, at, .. } = *event
            && !at.is_finite()
        {
            log::trace!("dropping non-finite position {at:?} for contact {id:?}");
            return;
        }
        match *event {
            GestureEvent::Press { id, button, at } => {
                let Some(class) = button.input_class() else {
                    log::trace!("ignoring press of {id:?} with {button:?}");
                    return;
                };
                if !self.contacts.press(id, class, at) {
                    log::trace!("contact {id:?} is already down");
                } else if self.contacts.len() > 2 {
                    log::debug!(
                        "{} contacts down, gestures paused until one lifts",
                        self.contacts.len()
                    );
                }
            }
            GestureEvent::Move { id, button, at } => {
                if self.contacts.move_to(&id, at).is_none() {
                    log::trace!("move of untracked contact {id:?}");
                    return;
                }
                if let Some(class) = button.input_class() {
                    self.contacts.set_class(&id, class);
                }
            }
            GestureEvent::Release { id } => {
                if self.contacts.release(&id).is_none() {
                    log::trace!("release of untracked contact {id:?}");
                }
            }
            GestureEvent::Wheel { .. } => {}
        }
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> ViewState {
        *self.view.state()
    }

    /// Content-to-pixel transform of the current view.
    #[must_use]
    pub fn pixel_transform(&self) -> Affine {
        self.view.state().pixel_transform(self.mapper.size())
    }

    /// Reverts the most recent view change.
    ///
    /// Returns the undone delta, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<ViewDelta> {
        self.view.undo()
    }

    /// Recorded view changes, oldest first.
    pub fn history(&self) -> vec_deque::Iter<'_, UndoEntry<ViewState, ViewDelta>> {
        self.view.history()
    }

    /// Forgets every recorded view change, keeping the current view.
    pub fn clear_history(&mut self) {
        self.view.clear_history();
    }

    /// Restores the identity view and drops contacts and history.
    pub fn reset(&mut self) {
        self.view.reset(ViewState::IDENTITY);
        self.contacts.clear();
    }

    /// The contacts currently down.
    #[must_use]
    pub fn contacts(&self) -> &ContactTracker<K> {
        &self.contacts
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        self.resolver.config()
    }

    /// The surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.mapper.size()
    }

    /// Changes the surface size used to normalize later events.
    ///
    /// On error the previous size is kept.
    pub fn resize(&mut self, size: Size) -> Result<(), SurfaceSizeError> {
        self.mapper = SurfaceMapper::new(size)?;
        Ok(())
    }

    /// Snapshot of the surface state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureSurfaceDebugInfo {
        GestureSurfaceDebugInfo {
            size: self.mapper.size(),
            view: *self.view.state(),
            contact_count: self.contacts.len(),
            history_len: self.view.len(),
            history_capacity: self.view.capacity(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for GestureSurface<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureSurface")
            .field("mapper", &self.mapper)
            .field("resolver", &self.resolver)
            .field("contacts", &self.contacts)
            .field("view", &self.view)
            .finish()
    }
}

/// Debug snapshot of a [`GestureSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSurfaceDebugInfo {
    /// Surface size in pixels.
    pub size: Size,
    /// Current view.
    pub view: ViewState,
    /// Number of contacts down.
    pub contact_count: usize,
    /// Number of undoable steps.
    pub history_len: usize,
    /// Undo capacity; `None` if unbounded.
    pub history_capacity: Option<usize>,
}
