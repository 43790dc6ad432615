// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Integrate: fold a stream of deltas into a running state, with undo.
//!
//! An [`Integrator`] owns a current state `S` and a caller-supplied combine
//! function `(&S, &D) -> S`. Every call to [`Integrator::integrate`] folds one
//! delta `D` into the state and remembers the state it replaced together with
//! the delta that was applied. [`Integrator::undo`] pops the most recent entry
//! and restores the remembered state verbatim.
//!
//! Undo never computes an inverse. Restoring the stored prior state means that
//! `integrate` followed by `undo` is exact, including for floating-point
//! states where `x * k / k != x` in general.
//!
//! The history is a bounded buffer ordered oldest first. When it is full, the
//! next integration evicts the oldest entry. A capacity of `None` keeps every
//! entry, and a capacity of `Some(0)` integrates without recording anything.
//!
//! The state and delta types do not have to match. A pan/zoom camera can fold
//! multiplicative zoom factors into an absolute zoom level, for example.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_integrate::Integrator;
//!
//! // Running sum with room for two undo steps.
//! let mut sum = Integrator::bounded(0_i32, |s: &i32, d: &i32| s + d, 2);
//!
//! sum.integrate(5);
//! sum.integrate(7);
//! sum.integrate(-3);
//! assert_eq!(*sum.state(), 9);
//!
//! // Only the two most recent deltas can be taken back.
//! assert_eq!(sum.undo(), Some(-3));
//! assert_eq!(sum.undo(), Some(7));
//! assert_eq!(sum.undo(), None);
//! assert_eq!(*sum.state(), 5);
//! ```
//!
//! ## Different state and delta types
//!
//! ```rust
//! use vantage_integrate::Integrator;
//!
//! struct Zoom(f64);
//!
//! // Deltas are relative growth factors, the state is an absolute zoom.
//! let mut zoom = Integrator::unbounded(Zoom(1.0), |z: &Zoom, d: &f64| Zoom(z.0 * (1.0 + d)));
//! zoom.integrate(0.5);
//! zoom.integrate(-0.2);
//! assert!((zoom.state().0 - 1.2).abs() < 1e-12);
//!
//! let entries: Vec<f64> = zoom.history().map(|e| e.delta).collect();
//! assert_eq!(entries, [0.5, -0.2]);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::fmt;

/// One recorded integration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UndoEntry<S, D> {
    /// The state as it was before `delta` was folded in.
    pub prior: S,
    /// The delta that was folded in.
    pub delta: D,
}

/// Running fold of deltas into a state, with a bounded undo history.
///
/// `F` defaults to a plain function pointer so the type can be named in struct
/// fields without spelling out a closure type.
pub struct Integrator<S, D, F = fn(&S, &D) -> S> {
    state: S,
    combine: F,
    entries: VecDeque<UndoEntry<S, D>>,
    capacity: Option<usize>,
}

impl<S, D, F> Integrator<S, D, F>
where
    F: Fn(&S, &D) -> S,
{
    /// Creates an integrator starting at `init`.
    ///
    /// `capacity` bounds the undo history; `None` means unbounded.
    pub fn new(init: S, combine: F, capacity: Option<usize>) -> Self {
        Self {
            state: init,
            combine,
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Creates an integrator that keeps at most `capacity` undo entries.
    pub fn bounded(init: S, combine: F, capacity: usize) -> Self {
        Self::new(init, combine, Some(capacity))
    }

    /// Creates an integrator that keeps every undo entry.
    pub fn unbounded(init: S, combine: F) -> Self {
        Self::new(init, combine, None)
    }

    /// Returns the current integrated state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes the integrator and returns the current state.
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }

    /// Folds `delta` into the current state and records the step.
    ///
    /// If the history is at capacity the oldest entry is evicted first.
    /// Returns the new state.
    pub fn integrate(&mut self, delta: D) -> &S {
        let next = (self.combine)(&self.state, &delta);
        let prior = core::mem::replace(&mut self.state, next);
        self.record(UndoEntry { prior, delta });
        &self.state
    }

    /// Reverts the most recent integration.
    ///
    /// Restores the recorded prior state exactly and returns the delta that
    /// was undone, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<D> {
        let entry = self.entries.pop_back()?;
        self.state = entry.prior;
        Some(entry.delta)
    }

    /// Returns the most recent undo entry without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&UndoEntry<S, D>> {
        self.entries.back()
    }

    /// Iterates the recorded entries, oldest first.
    pub fn history(&self) -> vec_deque::Iter<'_, UndoEntry<S, D>> {
        self.entries.iter()
    }

    /// Number of entries currently available to [`Integrator::undo`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the history capacity; `None` means unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Changes the history capacity.
    ///
    /// Shrinking below the current length evicts the oldest entries.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        if let Some(cap) = capacity {
            while self.entries.len() > cap {
                self.entries.pop_front();
            }
        }
    }

    /// Drops every undo entry, keeping the current state.
    pub fn clear_history(&mut self) {
        self.entries.clear();
    }

    /// Replaces the state and drops every undo entry.
    pub fn reset(&mut self, state: S) {
        self.state = state;
        self.entries.clear();
    }

    fn record(&mut self, entry: UndoEntry<S, D>) {
        match self.capacity {
            Some(0) => {}
            Some(cap) => {
                while self.entries.len() >= cap {
                    self.entries.pop_front();
                }
                self.entries.push_back(entry);
            }
            None => self.entries.push_back(entry),
        }
    }
}

impl<S: fmt::Debug, D: fmt::Debug, F> fmt::Debug for Integrator<S, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integrator")
            .field("state", &self.state)
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
