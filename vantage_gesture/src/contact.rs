// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact tracking: the live set of pressed pointers on one surface.
//!
//! ## Usage
//!
//! 1) On press, call [`ContactTracker::press`] with the caller's id for the pointer.
//! 2) On move, call [`ContactTracker::move_to`]; it returns the previous position.
//! 3) On release or leave, call [`ContactTracker::release`].
//!
//! Ids are supplied by the caller and must be unique among the pointers that are
//! down at the same time. The tracker never invents or recycles them.
//!
//! Each contact remembers where it started (`initial`) and where it is now
//! (`current`). When a press brings the set to exactly two contacts, every
//! contact's `initial` is moved to its `current` position, so a two-contact
//! gesture measures from the moment the pair formed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vantage_gesture::{ContactTracker, InputClass};
//!
//! let mut contacts = ContactTracker::new();
//! contacts.press(7_u32, InputClass::Primary, Point::new(0.0, 0.0));
//!
//! let previous = contacts.move_to(&7, Point::new(0.2, 0.1));
//! assert_eq!(previous, Some(Point::new(0.0, 0.0)));
//!
//! // Unknown ids are ignored.
//! assert_eq!(contacts.move_to(&8, Point::new(1.0, 1.0)), None);
//!
//! let released = contacts.release(&7).unwrap();
//! assert_eq!(released.current, Point::new(0.2, 0.1));
//! assert!(contacts.is_empty());
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// The kind of input that started a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputClass {
    /// Main button or a touch: drags pan the view.
    Primary,
    /// Auxiliary button: horizontal drags rotate the view.
    Secondary,
    /// A scroll wheel notch; never stored in the tracker.
    Wheel,
}

/// One pressed pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact<K> {
    /// Caller-supplied id, unique among active contacts.
    pub id: K,
    /// Input class the contact was pressed with.
    pub class: InputClass,
    /// Baseline position in normalized coordinates.
    pub initial: Point,
    /// Latest position in normalized coordinates.
    pub current: Point,
}

impl<K> Contact<K> {
    /// Creates a contact whose baseline and current position are both `at`.
    pub fn new(id: K, class: InputClass, at: Point) -> Self {
        Self {
            id,
            class,
            initial: at,
            current: at,
        }
    }

    /// Displacement from the baseline to the current position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.current - self.initial
    }

    /// Makes the current position the new baseline.
    pub fn rebase(&mut self) {
        self.initial = self.current;
    }
}

/// Borrowed view of the tracked contacts, tagged by how many are down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactShape<'a, K> {
    /// No contacts.
    Idle,
    /// Exactly one contact.
    Single(&'a Contact<K>),
    /// Exactly two contacts, in press order.
    Pair(&'a Contact<K>, &'a Contact<K>),
    /// More contacts than a gesture uses; holds the count.
    Crowd(usize),
}

/// The set of currently pressed contacts on one surface.
#[derive(Clone, Debug)]
pub struct ContactTracker<K> {
    contacts: SmallVec<[Contact<K>; 2]>,
}

impl<K> Default for ContactTracker<K> {
    fn default() -> Self {
        Self {
            contacts: SmallVec::new(),
        }
    }
}

impl<K: Copy + PartialEq> ContactTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` at `at`.
    ///
    /// Returns `false` and changes nothing if `id` is already down. When this
    /// press makes exactly two contacts, all baselines are rebased.
    pub fn press(&mut self, id: K, class: InputClass, at: Point) -> bool {
        if self.get(&id).is_some() {
            return false;
        }
        self.contacts.push(Contact::new(id, class, at));
        if self.contacts.len() == 2 {
            self.rebase_all();
        }
        true
    }

    /// Moves a known contact, returning its position before the move.
    ///
    /// The baseline is left untouched. Unknown ids return `None`.
    pub fn move_to(&mut self, id: &K, at: Point) -> Option<Point> {
        let contact = self.get_mut(id)?;
        let previous = contact.current;
        contact.current = at;
        Some(previous)
    }

    /// Changes the input class of a known contact.
    pub fn set_class(&mut self, id: &K, class: InputClass) -> bool {
        match self.get_mut(id) {
            Some(contact) => {
                contact.class = class;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`, returning its final record.
    ///
    /// Removing an unknown id is a no-op. If the removal leaves exactly two
    /// contacts, their baselines are rebased so they form a fresh pair.
    pub fn release(&mut self, id: &K) -> Option<Contact<K>> {
        let index = self.contacts.iter().position(|c| c.id == *id)?;
        let removed = self.contacts.remove(index);
        if self.contacts.len() == 2 {
            self.rebase_all();
        }
        Some(removed)
    }

    /// Drops every contact.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Makes every contact's current position its baseline.
    pub fn rebase_all(&mut self) {
        for contact in &mut self.contacts {
            contact.rebase();
        }
    }

    /// Looks up a contact by id.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Contact<K>> {
        self.contacts.iter().find(|c| c.id == *id)
    }

    fn get_mut(&mut self, id: &K) -> Option<&mut Contact<K>> {
        self.contacts.iter_mut().find(|c| c.id == *id)
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` when no contact is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates contacts in press order.
    pub fn iter(&self) -> core::slice::Iter<'_, Contact<K>> {
        self.contacts.iter()
    }

    /// Contacts in press order.
    #[must_use]
    pub fn as_slice(&self) -> &[Contact<K>] {
        &self.contacts
    }

    /// Tags the current set by size.
    #[must_use]
    pub fn shape(&self) -> ContactShape<'_, K> {
        match self.contacts.as_slice() {
            [] => ContactShape::Idle,
            [only] => ContactShape::Single(only),
            [first, second] => ContactShape::Pair(first, second),
            many => ContactShape::Crowd(many.len()),
        }
    }
}
