// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_select --heading-base-level=0

//! Bracken Select: selection membership bookkeeping.
//!
//! The editor tracks which scene nodes are selected in an external set rather
//! than on the nodes themselves, so the hit-test engine and the renderer can
//! share one source of truth. [`SelectionSet`] is that set: a small container
//! of keys with uniqueness enforced by equality and a monotonically increasing
//! **revision** counter that bumps only when the contents actually change.
//!
//! No hashing or ordering constraints are imposed on the key type, which keeps
//! the set easy to use with generational handles from a scene tree. Keys keep
//! their insertion order, which callers may use for stable iteration but must
//! not assign semantics to.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_select::SelectionSet;
//!
//! // Using u32 as a stand-in for an application-specific ID.
//! let mut selecting = SelectionSet::<u32>::new();
//!
//! // Click toggles membership.
//! selecting.toggle(7);
//! assert!(selecting.contains(&7));
//! selecting.toggle(7);
//! assert!(selecting.is_empty());
//!
//! // A rubber band computes its batch elsewhere; fold it in on release.
//! selecting.add(1);
//! selecting.merge([1, 2, 3]);
//! assert_eq!(selecting.items(), &[1, 2, 3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A set of selected keys with insertion order and a change revision.
///
/// `SelectionSet` only requires equality on `T`; it stores keys in a `Vec<T>`
/// and enforces uniqueness by scanning. This fits selection sets in editors,
/// which are small (tens of items) and keyed by ID types that are not `Ord`
/// or `Hash`.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> SelectionSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is local to this set and bumps only when a mutation
    /// changes the contents. No-op calls (adding a present key, removing an
    /// absent one, clearing an empty set) leave it unchanged, so observers
    /// can use it as a cheap "did anything change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> SelectionSet<T>
where
    T: PartialEq,
{
    /// Returns `true` if the set contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Adds `key` if it is not already present.
    pub fn add(&mut self, key: T) {
        if self.position_of(&key).is_none() {
            self.items.push(key);
            self.bump_revision();
        }
    }

    /// Removes `key` if present.
    pub fn remove(&mut self, key: &T) {
        if let Some(idx) = self.position_of(key) {
            self.items.remove(idx);
            self.bump_revision();
        }
    }

    /// Toggles `key`: absent keys are added, present keys are removed.
    ///
    /// This is the primitive behind click-to-select in the topmost/flat
    /// hit-test policy.
    pub fn toggle(&mut self, key: T) {
        if let Some(idx) = self.position_of(&key) {
            self.items.remove(idx);
        } else {
            self.items.push(key);
        }
        self.bump_revision();
    }

    /// Appends every key from `keys` that is not already present.
    ///
    /// Existing keys keep their positions; new keys are appended in input
    /// order. Used on pointer release to fold a rubber-band batch into the
    /// persistent selection.
    pub fn merge<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = false;
        for key in keys {
            if self.position_of(&key).is_none() {
                self.items.push(key);
                added = true;
            }
        }
        if added {
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

impl<'a, T> IntoIterator for &'a SelectionSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
