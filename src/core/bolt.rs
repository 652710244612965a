//! Bolt module - the capacity-5 screw stack
//!
//! A bolt owns an ordered stack of screws; the top of the stack is the last
//! element (most recently placed, first removed). All boundary conditions
//! are silent no-ops returning a bool/Option, since moves are player-driven
//! and illegal attempts must never crash the interaction loop.

use arrayvec::ArrayVec;

use crate::types::{BoltId, ColorId, ScrewId, BOLT_CAPACITY, COMPLETE_MIN_SCREWS};

/// A single colored puzzle piece. Created once, immutable, owned by exactly
/// one bolt at a time; ownership transfers atomically on move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Screw {
    pub id: ScrewId,
    pub color: ColorId,
}

/// A capacity-5 stack of screws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bolt {
    id: BoltId,
    slots: ArrayVec<Screw, BOLT_CAPACITY>,
}

impl Bolt {
    /// Create a new empty bolt.
    pub fn new(id: BoltId) -> Self {
        Self {
            id,
            slots: ArrayVec::new(),
        }
    }

    pub fn id(&self) -> BoltId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The top screw, or None when empty.
    pub fn top(&self) -> Option<Screw> {
        self.slots.last().copied()
    }

    pub fn slots_available(&self) -> usize {
        BOLT_CAPACITY - self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == BOLT_CAPACITY
    }

    /// True when the bolt is non-empty and every screw shares one color.
    pub fn is_uniform(&self) -> bool {
        match self.slots.first() {
            Some(first) => self.slots.iter().all(|s| s.color == first.color),
            None => false,
        }
    }

    /// Cosmetic completion milestone: 3+ screws, all one color.
    ///
    /// The authoritative lock condition is stricter (full and uniform);
    /// see `CompletionTracker::is_locked`.
    pub fn is_complete(&self) -> bool {
        self.slots.len() >= COMPLETE_MIN_SCREWS && self.is_uniform()
    }

    /// Length of the maximal contiguous same-color run at the top of the
    /// stack, scanning from the topmost screw downward.
    pub fn top_run_len(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.slots
            .iter()
            .rev()
            .take_while(|s| s.color == top.color)
            .count()
    }

    /// Append a screw on top.
    /// Returns false if the bolt is full or already holds the screw;
    /// callers pre-check capacity, this is a safety guard.
    pub fn push(&mut self, screw: Screw) -> bool {
        if self.is_full() || self.slots.iter().any(|s| s.id == screw.id) {
            return false;
        }
        self.slots.push(screw);
        true
    }

    /// Remove and return the top screw.
    pub fn pop(&mut self) -> Option<Screw> {
        self.slots.pop()
    }

    /// Remove a screw by identity, wherever it sits in the stack.
    /// Returns None (no-op) if the screw is absent.
    pub fn remove(&mut self, screw_id: ScrewId) -> Option<Screw> {
        let pos = self.slots.iter().position(|s| s.id == screw_id)?;
        Some(self.slots.remove(pos))
    }

    /// The screws in stack order (bottom first).
    pub fn screws(&self) -> &[Screw] {
        &self.slots
    }
}
