//! Click queue - serializes inbound bolt clicks
//!
//! Clicks can arrive faster than the presentation layer settles visually.
//! The queue holds them in order and feeds the engine one at a time; each
//! move's logical effect has fully committed before the next click is
//! dequeued. The queue is bounded - when the player mashes past the bound,
//! extra clicks are dropped silently, never surfaced as errors.

use arrayvec::ArrayVec;

use crate::core::engine::MoveEngine;
use crate::types::{BoltId, Presenter, MAX_PENDING_CLICKS};

#[derive(Debug, Clone, Default)]
pub struct ClickQueue {
    pending: ArrayVec<BoltId, MAX_PENDING_CLICKS>,
}

impl ClickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Enqueue a click. Returns false when the queue is full and the click
    /// was dropped.
    pub fn push(&mut self, bolt: BoltId) -> bool {
        self.pending.try_push(bolt).is_ok()
    }

    /// Discard all pending clicks (level reload).
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Feed every pending click to the engine, in arrival order, one at a
    /// time. Returns the number of clicks processed.
    pub fn pump<P: Presenter>(&mut self, engine: &mut MoveEngine<P>) -> usize {
        let mut processed = 0;
        for bolt in self.pending.drain(..) {
            engine.bolt_clicked(bolt);
            processed += 1;
        }
        processed
    }
}
