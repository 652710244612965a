//! Undo history - bounded, delta-based move records
//!
//! Each record describes one committed transfer and carries enough to
//! reverse it exactly. Records are verified against the live board before
//! any mutation; a record that no longer matches (an integration bug) is
//! discarded rather than applied partially, so undo can refuse but never
//! corrupt state.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{BoltId, ColorId, ScrewId, BOLT_CAPACITY, HISTORY_LIMIT};

/// One reversible transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRecord {
    /// One screw moved from `from` to `to`.
    Single {
        screw: ScrewId,
        from: BoltId,
        to: BoltId,
    },
    /// A same-color run moved from `from` to `to`; `screws` lists ids in
    /// the order they landed on `to`.
    Batch {
        screws: ArrayVec<ScrewId, BOLT_CAPACITY>,
        from: BoltId,
        to: BoltId,
        color: ColorId,
    },
    /// An empty bolt was added by level tooling.
    BoltAdded { bolt: BoltId },
}

/// Bounded FIFO of move records, undone most-recent-first.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    records: VecDeque<MoveRecord>,
    limit: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a committed move, evicting the oldest beyond the bound.
    /// No-op moves (same-bolt drops, refused moves) must not reach here.
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push_back(record);
        while self.records.len() > self.limit {
            self.records.pop_front();
        }
    }

    /// Empty the history (level completion and level reload).
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Pop the most recent record and reverse it on `board`.
    /// Returns false when the history is empty or the record no longer
    /// matches the board (in which case nothing is mutated).
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let Some(record) = self.records.pop_back() else {
            return false;
        };

        match record {
            MoveRecord::Single { screw, from, to } => Self::undo_single(board, screw, from, to),
            MoveRecord::Batch {
                screws, from, to, ..
            } => Self::undo_batch(board, &screws, from, to),
            MoveRecord::BoltAdded { bolt } => board.remove_bolt_if_empty(bolt),
        }
    }

    fn undo_single(board: &mut Board, screw: ScrewId, from: BoltId, to: BoltId) -> bool {
        // Verify before touching anything.
        let top_matches = board
            .bolt(to)
            .and_then(|b| b.top())
            .map_or(false, |s| s.id == screw);
        let has_room = board.bolt(from).map_or(false, |b| !b.is_full());
        if !top_matches || !has_room {
            return false;
        }

        let screw = board.bolt_mut(to).and_then(|b| b.pop());
        match screw {
            Some(screw) => board.bolt_mut(from).map_or(false, |b| b.push(screw)),
            None => false,
        }
    }

    fn undo_batch(board: &mut Board, screws: &[ScrewId], from: BoltId, to: BoltId) -> bool {
        let count = screws.len();
        let Some(target) = board.bolt(to) else {
            return false;
        };
        if target.len() < count {
            return false;
        }

        // The run landed on `to` in `screws` order, so the top of `to` must
        // read as `screws` reversed.
        let top_matches = target
            .screws()
            .iter()
            .rev()
            .take(count)
            .map(|s| s.id)
            .eq(screws.iter().rev().copied());
        let has_room = board
            .bolt(from)
            .map_or(false, |b| b.slots_available() >= count);
        if !top_matches || !has_room {
            return false;
        }

        // Popping reverses the transfer order again, which restores the
        // source's exact pre-move arrangement.
        for _ in 0..count {
            let Some(screw) = board.bolt_mut(to).and_then(|b| b.pop()) else {
                return false;
            };
            if !board.bolt_mut(from).map_or(false, |b| b.push(screw)) {
                return false;
            }
        }
        true
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}
