//! Completion tracking - per-bolt lock flags and whole-puzzle win detection
//!
//! Lock status is derived state: the truth is always `bolt.slots`, and the
//! cache here is recomputed after every board mutation. The puzzle-complete
//! signal fires exactly once per level, no matter how often the state is
//! re-evaluated afterwards.

use crate::core::board::Board;
use crate::core::bolt::Bolt;
use crate::types::{BoltId, Presenter, SortEvent};

#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    locked: Vec<(BoltId, bool)>,
    signalled: bool,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative lock condition: full and uniformly colored. Stricter
    /// than `Bolt::is_complete`, which is a cosmetic 3+ milestone.
    pub fn is_locked(bolt: &Bolt) -> bool {
        bolt.is_full() && bolt.is_uniform()
    }

    /// Cached lock flag from the last recompute.
    pub fn locked(&self, bolt: BoltId) -> bool {
        self.locked
            .iter()
            .find(|(id, _)| *id == bolt)
            .map_or(false, |&(_, locked)| locked)
    }

    /// Refresh every cached lock flag from the board.
    pub fn recompute(&mut self, board: &Board) {
        self.locked = board
            .bolts()
            .iter()
            .map(|b| (b.id(), Self::is_locked(b)))
            .collect();
    }

    /// True iff at least one bolt holds a screw and every non-empty bolt is
    /// locked. An empty board, or a board whose bolts are all empty, is not
    /// complete.
    pub fn is_puzzle_complete(board: &Board) -> bool {
        let mut non_empty = 0;
        for bolt in board.bolts() {
            if bolt.is_empty() {
                continue;
            }
            non_empty += 1;
            if !Self::is_locked(bolt) {
                return false;
            }
        }
        non_empty > 0
    }

    /// Whether the one-shot completion signal has already fired.
    pub fn completion_signalled(&self) -> bool {
        self.signalled
    }

    /// Forget cached flags and the completion signal (level reload).
    pub fn reset(&mut self) {
        self.locked.clear();
        self.signalled = false;
    }

    /// Re-evaluate after a committed transfer between `source` and
    /// `target`: report cosmetic completion, lock transitions, and - once
    /// per level - puzzle completion. Returns true when completion fired.
    pub(crate) fn check_after_move<P: Presenter>(
        &mut self,
        board: &Board,
        source: BoltId,
        target: BoltId,
        presenter: &mut P,
    ) -> bool {
        for id in [source, target] {
            let Some(bolt) = board.bolt(id) else { continue };
            if bolt.is_complete() {
                presenter.on_event(SortEvent::BoltCompleted { bolt: id });
            }
            if Self::is_locked(bolt) && !self.locked(id) {
                presenter.on_event(SortEvent::BoltLocked { bolt: id });
            }
        }

        self.recompute(board);

        if !self.signalled && Self::is_puzzle_complete(board) {
            self.signalled = true;
            presenter.on_event(SortEvent::PuzzleCompleted);
            return true;
        }
        false
    }
}
