//! Move engine - the puzzle state machine
//!
//! Two states, Idle (no selection) and Holding (a screw lifted from a
//! source bolt), driven by a single inbound event: `bolt_clicked`. The
//! engine owns the board, the completion tracker, the undo history, and
//! the injected presenter, so moves and undo can never interleave.
//!
//! Every refusal is silent: wrong color, full target, locked bolt, and
//! stale selections all leave the board untouched and simply keep or reset
//! the selection as specified. The puzzle absorbs illegal attempts; it
//! never reports them as errors.

use arrayvec::ArrayVec;

use crate::core::board::{Board, LevelError};
use crate::core::bolt::Screw;
use crate::core::checker::CompletionTracker;
use crate::core::history::{HistoryManager, MoveRecord};
use crate::core::rules;
use crate::core::snapshot::BoardSnapshot;
use crate::types::{BoltId, ColorId, EventBuffer, Presenter, ScrewId, SortEvent, BOLT_CAPACITY};

/// The transient "a screw is in hand" state. The screw stays logically
/// associated with its source bolt until a transfer commits; holding is
/// conceptual, which is what makes swaps structurally free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub screw: ScrewId,
    pub color: ColorId,
    pub source: BoltId,
}

/// The state machine over a board, with undo and completion tracking.
#[derive(Debug)]
pub struct MoveEngine<P = EventBuffer> {
    board: Board,
    selection: Option<Selection>,
    checker: CompletionTracker,
    history: HistoryManager,
    presenter: P,
}

impl MoveEngine<EventBuffer> {
    /// Engine with a polling event buffer as its presenter.
    pub fn new() -> Self {
        Self::with_presenter(EventBuffer::new())
    }
}

impl Default for MoveEngine<EventBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Presenter> MoveEngine<P> {
    /// Engine with an injected presenter.
    pub fn with_presenter(presenter: P) -> Self {
        Self {
            board: Board::new(),
            selection: None,
            checker: CompletionTracker::new(),
            history: HistoryManager::new(),
            presenter,
        }
    }

    /// Replace the board from a level spec, resetting selection, history,
    /// and completion state.
    pub fn load_level(&mut self, spec: &BoardSnapshot) -> Result<(), LevelError> {
        let board = Board::load(spec)?;
        self.board = board;
        self.selection = None;
        self.history.clear();
        self.checker.reset();
        self.checker.recompute(&self.board);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn checker(&self) -> &CompletionTracker {
        &self.checker
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn is_puzzle_complete(&self) -> bool {
        CompletionTracker::is_puzzle_complete(&self.board)
    }

    /// The single inbound event: the player clicked a bolt.
    pub fn bolt_clicked(&mut self, bolt: BoltId) {
        match self.selection {
            None => self.try_lift(bolt),
            Some(selection) => self.try_place(selection, bolt),
        }
    }

    /// Reverse the most recent committed move, if any. A held screw is set
    /// down first; an undo never interleaves with an in-flight move.
    pub fn undo(&mut self) -> bool {
        if let Some(selection) = self.selection.take() {
            self.presenter.on_event(SortEvent::ScrewDroppedBack {
                screw: selection.screw,
                bolt: selection.source,
            });
        }

        let undone = self.history.undo(&mut self.board);
        if undone {
            self.checker.recompute(&self.board);
        }
        undone
    }

    /// Append an empty bolt (level tooling); undoable.
    pub fn add_bolt(&mut self, bolt: BoltId) -> Result<(), LevelError> {
        self.board.add_bolt(bolt)?;
        self.history.record(MoveRecord::BoltAdded { bolt });
        self.checker.recompute(&self.board);
        Ok(())
    }

    /// Idle + click: lift the top screw of an unlocked, non-empty bolt.
    fn try_lift(&mut self, bolt_id: BoltId) {
        let Some(bolt) = self.board.bolt(bolt_id) else {
            return;
        };
        if !rules::can_interact(bolt) {
            return;
        }
        let Some(top) = bolt.top() else {
            return;
        };

        self.selection = Some(Selection {
            screw: top.id,
            color: top.color,
            source: bolt_id,
        });
        self.presenter.on_event(SortEvent::ScrewLifted {
            screw: top.id,
            from: bolt_id,
        });
    }

    /// Holding + click: drop back, transfer a run, or swap.
    fn try_place(&mut self, selection: Selection, target_id: BoltId) {
        // Clicked the source again: set the screw back down. Not a move,
        // never recorded.
        if target_id == selection.source {
            self.drop_back(selection);
            return;
        }

        // Unknown or locked target: absorb the click, keep holding.
        let Some(target) = self.board.bolt(target_id) else {
            return;
        };
        if !rules::can_interact(target) {
            return;
        }

        // The held screw must still be the source's top; anything else is
        // an integration bug, and the stale selection is discarded.
        let source_top = self
            .board
            .bolt(selection.source)
            .and_then(|bolt| bolt.top());
        if source_top.map(|s| s.id) != Some(selection.screw) {
            self.selection = None;
            return;
        }

        if rules::can_accept(target, selection.color) {
            // can_accept guarantees at least one free slot, and the held
            // screw guarantees a run of at least one.
            let run = self
                .board
                .bolt(selection.source)
                .map_or(0, |bolt| bolt.top_run_len());
            let count = run.min(target.slots_available());
            self.commit_transfer(selection, target_id, count);
        } else if target.top().is_some_and(|top| top.color != selection.color)
            && rules::can_swap(target)
        {
            self.swap(selection, target_id);
        } else {
            // Same color but no free slot: nothing can move.
            self.drop_back(selection);
        }
    }

    /// Transfer `count` screws from the selection's source to `target_id`,
    /// record the move, and re-evaluate completion.
    fn commit_transfer(&mut self, selection: Selection, target_id: BoltId, count: usize) {
        let moved = self.transfer(selection.source, target_id, count);
        if moved.is_empty() {
            self.drop_back(selection);
            return;
        }

        if moved.len() == 1 {
            self.history.record(MoveRecord::Single {
                screw: moved[0].id,
                from: selection.source,
                to: target_id,
            });
        } else {
            self.history.record(MoveRecord::Batch {
                screws: moved.iter().map(|s| s.id).collect(),
                from: selection.source,
                to: target_id,
                color: selection.color,
            });
        }

        self.selection = None;

        let completed = self.checker.check_after_move(
            &self.board,
            selection.source,
            target_id,
            &mut self.presenter,
        );
        if completed {
            self.history.clear();
        }
    }

    /// Pop/push `count` screws one at a time, preserving relative order
    /// under undo. Capacity is the hard ceiling; the push guard keeps a
    /// miscounted transfer from ever overfilling a bolt.
    fn transfer(
        &mut self,
        from: BoltId,
        to: BoltId,
        count: usize,
    ) -> ArrayVec<Screw, BOLT_CAPACITY> {
        let mut moved = ArrayVec::new();

        for _ in 0..count {
            let Some(screw) = self.board.bolt_mut(from).and_then(|bolt| bolt.pop()) else {
                break;
            };
            let mut slot = 0;
            let pushed = self.board.bolt_mut(to).map_or(false, |bolt| {
                if bolt.push(screw) {
                    slot = bolt.len() - 1;
                    true
                } else {
                    false
                }
            });
            if !pushed {
                // Put it back; the run so far stays committed.
                if let Some(source) = self.board.bolt_mut(from) {
                    source.push(screw);
                }
                break;
            }

            self.presenter.on_event(SortEvent::ScrewMoved {
                screw: screw.id,
                to,
                slot,
            });
            moved.push(screw);
        }

        moved
    }

    /// Color mismatch: hand off the hold. The held screw never left its
    /// stack, so nothing moves and nothing is recorded; the target's top
    /// screw becomes the new selection.
    fn swap(&mut self, selection: Selection, target_id: BoltId) {
        let Some(new_top) = self.board.bolt(target_id).and_then(|bolt| bolt.top()) else {
            return;
        };

        self.presenter.on_event(SortEvent::ScrewDroppedBack {
            screw: selection.screw,
            bolt: selection.source,
        });
        self.selection = Some(Selection {
            screw: new_top.id,
            color: new_top.color,
            source: target_id,
        });
        self.presenter.on_event(SortEvent::ScrewLifted {
            screw: new_top.id,
            from: target_id,
        });
    }

    fn drop_back(&mut self, selection: Selection) {
        self.presenter.on_event(SortEvent::ScrewDroppedBack {
            screw: selection.screw,
            bolt: selection.source,
        });
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(bolts: &[(BoltId, &[ColorId])]) -> MoveEngine {
        let mut engine = MoveEngine::new();
        engine
            .load_level(&BoardSnapshot::from_colors(bolts))
            .unwrap();
        engine
    }

    fn colors(engine: &MoveEngine, bolt: BoltId) -> Vec<ColorId> {
        engine
            .board()
            .bolt(bolt)
            .unwrap()
            .screws()
            .iter()
            .map(|s| s.color)
            .collect()
    }

    #[test]
    fn test_click_empty_bolt_stays_idle() {
        let mut engine = engine_with(&[(1, &[])]);
        engine.bolt_clicked(1);
        assert_eq!(engine.selection(), None);
        assert!(engine.presenter().events().is_empty());
    }

    #[test]
    fn test_click_unknown_bolt_is_absorbed() {
        let mut engine = engine_with(&[(1, &[1])]);
        engine.bolt_clicked(42);
        assert_eq!(engine.selection(), None);

        engine.bolt_clicked(1);
        engine.bolt_clicked(42);
        assert!(engine.selection().is_some(), "unknown target keeps holding");
    }

    #[test]
    fn test_same_bolt_drop_is_not_recorded() {
        let mut engine = engine_with(&[(1, &[1, 2])]);
        engine.bolt_clicked(1);
        engine.bolt_clicked(1);

        assert_eq!(engine.selection(), None);
        assert!(engine.history().is_empty());
        assert_eq!(colors(&engine, 1), vec![1, 2]);
    }

    #[test]
    fn test_lift_from_locked_bolt_is_refused() {
        let mut engine = engine_with(&[(1, &[2, 2, 2, 2, 2])]);
        engine.bolt_clicked(1);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_stale_selection_is_discarded_without_mutation() {
        let mut engine = engine_with(&[(1, &[1]), (2, &[1])]);
        engine.bolt_clicked(1);

        // Simulate a host bug: the source's top changes under the hold.
        let screw = engine.board.bolt_mut(1).unwrap().pop().unwrap();
        engine.board.bolt_mut(2).unwrap().push(screw);

        engine.bolt_clicked(2);
        assert_eq!(engine.selection(), None);
        assert!(engine.history().is_empty());
        assert_eq!(colors(&engine, 2), vec![1, 1]);
    }

    #[test]
    fn test_full_same_color_target_drops_back() {
        let mut engine = engine_with(&[(1, &[1]), (2, &[1, 1, 1, 1, 2])]);
        // Bolt 2 is full but mixed, so its top (color 2) can still swap;
        // make the held color match the full bolt's top instead.
        let mut engine2 = engine_with(&[(1, &[2]), (2, &[1, 1, 1, 1, 2])]);
        engine2.bolt_clicked(1);
        engine2.bolt_clicked(2);

        // Same color, zero slots: silent drop back, nothing recorded.
        assert_eq!(engine2.selection(), None);
        assert!(engine2.history().is_empty());
        assert_eq!(colors(&engine2, 1), vec![2]);

        // And the mismatched case swaps rather than dropping.
        engine.bolt_clicked(1);
        engine.bolt_clicked(2);
        let selection = engine.selection().unwrap();
        assert_eq!(selection.source, 2);
        assert_eq!(selection.color, 2);
    }
}
