//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Color identifier carried by a screw. Levels use arbitrary small ids;
/// the core never interprets the value beyond equality.
pub type ColorId = u8;

/// Unique screw identifier, assigned monotonically by the board when a
/// screw is created (level load or bolt tooling — never by moves).
pub type ScrewId = u32;

/// Bolt identifier, taken from the level spec.
pub type BoltId = u32;

/// Maximum screws per bolt
pub const BOLT_CAPACITY: usize = 5;

/// Minimum same-colored screws for the cosmetic "complete" milestone.
/// The authoritative lock condition additionally requires a full bolt.
pub const COMPLETE_MIN_SCREWS: usize = 3;

/// Undo history depth (oldest entries are evicted beyond this)
pub const HISTORY_LIMIT: usize = 10;

/// Upper bound on bolts per board, including bolts added mid-game
pub const MAX_BOLTS: usize = 12;

/// Capacity of the pending click queue; clicks beyond this are dropped
pub const MAX_PENDING_CLICKS: usize = 32;

/// Logical facts emitted toward the presentation layer.
///
/// Each event describes a state change that has already committed; the
/// presenter owns all timing and animation and must tolerate receiving
/// these instantaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// A screw was picked up from the top of a bolt.
    ScrewLifted { screw: ScrewId, from: BoltId },
    /// The held screw was set back down on its source bolt.
    ScrewDroppedBack { screw: ScrewId, bolt: BoltId },
    /// A screw landed on `to` at stack position `slot` (0 = bottom).
    ScrewMoved { screw: ScrewId, to: BoltId, slot: usize },
    /// A bolt reached the cosmetic completion milestone (3+ uniform).
    BoltCompleted { bolt: BoltId },
    /// A bolt became locked (full and uniform); it rejects further clicks.
    BoltLocked { bolt: BoltId },
    /// Every non-empty bolt is locked. Fired at most once per level.
    PuzzleCompleted,
}

/// Receiver for [`SortEvent`]s, injected into the engine at construction.
pub trait Presenter {
    fn on_event(&mut self, event: SortEvent);
}

/// No-op presenter for hosts (and benches) that ignore notifications.
impl Presenter for () {
    fn on_event(&mut self, _event: SortEvent) {}
}

/// Presenter that collects events for hosts that poll after each move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBuffer {
    events: Vec<SortEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events accumulated since the last drain.
    pub fn events(&self) -> &[SortEvent] {
        &self.events
    }

    /// Take and clear the accumulated events.
    pub fn drain(&mut self) -> Vec<SortEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for EventBuffer {
    fn on_event(&mut self, event: SortEvent) {
        self.events.push(event);
    }
}
