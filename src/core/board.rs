//! Board module - the set of bolts for the current level
//!
//! The board owns every bolt and assigns unique screw ids; screws are
//! created only here (level load and bolt tooling), never by moves, so the
//! total screw count is conserved across all legal operations.

use crate::core::bolt::{Bolt, Screw};
use crate::core::snapshot::BoardSnapshot;
use crate::types::{BoltId, ColorId, ScrewId, BOLT_CAPACITY, MAX_BOLTS};

/// Level-load and bolt-tooling failures. These indicate a bad level spec or
/// a host integration bug, not player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    TooManyBolts,
    DuplicateBoltId,
    OverlongColorSequence,
}

impl LevelError {
    pub fn code(self) -> &'static str {
        match self {
            LevelError::TooManyBolts => "too_many_bolts",
            LevelError::DuplicateBoltId => "duplicate_bolt_id",
            LevelError::OverlongColorSequence => "overlong_color_sequence",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            LevelError::TooManyBolts => "level exceeds the maximum bolt count",
            LevelError::DuplicateBoltId => "two bolts share one id",
            LevelError::OverlongColorSequence => "a bolt spec holds more screws than its capacity",
        }
    }
}

/// All bolts for the current level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bolts: Vec<Bolt>,
    next_screw_id: ScrewId,
}

impl Board {
    /// Create an empty board (no bolts).
    pub fn new() -> Self {
        Self {
            bolts: Vec::new(),
            next_screw_id: 0,
        }
    }

    /// Build a board from a level spec / snapshot.
    pub fn load(spec: &BoardSnapshot) -> Result<Self, LevelError> {
        if spec.bolts.len() > MAX_BOLTS {
            return Err(LevelError::TooManyBolts);
        }

        let mut board = Self::new();
        for bolt_spec in &spec.bolts {
            if bolt_spec.colors.len() > BOLT_CAPACITY {
                return Err(LevelError::OverlongColorSequence);
            }
            if board.contains(bolt_spec.id) {
                return Err(LevelError::DuplicateBoltId);
            }

            let mut bolt = Bolt::new(bolt_spec.id);
            for &color in &bolt_spec.colors {
                let screw = board.spawn_screw(color);
                bolt.push(screw);
            }
            board.bolts.push(bolt);
        }
        Ok(board)
    }

    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    pub fn bolt(&self, id: BoltId) -> Option<&Bolt> {
        self.bolts.iter().find(|b| b.id() == id)
    }

    pub(crate) fn bolt_mut(&mut self, id: BoltId) -> Option<&mut Bolt> {
        self.bolts.iter_mut().find(|b| b.id() == id)
    }

    pub fn contains(&self, id: BoltId) -> bool {
        self.bolt(id).is_some()
    }

    /// Total screw count across all bolts (conserved by legal moves).
    pub fn total_screws(&self) -> usize {
        self.bolts.iter().map(|b| b.len()).sum()
    }

    /// Append an empty bolt (level tooling).
    pub fn add_bolt(&mut self, id: BoltId) -> Result<(), LevelError> {
        if self.bolts.len() >= MAX_BOLTS {
            return Err(LevelError::TooManyBolts);
        }
        if self.contains(id) {
            return Err(LevelError::DuplicateBoltId);
        }
        self.bolts.push(Bolt::new(id));
        Ok(())
    }

    /// Remove a bolt, but only when it holds no screws; removing screws
    /// would break conservation. Returns true when the bolt was removed.
    pub(crate) fn remove_bolt_if_empty(&mut self, id: BoltId) -> bool {
        match self.bolts.iter().position(|b| b.id() == id) {
            Some(pos) if self.bolts[pos].is_empty() => {
                self.bolts.remove(pos);
                true
            }
            _ => false,
        }
    }

    fn spawn_screw(&mut self, color: ColorId) -> Screw {
        let screw = Screw {
            id: self.next_screw_id,
            color,
        };
        self.next_screw_id = self.next_screw_id.wrapping_add(1);
        screw
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
