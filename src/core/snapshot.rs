//! Serializable board description
//!
//! One format serves two collaborators: the level loader (`Board::load`)
//! and the persistence layer, which only ever needs the per-bolt color
//! sequences. How a host stores the JSON (file, key-value store) is opaque
//! to the core.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::types::{BoltId, ColorId};

/// One bolt's screws, bottom first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoltSnapshot {
    pub id: BoltId,
    pub colors: Vec<ColorId>,
}

/// Full board description: every bolt's ordered color sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub bolts: Vec<BoltSnapshot>,
}

impl BoardSnapshot {
    /// Capture the current board state.
    pub fn capture(board: &Board) -> Self {
        Self {
            bolts: board
                .bolts()
                .iter()
                .map(|bolt| BoltSnapshot {
                    id: bolt.id(),
                    colors: bolt.screws().iter().map(|s| s.color).collect(),
                })
                .collect(),
        }
    }

    /// Build a spec from `(bolt id, bottom-first colors)` pairs.
    pub fn from_colors(bolts: &[(BoltId, &[ColorId])]) -> Self {
        Self {
            bolts: bolts
                .iter()
                .map(|&(id, colors)| BoltSnapshot {
                    id,
                    colors: colors.to_vec(),
                })
                .collect(),
        }
    }

    /// The default demo level: three bolts of interleaved colors. It only
    /// becomes solvable once the player adds spare bolts.
    pub fn default_level() -> Self {
        Self::from_colors(&[
            (1, &[1, 2, 1, 2, 3]),
            (2, &[1, 2, 1, 2, 3]),
            (3, &[1, 2, 1, 2, 3]),
        ])
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| anyhow!("snapshot: encode failed: {}", e))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| anyhow!("snapshot: decode failed: {}", e))
    }
}
