//! Placement error taxonomy.
//!
//! Every condition the engine can detect is returned as a value; the
//! engine never panics on caller input and has no fatal error class. All
//! three variants leave engine state completely untouched.

use serde::{Deserialize, Serialize};

/// Why a placement attempt was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceError {
    /// The tray slot holds no piece. A caller-sequencing mistake: the
    /// presentation layer should only offer occupied slots.
    EmptySlot { slot: usize },

    /// The piece does not fit at the requested anchor (out of bounds or
    /// overlapping an occupied cell). Expected and frequent; the piece
    /// stays in its slot.
    InvalidPlacement,

    /// The round has already ended; call `reset` to start a new one.
    RoundOver,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::EmptySlot { slot } => write!(f, "tray slot {slot} is empty"),
            PlaceError::InvalidPlacement => write!(f, "piece does not fit at the requested cell"),
            PlaceError::RoundOver => write!(f, "round is over"),
        }
    }
}

impl std::error::Error for PlaceError {}
