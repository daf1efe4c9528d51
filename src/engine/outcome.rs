//! Structured results returned to the presentation layer.
//!
//! The engine communicates exclusively through these records: a
//! placement either fails with a `PlaceError` or succeeds with a
//! `PlacementOutcome` describing everything a renderer, audio or
//! analytics layer needs. Nothing in here feeds back into engine state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Cell;
use crate::scoring::ClearTier;
use crate::shapes::BlockColor;
use crate::tray::TraySnapshot;

/// Everything that happened during one accepted placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Cells the piece now covers, in offset order.
    pub placed: SmallVec<[Cell; 8]>,

    /// Visual tag of the placed piece.
    pub color: BlockColor,

    /// Line-clear details, absent when nothing cleared.
    pub clear: Option<ClearReport>,

    /// Score movement caused by this placement.
    pub score: ScoreReport,

    /// Tray contents after consumption and any refill.
    pub tray: TraySnapshot,

    /// True when this placement emptied the tray and triggered a refill.
    pub tray_refilled: bool,

    /// True when no remaining tray piece fits anywhere: the round is
    /// over and only `reset` is accepted from here.
    pub game_over: bool,
}

/// Details of a line clear, for the presentation layer's effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearReport {
    /// Indices of the rows cleared.
    pub rows: SmallVec<[u8; 8]>,

    /// Indices of the columns cleared.
    pub cols: SmallVec<[u8; 8]>,

    /// Union of the cleared cells, deduplicated, row-major.
    pub cells: Vec<Cell>,

    /// Scoring unit: `|rows| + |cols|`, crossings double-counted.
    pub total_lines: u32,

    /// Payout tier label derived from `total_lines`.
    pub tier: ClearTier,

    /// Combo streak after this clear.
    pub combo: u32,

    /// Combo-scaled payout (excludes the placement bonus).
    pub awarded: u64,
}

/// Score movement for one placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Flat award applied on every successful placement.
    pub placement_bonus: u64,

    /// Combo-scaled clear payout; zero when nothing cleared.
    pub awarded: u64,

    /// Combo streak after this placement (zero after a non-clearing
    /// placement).
    pub combo: u32,

    /// Round score after this placement.
    pub score: u64,

    /// Persisted best score after this placement.
    pub best_score: u64,

    /// True on the placement that first pushes the round score past the
    /// best recorded before the round started. Fires at most once per
    /// round.
    pub new_best: bool,
}

/// What a placement would look like, for the drag ghost.
///
/// Produced by `PuzzleEngine::preview`; never mutates anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPreview {
    /// Cells the piece would cover.
    pub cells: SmallVec<[Cell; 8]>,

    /// Cells that would clear if the piece were dropped here; empty when
    /// the drop would clear nothing.
    pub would_clear: Vec<Cell>,

    /// Lines the drop would clear (rows + columns).
    pub lines: u32,
}
