//! # bloxcore
//!
//! A block-placement puzzle engine: players drag polyomino pieces onto
//! an 8x8 grid, fully occupied rows and columns clear simultaneously,
//! and payouts scale with a consecutive-clear combo. The round ends when
//! no tray piece fits anywhere.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, audio, input or analytics. The
//!    presentation layer sends discrete placement attempts and renders
//!    the structured outcomes the engine returns.
//!
//! 2. **No Ambient State**: Grid, tray, combo and score are fields of a
//!    single `PuzzleEngine` instance. There are no globals.
//!
//! 3. **Deterministic**: The RNG is injected and seedable; the same seed
//!    and placement sequence reproduce a round exactly.
//!
//! ## Modules
//!
//! - `core`: Grid coordinates, error taxonomy, RNG
//! - `shapes`: Shape definitions and the piece catalog
//! - `grid`: Occupancy store, placement legality, line clears
//! - `scoring`: Combo state machine and payout tiers
//! - `tray`: Slot management and draw policies
//! - `engine`: Orchestration, feasibility scan, outcome records
//! - `persist`: Best-score storage
//!
//! ## Example
//!
//! ```
//! use bloxcore::engine::PuzzleEngine;
//!
//! let mut engine = PuzzleEngine::builder().seed(42).build();
//!
//! // Try dropping the first tray piece at the top-left corner.
//! match engine.attempt_place(0, 0, 0) {
//!     Ok(outcome) => println!("scored {} points", outcome.score.score),
//!     Err(reject) => println!("rejected: {reject}"),
//! }
//! ```

pub mod core;
pub mod engine;
pub mod grid;
pub mod persist;
pub mod scoring;
pub mod shapes;
pub mod tray;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, GameRngState, PlaceError, CELL_COUNT, GRID_SIZE};

pub use crate::shapes::{BlockColor, Offset, ShapeCatalog, ShapeDef, ShapeId, ShapeTier};

pub use crate::grid::{clear_full_lines, find_full_lines, GridState, LineClear};

pub use crate::scoring::{ClearScore, ClearTier, ComboScorer, PLACEMENT_BONUS};

pub use crate::tray::{DrawPolicy, TrayManager, TraySnapshot, TRAY_SLOTS};

pub use crate::engine::{
    ClearReport, PlacementOutcome, PlacementPreview, PuzzleEngine, PuzzleEngineBuilder,
    RoundState, ScoreReport,
};

pub use crate::persist::{BestScoreStore, FileBestScore, MemoryBestScore, BEST_SCORE_KEY};
