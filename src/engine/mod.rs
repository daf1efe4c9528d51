//! The puzzle engine: one placement attempt at a time, to completion.
//!
//! `PuzzleEngine` owns the grid, tray, scorer and RNG for the lifetime
//! of a round and is the only mutation path. The presentation layer
//! sends discrete `(slot, row, col)` placement attempts and receives
//! structured outcomes; it never reaches into engine state.
//!
//! ## Resolution order
//!
//! A successful `attempt_place` resolves synchronously: place the piece,
//! consume the slot, apply the flat placement bonus, clear full lines,
//! score the clear, persist the best score on a monotonic increase,
//! refill the tray if it just emptied, then run the game-over scan.
//! Between calls the engine is only ever `Idle` or `GameOver`.

pub mod feasibility;
pub mod outcome;

pub use outcome::{ClearReport, PlacementOutcome, PlacementPreview, ScoreReport};

use tracing::{debug, info};

use crate::core::{Cell, GameRng, PlaceError};
use crate::grid::{lines, GridState};
use crate::persist::{BestScoreStore, MemoryBestScore};
use crate::scoring::{ComboScorer, PLACEMENT_BONUS};
use crate::shapes::ShapeCatalog;
use crate::tray::{DrawPolicy, TrayManager, TraySnapshot};

/// Observable engine state between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// Accepting placement attempts.
    Idle,
    /// No tray piece fits anywhere; only `reset` is accepted.
    GameOver,
}

/// Builder for a [`PuzzleEngine`].
///
/// ## Example
///
/// ```
/// use bloxcore::engine::PuzzleEngine;
/// use bloxcore::tray::DrawPolicy;
///
/// let engine = PuzzleEngine::builder()
///     .seed(42)
///     .draw_policy(DrawPolicy::Adaptive)
///     .build();
///
/// assert_eq!(engine.score(), 0);
/// ```
pub struct PuzzleEngineBuilder {
    catalog: Option<ShapeCatalog>,
    grid: Option<GridState>,
    seed: Option<u64>,
    policy: DrawPolicy,
    store: Option<Box<dyn BestScoreStore>>,
}

impl Default for PuzzleEngineBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            grid: None,
            seed: None,
            policy: DrawPolicy::Uniform,
            store: None,
        }
    }
}

impl PuzzleEngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom catalog instead of [`ShapeCatalog::standard`].
    #[must_use]
    pub fn catalog(mut self, catalog: ShapeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Start the first round from a preset board instead of an empty
    /// one (tutorial and challenge layouts).
    #[must_use]
    pub fn preset_grid(mut self, grid: GridState) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Seed the RNG for reproducible refill sequences.
    ///
    /// Without a seed, one is drawn from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Select the tray draw policy (default: uniform).
    #[must_use]
    pub fn draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a persistent best-score store (default: in-memory).
    #[must_use]
    pub fn best_score_store(mut self, store: impl BestScoreStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Build the engine and start the first round.
    #[must_use]
    pub fn build(self) -> PuzzleEngine {
        let catalog = self.catalog.unwrap_or_else(ShapeCatalog::standard);
        assert!(!catalog.is_empty(), "catalog must contain at least one shape");

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let store = self.store.unwrap_or_else(|| Box::<MemoryBestScore>::default());
        let best_score = store.load();

        let grid = self.grid.unwrap_or_default();
        let mut tray = TrayManager::new(self.policy);
        tray.refill(&catalog, &grid, 0, &mut rng);

        PuzzleEngine {
            catalog,
            grid,
            tray,
            scorer: ComboScorer::new(),
            rng,
            score: 0,
            best_score,
            session_best: best_score,
            best_broken: false,
            state: RoundState::Idle,
            store,
        }
    }
}

/// Orchestrates one round of the puzzle.
pub struct PuzzleEngine {
    catalog: ShapeCatalog,
    grid: GridState,
    tray: TrayManager,
    scorer: ComboScorer,
    rng: GameRng,
    score: u64,
    best_score: u64,
    /// Best score at round start; the new-best signal fires when the
    /// round score first exceeds it.
    session_best: u64,
    best_broken: bool,
    state: RoundState,
    store: Box<dyn BestScoreStore>,
}

impl PuzzleEngine {
    /// Start building an engine.
    #[must_use]
    pub fn builder() -> PuzzleEngineBuilder {
        PuzzleEngineBuilder::new()
    }

    /// Attempt to place the piece in `slot` with its origin at
    /// `(row, col)`.
    ///
    /// Rejections (`EmptySlot`, `InvalidPlacement`, `RoundOver`) leave
    /// every part of the engine untouched: the piece stays in its slot
    /// and no score, combo, tray or grid change occurs.
    pub fn attempt_place(
        &mut self,
        slot: usize,
        row: i32,
        col: i32,
    ) -> Result<PlacementOutcome, PlaceError> {
        if self.state == RoundState::GameOver {
            return Err(PlaceError::RoundOver);
        }

        let shape_id = self
            .tray
            .shape_in(slot)
            .ok_or(PlaceError::EmptySlot { slot })?;
        let shape = self.catalog.get_unchecked(shape_id);
        let color = shape.color;

        let placed = self.grid.place(shape, row, col, color)?;
        self.tray.consume(slot);
        self.score += PLACEMENT_BONUS;

        let clear = lines::clear_full_lines(&mut self.grid);
        let clear_score = self.scorer.score_clear(clear.total_lines());
        let awarded = clear_score.map_or(0, |c| c.awarded);
        self.score += awarded;

        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save(self.best_score);
        }
        let new_best = !self.best_broken && self.score > self.session_best;
        if new_best {
            self.best_broken = true;
            info!(score = self.score, "best score surpassed");
        }

        let tray_refilled = self.tray.is_exhausted();
        if tray_refilled {
            self.tray
                .refill(&self.catalog, &self.grid, self.score, &mut self.rng);
        }

        let game_over = feasibility::is_game_over(&self.grid, &self.tray, &self.catalog);
        if game_over {
            self.state = RoundState::GameOver;
            info!(final_score = self.score, "no legal placement remains");
        }

        debug!(
            slot,
            row,
            col,
            lines = clear.total_lines(),
            combo = self.scorer.combo(),
            score = self.score,
            "placement resolved"
        );

        let clear_report = clear_score.map(|cs| ClearReport {
            rows: clear.rows.clone(),
            cols: clear.cols.clone(),
            cells: clear.cells,
            total_lines: cs.total_lines,
            tier: cs.tier,
            combo: cs.combo,
            awarded: cs.awarded,
        });

        Ok(PlacementOutcome {
            placed,
            color,
            clear: clear_report,
            score: ScoreReport {
                placement_bonus: PLACEMENT_BONUS,
                awarded,
                combo: self.scorer.combo(),
                score: self.score,
                best_score: self.best_score,
                new_best,
            },
            tray: self.tray.snapshot(),
            tray_refilled,
            game_over,
        })
    }

    /// What placing the piece in `slot` at `(row, col)` would do,
    /// without doing it.
    ///
    /// Returns `None` when the slot is empty or the placement is
    /// illegal. Drives the drag ghost; pure.
    #[must_use]
    pub fn preview(&self, slot: usize, row: i32, col: i32) -> Option<PlacementPreview> {
        let shape_id = self.tray.shape_in(slot)?;
        let shape = self.catalog.get_unchecked(shape_id);

        let mut trial = self.grid.clone();
        let cells = trial.place(shape, row, col, shape.color).ok()?;
        let clear = lines::find_full_lines(&trial);

        Some(PlacementPreview {
            cells,
            lines: clear.total_lines(),
            would_clear: clear.cells,
        })
    }

    /// Start a new round: empty grid, fresh tray, score and combo at
    /// zero. Legal from any state; the best score carries over and the
    /// new-best baseline resets to it.
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.scorer.reset();
        self.score = 0;
        self.session_best = self.best_score;
        self.best_broken = false;
        self.state = RoundState::Idle;
        self.tray
            .refill(&self.catalog, &self.grid, 0, &mut self.rng);
        debug!("round reset");
    }

    // === Accessors ===

    #[must_use]
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    #[must_use]
    pub fn tray(&self) -> TraySnapshot {
        self.tray.snapshot()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.scorer.combo()
    }

    #[must_use]
    pub fn round_state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    /// Cells the placed pieces currently cover, for renderer resync.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.grid.is_occupied(cell))
    }
}
