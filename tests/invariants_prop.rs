//! Property/invariant tests for the core placement kernel.
//!
//! Fuzz-like coverage over random grids, shapes and rollouts, locking
//! the invariants that must hold regardless of catalog or policy:
//!
//! - `can_place` agrees with the cell-by-cell definition.
//! - A placed piece can never be placed again at the same anchor.
//! - Clearing full lines twice in a row finds nothing the second time.
//! - The combo counter moves in lockstep with clears.
//! - Engine rollouts keep score bookkeeping and terminal state honest.

use std::collections::BTreeSet;

use proptest::prelude::*;

use bloxcore::core::{Cell, CELL_COUNT, GRID_SIZE};
use bloxcore::engine::PuzzleEngine;
use bloxcore::grid::{clear_full_lines, GridState};
use bloxcore::scoring::{ComboScorer, PLACEMENT_BONUS};
use bloxcore::shapes::{BlockColor, ShapeDef, ShapeId, ShapeTier};
use bloxcore::tray::TRAY_SLOTS;

const TAG: BlockColor = BlockColor::new(0xABCDEF);

/// An arbitrary occupancy pattern.
fn arb_grid() -> impl Strategy<Value = GridState> {
    proptest::collection::vec(any::<bool>(), CELL_COUNT).prop_map(|mask| {
        let mut grid = GridState::new();
        for (index, occupied) in mask.into_iter().enumerate() {
            if occupied {
                grid.set_occupied(Cell::from_index(index), TAG);
            }
        }
        grid
    })
}

/// An arbitrary shape of 1-6 cells within a 4x4 bounding box.
fn arb_shape() -> impl Strategy<Value = ShapeDef> {
    proptest::collection::btree_set((0i32..4, 0i32..4), 1..=6).prop_map(|offsets| {
        let offsets: Vec<(i32, i32)> = offsets.into_iter().collect();
        ShapeDef::new(ShapeId::new(0), "fuzz", ShapeTier::Easy, TAG, &offsets)
    })
}

proptest! {
    /// `can_place` is exactly "every covered cell in bounds and free".
    #[test]
    fn can_place_matches_cell_by_cell_definition(
        grid in arb_grid(),
        shape in arb_shape(),
        row in -4i32..12,
        col in -4i32..12,
    ) {
        let expected = shape.offsets().iter().all(|o| {
            let (r, c) = (row + o.dy as i32, col + o.dx as i32);
            (0..GRID_SIZE as i32).contains(&r)
                && (0..GRID_SIZE as i32).contains(&c)
                && !grid.is_occupied(Cell::new(r as u8, c as u8))
        });

        prop_assert_eq!(grid.can_place(&shape, row, col), expected);
    }

    /// A successful placement blocks itself.
    #[test]
    fn place_then_can_place_is_false(
        grid in arb_grid(),
        shape in arb_shape(),
        row in 0i32..8,
        col in 0i32..8,
    ) {
        let mut grid = grid;
        if grid.can_place(&shape, row, col) {
            let covered = grid.place(&shape, row, col, TAG).unwrap();
            prop_assert_eq!(covered.len(), shape.cell_count());
            prop_assert!(!grid.can_place(&shape, row, col));
        }
    }

    /// Line clearing is idempotent without an intervening placement.
    #[test]
    fn second_line_scan_is_empty(grid in arb_grid()) {
        let mut grid = grid;
        clear_full_lines(&mut grid);
        let second = clear_full_lines(&mut grid);

        prop_assert_eq!(second.total_lines(), 0);
        prop_assert!(second.cells.is_empty());

        // And the first pass left no full line behind.
        for i in 0..GRID_SIZE {
            prop_assert!(!grid.is_row_full(i));
            prop_assert!(!grid.is_col_full(i));
        }
    }

    /// The combo grows by exactly one per clearing step and snaps to
    /// zero on every quiet step.
    #[test]
    fn combo_moves_in_lockstep_with_clears(
        lines in proptest::collection::vec(0u32..=16, 1..60),
    ) {
        let mut scorer = ComboScorer::new();
        let mut expected = 0u32;

        for total_lines in lines {
            let result = scorer.score_clear(total_lines);
            if total_lines > 0 {
                expected += 1;
                let clear = result.unwrap();
                prop_assert_eq!(clear.combo, expected);
                prop_assert!(clear.awarded >= 50);
            } else {
                expected = 0;
                prop_assert!(result.is_none());
            }
            prop_assert_eq!(scorer.combo(), expected);
        }
    }

    /// Generated rollouts keep score bookkeeping and the terminal state
    /// consistent with the outcomes the engine reports.
    #[test]
    fn generated_rollout_respects_engine_invariants(
        seed in any::<u64>(),
        steps in 1usize..50,
    ) {
        let mut engine = PuzzleEngine::builder().seed(seed).build();

        for _ in 0..steps {
            if engine.is_game_over() {
                break;
            }

            // First occupied slot, first legal anchor.
            let next = (0..TRAY_SLOTS).find_map(|slot| {
                let id = engine.tray()[slot]?;
                let shape = engine.catalog().get_unchecked(id).clone();
                (0..GRID_SIZE as i32).find_map(|row| {
                    (0..GRID_SIZE as i32)
                        .find_map(|col| {
                            engine.grid().can_place(&shape, row, col).then_some((slot, row, col))
                        })
                })
            });

            // If nothing fits, the engine must already have said so.
            let Some((slot, row, col)) = next else {
                prop_assert!(engine.is_game_over());
                break;
            };

            let score_before = engine.score();
            let combo_before = engine.combo();
            let outcome = engine.attempt_place(slot, row, col).unwrap();

            // Score bookkeeping.
            prop_assert_eq!(
                outcome.score.score,
                score_before + PLACEMENT_BONUS + outcome.score.awarded
            );
            prop_assert!(outcome.score.best_score >= outcome.score.score);

            // Combo lockstep.
            match &outcome.clear {
                Some(clear) => {
                    prop_assert_eq!(clear.combo, combo_before + 1);
                    prop_assert_eq!(outcome.score.combo, combo_before + 1);
                    prop_assert!(clear.total_lines >= 1);
                }
                None => prop_assert_eq!(outcome.score.combo, 0),
            }

            // The consumed slot is empty unless a refill repopulated it.
            if !outcome.tray_refilled {
                prop_assert!(outcome.tray[slot].is_none());
            } else {
                prop_assert!(outcome.tray.iter().all(Option::is_some));
            }

            // Terminal flag matches engine state.
            prop_assert_eq!(outcome.game_over, engine.is_game_over());
        }
    }

    /// The cells a clear reports are exactly the cells that left the
    /// grid.
    #[test]
    fn cleared_cells_match_grid_delta(grid in arb_grid()) {
        let mut after = grid.clone();
        let clear = clear_full_lines(&mut after);

        let delta: BTreeSet<Cell> = Cell::all()
            .filter(|&cell| grid.is_occupied(cell) && !after.is_occupied(cell))
            .collect();

        // Every member cell of a full line was occupied, so the report
        // and the grid delta are the same set.
        let reported: BTreeSet<Cell> = clear.cells.iter().copied().collect();
        prop_assert_eq!(reported, delta);
    }
}
