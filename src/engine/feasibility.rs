//! Game-over detection.
//!
//! A round is over when no piece left in the tray fits anywhere on the
//! grid. The scan is the exhaustive tray x anchors cross product (at
//! most 3 x 64 legality checks, each O(shape size)) and runs after
//! every successful placement, never after a rejection.

use crate::grid::GridState;
use crate::shapes::ShapeCatalog;
use crate::tray::TrayManager;

/// Check whether the round has ended.
///
/// Returns `false` when the tray has zero occupied slots: the engine
/// always refills before asking, so an empty tray means the check is
/// premature rather than terminal. Otherwise returns `true` iff every
/// occupied slot's shape fails to fit at all 64 anchors.
#[must_use]
pub fn is_game_over(grid: &GridState, tray: &TrayManager, catalog: &ShapeCatalog) -> bool {
    let mut any_piece = false;
    for (_, id) in tray.occupied() {
        any_piece = true;
        if grid.fits_anywhere(catalog.get_unchecked(id)) {
            return false;
        }
    }
    any_piece
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, GameRng};
    use crate::shapes::{BlockColor, ShapeId};
    use crate::tray::DrawPolicy;

    const RED: BlockColor = BlockColor::new(0xFF0000);

    /// Occupy everything except the given cells.
    fn packed_grid_except(free: &[Cell]) -> GridState {
        let mut grid = GridState::new();
        for cell in Cell::all() {
            if !free.contains(&cell) {
                grid.set_occupied(cell, RED);
            }
        }
        grid
    }

    fn shape_named(catalog: &ShapeCatalog, name: &str) -> ShapeId {
        catalog.iter().find(|s| s.name == name).unwrap().id
    }

    #[test]
    fn test_empty_tray_is_not_game_over() {
        let catalog = ShapeCatalog::standard();
        let grid = packed_grid_except(&[]);
        let tray = TrayManager::new(DrawPolicy::Uniform);

        assert!(!is_game_over(&grid, &tray, &catalog));
    }

    #[test]
    fn test_empty_grid_is_never_game_over() {
        let catalog = ShapeCatalog::standard();
        let grid = GridState::new();

        let mut tray = TrayManager::new(DrawPolicy::Uniform);
        let mut rng = GameRng::new(42);
        tray.refill(&catalog, &grid, 0, &mut rng);

        assert!(!is_game_over(&grid, &tray, &catalog));
    }

    #[test]
    fn test_no_fit_anywhere_is_game_over() {
        let catalog = ShapeCatalog::standard();
        // One free cell, but every tray piece covers two.
        let grid = packed_grid_except(&[Cell::new(0, 0)]);
        let bar2 = shape_named(&catalog, "bar2");
        let pole2 = shape_named(&catalog, "pole2");
        let tray = TrayManager::with_slots(
            DrawPolicy::Uniform,
            [Some(bar2), Some(pole2), Some(bar2)],
        );

        assert!(is_game_over(&grid, &tray, &catalog));
    }

    #[test]
    fn test_single_fit_keeps_round_alive() {
        let catalog = ShapeCatalog::standard();
        // Two adjacent free cells: the horizontal bar fits.
        let grid = packed_grid_except(&[Cell::new(0, 0), Cell::new(0, 1)]);
        let bar2 = shape_named(&catalog, "bar2");
        let pole3 = shape_named(&catalog, "pole3");
        let tray = TrayManager::with_slots(
            DrawPolicy::Uniform,
            [Some(pole3), Some(bar2), Some(pole3)],
        );

        assert!(!is_game_over(&grid, &tray, &catalog));
    }

    #[test]
    fn test_partially_consumed_tray_checks_remaining_slots_only() {
        let catalog = ShapeCatalog::standard();
        let grid = packed_grid_except(&[Cell::new(0, 0)]);
        let dot = shape_named(&catalog, "dot");
        let bar4 = shape_named(&catalog, "bar4");

        // The only placeable piece sits in the middle slot.
        let mut tray =
            TrayManager::with_slots(DrawPolicy::Uniform, [Some(bar4), Some(dot), Some(bar4)]);
        assert!(!is_game_over(&grid, &tray, &catalog));

        // Once it is consumed, the rest cannot be placed.
        tray.consume(1);
        assert!(is_game_over(&grid, &tray, &catalog));
    }
}
