//! The piece tray: three slots, refilled together.
//!
//! A slot empties when its piece is placed; the tray refills every slot
//! at once, and only once the last occupied slot has been consumed. How
//! the replacement pieces are drawn is the [`policy`] module's concern.

pub mod policy;

pub use policy::DrawPolicy;

use smallvec::SmallVec;

use crate::core::GameRng;
use crate::grid::GridState;
use crate::shapes::{ShapeCatalog, ShapeId};

/// Number of tray slots.
pub const TRAY_SLOTS: usize = 3;

/// Post-action view of the tray handed to the presentation layer.
pub type TraySnapshot = [Option<ShapeId>; TRAY_SLOTS];

/// Holds the pieces currently offered to the player.
#[derive(Clone, Debug)]
pub struct TrayManager {
    slots: [Option<ShapeId>; TRAY_SLOTS],
    policy: DrawPolicy,
    /// Shapes drawn by the previous refill; the adaptive policy halves
    /// their weight to discourage repeats.
    recent: SmallVec<[ShapeId; TRAY_SLOTS]>,
}

impl TrayManager {
    /// Create an empty tray with the given draw policy.
    ///
    /// The engine performs the initial refill as part of round setup.
    #[must_use]
    pub fn new(policy: DrawPolicy) -> Self {
        Self {
            slots: [None; TRAY_SLOTS],
            policy,
            recent: SmallVec::new(),
        }
    }

    /// Create a tray holding the given pieces.
    ///
    /// Setup hook for preset rounds and tests; regular play fills slots
    /// only through [`TrayManager::refill`].
    #[must_use]
    pub fn with_slots(policy: DrawPolicy, slots: TraySnapshot) -> Self {
        Self {
            slots,
            policy,
            recent: SmallVec::new(),
        }
    }

    /// The draw policy in use.
    #[must_use]
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// The shape in a slot, if any. Out-of-range slots read as empty.
    #[must_use]
    pub fn shape_in(&self, slot: usize) -> Option<ShapeId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Empty a slot, returning the shape it held.
    pub fn consume(&mut self, slot: usize) -> Option<ShapeId> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// True iff every slot is empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over occupied slots as `(slot, shape)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, ShapeId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| id.map(|id| (slot, id)))
    }

    /// Copy of the slot contents.
    #[must_use]
    pub fn snapshot(&self) -> TraySnapshot {
        self.slots
    }

    /// Populate every slot with a fresh draw.
    ///
    /// The engine calls this at round setup and whenever the tray is
    /// exhausted, immediately after the placement that emptied the last
    /// slot. `grid` and `score` feed the adaptive policy; the uniform
    /// policy ignores them.
    pub fn refill(
        &mut self,
        catalog: &ShapeCatalog,
        grid: &GridState,
        score: u64,
        rng: &mut GameRng,
    ) {
        let drawn = policy::draw_set(self.policy, catalog, grid, score, &self.recent, rng);
        self.recent = drawn.iter().copied().collect();
        for (slot, id) in self.slots.iter_mut().zip(drawn) {
            *slot = Some(id);
        }
    }
}
