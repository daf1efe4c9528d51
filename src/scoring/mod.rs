//! Combo-scaled scoring.
//!
//! Every successful placement earns a flat bonus; placements that clear
//! lines additionally earn a tiered payout multiplied by the running
//! combo. The combo counter is a monotonic streak: it grows by one on
//! every clearing placement and drops straight to zero on any placement
//! that clears nothing.

use serde::{Deserialize, Serialize};

/// Flat award for any successful placement, independent of line clears.
pub const PLACEMENT_BONUS: u64 = 5;

/// Payout tier label, derived solely from the number of lines cleared
/// at once. Consumed by the presentation layer (e.g. to pick a jingle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearTier {
    Single,
    Double,
    Triple,
    Quad,
    Max,
}

impl ClearTier {
    /// The tier for a simultaneous clear of `total_lines` lines.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn from_lines(total_lines: u32) -> Option<Self> {
        match total_lines {
            0 => None,
            1 => Some(ClearTier::Single),
            2 => Some(ClearTier::Double),
            3 => Some(ClearTier::Triple),
            4 => Some(ClearTier::Quad),
            _ => Some(ClearTier::Max),
        }
    }

    /// Base payout before the combo multiplier.
    #[must_use]
    pub const fn base_payout(self) -> u64 {
        match self {
            ClearTier::Single => 50,
            ClearTier::Double => 150,
            ClearTier::Triple => 350,
            ClearTier::Quad => 750,
            ClearTier::Max => 1200,
        }
    }

    /// Lowercase label for the presentation layer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ClearTier::Single => "single",
            ClearTier::Double => "double",
            ClearTier::Triple => "triple",
            ClearTier::Quad => "quad",
            ClearTier::Max => "max",
        }
    }
}

impl std::fmt::Display for ClearTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The scored result of one clearing placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearScore {
    /// Lines cleared by this placement (rows + columns, crossings
    /// double-counted).
    pub total_lines: u32,
    /// Combo value after this clear (>= 1).
    pub combo: u32,
    /// Points awarded: `base_payout(total_lines) * combo`. Excludes the
    /// flat placement bonus.
    pub awarded: u64,
    /// Payout tier label.
    pub tier: ClearTier,
}

/// The combo state machine.
///
/// Owned by the engine for the lifetime of one round.
#[derive(Clone, Debug, Default)]
pub struct ComboScorer {
    combo: u32,
}

impl ComboScorer {
    /// Create a scorer with the combo at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current combo streak.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Account for the lines cleared by one placement.
    ///
    /// `total_lines > 0` advances the combo and returns the scored
    /// payout; `total_lines == 0` resets the combo and returns `None`.
    pub fn score_clear(&mut self, total_lines: u32) -> Option<ClearScore> {
        let Some(tier) = ClearTier::from_lines(total_lines) else {
            self.combo = 0;
            return None;
        };

        self.combo += 1;
        Some(ClearScore {
            total_lines,
            combo: self.combo,
            awarded: tier.base_payout() * u64::from(self.combo),
            tier,
        })
    }

    /// Reset the combo to zero (round start).
    pub fn reset(&mut self) {
        self.combo = 0;
    }
}
