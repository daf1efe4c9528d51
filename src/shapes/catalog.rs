//! Shape catalog for definition lookup.
//!
//! The `ShapeCatalog` stores all shape definitions for a game. It
//! provides fast lookup by `ShapeId` and deterministic iteration in
//! registration order, which the draw policies rely on.

use rustc_hash::FxHashMap;

use super::definition::{BlockColor, ShapeDef, ShapeId, ShapeTier};

/// Registry of shape definitions.
///
/// Immutable once the game starts; the engine and the tray only ever
/// read from it.
///
/// ## Example
///
/// ```
/// use bloxcore::shapes::{BlockColor, ShapeCatalog, ShapeTier};
///
/// let mut catalog = ShapeCatalog::new();
/// let id = catalog.register_auto(
///     "dot",
///     ShapeTier::Easy,
///     BlockColor::new(0xFF7F7F),
///     &[(0, 0)],
/// );
///
/// assert_eq!(catalog.get(id).unwrap().name, "dot");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    shapes: FxHashMap<ShapeId, ShapeDef>,
    /// Registration order; draws index into this for determinism.
    order: Vec<ShapeId>,
    next_id: u32,
}

impl ShapeCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard twelve-piece catalog.
    ///
    /// Footprints, tiers and palette of the classic game: bars of length
    /// 1-4 (horizontal and vertical), the 2x2 square, the tee, the plus,
    /// the corner, the ell and the skew.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register_auto("dot", ShapeTier::Easy, BlockColor::new(0xFF7F7F), &[(0, 0)]);
        catalog.register_auto(
            "bar2",
            ShapeTier::Easy,
            BlockColor::new(0xFFD700),
            &[(0, 0), (1, 0)],
        );
        catalog.register_auto(
            "bar3",
            ShapeTier::Medium,
            BlockColor::new(0xFFD700),
            &[(0, 0), (1, 0), (2, 0)],
        );
        catalog.register_auto(
            "bar4",
            ShapeTier::Hard,
            BlockColor::new(0x66CDAA),
            &[(0, 0), (1, 0), (2, 0), (3, 0)],
        );
        catalog.register_auto(
            "square",
            ShapeTier::Easy,
            BlockColor::new(0x87CEFA),
            &[(0, 0), (1, 0), (0, 1), (1, 1)],
        );
        catalog.register_auto(
            "tee",
            ShapeTier::Medium,
            BlockColor::new(0xBA55D3),
            &[(0, 1), (1, 0), (1, 1), (2, 1)],
        );
        catalog.register_auto(
            "plus",
            ShapeTier::Hard,
            BlockColor::new(0xFFA07A),
            &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
        );
        catalog.register_auto(
            "pole2",
            ShapeTier::Easy,
            BlockColor::new(0x4DD6E8),
            &[(0, 0), (0, 1)],
        );
        catalog.register_auto(
            "pole3",
            ShapeTier::Medium,
            BlockColor::new(0xB388FF),
            &[(0, 0), (0, 1), (0, 2)],
        );
        catalog.register_auto(
            "corner",
            ShapeTier::Easy,
            BlockColor::new(0xFFB347),
            &[(0, 0), (1, 0), (0, 1)],
        );
        catalog.register_auto(
            "ell",
            ShapeTier::Medium,
            BlockColor::new(0x4FC3A1),
            &[(0, 0), (0, 1), (0, 2), (1, 2)],
        );
        catalog.register_auto(
            "skew",
            ShapeTier::Hard,
            BlockColor::new(0xFF6F61),
            &[(1, 0), (2, 0), (0, 1), (1, 1)],
        );

        catalog
    }

    /// Register a shape definition.
    ///
    /// Panics if a shape with the same ID already exists.
    pub fn register(&mut self, shape: ShapeDef) {
        if self.shapes.contains_key(&shape.id) {
            panic!("Shape with ID {:?} already registered", shape.id);
        }
        self.next_id = self.next_id.max(shape.id.raw() + 1);
        self.order.push(shape.id);
        self.shapes.insert(shape.id, shape);
    }

    /// Register a shape with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        tier: ShapeTier,
        color: BlockColor,
        offsets: &[(i32, i32)],
    ) -> ShapeId {
        let id = ShapeId::new(self.next_id);
        let shape = ShapeDef::new(id, name, tier, color, offsets);
        self.register(shape);
        id
    }

    /// Get a shape definition by ID.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&ShapeDef> {
        self.shapes.get(&id)
    }

    /// Get a shape definition by ID, panicking if not found.
    ///
    /// Use when you're certain the shape exists, e.g. for IDs drawn from
    /// this catalog.
    #[must_use]
    pub fn get_unchecked(&self, id: ShapeId) -> &ShapeDef {
        self.shapes.get(&id).expect("Shape not found in catalog")
    }

    /// Check if a shape ID is registered.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Get the number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shape IDs in registration order.
    #[must_use]
    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Iterate over all shape definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeDef> {
        self.order.iter().map(|id| &self.shapes[id])
    }

    /// Find shapes by tier, in registration order.
    pub fn find_by_tier(&self, tier: ShapeTier) -> impl Iterator<Item = &ShapeDef> {
        self.iter().filter(move |s| s.tier == tier)
    }

    /// The shape covering the fewest cells (first registered on ties).
    ///
    /// Used as the last-resort fallback by the adaptive draw policy.
    #[must_use]
    pub fn smallest(&self) -> Option<&ShapeDef> {
        self.iter().min_by_key(|s| s.cell_count())
    }
}
