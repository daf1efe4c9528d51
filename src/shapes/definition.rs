//! Shape definitions - static piece data.
//!
//! `ShapeDef` holds the immutable properties of a piece: its cell
//! offsets, its visual tag and its difficulty tier. Definitions are
//! created once at startup and shared by reference; nothing about a
//! placed piece is ever written back into its definition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a shape definition.
///
/// Identifies the "kind" of piece (e.g. the 2x2 square), not a specific
/// placement of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// Create a new shape ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shape({})", self.0)
    }
}

/// Difficulty tier of a shape, used by the adaptive draw policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTier {
    Easy,
    Medium,
    Hard,
}

/// Opaque per-cell visual tag, carried through the grid for the
/// presentation layer. The engine never interprets it.
///
/// Stored as a packed `0xRRGGBB` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockColor(pub u32);

impl BlockColor {
    /// Create a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn new(rgb: u32) -> Self {
        Self(rgb)
    }
}

impl std::fmt::Display for BlockColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// A single cell offset within a shape's footprint.
///
/// The cell covered by placing the shape at `(row, col)` is
/// `(row + dy, col + dx)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub dx: u8,
    pub dy: u8,
}

/// Static shape definition.
///
/// Offsets are normalized at construction so the minimum `dx` and `dy`
/// are both zero; two definitions differing only by a translation are
/// therefore identical.
///
/// ## Example
///
/// ```
/// use bloxcore::shapes::{BlockColor, ShapeDef, ShapeId, ShapeTier};
///
/// let corner = ShapeDef::new(
///     ShapeId::new(0),
///     "corner",
///     ShapeTier::Easy,
///     BlockColor::new(0xFFB347),
///     &[(2, 1), (3, 1), (2, 2)],
/// );
///
/// // Normalized: minimum dx and dy are zero.
/// assert_eq!(corner.width(), 2);
/// assert_eq!(corner.height(), 2);
/// assert_eq!(corner.cell_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDef {
    /// Unique identifier for this shape.
    pub id: ShapeId,

    /// Short name (for display/debugging).
    pub name: String,

    /// Difficulty tier.
    pub tier: ShapeTier,

    /// Visual tag applied to every cell this shape covers.
    pub color: BlockColor,

    /// Normalized cell offsets.
    /// SmallVec keeps the common small footprints off the heap.
    offsets: SmallVec<[Offset; 8]>,
}

impl ShapeDef {
    /// Create a shape definition, normalizing the given offsets.
    ///
    /// Panics if `offsets` is empty or contains duplicates.
    #[must_use]
    pub fn new(
        id: ShapeId,
        name: impl Into<String>,
        tier: ShapeTier,
        color: BlockColor,
        offsets: &[(i32, i32)],
    ) -> Self {
        assert!(!offsets.is_empty(), "shape must cover at least one cell");

        let min_dx = offsets.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        let min_dy = offsets.iter().map(|&(_, dy)| dy).min().unwrap_or(0);

        let mut normalized: SmallVec<[Offset; 8]> = offsets
            .iter()
            .map(|&(dx, dy)| Offset {
                dx: (dx - min_dx) as u8,
                dy: (dy - min_dy) as u8,
            })
            .collect();
        normalized.sort_by_key(|o| (o.dy, o.dx));

        let before = normalized.len();
        normalized.dedup();
        assert_eq!(before, normalized.len(), "shape has duplicate offsets");

        Self {
            id,
            name: name.into(),
            tier,
            color,
            offsets: normalized,
        }
    }

    /// The normalized offsets, sorted row-major.
    #[must_use]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of cells this shape covers.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Width of the bounding box, in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.offsets.iter().map(|o| o.dx as usize).max().unwrap_or(0) + 1
    }

    /// Height of the bounding box, in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.offsets.iter().map(|o| o.dy as usize).max().unwrap_or(0) + 1
    }
}
