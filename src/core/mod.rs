//! Core engine types: grid coordinates, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine. Nothing in here knows about shapes, trays or
//! scoring.

pub mod cell;
pub mod error;
pub mod rng;

pub use cell::{Cell, CELL_COUNT, GRID_SIZE};
pub use error::PlaceError;
pub use rng::{GameRng, GameRngState};
