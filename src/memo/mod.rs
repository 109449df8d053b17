// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, computed once).
//!
//! - Piece catalog with the precomputed rotations of every piece
//!
//! The face topology is a plain constant in [`crate::geometry::face`].

pub mod pieces;

pub use pieces::{Piece, PieceCatalog, STANDARD_PIECES};
