// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry of the IcoSoKu board.
//!
//! This module contains the fixed combinatorics of the icosahedron and the
//! corner arithmetic of pieces:
//! - Vertex: the 12 pegs, each touched by five faces
//! - Face: the 20 triangular slots and their bordering vertices
//! - Piece: corner triples and their rotations

pub mod constants;
pub mod face;
pub mod piece;
pub mod vertex;

// Re-export for convenience
pub use constants::*;
pub use face::{face_vertices, FaceId, FACE_VERTICES};
pub use piece::{rotations, Corners, PieceId};
pub use vertex::{faces_around, VertexId};
