// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the icosahedron and its pieces.
//!
//! The puzzle is fixed to a regular icosahedron: 12 vertices, 20 triangular
//! faces, 30 edges, five faces meeting at every vertex.

/// Number of vertices (pegs) on the icosahedron.
pub const NVERTICES: usize = 12;

/// Number of triangular faces, which is also the number of pieces.
pub const NFACES: usize = 20;

/// Number of edges. Only used to check Euler's formula in tests.
pub const NEDGES: usize = 30;

/// Number of faces sharing each vertex.
pub const FACES_PER_VERTEX: usize = 5;

/// Number of corners on a face (and on a piece).
pub const CORNERS_PER_FACE: usize = 3;

/// Largest value found on any corner of any piece.
pub const MAX_CORNER_VALUE: u8 = 3;

/// Default divisor for the deficit term of the face-selection score.
///
/// Matches the largest peg of the canonical puzzle.
pub const DEFAULT_DEFICIT_WEIGHT: f64 = NVERTICES as f64;

/// Default divisor for the open-slot term of the face-selection score.
pub const DEFAULT_SLOTS_WEIGHT: f64 = FACES_PER_VERTEX as f64;
