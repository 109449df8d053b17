// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face topology of the icosahedron.
//!
//! Each face is a triangular slot bordered by three vertices (pegs). The
//! vertex order of each entry fixes the orientation a piece is read in when
//! it is placed: corner `i` of a rotated piece lands on vertex `i` of the
//! face.

use crate::geometry::constants::{CORNERS_PER_FACE, NFACES};
use crate::geometry::VertexId;

/// Index of a face, `0..NFACES`.
pub type FaceId = usize;

/// The three vertices bordering each face, in placement order.
///
/// Vertex 0 is the top of the icosahedron, vertices 1-5 its upper ring,
/// 6-10 the lower ring and 11 the bottom.
pub const FACE_VERTICES: [[VertexId; CORNERS_PER_FACE]; NFACES] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    [1, 5, 6],
    [1, 6, 7],
    [1, 7, 2],
    [2, 7, 8],
    [2, 8, 3],
    [3, 8, 9],
    [3, 9, 4],
    [4, 10, 5],
    [4, 9, 10],
    [5, 10, 6],
    [6, 10, 11],
    [6, 11, 7],
    [7, 11, 8],
    [8, 11, 9],
    [11, 10, 9],
];

/// Get the vertices bordering a face.
#[inline]
pub fn face_vertices(face: FaceId) -> &'static [VertexId; CORNERS_PER_FACE] {
    &FACE_VERTICES[face]
}
