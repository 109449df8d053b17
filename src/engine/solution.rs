// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Completed placements.

use std::fmt;

use crate::error::SolutionError;
use crate::geometry::constants::{NFACES, NVERTICES};
use crate::geometry::piece::is_rotation_of;
use crate::geometry::{faces_around, FaceId, VertexId, FACE_VERTICES};
use crate::memo::PieceCatalog;
use crate::state::{PlacedPiece, SearchState};

/// A piece on every face, together with the pegs it was found for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pegs: [i32; NVERTICES],
    faces: [PlacedPiece; NFACES],
}

impl Solution {
    /// Snapshot a full board.
    ///
    /// # Errors
    ///
    /// Returns [`SolutionError::OpenFace`] for the first face still open.
    pub fn from_state(
        state: &SearchState,
        pegs: &[i32; NVERTICES],
    ) -> Result<Self, SolutionError> {
        let mut faces = [PlacedPiece {
            piece: 0,
            corners: [0; 3],
        }; NFACES];
        for (face, placement) in state.placements().iter().enumerate() {
            faces[face] = (*placement).ok_or(SolutionError::OpenFace { face })?;
        }
        Ok(Self { pegs: *pegs, faces })
    }

    pub fn pegs(&self) -> &[i32; NVERTICES] {
        &self.pegs
    }

    /// The piece on each face, indexed by face.
    pub fn faces(&self) -> &[PlacedPiece; NFACES] {
        &self.faces
    }

    pub fn placement(&self, face: FaceId) -> PlacedPiece {
        self.faces[face]
    }

    /// The pegs at a face's three vertices, in the face's vertex order.
    pub fn face_pegs(&self, face: FaceId) -> [i32; 3] {
        FACE_VERTICES[face].map(|vertex| self.pegs[vertex])
    }

    /// Sum of the corners meeting at each vertex.
    ///
    /// Computed vertex by vertex from the five faces around it, independently
    /// of the running sums kept during the search.
    pub fn vertex_sums(&self) -> [i32; NVERTICES] {
        let mut sums = [0; NVERTICES];
        for (vertex, sum) in sums.iter_mut().enumerate() {
            for face in faces_around(vertex) {
                if let Some(corner) = FACE_VERTICES[face].iter().position(|&v| v == vertex) {
                    *sum += i32::from(self.faces[face].corners[corner]);
                }
            }
        }
        sums
    }

    /// Check the placement against its pegs and the catalog it came from.
    ///
    /// Every vertex must sum to its peg, no piece may appear twice and each
    /// face must hold a rotation (not a mirror image) of its piece.
    pub fn verify(&self, catalog: &PieceCatalog) -> Result<(), SolutionError> {
        let mut used: [Option<FaceId>; NFACES] = [None; NFACES];
        for (face, placed) in self.faces.iter().enumerate() {
            if let Some(first) = used[placed.piece] {
                return Err(SolutionError::PieceReused {
                    piece: placed.piece,
                    first,
                    second: face,
                });
            }
            used[placed.piece] = Some(face);

            let listed = catalog.get(placed.piece).first_rotation();
            if !is_rotation_of(listed, placed.corners) {
                return Err(SolutionError::NotARotation {
                    face,
                    piece: placed.piece,
                    corners: placed.corners,
                });
            }
        }

        let sums = self.vertex_sums();
        for vertex in 0..NVERTICES {
            check_vertex(vertex, self.pegs[vertex], sums[vertex])?;
        }
        Ok(())
    }
}

fn check_vertex(vertex: VertexId, expected: i32, actual: i32) -> Result<(), SolutionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SolutionError::VertexSumMismatch {
            vertex,
            expected,
            actual,
        })
    }
}

/// One line per face: `Piece (a, b, c) on Face <p1, p2, p3>`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in 0..NFACES {
            let [a, b, c] = self.faces[face].corners;
            let [p1, p2, p3] = self.face_pegs(face);
            writeln!(f, "Piece ({}, {}, {}) on Face <{}, {}, {}>", a, b, c, p1, p2, p3)?;
        }
        Ok(())
    }
}
