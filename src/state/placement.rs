// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental search state.
//!
//! The state is updated in lockstep with the search: `place` when a piece is
//! committed to a face and `unplace` when the search backs out of it. The
//! per-vertex counters are never recomputed from the assignments.

use crate::geometry::constants::{NFACES, NVERTICES};
use crate::geometry::{face_vertices, Corners, FaceId, PieceId, VertexId};

/// A piece as it sits on a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    /// Which catalog piece.
    pub piece: PieceId,

    /// Its corner values in the face's vertex order.
    pub corners: Corners,
}

/// Mutable record of a partial placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Whether each catalog piece is still unused.
    available: [bool; NFACES],

    /// Sum of the corner values placed so far at each vertex.
    vertex_sums: [i32; NVERTICES],

    /// Number of placed faces touching each vertex (0..=5).
    filled_counts: [u8; NVERTICES],

    /// What sits on each face, if anything.
    placements: [Option<PlacedPiece>; NFACES],

    /// Number of assigned faces.
    num_placed: usize,
}

impl SearchState {
    /// An empty board with every piece available.
    pub fn new() -> Self {
        Self {
            available: [true; NFACES],
            vertex_sums: [0; NVERTICES],
            filled_counts: [0; NVERTICES],
            placements: [None; NFACES],
            num_placed: 0,
        }
    }

    /// Return to the empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Put `corners` (an orientation of `piece`) on `face`.
    ///
    /// Must be paired with [`unplace`](Self::unplace) using the same
    /// arguments when the search backtracks.
    pub fn place(&mut self, piece: PieceId, corners: Corners, face: FaceId) {
        debug_assert!(self.placements[face].is_none(), "face {} already filled", face);
        debug_assert!(self.available[piece], "piece {} already used", piece);

        self.placements[face] = Some(PlacedPiece { piece, corners });
        self.available[piece] = false;
        self.num_placed += 1;

        for (&vertex, &value) in face_vertices(face).iter().zip(corners.iter()) {
            self.vertex_sums[vertex] += i32::from(value);
            self.filled_counts[vertex] += 1;
        }
    }

    /// Undo a [`place`](Self::place) with the same arguments.
    pub fn unplace(&mut self, piece: PieceId, corners: Corners, face: FaceId) {
        debug_assert_eq!(
            self.placements[face],
            Some(PlacedPiece { piece, corners }),
            "unplace does not match placement on face {}",
            face
        );

        self.placements[face] = None;
        self.available[piece] = true;
        self.num_placed -= 1;

        for (&vertex, &value) in face_vertices(face).iter().zip(corners.iter()) {
            self.vertex_sums[vertex] -= i32::from(value);
            self.filled_counts[vertex] -= 1;
        }
    }

    #[inline]
    pub fn is_available(&self, piece: PieceId) -> bool {
        self.available[piece]
    }

    #[inline]
    pub fn vertex_sum(&self, vertex: VertexId) -> i32 {
        self.vertex_sums[vertex]
    }

    #[inline]
    pub fn filled_count(&self, vertex: VertexId) -> usize {
        usize::from(self.filled_counts[vertex])
    }

    #[inline]
    pub fn placement(&self, face: FaceId) -> Option<PlacedPiece> {
        self.placements[face]
    }

    #[inline]
    pub fn is_assigned(&self, face: FaceId) -> bool {
        self.placements[face].is_some()
    }

    /// Number of faces filled so far.
    pub fn num_placed(&self) -> usize {
        self.num_placed
    }

    /// True when every face is filled.
    pub fn is_complete(&self) -> bool {
        self.num_placed == NFACES
    }

    /// All face assignments, indexed by face.
    pub fn placements(&self) -> &[Option<PlacedPiece>; NFACES] {
        &self.placements
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_updates_counters() {
        let mut state = SearchState::new();
        state.place(14, [1, 2, 3], 0);

        // Face 0 is bordered by vertices 0, 1, 2.
        assert_eq!(state.vertex_sum(0), 1);
        assert_eq!(state.vertex_sum(1), 2);
        assert_eq!(state.vertex_sum(2), 3);
        assert_eq!(state.filled_count(0), 1);
        assert_eq!(state.filled_count(3), 0);
        assert!(!state.is_available(14));
        assert!(state.is_available(15));
        assert_eq!(
            state.placement(0),
            Some(PlacedPiece {
                piece: 14,
                corners: [1, 2, 3]
            })
        );
        assert_eq!(state.num_placed(), 1);
    }

    #[test]
    fn test_place_unplace_round_trip() {
        let mut state = SearchState::new();
        let empty = state.clone();

        state.place(5, [0, 1, 2], 3);
        let after_first = state.clone();
        state.place(13, [1, 1, 1], 4);
        state.place(8, [2, 1, 0], 12);

        state.unplace(8, [2, 1, 0], 12);
        state.unplace(13, [1, 1, 1], 4);
        assert_eq!(state, after_first);
        state.unplace(5, [0, 1, 2], 3);
        assert_eq!(state, empty);
    }

    #[test]
    fn test_shared_vertex_accumulates() {
        let mut state = SearchState::new();
        // Faces 0..5 all meet at vertex 0.
        for face in 0..5 {
            state.place(face, [3, 0, 0], face);
        }
        assert_eq!(state.vertex_sum(0), 15);
        assert_eq!(state.filled_count(0), 5);
    }

    #[test]
    fn test_reset() {
        let mut state = SearchState::new();
        state.place(0, [0, 0, 0], 19);
        state.reset();
        assert_eq!(state, SearchState::new());
    }
}
