// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for solver input and solution checking.
//!
//! None of these are raised during the search itself: running out of
//! alternatives is reported as an ordinary outcome, not an error.

use thiserror::Error;

use crate::geometry::{FaceId, PieceId, VertexId};

/// Rejected input to [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("expected {expected} peg values, got {actual}")]
    WrongPegCount { expected: usize, actual: usize },

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("search ended on an unfinished board: {0}")]
    UnfinishedBoard(#[from] SolutionError),
}

/// Rejected piece catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("expected {expected} pieces, got {actual}")]
    WrongPieceCount { expected: usize, actual: usize },

    #[error("piece {piece} has corner value {value} (max {max})")]
    CornerOutOfRange { piece: PieceId, value: u8, max: u8 },
}

/// A placement that does not solve its pegs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    #[error("face {face} has no piece")]
    OpenFace { face: FaceId },

    #[error("vertex {vertex} sums to {actual} but its peg is {expected}")]
    VertexSumMismatch {
        vertex: VertexId,
        expected: i32,
        actual: i32,
    },

    #[error("piece {piece} is used on faces {first} and {second}")]
    PieceReused {
        piece: PieceId,
        first: FaceId,
        second: FaceId,
    },

    #[error("face {face} holds {corners:?}, which is not a rotation of piece {piece}")]
    NotARotation {
        face: FaceId,
        piece: PieceId,
        corners: [u8; 3],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SolveError::WrongPegCount {
            expected: 12,
            actual: 11,
        };
        assert_eq!(err.to_string(), "expected 12 peg values, got 11");

        let err = CatalogError::CornerOutOfRange {
            piece: 4,
            value: 7,
            max: 3,
        };
        assert_eq!(err.to_string(), "piece 4 has corner value 7 (max 3)");

        let err = SolveError::from(SolutionError::OpenFace { face: 5 });
        assert_eq!(
            err.to_string(),
            "search ended on an unfinished board: face 5 has no piece"
        );
    }
}
