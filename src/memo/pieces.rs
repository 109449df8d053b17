// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The piece catalog.
//!
//! The catalog is the fixed multiset of pieces available to the search,
//! each with its orientations precomputed. Identical corner triples are
//! separate entries: each physical piece can be used exactly once.

use lazy_static::lazy_static;

use crate::error::CatalogError;
use crate::geometry::constants::{MAX_CORNER_VALUE, NFACES};
use crate::geometry::piece::{rotations, Corners, PieceId};

/// The twenty pieces of the physical IcoSoKu set, in catalog order.
///
/// Equal triples are adjacent, which is what lets the search skip a piece
/// that matches the one it tried just before.
pub const STANDARD_PIECES: [Corners; NFACES] = [
    [0, 0, 0],
    [0, 0, 1],
    [0, 0, 2],
    [0, 0, 3],
    [0, 1, 1],
    [0, 1, 2],
    [0, 1, 2],
    [0, 1, 2],
    [0, 2, 1],
    [0, 2, 1],
    [0, 2, 1],
    [0, 2, 2],
    [0, 3, 3],
    [1, 1, 1],
    [1, 2, 3],
    [1, 2, 3],
    [2, 1, 3],
    [2, 1, 3],
    [2, 2, 2],
    [3, 3, 3],
];

lazy_static! {
    static ref STANDARD_CATALOG: PieceCatalog = PieceCatalog::build(&STANDARD_PIECES);
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Position in the catalog.
    pub id: PieceId,

    /// Distinct orientations; the first is the piece as listed.
    pub rotations: Vec<Corners>,
}

impl Piece {
    /// The piece in its listed orientation.
    ///
    /// Two pieces are interchangeable exactly when these are equal.
    #[inline]
    pub fn first_rotation(&self) -> Corners {
        self.rotations[0]
    }
}

/// Immutable list of pieces with their rotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    /// Build a catalog from one corner triple per face.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] unless there is exactly one piece per face
    /// and every corner value is at most [`MAX_CORNER_VALUE`].
    ///
    /// ```
    /// use icosoku_search::memo::{PieceCatalog, STANDARD_PIECES};
    ///
    /// let mut triples = STANDARD_PIECES;
    /// triples.reverse();
    /// let catalog = PieceCatalog::new(&triples).unwrap();
    /// assert_eq!(catalog.get(0).first_rotation(), [3, 3, 3]);
    ///
    /// assert!(PieceCatalog::new(&triples[1..]).is_err());
    /// ```
    pub fn new(triples: &[Corners]) -> Result<Self, CatalogError> {
        if triples.len() != NFACES {
            return Err(CatalogError::WrongPieceCount {
                expected: NFACES,
                actual: triples.len(),
            });
        }
        for (piece, corners) in triples.iter().enumerate() {
            if let Some(&value) = corners.iter().find(|&&v| v > MAX_CORNER_VALUE) {
                return Err(CatalogError::CornerOutOfRange {
                    piece,
                    value,
                    max: MAX_CORNER_VALUE,
                });
            }
        }
        Ok(Self::build(triples))
    }

    /// The catalog of the physical puzzle, shared process-wide.
    pub fn standard() -> &'static PieceCatalog {
        &STANDARD_CATALOG
    }

    fn build(triples: &[Corners]) -> Self {
        let pieces = triples
            .iter()
            .enumerate()
            .map(|(id, &corners)| Piece {
                id,
                rotations: rotations(corners),
            })
            .collect();
        Self { pieces }
    }

    /// Get a piece by ID.
    #[inline]
    pub fn get(&self, piece: PieceId) -> &Piece {
        &self.pieces[piece]
    }

    /// Iterate pieces in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Total number of (piece, orientation) pairs.
    pub fn orientation_count(&self) -> usize {
        self.pieces.iter().map(|piece| piece.rotations.len()).sum()
    }

    /// Sum of every corner value of every piece.
    ///
    /// Any solvable set of pegs sums to this.
    pub fn corner_total(&self) -> i32 {
        self.pieces
            .iter()
            .flat_map(|piece| piece.first_rotation())
            .map(i32::from)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = PieceCatalog::standard();
        assert_eq!(catalog.len(), NFACES);
        // Four uniform pieces, sixteen with three orientations.
        assert_eq!(catalog.orientation_count(), 4 + 16 * 3);
        for (index, piece) in catalog.iter().enumerate() {
            assert_eq!(piece.id, index);
            assert_eq!(piece.first_rotation(), STANDARD_PIECES[index]);
        }
    }

    #[test]
    fn test_standard_corner_total_matches_pegs() {
        // Pegs 1..=12 sum to 78.
        assert_eq!(PieceCatalog::standard().corner_total(), (1..=12).sum::<i32>());
    }

    #[test]
    fn test_duplicates_are_separate_entries() {
        let catalog = PieceCatalog::standard();
        let copies = catalog
            .iter()
            .filter(|piece| piece.first_rotation() == [0, 1, 2])
            .count();
        assert_eq!(copies, 3);
    }

    #[test]
    fn test_rejects_wrong_count() {
        let err = PieceCatalog::new(&STANDARD_PIECES[..19]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::WrongPieceCount {
                expected: 20,
                actual: 19
            }
        );
    }

    #[test]
    fn test_rejects_large_corner() {
        let mut triples = STANDARD_PIECES;
        triples[7] = [0, 4, 1];
        let err = PieceCatalog::new(&triples).unwrap_err();
        assert_eq!(
            err,
            CatalogError::CornerOutOfRange {
                piece: 7,
                value: 4,
                max: 3
            }
        );
    }
}
