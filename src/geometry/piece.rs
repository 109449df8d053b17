// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corner triples and their rotations.
//!
//! A piece can be turned on its face but never flipped over, so the only
//! orientations are the cyclic rotations of its corner values.

use crate::geometry::constants::CORNERS_PER_FACE;

/// Corner values of a piece, read in the vertex order of the face it sits on.
pub type Corners = [u8; CORNERS_PER_FACE];

/// Index of a piece in a catalog.
pub type PieceId = usize;

/// Rotate a triple one step: `(a, b, c)` becomes `(b, c, a)`.
#[inline]
pub fn rotate(corners: Corners) -> Corners {
    [corners[1], corners[2], corners[0]]
}

/// All distinct orientations of a piece.
///
/// A piece with three equal corners looks the same however it is turned and
/// has a single orientation. Any other piece has three: `(a, b, c)`,
/// `(b, c, a)` and `(c, a, b)`, always starting with the piece as given.
///
/// ```
/// use icosoku_search::geometry::piece::rotations;
///
/// assert_eq!(rotations([2, 2, 2]), vec![[2, 2, 2]]);
/// assert_eq!(rotations([0, 1, 2]), vec![[0, 1, 2], [1, 2, 0], [2, 0, 1]]);
/// ```
pub fn rotations(corners: Corners) -> Vec<Corners> {
    if corners[0] == corners[1] && corners[1] == corners[2] {
        return vec![corners];
    }
    let once = rotate(corners);
    vec![corners, once, rotate(once)]
}

/// Check whether `other` is a cyclic rotation of `corners`.
pub fn is_rotation_of(corners: Corners, other: Corners) -> bool {
    rotations(corners).contains(&other)
}
