// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feasibility check for a single placement.
//!
//! After a piece is placed every vertex it touches must satisfy
//!
//! ```text
//! 0 <= peg - sum <= (FACES_PER_VERTEX - filled) * MAX_CORNER_VALUE
//! ```
//!
//! The lower bound rules out overshooting a peg. The upper bound rules out
//! a deficit the remaining open faces at that vertex could never make up.
//! The check is local to the three vertices of the face and has no side
//! effects. Pegs may be any `i32`, so the arithmetic is done in `i64`.

pub mod errors;

pub use errors::PlacementFailure;

use crate::geometry::constants::{FACES_PER_VERTEX, MAX_CORNER_VALUE, NVERTICES};
use crate::geometry::{face_vertices, Corners, FaceId};
use crate::state::SearchState;

/// Check placing `corners` on `face`, reporting the first failing vertex.
///
/// Vertices are checked in the face's vertex order.
pub fn check_placement(
    corners: Corners,
    face: FaceId,
    state: &SearchState,
    pegs: &[i32; NVERTICES],
) -> Result<(), PlacementFailure> {
    for (&vertex, &value) in face_vertices(face).iter().zip(corners.iter()) {
        let remaining_slots = (FACES_PER_VERTEX - state.filled_count(vertex)) as i64 - 1;
        let deficit = i64::from(pegs[vertex])
            - (i64::from(state.vertex_sum(vertex)) + i64::from(value));
        if deficit < 0 {
            return Err(PlacementFailure::Overshoot { vertex, deficit });
        }
        let capacity = remaining_slots * i64::from(MAX_CORNER_VALUE);
        if deficit > capacity {
            return Err(PlacementFailure::Unreachable {
                vertex,
                deficit,
                capacity,
            });
        }
    }
    Ok(())
}

/// Whether placing `corners` on `face` keeps every touched vertex completable.
#[inline]
pub fn is_valid(
    corners: Corners,
    face: FaceId,
    state: &SearchState,
    pegs: &[i32; NVERTICES],
) -> bool {
    check_placement(corners, face, state, pegs).is_ok()
}
