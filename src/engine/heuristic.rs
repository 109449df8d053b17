// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face selection.
//!
//! The next face to fill is the most constrained one: the face whose
//! vertices are closest to their pegs and have the fewest open slots left.
//! Filling it first makes dead ends show up near the top of the tree.

use crate::context::SearchConfig;
use crate::geometry::constants::{FACES_PER_VERTEX, NFACES, NVERTICES};
use crate::geometry::{face_vertices, FaceId};
use crate::state::SearchState;

/// Score an open face; lower is more constrained.
///
/// ```text
/// score = sum(peg - vertex_sum) / deficit_weight
///       + sum(FACES_PER_VERTEX - filled) / slots_weight
/// ```
///
/// summed over the face's three vertices. The deficit is summed in `i64`
/// so any `i32` pegs are scored exactly.
pub fn face_score(
    face: FaceId,
    state: &SearchState,
    pegs: &[i32; NVERTICES],
    config: &SearchConfig,
) -> f64 {
    let mut deficit: i64 = 0;
    let mut open_slots = 0;
    for &vertex in face_vertices(face) {
        deficit += i64::from(pegs[vertex]) - i64::from(state.vertex_sum(vertex));
        open_slots += FACES_PER_VERTEX - state.filled_count(vertex);
    }
    deficit as f64 / config.deficit_weight + open_slots as f64 / config.slots_weight
}

/// Pick the open face with the strictly lowest score.
///
/// Ties go to the lowest face index. Returns `None` only when every face is
/// already filled.
pub fn select_face(
    state: &SearchState,
    pegs: &[i32; NVERTICES],
    config: &SearchConfig,
) -> Option<FaceId> {
    let mut best: Option<(FaceId, f64)> = None;
    for face in (0..NFACES).filter(|&face| !state.is_assigned(face)) {
        let score = face_score(face, state, pegs, config);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((face, score)),
        }
    }
    best.map(|(face, _)| face)
}
