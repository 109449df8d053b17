// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertices (pegs) of the icosahedron.

use crate::geometry::constants::FACES_PER_VERTEX;
use crate::geometry::face::{FaceId, FACE_VERTICES};

/// Index of a vertex, `0..NVERTICES`.
pub type VertexId = usize;

/// The faces meeting at a vertex, in increasing face order.
///
/// Derived from [`FACE_VERTICES`]; the search itself never needs it, it is
/// used when reporting and verifying solutions.
///
/// # Panics
///
/// Panics if `vertex` is not a vertex of the icosahedron.
pub fn faces_around(vertex: VertexId) -> [FaceId; FACES_PER_VERTEX] {
    let mut faces = [0; FACES_PER_VERTEX];
    let mut count = 0;
    for (face, vertices) in FACE_VERTICES.iter().enumerate() {
        if vertices.contains(&vertex) {
            faces[count] = face;
            count += 1;
        }
    }
    assert_eq!(count, FACES_PER_VERTEX, "vertex {} is not on the icosahedron", vertex);
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::NVERTICES;

    #[test]
    fn test_every_vertex_has_five_faces() {
        for vertex in 0..NVERTICES {
            let count = FACE_VERTICES
                .iter()
                .filter(|vertices| vertices.contains(&vertex))
                .count();
            assert_eq!(count, FACES_PER_VERTEX, "vertex {}", vertex);
        }
    }

    #[test]
    fn test_faces_around_top_and_bottom() {
        assert_eq!(faces_around(0), [0, 1, 2, 3, 4]);
        assert_eq!(faces_around(11), [15, 16, 17, 18, 19]);
    }

    #[test]
    #[should_panic(expected = "not on the icosahedron")]
    fn test_faces_around_rejects_unknown_vertex() {
        faces_around(NVERTICES);
    }
}
