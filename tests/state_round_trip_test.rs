// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Place/unplace symmetry of the search state.
//!
//! Random sequences of placements are undone in reverse order; after each
//! undo the state must equal the snapshot taken before the matching place.

mod common;

use icosoku_search::constraints::is_valid;
use icosoku_search::geometry::constants::{NFACES, NVERTICES};
use icosoku_search::geometry::FACE_VERTICES;
use icosoku_search::state::SearchState;
use icosoku_search::PieceCatalog;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn test_reverse_unplace_restores_every_snapshot() {
    let catalog = PieceCatalog::standard();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let mut faces: Vec<usize> = (0..NFACES).collect();
        let mut pieces: Vec<usize> = (0..NFACES).collect();
        faces.shuffle(&mut rng);
        pieces.shuffle(&mut rng);
        let depth = rng.gen_range(1..=NFACES);

        let mut state = SearchState::new();
        let mut history = Vec::new();
        for (&face, &piece) in faces.iter().zip(pieces.iter()).take(depth) {
            let rotations = &catalog.get(piece).rotations;
            let corners = rotations[rng.gen_range(0..rotations.len())];
            history.push((state.clone(), piece, corners, face));
            state.place(piece, corners, face);
        }

        while let Some((before, piece, corners, face)) = history.pop() {
            state.unplace(piece, corners, face);
            assert_eq!(state, before);
        }
        assert_eq!(state, SearchState::new());
    }
}

#[test]
fn test_full_board_counters() {
    let catalog = PieceCatalog::standard();
    let mut state = SearchState::new();
    for face in 0..NFACES {
        state.place(face, catalog.get(face).first_rotation(), face);
    }
    assert!(state.is_complete());
    for vertex in 0..NVERTICES {
        assert_eq!(state.filled_count(vertex), 5);
    }
    let total: i32 = (0..NVERTICES).map(|vertex| state.vertex_sum(vertex)).sum();
    assert_eq!(total, catalog.corner_total());
    assert!((0..NFACES).all(|piece| !state.is_available(piece)));
}

#[test]
fn test_checker_accepts_only_completable_vertices() {
    // Build random partial boards using only accepted placements; the
    // state invariant must hold at every vertex after each one.
    let catalog = PieceCatalog::standard();
    let mut rng = StdRng::seed_from_u64(7);

    for pegs in common::permutations(11, 20) {
        let mut state = SearchState::new();
        let mut faces: Vec<usize> = (0..NFACES).collect();
        faces.shuffle(&mut rng);
        for face in faces {
            let candidate = (0..NFACES)
                .filter(|&piece| state.is_available(piece))
                .flat_map(|piece| {
                    catalog
                        .get(piece)
                        .rotations
                        .iter()
                        .map(move |&corners| (piece, corners))
                })
                .find(|&(_, corners)| is_valid(corners, face, &state, &pegs));
            let Some((piece, corners)) = candidate else {
                break;
            };
            state.place(piece, corners, face);

            for &vertex in FACE_VERTICES[face].iter() {
                let deficit = pegs[vertex] - state.vertex_sum(vertex);
                let open = 5 - state.filled_count(vertex) as i32;
                assert!(deficit >= 0);
                assert!(deficit <= open * 3);
            }
        }
    }
}
