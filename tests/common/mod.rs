// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use icosoku_search::geometry::constants::NVERTICES;
use icosoku_search::Solution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Pegs 1..=12 in vertex order.
pub const ASCENDING: [i32; NVERTICES] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Reproducible random permutations of 1..=12.
pub fn permutations(seed: u64, count: usize) -> Vec<[i32; NVERTICES]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut pegs = ASCENDING;
            pegs.shuffle(&mut rng);
            pegs
        })
        .collect()
}

/// Check a solution from first principles, without `Solution::verify`.
pub fn assert_sound(solution: &Solution, pegs: &[i32; NVERTICES]) {
    assert_eq!(&solution.vertex_sums(), pegs);
    let pieces: HashSet<_> = solution.faces().iter().map(|placed| placed.piece).collect();
    assert_eq!(pieces.len(), solution.faces().len(), "a piece was used twice");
}
