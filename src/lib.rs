// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for the IcoSoKu puzzle.
//!
//! Twelve pegs with target values sit on the vertices of an icosahedron.
//! Twenty triangular pieces, each with a value from 0 to 3 on every corner,
//! must be placed on the twenty faces (turned but never flipped) so that the
//! five corners meeting at each vertex add up to that vertex's peg.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Fixed data that never changes during search:
//! - Face topology: the three vertices bordering each face
//! - Piece catalog: each piece with its precomputed rotations
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by one solve, updated and undone in lockstep:
//! - Piece availability
//! - Running corner sum and filled-face count at each vertex
//! - The piece currently on each face
//!
//! # Search Algorithm
//!
//! Depth-first search, one face per level:
//!
//! 1. **Face selection**: fill the most constrained open face next
//! 2. **Candidates**: walk the catalog in order, skipping a piece identical
//!    to the one tried just before it
//! 3. **Pruning**: reject any rotation that overshoots a peg or leaves a
//!    deficit the remaining open faces cannot make up
//!
//! # Example
//!
//! ```
//! let pegs = [4, 9, 1, 12, 7, 3, 10, 5, 2, 11, 6, 8];
//! let outcome = icosoku_search::solve(&pegs).unwrap();
//! let solution = outcome.solution().unwrap();
//! assert_eq!(solution.vertex_sums(), pegs);
//! ```

pub mod constraints;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod state;

// Re-export commonly used types
pub use context::{SearchConfig, SearchContext};
pub use engine::{solve, SearchOutcome, Solution, Solver};
pub use error::{CatalogError, SolutionError, SolveError};
pub use memo::PieceCatalog;
