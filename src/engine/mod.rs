// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! The engine fills one face per level of recursion:
//! 1. Pick the most constrained open face (see [`heuristic`])
//! 2. Walk the catalog in order, skipping used pieces and any piece equal to
//!    the one tried just before it
//! 3. Try each rotation that passes [`check_placement`]
//! 4. Commit it, recurse, and take it back off if the subtree fails
//!
//! Placements are committed through [`SearchContext::commit`], so a failed
//! subtree (or an aborted search) always leaves the state as it found it.
//!
//! # Example
//!
//! ```
//! use icosoku_search::engine::Solver;
//!
//! let mut solver = Solver::new();
//! let outcome = solver.solve(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]).unwrap();
//! let solution = outcome.solution().unwrap();
//! assert_eq!(solution.vertex_sums(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
//! ```

pub mod heuristic;
pub mod solution;

pub use heuristic::{face_score, select_face};
pub use solution::Solution;

use crate::constraints::check_placement;
use crate::context::{SearchConfig, SearchContext};
use crate::error::SolveError;
use crate::geometry::constants::{NFACES, NVERTICES};
use crate::geometry::Corners;
use crate::memo::PieceCatalog;
use crate::state::{Counters, SearchState, Statistics};

/// Result of one [`Solver::solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every face is filled and every peg is met.
    Solved { solution: Solution, steps: u64 },

    /// The whole tree was searched without finding a placement.
    Exhausted { steps: u64 },

    /// The configured step limit ran out first.
    StepLimitReached { steps: u64 },
}

impl SearchOutcome {
    /// Recursive search steps taken.
    pub fn steps(&self) -> u64 {
        match *self {
            SearchOutcome::Solved { steps, .. }
            | SearchOutcome::Exhausted { steps }
            | SearchOutcome::StepLimitReached { steps } => steps,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved { solution, .. } => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Solved { solution, .. } => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }
}

/// Raised inside the recursion to unwind an over-budget search.
#[derive(Debug, Clone, Copy)]
struct StepLimitReached;

/// Solves peg arrangements over a fixed catalog.
///
/// A solver can be reused; every call to [`solve`](Self::solve) starts from
/// an empty board.
#[derive(Debug, Clone)]
pub struct Solver {
    ctx: SearchContext,
}

impl Solver {
    /// A solver for the standard catalog with default settings.
    pub fn new() -> Self {
        Self {
            ctx: SearchContext::new(),
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_catalog(PieceCatalog::standard().clone(), config)
    }

    pub fn with_catalog(catalog: PieceCatalog, config: SearchConfig) -> Self {
        Self {
            ctx: SearchContext::with_catalog(catalog, config),
        }
    }

    /// Search for a placement meeting `pegs`, one value per vertex.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if there are not exactly 12 pegs or the
    /// configured weights are unusable. [`SolveError::UnfinishedBoard`] means
    /// the search claimed success with a face still open, which is a bug. Failing to find a placement is not
    /// an error; it is reported as [`SearchOutcome::Exhausted`].
    pub fn solve(&mut self, pegs: &[i32]) -> Result<SearchOutcome, SolveError> {
        let pegs: [i32; NVERTICES] = pegs.try_into().map_err(|_| SolveError::WrongPegCount {
            expected: NVERTICES,
            actual: pegs.len(),
        })?;
        self.ctx.config.validate()?;
        self.ctx.reset(pegs);

        let result = search(&mut self.ctx, 1);
        let steps = self.ctx.statistics.get(Counters::Steps);
        let outcome = match result {
            Ok(true) => {
                debug_assert!(self.ctx.state.is_complete());
                let solution = Solution::from_state(&self.ctx.state, &self.ctx.pegs)?;
                SearchOutcome::Solved { solution, steps }
            }
            Ok(false) => SearchOutcome::Exhausted { steps },
            Err(StepLimitReached) => SearchOutcome::StepLimitReached { steps },
        };

        if self.ctx.config.verbose {
            let verdict = match outcome {
                SearchOutcome::Solved { .. } => "solved",
                SearchOutcome::Exhausted { .. } => "no solution",
                SearchOutcome::StepLimitReached { .. } => "step limit reached",
            };
            eprintln!("[Solver] {:?}: {} ({})", pegs, verdict, self.ctx.statistics);
        }
        Ok(outcome)
    }

    /// Counters from the most recent solve.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Board left by the most recent solve: full after a success, empty
    /// otherwise.
    pub fn state(&self) -> &SearchState {
        &self.ctx.state
    }

    pub fn config(&self) -> &SearchConfig {
        &self.ctx.config
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.ctx.catalog
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve `pegs` with the standard catalog and default settings.
///
/// ```
/// let outcome = icosoku_search::solve(&[0; 12]).unwrap();
/// assert!(!outcome.is_solved());
///
/// assert!(icosoku_search::solve(&[1, 2, 3]).is_err());
/// ```
pub fn solve(pegs: &[i32]) -> Result<SearchOutcome, SolveError> {
    Solver::new().solve(pegs)
}

/// Place the `placing`-th piece (1-based) and everything after it.
///
/// Returns `Ok(true)` with the board full, or `Ok(false)` with the board
/// exactly as it was on entry.
fn search(ctx: &mut SearchContext, placing: usize) -> Result<bool, StepLimitReached> {
    if let Some(limit) = ctx.config.step_limit {
        if ctx.statistics.get(Counters::Steps) >= limit {
            return Err(StepLimitReached);
        }
    }
    ctx.statistics.increment_counter(Counters::Steps);

    let Some(face) = select_face(&ctx.state, &ctx.pegs, &ctx.config) else {
        return Ok(false);
    };

    // First rotation of the last piece attempted at this face.
    let mut previous: Option<Corners> = None;

    for piece in 0..ctx.catalog.len() {
        if !ctx.state.is_available(piece) {
            continue;
        }
        let first = ctx.catalog.get(piece).first_rotation();
        if previous == Some(first) {
            ctx.statistics.increment_counter(Counters::SymmetrySkips);
            continue;
        }
        previous = Some(first);

        for rotation in 0..ctx.catalog.get(piece).rotations.len() {
            let corners = ctx.catalog.get(piece).rotations[rotation];
            if let Err(failure) = check_placement(corners, face, &ctx.state, &ctx.pegs) {
                ctx.statistics.record_failure(&failure);
                continue;
            }

            let mut committed = ctx.commit(piece, corners, face);
            if placing == NFACES || search(&mut committed, placing + 1)? {
                committed.keep();
                return Ok(true);
            }
        }
    }
    Ok(false)
}
