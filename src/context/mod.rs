// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext bundles everything one search reads and writes:
//! - Tier 1 (MEMO): the piece catalog, never modified
//! - Input: the pegs and the configuration
//! - Tier 2 (DYNAMIC): the search state and statistics
//!
//! Each context owns its own copy of the catalog, so independent searches
//! never share mutable data.

pub mod config;

pub use config::SearchConfig;

use std::ops::{Deref, DerefMut};

use crate::geometry::constants::NVERTICES;
use crate::geometry::{Corners, FaceId, PieceId};
use crate::memo::PieceCatalog;
use crate::state::{Counters, SearchState, Statistics};

/// Everything a single search works on.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Immutable piece catalog (Tier 1)
    pub catalog: PieceCatalog,
    /// Search parameters
    pub config: SearchConfig,
    /// Target sum at each vertex
    pub pegs: [i32; NVERTICES],
    /// Mutable search state (Tier 2)
    pub state: SearchState,
    /// Counters for reporting (Tier 2)
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context over the standard catalog with default settings.
    pub fn new() -> Self {
        Self::with_catalog(PieceCatalog::standard().clone(), SearchConfig::default())
    }

    pub fn with_catalog(catalog: PieceCatalog, config: SearchConfig) -> Self {
        Self {
            catalog,
            config,
            pegs: [0; NVERTICES],
            state: SearchState::new(),
            statistics: Statistics::new(),
        }
    }

    /// Clear the state and counters and install new pegs.
    pub fn reset(&mut self, pegs: [i32; NVERTICES]) {
        self.pegs = pegs;
        self.state.reset();
        self.statistics.reset();
    }

    /// Place a piece for the lifetime of the returned guard.
    ///
    /// Dropping the guard takes the piece back off the face. Call
    /// [`Committed::keep`] to leave it in place.
    pub fn commit(&mut self, piece: PieceId, corners: Corners, face: FaceId) -> Committed<'_> {
        self.state.place(piece, corners, face);
        self.statistics.increment_counter(Counters::Placements);
        Committed {
            ctx: self,
            piece,
            corners,
            face,
            kept: false,
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A placement that is undone when dropped.
///
/// Dereferences to the context, so the search can recurse through it.
#[derive(Debug)]
pub struct Committed<'a> {
    ctx: &'a mut SearchContext,
    piece: PieceId,
    corners: Corners,
    face: FaceId,
    kept: bool,
}

impl Committed<'_> {
    /// Leave the piece on its face.
    pub fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for Committed<'_> {
    type Target = SearchContext;

    fn deref(&self) -> &SearchContext {
        &*self.ctx
    }
}

impl DerefMut for Committed<'_> {
    fn deref_mut(&mut self) -> &mut SearchContext {
        &mut *self.ctx
    }
}

impl Drop for Committed<'_> {
    fn drop(&mut self) {
        if !self.kept {
            self.ctx.state.unplace(self.piece, self.corners, self.face);
            self.ctx.statistics.increment_counter(Counters::Backtracks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_undone_on_drop() {
        let mut ctx = SearchContext::new();
        {
            let committed = ctx.commit(3, [0, 0, 3], 6);
            assert!(committed.state.is_assigned(6));
            assert_eq!(committed.state.vertex_sum(7), 3);
        }
        assert_eq!(ctx.state, SearchState::new());
        assert_eq!(ctx.statistics.get(Counters::Placements), 1);
        assert_eq!(ctx.statistics.get(Counters::Backtracks), 1);
    }

    #[test]
    fn test_kept_commit_stays() {
        let mut ctx = SearchContext::new();
        ctx.commit(3, [0, 0, 3], 6).keep();
        assert!(ctx.state.is_assigned(6));
        assert!(!ctx.state.is_available(3));
        assert_eq!(ctx.statistics.get(Counters::Backtracks), 0);
    }

    #[test]
    fn test_nested_commits_unwind_in_order() {
        let mut ctx = SearchContext::new();
        {
            let mut outer = ctx.commit(0, [0, 0, 0], 0);
            {
                let inner = outer.commit(13, [1, 1, 1], 1);
                assert_eq!(inner.state.num_placed(), 2);
                assert_eq!(inner.state.vertex_sum(0), 1);
            }
            assert_eq!(outer.state.num_placed(), 1);
            assert_eq!(outer.state.vertex_sum(0), 0);
        }
        assert_eq!(ctx.state, SearchState::new());
    }

    #[test]
    fn test_reset() {
        let mut ctx = SearchContext::new();
        ctx.commit(0, [0, 0, 0], 0).keep();
        ctx.reset([1; NVERTICES]);
        assert_eq!(ctx.state, SearchState::new());
        assert_eq!(ctx.statistics, Statistics::new());
        assert_eq!(ctx.pegs, [1; NVERTICES]);
    }
}
