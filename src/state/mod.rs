// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one search).
//!
//! - SearchState: piece availability, per-vertex sums and fill counts, and
//!   the face assignments
//! - Statistics: counters reported after a search
//!
//! Every change made by `place` is undone by the matching `unplace`.

pub mod placement;
pub mod statistics;

pub use placement::{PlacedPiece, SearchState};
pub use statistics::{Counters, Statistics};
