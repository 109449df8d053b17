// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are kept alongside the search state and bumped by the engine.
//! They are for reporting only and never influence the search.

use std::fmt;

use crate::constraints::PlacementFailure;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Recursive search invocations.
    Steps,
    /// Pieces committed to a face.
    Placements,
    /// Committed pieces taken back off again.
    Backtracks,
    /// Pieces skipped because an identical piece was just tried.
    SymmetrySkips,
}

const COUNT: usize = Counters::COUNT + PlacementFailure::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a rejected placement by its kind.
    pub(crate) fn record_failure(&mut self, failure: &PlacementFailure) {
        self.stats[Counters::COUNT + failure.kind_index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of placements rejected for overshooting a peg.
    pub fn overshoots(&self) -> u64 {
        self.stats[Counters::COUNT]
    }

    /// Number of placements rejected for leaving a peg out of reach.
    pub fn unreachable(&self) -> u64 {
        self.stats[Counters::COUNT + 1]
    }

    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "steps={} placements={} backtracks={} symmetry_skips={} overshoots={} unreachable={}",
            self.get(Counters::Steps),
            self.get(Counters::Placements),
            self.get(Counters::Backtracks),
            self.get(Counters::SymmetrySkips),
            self.overshoots(),
            self.unreachable()
        )
    }
}
