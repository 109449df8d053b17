// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a placement is rejected.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

use crate::geometry::VertexId;

/// Why a rotated piece cannot go on a face.
///
/// `deficit` is what the vertex would still need after the placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum PlacementFailure {
    /// The vertex would exceed its peg.
    Overshoot { vertex: VertexId, deficit: i64 },

    /// Even maximal corners on the remaining faces could not reach the peg.
    Unreachable {
        vertex: VertexId,
        deficit: i64,
        capacity: i64,
    },
}

impl PlacementFailure {
    /// Dense index of the failure kind, `0..PlacementFailure::COUNT`.
    pub fn kind_index(&self) -> usize {
        match self {
            PlacementFailure::Overshoot { .. } => 0,
            PlacementFailure::Unreachable { .. } => 1,
        }
    }
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementFailure::Overshoot { vertex, deficit } => {
                write!(f, "Vertex {} overshoots its peg by {}", vertex, -deficit)
            }
            PlacementFailure::Unreachable {
                vertex,
                deficit,
                capacity,
            } => {
                write!(
                    f,
                    "Vertex {} still needs {} but at most {} can be added",
                    vertex, deficit, capacity
                )
            }
        }
    }
}
