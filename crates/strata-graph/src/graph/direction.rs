//! Edge traversal direction.

use serde::{Deserialize, Serialize};

use super::{AdjSet, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeDirection {
    /// Follow edges from source to target.
    #[default]
    Forward,
    /// Follow edges from target back to source.
    Backward,
}

impl EdgeDirection {
    pub const ALL: [EdgeDirection; 2] = [EdgeDirection::Forward, EdgeDirection::Backward];

    pub fn edges<T>(self, v: &Vertex<T>) -> &AdjSet {
        match self {
            EdgeDirection::Forward => &v.forward,
            EdgeDirection::Backward => &v.backward,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            EdgeDirection::Forward => EdgeDirection::Backward,
            EdgeDirection::Backward => EdgeDirection::Forward,
        }
    }

    /// `+1` for [`EdgeDirection::Forward`], `-1` otherwise.
    pub fn sign(self) -> i32 {
        match self {
            EdgeDirection::Forward => 1,
            EdgeDirection::Backward => -1,
        }
    }
}
