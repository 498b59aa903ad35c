//! Layout configuration.
//!
//! Defaults reproduce the classic behaviour: sources pulled to the top, weighted-median
//! ordering, 10-unit gaps and eight bounded iterations per optimisation phase.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::EdgeDirection;

/// Drawing direction. This is a pure coordinate transform applied at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Levels are rows, edges flow downwards.
    #[default]
    TopDown,
    /// Levels are columns, edges flow to the right.
    LeftRight,
}

/// Ordering heuristic used to reduce crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Heuristic {
    #[default]
    WeightedMedian,
    Barycenter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub orientation: Orientation,
    /// `Forward` pulls every source to the first level; `Backward` pushes every sink to the
    /// last one.
    pub leveling: EdgeDirection,
    pub heuristic: Heuristic,
    /// Minimum horizontal space between two vertices of the same level.
    pub x_gap: f64,
    /// Vertical space between two levels.
    pub y_gap: f64,
    pub max_order_iterations: usize,
    pub max_coordinate_iterations: usize,
    pub straighten_long_edges: bool,
    pub max_straighten_passes: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::TopDown,
            leveling: EdgeDirection::Forward,
            heuristic: Heuristic::WeightedMedian,
            x_gap: 10.0,
            y_gap: 10.0,
            max_order_iterations: 8,
            max_coordinate_iterations: 8,
            straighten_long_edges: false,
            max_straighten_passes: 10,
        }
    }
}

impl LayoutOptions {
    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("xGap", self.x_gap), ("yGap", self.y_gap)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
