//! Graph analyses
//!
//! Everything here borrows a [`Graph`] immutably:
//! - `cycles`: directed cycle detection
//! - `distance`: shared distance table, calculator trait and reconstruction
//! - `dijkstra` / `depth_first`: the two relaxation strategies
//! - `paths`: exhaustive path enumeration on acyclic graphs
//! - `cancel`: cooperative cancellation of long runs

pub mod cancel;
pub mod cycles;
pub mod depth_first;
pub mod dijkstra;
pub mod distance;
pub mod paths;

pub use cancel::CancellationToken;
pub use cycles::CycleDetector;
pub use depth_first::{DepthFirstCalculator, DEFAULT_MAX_DISTANCE};
pub use dijkstra::DijkstraCalculator;
pub use distance::{DistanceCalculator, DistanceTable, Distances, ShortestGraph};
pub use paths::{GraphPath, PathEnumerator};

use crate::config::DistanceConfig;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relaxation strategy used by distance queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Dijkstra,
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Dijkstra, Strategy::DepthFirst];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Dijkstra => "dijkstra",
            Strategy::DepthFirst => "depth-first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Strategy::Dijkstra),
            "depth-first" | "depth_first" | "dfs" => Ok(Strategy::DepthFirst),
            other => Err(GraphError::unsupported(
                "strategy",
                other,
                "dijkstra, depth-first",
            )),
        }
    }
}

/// Build the calculator selected by `config`, optionally cancellable
pub fn calculator_for<'g>(
    graph: &'g Graph,
    config: &DistanceConfig,
    cancellation: Option<CancellationToken>,
) -> Result<Box<dyn DistanceCalculator + 'g>> {
    Ok(match (config.strategy, cancellation) {
        (Strategy::Dijkstra, None) => Box::new(DijkstraCalculator::new(graph)),
        (Strategy::Dijkstra, Some(token)) => {
            Box::new(DijkstraCalculator::new(graph).with_cancellation(token))
        }
        (Strategy::DepthFirst, None) => Box::new(DepthFirstCalculator::from_config(graph, config)?),
        (Strategy::DepthFirst, Some(token)) => Box::new(
            DepthFirstCalculator::from_config(graph, config)?.with_cancellation(token),
        ),
    })
}
