use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node inside the [`Graph`](super::Graph) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of an edge inside the [`Graph`](super::Graph) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Weight of an edge.
///
/// Always finite and strictly positive; the only way to obtain one is
/// through [`Weight::new`], which rejects everything else. Shortest-path
/// reconstruction relies on this to terminate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub const ONE: Weight = Weight(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Weight(value))
        } else {
            Err(GraphError::invalid_argument(format!(
                "edge weight must be positive, got {}",
                value
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for Weight {
    type Error = GraphError;

    fn try_from(value: f64) -> Result<Self> {
        Weight::new(value)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Weight::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal direction of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Traversable from source to target only
    #[default]
    Directed,
    /// Traversable in both directions
    Bidirectional,
}

impl EdgeKind {
    pub fn from_flag(bidirectional: bool) -> Self {
        if bidirectional {
            EdgeKind::Bidirectional
        } else {
            EdgeKind::Directed
        }
    }

    pub fn is_bidirectional(self) -> bool {
        self == EdgeKind::Bidirectional
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => write!(f, "->"),
            EdgeKind::Bidirectional => write!(f, "<->"),
        }
    }
}
