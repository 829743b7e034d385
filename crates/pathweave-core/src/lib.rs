//! Pathweave Core Library
//!
//! Directed weighted graphs with shortest-path analysis, cycle detection,
//! path enumeration and DOT interchange.

pub mod analysis;
pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod logging;
pub mod render;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, EdgeKind, Graph, Node, NodeId, Weight};
