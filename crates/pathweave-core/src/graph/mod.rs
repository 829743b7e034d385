//! Graph data model
//!
//! An arena-backed directed graph:
//! - `types`: handles, validated weights, edge directionality
//! - `node`/`edge`: the stored entities
//! - `container`: the [`Graph`] registry with lookup and insertion

pub mod container;
pub mod edge;
pub mod node;
pub mod types;

pub use container::Graph;
pub use edge::Edge;
pub use node::Node;
pub use types::{EdgeId, EdgeKind, NodeId, Weight};
