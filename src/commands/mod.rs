//! CLI commands for pathweave

pub mod cycles;
pub mod dispatch;
pub mod distances;
pub mod helpers;
pub mod paths;
pub mod render;
pub mod shortest;
