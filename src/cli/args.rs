//! Argument groups shared by several subcommands

use clap::Args;

use super::parse::parse_strategy;
use pathweave_core::analysis::Strategy;

/// Distance strategy selection
#[derive(Args, Debug, Clone, Default)]
pub struct DistanceArgs {
    /// Relaxation strategy (dijkstra, depth-first)
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Ceiling for the depth-first strategy
    #[arg(long)]
    pub max_distance: Option<f64>,
}
