//! CLI argument parsing for pathweave
//!
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::DistanceArgs;
pub use output::OutputFormat;
use parse::{parse_image_format, parse_layout_engine};
use pathweave_core::render::{ImageFormat, LayoutEngine};

/// Pathweave - shortest paths, cycles and path enumeration over DOT graphs
#[derive(Parser, Debug)]
#[command(name = "pathweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true, env = "PATHWEAVE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest-path subgraph between two nodes
    Shortest {
        /// Graph file in DOT format
        file: PathBuf,

        /// Source node
        #[arg(long)]
        from: String,

        /// Target node
        #[arg(long)]
        to: String,

        #[command(flatten)]
        distance: DistanceArgs,

        /// Print the subgraph as DOT text
        #[arg(long)]
        dot: bool,
    },

    /// Distance of every node from a source
    Distances {
        /// Graph file in DOT format
        file: PathBuf,

        /// Source node
        #[arg(long)]
        from: String,

        #[command(flatten)]
        distance: DistanceArgs,
    },

    /// Report whether the graph contains a directed cycle
    Cycles {
        /// Graph file in DOT format
        file: PathBuf,
    },

    /// List every maximal path from a start node (acyclic graphs only)
    Paths {
        /// Graph file in DOT format
        file: PathBuf,

        /// Start node
        #[arg(long)]
        from: String,
    },

    /// Render the graph to an image with a layout engine
    Render {
        /// Graph file in DOT format
        file: PathBuf,

        /// Image file to write
        #[arg(long, short)]
        output: PathBuf,

        /// Layout engine (dot, neato, fdp, sfdp, circo, twopi)
        #[arg(long, value_parser = parse_layout_engine)]
        engine: Option<LayoutEngine>,

        /// Image format (png, svg, pdf, jpg, gif, bmp); guessed from --output otherwise
        #[arg(long, value_parser = parse_image_format)]
        image_format: Option<ImageFormat>,
    },
}
