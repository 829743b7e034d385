//! `pathweave render` - draw a graph file with the layout engine

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use pathweave_core::dot::to_dot_text;
use pathweave_core::error::Result;
use pathweave_core::render::{ImageFormat, ImageRenderer, LayoutEngine};

pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    output: &Path,
    engine: Option<LayoutEngine>,
    image_format: Option<ImageFormat>,
) -> Result<()> {
    let graph = load_graph(file)?;

    let mut config = ctx.config.render.clone();
    if let Some(engine) = engine {
        config.engine = engine;
    }
    let format = image_format
        .or_else(|| ImageFormat::from_path(output).ok())
        .unwrap_or(config.format);
    let engine = config.engine;

    ImageRenderer::new(config).render_to_file(&to_dot_text(&graph), output, format)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "output": output.display().to_string(),
            "engine": engine,
            "format": format,
        })),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", output.display());
            }
            Ok(())
        }
    }
}
