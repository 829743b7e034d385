//! Image rendering through an external layout engine
//!
//! Graph text is written to a temporary directory, the engine is run as a
//! subprocess (`<engine> -T<format> input -o output`) and the produced
//! image is read back. The temporary directory is removed on every path.

use crate::config::RenderConfig;
use crate::dot::to_dot_text;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Layout engine executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    #[default]
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
}

impl LayoutEngine {
    pub const ALL: [LayoutEngine; 6] = [
        LayoutEngine::Dot,
        LayoutEngine::Neato,
        LayoutEngine::Fdp,
        LayoutEngine::Sfdp,
        LayoutEngine::Circo,
        LayoutEngine::Twopi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutEngine::Dot => "dot",
            LayoutEngine::Neato => "neato",
            LayoutEngine::Fdp => "fdp",
            LayoutEngine::Sfdp => "sfdp",
            LayoutEngine::Circo => "circo",
            LayoutEngine::Twopi => "twopi",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutEngine {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        LayoutEngine::ALL
            .into_iter()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| {
                GraphError::unsupported("layout engine", s, "dot, neato, fdp, sfdp, circo, twopi")
            })
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    Jpg,
    Gif,
    Bmp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 6] = [
        ImageFormat::Png,
        ImageFormat::Svg,
        ImageFormat::Pdf,
        ImageFormat::Jpg,
        ImageFormat::Gif,
        ImageFormat::Bmp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                GraphError::unsupported("image format", path.display(), "png, svg, pdf, jpg, gif, bmp")
            })?;
        ext.parse()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" => Ok(ImageFormat::Jpg),
            lower => ImageFormat::ALL
                .into_iter()
                .find(|f| f.as_str() == lower)
                .ok_or_else(|| {
                    GraphError::unsupported("image format", s, "png, svg, pdf, jpg, gif, bmp")
                }),
        }
    }
}

/// Runs the configured layout engine over graph text
#[derive(Debug, Clone, Default)]
pub struct ImageRenderer {
    config: RenderConfig,
}

impl ImageRenderer {
    pub fn new(config: RenderConfig) -> Self {
        ImageRenderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Executable to spawn: inside `bin_path` when set, PATH lookup otherwise
    pub fn engine_path(&self) -> PathBuf {
        let exe = format!("{}{}", self.config.engine, std::env::consts::EXE_SUFFIX);
        match &self.config.bin_path {
            Some(dir) => Path::new(dir).join(exe),
            None => PathBuf::from(exe),
        }
    }

    /// Render graph text to image bytes
    #[tracing::instrument(skip(self, dot_text), fields(engine = %self.config.engine, bytes = dot_text.len()))]
    pub fn render(&self, dot_text: &str, format: ImageFormat) -> Result<Vec<u8>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("graph.dot");
        let output = dir.path().join(format!("graph.{}", format));
        fs::write(&input, dot_text)?;

        self.run_engine(&input, &output, format)?;

        let bytes = fs::read(&output).map_err(|e| GraphError::RenderFailed {
            engine: self.config.engine.to_string(),
            reason: format!("no output produced: {}", e),
        })?;
        tracing::debug!(size = bytes.len(), %format, "image rendered");
        Ok(bytes)
    }

    /// Render graph text and write the image to `path`
    pub fn render_to_file(&self, dot_text: &str, path: &Path, format: ImageFormat) -> Result<()> {
        let bytes = self.render(dot_text, format)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Render a graph directly
    pub fn render_graph(&self, graph: &Graph, format: ImageFormat) -> Result<Vec<u8>> {
        self.render(&to_dot_text(graph), format)
    }

    fn run_engine(&self, input: &Path, output: &Path, format: ImageFormat) -> Result<()> {
        let engine = self.config.engine.to_string();
        let program = self.engine_path();

        let mut child = Command::new(&program)
            .arg(format!("-T{}", format))
            .arg(input)
            .arg("-o")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => GraphError::EngineNotFound {
                    engine: engine.clone(),
                    path: program.display().to_string(),
                },
                _ => GraphError::Io(e),
            })?;

        let stderr_handle = child.stderr.take().map(|mut err| {
            thread::spawn(move || {
                let mut buffer = String::new();
                let _ = err.read_to_string(&mut buffer);
                buffer
            })
        });

        let start = Instant::now();
        let timeout = Duration::from_secs(self.config.timeout_secs);

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if start.elapsed() >= timeout {
                let _ = child.kill();
                let _ = child.wait();
                if let Some(handle) = stderr_handle {
                    let _ = handle.join();
                }
                return Err(GraphError::RenderFailed {
                    engine,
                    reason: format!("timed out after {}s", self.config.timeout_secs),
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stderr = match stderr_handle {
            Some(handle) => handle.join().unwrap_or_default(),
            None => String::new(),
        };

        if !status.success() {
            let message = match stderr.trim() {
                "" => format!("exited with {}", status),
                text => text.to_string(),
            };
            return Err(GraphError::RenderSyntax { engine, message });
        }
        if !stderr.trim().is_empty() {
            tracing::warn!(%engine, stderr = stderr.trim(), "layout engine reported warnings");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_parsing() {
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert!(matches!(
            "tiff".parse::<ImageFormat>(),
            Err(GraphError::Unsupported { .. })
        ));
        assert_eq!(
            ImageFormat::from_path(Path::new("out/graph.svg")).unwrap(),
            ImageFormat::Svg
        );
        assert!(ImageFormat::from_path(Path::new("graph")).is_err());
    }

    #[test]
    fn test_engine_parsing() {
        for engine in LayoutEngine::ALL {
            assert_eq!(engine.to_string().parse::<LayoutEngine>().unwrap(), engine);
        }
        assert!("graphviz".parse::<LayoutEngine>().is_err());
    }

    #[test]
    fn test_engine_path_uses_bin_path() {
        let renderer = ImageRenderer::new(RenderConfig {
            engine: LayoutEngine::Neato,
            bin_path: Some("/opt/gv".to_string()),
            ..Default::default()
        });
        let expected = format!("neato{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(renderer.engine_path(), Path::new("/opt/gv").join(expected));
    }

    #[test]
    fn test_missing_engine() {
        let dir = tempdir().unwrap();
        let renderer = ImageRenderer::new(RenderConfig {
            bin_path: Some(dir.path().display().to_string()),
            ..Default::default()
        });
        let result = renderer.render("digraph G {}", ImageFormat::Png);
        assert!(matches!(result, Err(GraphError::EngineNotFound { .. })));
    }
}
