use pathweave_core::analysis::Strategy;
use pathweave_core::render::{ImageFormat, LayoutEngine};

/// Parse a distance strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse a layout engine from string
pub fn parse_layout_engine(s: &str) -> std::result::Result<LayoutEngine, String> {
    s.parse::<LayoutEngine>().map_err(|e| e.to_string())
}

/// Parse an image format from string
pub fn parse_image_format(s: &str) -> std::result::Result<ImageFormat, String> {
    s.parse::<ImageFormat>().map_err(|e| e.to_string())
}
