//! vecscene - SVG path data and scene tree parser
//!
//! Turns the path-drawing subset of SVG into a typed scene tree: groups
//! carrying stroke and fill defaults, and paths carrying typed styles and
//! decoded drawing commands.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, load_document, DiscoveryResult, Manifest};
pub use error::{Result, SceneError};
pub use parser::{parse_document, parse_path_data, parse_style, parse_svg, MarkupSource};
pub use render::{render_document, trace_commands, Canvas, PathDataWriter};
pub use types::{
    to_path_data, DrawCommand, GroupNode, PathNode, SceneDocument, Shape, Style, StyleValue,
    Transform,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
