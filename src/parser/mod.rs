//! Parsers for the vecscene SVG dialect.
//!
//! # Layers
//!
//! - `clean` / `segment` / `path` - the path data mini-language (`d`)
//! - `style` - inline `style` declarations
//! - `markup` / `xml` - markup event sources feeding the scene builder
//! - `scene` - the recursive group/path tree builder
//!
//! # Usage
//!
//! ```ignore
//! use vecscene::parser::{parse_path_data, parse_svg};
//!
//! let commands = parse_path_data("M0,0 L10-10 z")?;
//! let document = parse_svg(&std::fs::read_to_string("logo.svg")?)?;
//! ```

mod clean;
mod path;
mod scene;
mod segment;
mod style;
mod xml;
pub mod markup;

// Re-export main entry points
pub use clean::clean_path_data;
pub use markup::{Attribute, Element, EventQueue, MarkupEvent, MarkupSource};
pub use path::{arity, parse_path_data, SegmentBuilder};
pub use scene::{parse_document, parse_svg, SceneTreeBuilder, MAX_DEPTH};
pub use segment::{argument_tokens, is_command_letter, split_commands, Segments, COMMAND_LETTERS};
pub use style::{infer_value, parse_style};
pub use xml::XmlSource;
