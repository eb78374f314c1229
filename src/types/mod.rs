//! Core domain types for vecscene.
//!
//! - `DrawCommand` - one path drawing primitive
//! - `Style` / `StyleValue` - typed inline style declarations
//! - `SceneDocument`, `GroupNode`, `PathNode`, `Shape` - the scene tree
//! - `Transform` - opaque affine matrix

mod command;
mod scene;
mod style;
mod transform;

pub use command::{to_path_data, DrawCommand};
pub use scene::{GroupNode, PathNode, SceneDocument, Shape};
pub use style::{Style, StyleValue};
pub use transform::Transform;
