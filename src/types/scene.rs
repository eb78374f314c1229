//! Scene tree: a document of groups, groups of groups and paths.
//!
//! Trees are built once by the scene parser and not mutated afterwards.
//! Ownership is strictly top-down; nodes never refer back to parents.

use serde::Serialize;

use super::command::DrawCommand;
use super::style::Style;
use super::transform::Transform;

/// A parsed `<path>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathNode {
    pub id: Option<String>,
    pub style: Style,
    pub segments: Vec<DrawCommand>,
    pub transform: Transform,
    /// Raw `transform` attribute; recorded but not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_source: Option<String>,
}

/// A parsed `<g>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupNode {
    pub id: Option<String>,
    pub stroke: Option<String>,
    /// Zero means unset.
    pub stroke_width: i32,
    pub fill: Option<String>,
    pub fill_rule: Option<String>,
    pub children: Vec<Shape>,
    pub transform: Transform,
    /// Raw `transform` attribute; recorded but not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_source: Option<String>,
}

/// A child of a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Group(GroupNode),
    Path(PathNode),
}

impl Shape {
    pub fn id(&self) -> Option<&str> {
        match self {
            Shape::Group(g) => g.id.as_deref(),
            Shape::Path(p) => p.id.as_deref(),
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Shape::Group(g) => Some(g),
            Shape::Path(_) => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathNode> {
        match self {
            Shape::Path(p) => Some(p),
            Shape::Group(_) => None,
        }
    }
}

/// A whole parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneDocument {
    pub title: Option<String>,
    pub groups: Vec<GroupNode>,
    pub transform: Transform,
}

impl SceneDocument {
    /// Iterate over every path in the document, depth-first in document order.
    pub fn paths(&self) -> Vec<&PathNode> {
        let mut out = Vec::new();
        for group in &self.groups {
            group.collect_paths(&mut out);
        }
        out
    }

    /// Total number of groups at any depth.
    pub fn group_count(&self) -> usize {
        self.groups.iter().map(GroupNode::group_count).sum()
    }
}

impl GroupNode {
    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a PathNode>) {
        for child in &self.children {
            match child {
                Shape::Group(g) => g.collect_paths(out),
                Shape::Path(p) => out.push(p),
            }
        }
    }

    /// Number of groups in this subtree, including this one.
    pub fn group_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(Shape::as_group)
            .map(GroupNode::group_count)
            .sum::<usize>()
    }
}
