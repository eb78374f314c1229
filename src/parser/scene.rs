//! Scene tree builder.
//!
//! Pulls events from a `MarkupSource` and assembles a `SceneDocument`:
//! the root `svg` element holds an optional `title` and a list of `g`
//! groups; groups hold further groups and `path`s in document order.
//!
//! Decoding is depth-first and fail-fast. A node is only attached to its
//! parent once it has been completely decoded, so an error never leaves a
//! half-built node in the tree.

use tracing::{debug, trace};

use crate::error::{Result, SceneError};
use crate::types::{GroupNode, PathNode, SceneDocument, Shape};

use super::markup::{Element, MarkupEvent, MarkupSource};
use super::path::parse_path_data;
use super::style::parse_style;
use super::xml::XmlSource;

/// Maximum element nesting below the root.
pub const MAX_DEPTH: usize = 256;

/// Parse an SVG document from XML text.
pub fn parse_svg(xml: &str) -> Result<SceneDocument> {
    parse_document(&mut XmlSource::new(xml))
}

/// Parse a document from any markup event source.
///
/// The first element must be `svg`.
pub fn parse_document<S: MarkupSource + ?Sized>(source: &mut S) -> Result<SceneDocument> {
    let root = loop {
        match source.next_event()? {
            MarkupEvent::Start(element) => break element,
            MarkupEvent::Text(_) => continue,
            MarkupEvent::End(name) => {
                return Err(SceneError::Markup {
                    message: format!("Unexpected </{}> before root element", name),
                })
            }
            MarkupEvent::Eof => {
                return Err(SceneError::Markup {
                    message: "Document has no root element".to_string(),
                })
            }
        }
    };

    if root.name != "svg" {
        return Err(SceneError::UnknownElement {
            tag_name: root.name,
        });
    }

    let document = SceneTreeBuilder::new(source).decode_root(&root)?;
    debug!(
        groups = document.group_count(),
        paths = document.paths().len(),
        "Parsed scene document"
    );

    Ok(document)
}

/// Recursive decoder over a markup event source.
pub struct SceneTreeBuilder<'s, S: MarkupSource + ?Sized> {
    source: &'s mut S,
    depth: usize,
}

impl<'s, S: MarkupSource + ?Sized> SceneTreeBuilder<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        Self { source, depth: 0 }
    }

    /// Decode the children of the root element up to its end tag.
    pub fn decode_root(&mut self, root: &Element) -> Result<SceneDocument> {
        let mut document = SceneDocument::default();

        loop {
            match self.source.next_event()? {
                MarkupEvent::Start(child) => match child.name.as_str() {
                    "title" => {
                        let text = self.read_text(&child.name)?;
                        if document.title.is_none() && !text.is_empty() {
                            document.title = Some(text);
                        }
                    }
                    "g" => {
                        let group = self.decode_group(&child)?;
                        document.groups.push(group);
                    }
                    other => {
                        debug!(element = other, "Skipping element outside of groups");
                        self.skip_element(&child.name)?;
                    }
                },
                MarkupEvent::End(name) => {
                    expect_end(&root.name, &name)?;
                    return Ok(document);
                }
                MarkupEvent::Text(_) => {}
                MarkupEvent::Eof => return Err(unexpected_eof(&root.name)),
            }
        }
    }

    /// Decode a `g` element whose start tag has just been read.
    pub fn decode_group(&mut self, start: &Element) -> Result<GroupNode> {
        self.enter()?;
        let result = self.build_group(start);
        self.depth -= 1;

        result.map_err(|e| e.in_element(&start.name, start.attr("id")))
    }

    /// Decode a `path` element whose start tag has just been read.
    pub fn decode_path(&mut self, start: &Element) -> Result<PathNode> {
        self.build_path(start)
            .map_err(|e| e.in_element(&start.name, start.attr("id")))
    }

    /// Decode a group child, dispatching on the tag name.
    fn decode_shape(&mut self, start: &Element) -> Result<Shape> {
        match start.name.as_str() {
            "g" => self.decode_group(start).map(Shape::Group),
            "path" => self.decode_path(start).map(Shape::Path),
            other => Err(SceneError::UnknownElement {
                tag_name: other.to_string(),
            }),
        }
    }

    fn build_group(&mut self, start: &Element) -> Result<GroupNode> {
        let mut group = GroupNode::default();

        for attr in &start.attributes {
            match attr.name.as_str() {
                "id" => group.id = Some(attr.value.clone()),
                "stroke" => group.stroke = Some(attr.value.clone()),
                "stroke-width" => group.stroke_width = parse_int(&attr.value)?,
                "fill" => group.fill = Some(attr.value.clone()),
                "fill-rule" => group.fill_rule = Some(attr.value.clone()),
                "transform" => {
                    debug!(transform = %attr.value, "Group transform recorded, not applied");
                    group.transform_source = Some(attr.value.clone());
                }
                _ => {}
            }
        }

        loop {
            match self.source.next_event()? {
                MarkupEvent::Start(child) => {
                    let shape = self.decode_shape(&child)?;
                    group.children.push(shape);
                }
                MarkupEvent::End(name) => {
                    expect_end(&start.name, &name)?;
                    break;
                }
                MarkupEvent::Text(_) => {}
                MarkupEvent::Eof => return Err(unexpected_eof(&start.name)),
            }
        }

        trace!(id = ?group.id, children = group.children.len(), "Decoded group");
        Ok(group)
    }

    fn build_path(&mut self, start: &Element) -> Result<PathNode> {
        let mut path = PathNode::default();

        for attr in &start.attributes {
            match attr.name.as_str() {
                "id" => path.id = Some(attr.value.clone()),
                "style" => path.style = parse_style(&attr.value)?,
                "d" => path.segments = parse_path_data(&attr.value)?,
                "transform" => {
                    debug!(transform = %attr.value, "Path transform recorded, not applied");
                    path.transform_source = Some(attr.value.clone());
                }
                _ => {}
            }
        }

        // Paths have no shape children; anything nested is ignored.
        self.skip_element(&start.name)?;

        trace!(id = ?path.id, segments = path.segments.len(), "Decoded path");
        Ok(path)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(SceneError::NestingTooDeep { depth: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    /// Consume events up to and including the end tag of `name`.
    fn skip_element(&mut self, name: &str) -> Result<()> {
        let mut open: Vec<String> = Vec::new();

        loop {
            match self.source.next_event()? {
                MarkupEvent::Start(child) => open.push(child.name),
                MarkupEvent::End(end) => match open.pop() {
                    Some(expected) => expect_end(&expected, &end)?,
                    None => return expect_end(name, &end),
                },
                MarkupEvent::Text(_) => {}
                MarkupEvent::Eof => return Err(unexpected_eof(name)),
            }
        }
    }

    /// Collect the text content of an element, trimmed.
    fn read_text(&mut self, name: &str) -> Result<String> {
        let mut text = String::new();

        loop {
            match self.source.next_event()? {
                MarkupEvent::Text(t) => text.push_str(&t),
                MarkupEvent::Start(child) => self.skip_element(&child.name)?,
                MarkupEvent::End(end) => {
                    expect_end(name, &end)?;
                    return Ok(text.trim().to_string());
                }
                MarkupEvent::Eof => return Err(unexpected_eof(name)),
            }
        }
    }
}

fn parse_int(value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| SceneError::NumericParseFailure {
            token: value.to_string(),
        })
}

fn expect_end(expected: &str, found: &str) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SceneError::Markup {
            message: format!("Expected </{}>, found </{}>", expected, found),
        })
    }
}

fn unexpected_eof(name: &str) -> SceneError {
    SceneError::Markup {
        message: format!("Unexpected end of document inside <{}>", name),
    }
}
