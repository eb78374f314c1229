//! Lint checks over a parsed scene.
//!
//! Each check takes a `&SceneDocument` and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::types::{DrawCommand, GroupNode, PathNode, SceneDocument, Shape};

use super::warning::{Diagnostic, ValidationResult};

/// Visit every group and path, depth-first in document order.
fn walk<'a>(document: &'a SceneDocument, mut visit: impl FnMut(Node<'a>)) {
    fn walk_group<'a>(group: &'a GroupNode, visit: &mut impl FnMut(Node<'a>)) {
        visit(Node::Group(group));
        for child in &group.children {
            match child {
                Shape::Group(g) => walk_group(g, visit),
                Shape::Path(p) => visit(Node::Path(p)),
            }
        }
    }

    for group in &document.groups {
        walk_group(group, &mut visit);
    }
}

#[derive(Clone, Copy)]
enum Node<'a> {
    Group(&'a GroupNode),
    Path(&'a PathNode),
}

fn describe(kind: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{} '{}'", kind, id),
        None => format!("Unnamed {}", kind),
    }
}

/// Ids must be unique across the whole document.
pub fn check_duplicate_ids(document: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    walk(document, |node| {
        let id = match node {
            Node::Group(g) => g.id.as_deref(),
            Node::Path(p) => p.id.as_deref(),
        };
        if let Some(id) = id {
            *seen.entry(id).or_default() += 1;
        }
    });

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicates.sort();

    for (id, count) in duplicates {
        result.push(
            Diagnostic::error(
                "vecscene::lint::duplicate-id",
                format!("Id '{}' is used by {} elements", id, count),
            )
            .with_help("Give each element a unique id"),
        );
    }

    result
}

/// Paths without any drawing commands render nothing.
pub fn check_empty_paths(document: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    walk(document, |node| {
        if let Node::Path(path) = node {
            if path.segments.is_empty() {
                result.push(Diagnostic::warning(
                    "vecscene::lint::empty-path",
                    format!("{} has no path data", describe("path", path.id.as_deref())),
                ));
            }
        }
    });

    result
}

/// Path data should open with a move-to.
pub fn check_leading_move(document: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    walk(document, |node| {
        if let Node::Path(path) = node {
            match path.segments.first() {
                None | Some(DrawCommand::MoveTo { .. }) => {}
                Some(first) => result.push(
                    Diagnostic::warning(
                        "vecscene::lint::missing-move",
                        format!(
                            "{} starts with '{}' instead of a move-to",
                            describe("path", path.id.as_deref()),
                            first.letter()
                        ),
                    )
                    .with_help("Start path data with an M or m command"),
                ),
            }
        }
    });

    result
}

/// Groups with no children.
pub fn check_empty_groups(document: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    walk(document, |node| {
        if let Node::Group(group) = node {
            if group.children.is_empty() {
                result.push(Diagnostic::warning(
                    "vecscene::lint::empty-group",
                    format!("{} has no children", describe("group", group.id.as_deref())),
                ));
            }
        }
    });

    result
}
