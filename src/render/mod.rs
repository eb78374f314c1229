//! Scene rendering driver.
//!
//! Walks a `SceneDocument` depth-first and replays every path on a
//! `Canvas`. The driver owns the bookkeeping a backend would otherwise
//! repeat: relative coordinates are resolved against the current point,
//! repeated move-tos become line-tos, and paint is looked up from the
//! path style with fallback to enclosing groups.

mod path_data;

pub use path_data::PathDataWriter;

use crate::types::{DrawCommand, GroupNode, PathNode, SceneDocument, Shape};

/// Default stroke width when neither path nor groups set one.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Arc parameters with an absolute end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub rx: f32,
    pub ry: f32,
    pub x_axis_rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
    pub x: f32,
    pub y: f32,
}

/// A drawing backend. All coordinates passed in are absolute.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_to(&mut self, c1: (f32, f32), c2: (f32, f32), to: (f32, f32));
    fn arc_to(&mut self, arc: Arc);
    fn close_path(&mut self);
    fn fill(&mut self, paint: &str);
    fn stroke(&mut self, paint: &str, width: f32);
}

/// Paint inherited from enclosing groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
}

impl Paint {
    /// Paint for the children of `group`, overriding what it sets.
    pub fn inherit(&self, group: &GroupNode) -> Paint {
        Paint {
            fill: group.fill.clone().or_else(|| self.fill.clone()),
            stroke: group.stroke.clone().or_else(|| self.stroke.clone()),
            stroke_width: if group.stroke_width > 0 {
                Some(group.stroke_width as f32)
            } else {
                self.stroke_width
            },
        }
    }

    /// Effective paint for a path: its style first, then inherited values.
    pub fn for_path(&self, path: &PathNode) -> Paint {
        let style_paint = |key: &str| path.style.get(key).map(|v| v.to_string());

        Paint {
            fill: style_paint("fill").or_else(|| self.fill.clone()),
            stroke: style_paint("stroke").or_else(|| self.stroke.clone()),
            stroke_width: path.style.get_f32("stroke-width").or(self.stroke_width),
        }
    }
}

fn visible(paint: &Option<String>) -> Option<&str> {
    paint.as_deref().filter(|p| *p != "none")
}

/// Render every group of a document.
pub fn render_document<C: Canvas + ?Sized>(canvas: &mut C, document: &SceneDocument) {
    let paint = Paint::default();
    for group in &document.groups {
        render_group(canvas, group, &paint);
    }
}

/// Render a group and its children between `save` and `restore`.
pub fn render_group<C: Canvas + ?Sized>(canvas: &mut C, group: &GroupNode, inherited: &Paint) {
    canvas.save();

    let paint = inherited.inherit(group);
    for child in &group.children {
        match child {
            Shape::Group(g) => render_group(canvas, g, &paint),
            Shape::Path(p) => render_path(canvas, p, &paint),
        }
    }

    canvas.restore();
}

/// Render one path, then fill and stroke it if anything was drawn.
pub fn render_path<C: Canvas + ?Sized>(canvas: &mut C, path: &PathNode, inherited: &Paint) {
    canvas.begin_path();

    if trace_commands(canvas, &path.segments) == 0 {
        return;
    }

    let paint = inherited.for_path(path);
    if let Some(fill) = visible(&paint.fill) {
        canvas.fill(fill);
    }
    if let Some(stroke) = visible(&paint.stroke) {
        let width = paint.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
        canvas.stroke(stroke, width);
    }
}

/// Replay commands on the canvas with absolute coordinates.
///
/// Returns the number of drawing operations issued (moves excluded).
/// `ClosePath` is only forwarded once something has been drawn.
pub fn trace_commands<C: Canvas + ?Sized>(canvas: &mut C, commands: &[DrawCommand]) -> usize {
    let mut current = (0.0_f32, 0.0_f32);
    let mut subpath_start = current;
    let mut drawn = 0;
    let mut after_move = false;

    let resolve = |absolute: bool, from: (f32, f32), x: f32, y: f32| {
        if absolute {
            (x, y)
        } else {
            (from.0 + x, from.1 + y)
        }
    };

    for command in commands {
        match *command {
            DrawCommand::MoveTo { absolute, x, y } => {
                let to = resolve(absolute, current, x, y);
                if after_move {
                    // Extra coordinate pairs after a move are line-tos.
                    canvas.line_to(to.0, to.1);
                    drawn += 1;
                } else {
                    canvas.move_to(to.0, to.1);
                    subpath_start = to;
                }
                current = to;
                after_move = true;
                continue;
            }
            DrawCommand::LineTo { absolute, x, y } => {
                let to = resolve(absolute, current, x, y);
                canvas.line_to(to.0, to.1);
                current = to;
                drawn += 1;
            }
            DrawCommand::CubicCurveTo {
                absolute,
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => {
                let c1 = resolve(absolute, current, c1x, c1y);
                let c2 = resolve(absolute, current, c2x, c2y);
                let to = resolve(absolute, current, x, y);
                canvas.bezier_to(c1, c2, to);
                current = to;
                drawn += 1;
            }
            DrawCommand::ArcTo {
                absolute,
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
                x,
                y,
            } => {
                let to = resolve(absolute, current, x, y);
                canvas.arc_to(Arc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc: large_arc_flag,
                    sweep: sweep_flag,
                    x: to.0,
                    y: to.1,
                });
                current = to;
                drawn += 1;
            }
            DrawCommand::ClosePath => {
                if drawn > 0 {
                    canvas.close_path();
                }
                current = subpath_start;
            }
        }
        after_move = false;
    }

    drawn
}
