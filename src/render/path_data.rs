//! Canvas that records absolute path data.

use crate::types::{to_path_data, DrawCommand};

use super::{Arc, Canvas};

/// Collects traced geometry as absolute `DrawCommand`s.
///
/// Paint, state and path boundaries are ignored.
#[derive(Debug, Clone, Default)]
pub struct PathDataWriter {
    commands: Vec<DrawCommand>,
}

impl PathDataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// The recorded geometry as compact path data.
    pub fn to_path_data(&self) -> String {
        to_path_data(&self.commands)
    }
}

impl Canvas for PathDataWriter {
    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn begin_path(&mut self) {}

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo {
            absolute: true,
            x,
            y,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo {
            absolute: true,
            x,
            y,
        });
    }

    fn bezier_to(&mut self, c1: (f32, f32), c2: (f32, f32), to: (f32, f32)) {
        self.commands.push(DrawCommand::CubicCurveTo {
            absolute: true,
            c1x: c1.0,
            c1y: c1.1,
            c2x: c2.0,
            c2y: c2.1,
            x: to.0,
            y: to.1,
        });
    }

    fn arc_to(&mut self, arc: Arc) {
        self.commands.push(DrawCommand::ArcTo {
            absolute: true,
            rx: arc.rx,
            ry: arc.ry,
            x_axis_rotation: arc.x_axis_rotation,
            large_arc_flag: arc.large_arc,
            sweep_flag: arc.sweep,
            x: arc.x,
            y: arc.y,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self, _paint: &str) {}

    fn stroke(&mut self, _paint: &str, _width: f32) {}
}
