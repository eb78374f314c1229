//! Drawing commands produced by the path-data parser.
//!
//! Each variant corresponds to one primitive of the path mini-language.
//! Coordinates are kept exactly as written: relative commands are not
//! resolved against the current point here, that is left to the renderer.

use std::fmt;

use serde::Serialize;

/// A single path drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Start a new subpath at `(x, y)`.
    MoveTo { absolute: bool, x: f32, y: f32 },

    /// Straight line to `(x, y)`.
    LineTo { absolute: bool, x: f32, y: f32 },

    /// Cubic Bézier curve with two control points.
    CubicCurveTo {
        absolute: bool,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    },

    /// Elliptical arc to `(x, y)`.
    ArcTo {
        absolute: bool,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc_flag: bool,
        sweep_flag: bool,
        x: f32,
        y: f32,
    },

    /// Close the current subpath.
    ClosePath,
}

impl DrawCommand {
    /// Whether the command uses absolute coordinates.
    ///
    /// `ClosePath` has no coordinates and reports `true`.
    pub fn is_absolute(&self) -> bool {
        match *self {
            DrawCommand::MoveTo { absolute, .. }
            | DrawCommand::LineTo { absolute, .. }
            | DrawCommand::CubicCurveTo { absolute, .. }
            | DrawCommand::ArcTo { absolute, .. } => absolute,
            DrawCommand::ClosePath => true,
        }
    }

    /// The command letter this primitive is written with.
    pub fn letter(&self) -> char {
        let (upper, absolute) = match *self {
            DrawCommand::MoveTo { absolute, .. } => ('M', absolute),
            DrawCommand::LineTo { absolute, .. } => ('L', absolute),
            DrawCommand::CubicCurveTo { absolute, .. } => ('C', absolute),
            DrawCommand::ArcTo { absolute, .. } => ('A', absolute),
            DrawCommand::ClosePath => return 'z',
        };

        if absolute {
            upper
        } else {
            upper.to_ascii_lowercase()
        }
    }

    /// End point of the command, if it has one.
    pub fn end_point(&self) -> Option<(f32, f32)> {
        match *self {
            DrawCommand::MoveTo { x, y, .. }
            | DrawCommand::LineTo { x, y, .. }
            | DrawCommand::CubicCurveTo { x, y, .. }
            | DrawCommand::ArcTo { x, y, .. } => Some((x, y)),
            DrawCommand::ClosePath => None,
        }
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter();
        match *self {
            DrawCommand::MoveTo { x, y, .. } | DrawCommand::LineTo { x, y, .. } => {
                write!(f, "{letter}{x} {y}")
            }
            DrawCommand::CubicCurveTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
                ..
            } => write!(f, "{letter}{c1x} {c1y} {c2x} {c2y} {x} {y}"),
            DrawCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
                x,
                y,
                ..
            } => write!(
                f,
                "{letter}{rx} {ry} {x_axis_rotation} {} {} {x} {y}",
                flag(large_arc_flag),
                flag(sweep_flag)
            ),
            DrawCommand::ClosePath => write!(f, "{letter}"),
        }
    }
}

/// Serialize a command sequence back into compact path data.
pub fn to_path_data(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_follows_absolute() {
        let abs = DrawCommand::LineTo {
            absolute: true,
            x: 1.0,
            y: 2.0,
        };
        let rel = DrawCommand::LineTo {
            absolute: false,
            x: 1.0,
            y: 2.0,
        };

        assert_eq!(abs.letter(), 'L');
        assert_eq!(rel.letter(), 'l');
        assert_eq!(DrawCommand::ClosePath.letter(), 'z');
    }

    #[test]
    fn test_display_compact_syntax() {
        let arc = DrawCommand::ArcTo {
            absolute: true,
            rx: 5.0,
            ry: 5.0,
            x_axis_rotation: 0.0,
            large_arc_flag: true,
            sweep_flag: false,
            x: 10.0,
            y: -2.5,
        };

        assert_eq!(arc.to_string(), "A5 5 0 1 0 10 -2.5");
    }

    #[test]
    fn test_to_path_data_joins_commands() {
        let commands = [
            DrawCommand::MoveTo {
                absolute: true,
                x: 0.0,
                y: 0.0,
            },
            DrawCommand::CubicCurveTo {
                absolute: false,
                c1x: 1.0,
                c1y: 2.0,
                c2x: 3.0,
                c2y: 4.0,
                x: 5.0,
                y: 6.0,
            },
            DrawCommand::ClosePath,
        ];

        assert_eq!(to_path_data(&commands), "M0 0 c1 2 3 4 5 6 z");
    }

    #[test]
    fn test_end_point() {
        let cmd = DrawCommand::MoveTo {
            absolute: false,
            x: 3.0,
            y: 4.0,
        };
        assert_eq!(cmd.end_point(), Some((3.0, 4.0)));
        assert_eq!(DrawCommand::ClosePath.end_point(), None);
        assert!(DrawCommand::ClosePath.is_absolute());
    }
}
