//! Path data parser.
//!
//! Turns a `d` attribute into a sequence of `DrawCommand`s:
//!
//! 1. `clean_path_data` separates sign-glued numbers (`10-5` → `10 -5`)
//! 2. `split_commands` pairs each command letter with its argument block
//! 3. `SegmentBuilder` expands every block into one or more commands
//!
//! A block may hold several argument groups for the same letter
//! (`M0,0 10,10` is two `MoveTo`s). Each group must be complete.

use tracing::trace;

use crate::error::{Result, SceneError};
use crate::types::DrawCommand;

use super::clean::clean_path_data;
use super::segment::{argument_tokens, split_commands, Segments};

/// Parse a path data string into drawing commands.
pub fn parse_path_data(data: &str) -> Result<Vec<DrawCommand>> {
    let cleaned = clean_path_data(data);
    let segments = split_commands(&cleaned);

    let leading = argument_tokens(segments.leading);
    if !leading.is_empty() {
        return Err(SceneError::UnconsumedPathData {
            remaining_token_count: leading.len(),
            remaining_content: segments.leading.trim().to_string(),
        });
    }

    SegmentBuilder::new(&segments).build()
}

/// Number of arguments one instance of a command consumes.
///
/// Horizontal/vertical lines take a single coordinate and are not
/// supported; neither is anything outside the command alphabet.
pub fn arity(letter: char) -> Result<usize> {
    match letter {
        'm' | 'M' | 'l' | 'L' => Ok(2),
        'c' | 'C' => Ok(6),
        'a' | 'A' => Ok(7),
        'z' | 'Z' => Ok(0),
        _ => Err(SceneError::UnsupportedCommand { letter }),
    }
}

/// Builds drawing commands from segmented path data.
///
/// Walks the command/block pairs with a cursor; each letter consumes
/// exactly the block at its own position.
pub struct SegmentBuilder<'s, 'a> {
    segments: &'s Segments<'a>,
    cursor: usize,
    commands: Vec<DrawCommand>,
}

impl<'s, 'a> SegmentBuilder<'s, 'a> {
    pub fn new(segments: &'s Segments<'a>) -> Self {
        Self {
            segments,
            cursor: 0,
            commands: Vec::new(),
        }
    }

    /// Consume every command and return the built sequence.
    pub fn build(mut self) -> Result<Vec<DrawCommand>> {
        while let Some((letter, block)) = self.next_segment() {
            self.push_segment(letter, block)?;
        }

        Ok(self.commands)
    }

    fn next_segment(&mut self) -> Option<(char, &'a str)> {
        let letter = *self.segments.commands.get(self.cursor)?;
        let block = self.segments.blocks.get(self.cursor).copied().unwrap_or("");
        self.cursor += 1;
        Some((letter, block))
    }

    fn push_segment(&mut self, letter: char, block: &str) -> Result<()> {
        let arity = arity(letter)?;
        let args = argument_tokens(block);

        if arity == 0 {
            // A close consumes nothing; anything after it is left over.
            if !args.is_empty() {
                return Err(SceneError::UnconsumedPathData {
                    remaining_token_count: args.len(),
                    remaining_content: block.trim().to_string(),
                });
            }
            trace!(%letter, "close path");
            self.commands.push(DrawCommand::ClosePath);
            return Ok(());
        }

        if args.len() % arity != 0 {
            if matches!(letter, 'c' | 'C') && args.len() % 4 == 0 {
                // Four arguments per group is the quadratic form.
                return Err(SceneError::UnsupportedCommand { letter });
            }
            return Err(SceneError::IncompleteArgumentGroup {
                command: letter,
                provided_count: args.len(),
                required_arity: arity,
            });
        }

        let absolute = letter.is_ascii_uppercase();
        trace!(%letter, repetitions = args.len() / arity, "path command");

        for group in args.chunks_exact(arity) {
            let command = match letter {
                'm' | 'M' => DrawCommand::MoveTo {
                    absolute,
                    x: number(group[0])?,
                    y: number(group[1])?,
                },
                'l' | 'L' => DrawCommand::LineTo {
                    absolute,
                    x: number(group[0])?,
                    y: number(group[1])?,
                },
                'c' | 'C' => DrawCommand::CubicCurveTo {
                    absolute,
                    c1x: number(group[0])?,
                    c1y: number(group[1])?,
                    c2x: number(group[2])?,
                    c2y: number(group[3])?,
                    x: number(group[4])?,
                    y: number(group[5])?,
                },
                'a' | 'A' => DrawCommand::ArcTo {
                    absolute,
                    rx: number(group[0])?,
                    ry: number(group[1])?,
                    x_axis_rotation: number(group[2])?,
                    large_arc_flag: flag(group[3])?,
                    sweep_flag: flag(group[4])?,
                    x: number(group[5])?,
                    y: number(group[6])?,
                },
                _ => return Err(SceneError::UnsupportedCommand { letter }),
            };
            self.commands.push(command);
        }

        Ok(())
    }
}

/// Parse a finite number.
fn number(token: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SceneError::NumericParseFailure {
            token: token.to_string(),
        })
}

/// Parse an arc flag, which must be 0 or 1.
fn flag(token: &str) -> Result<bool> {
    match number(token)? {
        v if v == 0.0 => Ok(false),
        v if v == 1.0 => Ok(true),
        _ => Err(SceneError::NumericParseFailure {
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::to_path_data;

    fn move_to(absolute: bool, x: f32, y: f32) -> DrawCommand {
        DrawCommand::MoveTo { absolute, x, y }
    }

    #[test]
    fn test_repeated_move_to() {
        let commands = parse_path_data("M10,10 20,20 30,30").unwrap();

        assert_eq!(
            commands,
            vec![
                move_to(true, 10.0, 10.0),
                move_to(true, 20.0, 20.0),
                move_to(true, 30.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_lowercase_is_relative() {
        let commands = parse_path_data("m10,10 20,20 30,30").unwrap();

        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| !c.is_absolute()));
    }

    #[test]
    fn test_cubic_two_repetitions() {
        let commands = parse_path_data("c0,0 10,10 20,0 20,20 30,30 40,0").unwrap();

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            DrawCommand::CubicCurveTo {
                absolute: false,
                c1x: 20.0,
                c1y: 20.0,
                c2x: 30.0,
                c2y: 30.0,
                x: 40.0,
                y: 0.0,
            }
        );
    }

    #[test]
    fn test_arc_fields_in_order() {
        let commands = parse_path_data("A25 26 -30 0 1 50 -25").unwrap();

        assert_eq!(
            commands,
            vec![DrawCommand::ArcTo {
                absolute: true,
                rx: 25.0,
                ry: 26.0,
                x_axis_rotation: -30.0,
                large_arc_flag: false,
                sweep_flag: true,
                x: 50.0,
                y: -25.0,
            }]
        );
    }

    #[test]
    fn test_arc_incomplete_group() {
        let err = parse_path_data("a25 25 0 0 1 50").unwrap_err();

        assert!(matches!(
            err,
            SceneError::IncompleteArgumentGroup {
                command: 'a',
                provided_count: 6,
                required_arity: 7,
            }
        ));
    }

    #[test]
    fn test_arc_flag_must_be_binary() {
        let err = parse_path_data("a25 25 0 2 1 50 50").unwrap_err();
        assert!(matches!(err, SceneError::NumericParseFailure { token } if token == "2"));
    }

    #[test]
    fn test_close_path_ignores_whitespace() {
        assert_eq!(parse_path_data("z").unwrap(), vec![DrawCommand::ClosePath]);
        assert_eq!(
            parse_path_data("M0 0 z  \n").unwrap(),
            vec![move_to(true, 0.0, 0.0), DrawCommand::ClosePath]
        );
        assert_eq!(parse_path_data("Z").unwrap(), vec![DrawCommand::ClosePath]);
    }

    #[test]
    fn test_numbers_after_close_are_unconsumed() {
        let err = parse_path_data("M0 0 z 5 6").unwrap_err();

        assert!(matches!(
            err,
            SceneError::UnconsumedPathData {
                remaining_token_count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_numbers_before_first_command_are_unconsumed() {
        let err = parse_path_data("3 M0 0").unwrap_err();

        assert!(matches!(
            err,
            SceneError::UnconsumedPathData {
                remaining_token_count: 1,
                ref remaining_content,
            } if remaining_content == "3"
        ));
    }

    #[test]
    fn test_horizontal_vertical_unsupported() {
        for data in ["M0 0 h10", "M0 0 H10", "M0 0 v10", "M0 0 V10"] {
            let err = parse_path_data(data).unwrap_err();
            assert!(matches!(err, SceneError::UnsupportedCommand { .. }), "{data}");
        }
    }

    #[test]
    fn test_quadratic_form_unsupported() {
        let err = parse_path_data("M0 0 c1 1 2 2").unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedCommand { letter: 'c' }));

        let err = parse_path_data("M0 0 C1 1 2").unwrap_err();
        assert!(matches!(
            err,
            SceneError::IncompleteArgumentGroup {
                command: 'C',
                provided_count: 3,
                required_arity: 6,
            }
        ));
    }

    #[test]
    fn test_odd_line_arguments() {
        let err = parse_path_data("M0 0 L1 2 3").unwrap_err();

        assert!(matches!(
            err,
            SceneError::IncompleteArgumentGroup {
                command: 'L',
                provided_count: 3,
                required_arity: 2,
            }
        ));
    }

    #[test]
    fn test_glued_negatives() {
        let commands = parse_path_data("M10-5L3.5-2").unwrap();

        assert_eq!(
            commands,
            vec![
                move_to(true, 10.0, -5.0),
                DrawCommand::LineTo {
                    absolute: true,
                    x: 3.5,
                    y: -2.0
                },
            ]
        );
    }

    #[test]
    fn test_bad_number() {
        let err = parse_path_data("M0 0 L1 x").unwrap_err();
        assert!(matches!(err, SceneError::NumericParseFailure { token } if token == "x"));

        let err = parse_path_data("M0 inf").unwrap_err();
        assert!(matches!(err, SceneError::NumericParseFailure { .. }));
    }

    #[test]
    fn test_empty_data() {
        assert!(parse_path_data("").unwrap().is_empty());
        assert!(parse_path_data("   ").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let source = "M10.5,-3 l4-4 4 4 C1,2 3,4 5,6 a5 5 30 1 0 -10 0 L0 0z m1 1";
        let commands = parse_path_data(source).unwrap();
        let reparsed = parse_path_data(&to_path_data(&commands)).unwrap();

        assert_eq!(reparsed, commands);
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(arity('M').unwrap(), 2);
        assert_eq!(arity('l').unwrap(), 2);
        assert_eq!(arity('c').unwrap(), 6);
        assert_eq!(arity('A').unwrap(), 7);
        assert_eq!(arity('z').unwrap(), 0);
        assert!(arity('h').is_err());
        assert!(arity('Q').is_err());
    }
}
