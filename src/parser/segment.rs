//! Splitting path data into command letters and their argument blocks.

/// Letters that start a new command.
///
/// `h` and `v` are recognized so that they delimit blocks, even though
/// the segment builder rejects them.
pub const COMMAND_LETTERS: &str = "aAcChHmMlLvVzZ";

/// Command letters and argument blocks, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments<'a> {
    /// Text before the first command letter (normally blank).
    pub leading: &'a str,
    /// One entry per command letter.
    pub commands: Vec<char>,
    /// Text between each command letter and the next, parallel to `commands`.
    pub blocks: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over `(letter, block)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'a str)> + '_ {
        self.commands.iter().copied().zip(self.blocks.iter().copied())
    }
}

/// Check whether a character starts a command.
pub fn is_command_letter(c: char) -> bool {
    COMMAND_LETTERS.contains(c)
}

/// Split cleaned path data into parallel command and block sequences.
pub fn split_commands(data: &str) -> Segments<'_> {
    let mut segments = Segments::default();
    let mut block_start = None;
    let mut leading_end = data.len();

    for (i, c) in data.char_indices() {
        if !is_command_letter(c) {
            continue;
        }

        match block_start {
            Some(start) => segments.blocks.push(&data[start..i]),
            None => leading_end = i,
        }
        segments.commands.push(c);
        block_start = Some(i + c.len_utf8());
    }

    if let Some(start) = block_start {
        segments.blocks.push(&data[start..]);
    }
    segments.leading = &data[..leading_end];

    segments
}

/// Split an argument block into numeric tokens.
///
/// Commas and any whitespace separate tokens; empty tokens are dropped.
pub fn argument_tokens(block: &str) -> Vec<&str> {
    block
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}
