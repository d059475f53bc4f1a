//! Input tokenization.
//!
//! Converts a raw console line into a command token and parameters.

/// A parsed console line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// The first token, as typed (case is preserved).
    pub command: String,
    /// The remaining tokens, in order.
    pub parameters: Vec<String>,
}

impl ParsedInput {
    /// Returns true when the line was empty after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.command.is_empty() && self.parameters.is_empty()
    }
}

/// Parses console input.
pub struct InputParser;

impl InputParser {
    /// Parses a raw input line.
    ///
    /// - Trims leading and trailing whitespace
    /// - Splits on every single space, so `"a  b"` yields an empty middle token
    /// - Never fails; an empty line gives an empty command and no parameters
    #[must_use]
    pub fn parse(raw: &str) -> ParsedInput {
        let mut tokens = raw.trim().split(' ').map(str::to_string);

        // `split` always yields at least one item
        let command = tokens.next().unwrap_or_default();
        let parameters = tokens.collect();

        ParsedInput {
            command,
            parameters,
        }
    }
}
