use super::config::{FormatConfig, LITERAL_COST};
use super::cost::match_cost_with;

/// A single unit of the compressed representation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes starting `offset + 1` bytes back
    Match { offset: usize, length: usize },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length,
        }
    }

    /// Exact number of bits the token occupies in the stream
    pub fn cost(&self, config: &FormatConfig) -> u32 {
        match *self {
            Token::Literal(_) => LITERAL_COST,
            Token::Match { offset, length } => match_cost_with(config, offset, length),
        }
    }
}
