use crate::regex::ast::{AnchorKind, Token};
use crate::regex::matcher::search;
use crate::regex::parser::compile;

/// A compiled pattern with its boundary anchors resolved.
///
/// Only a `^` in first position and a `$` in last position of the top-level
/// sequence are anchors. They are removed from `tokens` together with any
/// quantifier attached to them; any other `^` or `$` stays in the sequence and
/// matches its own character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub tokens: Vec<Token>,
    pub start_anchored: bool,
    pub end_anchored: bool,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        let mut tokens = compile(pattern);

        let start_anchored = tokens
            .first()
            .is_some_and(|t| t.is_anchor(AnchorKind::Start));
        let end_anchored = tokens.last().is_some_and(|t| t.is_anchor(AnchorKind::End));

        if end_anchored {
            tokens.pop();
        }
        if start_anchored {
            tokens.remove(0);
        }

        Pattern {
            tokens,
            start_anchored,
            end_anchored,
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        search(self, &chars).is_some()
    }

    /// Returns the part of `input` the pattern matched, if any.
    pub fn find<'a>(&self, input: &'a str) -> Option<&'a str> {
        let chars: Vec<char> = input.chars().collect();
        let (start, end) = search(self, &chars)?;
        Some(&input[byte_offset(input, start)..byte_offset(input, end)])
    }
}

fn byte_offset(input: &str, char_pos: usize) -> usize {
    input
        .char_indices()
        .nth(char_pos)
        .map_or(input.len(), |(offset, _)| offset)
}
