use log::{debug, trace};

use crate::regex::ast::{Quantifier, Token, TokenKind};
use crate::regex::parser::compile;
use crate::regex::pattern::Pattern;

/// Where a pattern is allowed to line up with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Exact,     // ^...$
    FromStart, // ^...
    AtEnd,     // ...$
    Anywhere,
}

impl Strategy {
    fn for_pattern(pattern: &Pattern) -> Self {
        match (pattern.start_anchored, pattern.end_anchored) {
            (true, true) => Strategy::Exact,
            (true, false) => Strategy::FromStart,
            (false, true) => Strategy::AtEnd,
            (false, false) => Strategy::Anywhere,
        }
    }
}

/// Matches `tokens[index..]` against `input` starting at `pos`.
///
/// Returns the position right after the match. When `required_end` is set the
/// match must finish exactly there.
pub fn match_at(
    input: &[char],
    pos: usize,
    tokens: &[Token],
    index: usize,
    required_end: Option<usize>,
) -> Option<usize> {
    let Some(token) = tokens.get(index) else {
        return match required_end {
            Some(end) if end != pos => None,
            _ => Some(pos),
        };
    };

    if let TokenKind::Alternation(branches) = &token.kind {
        return match_alternation(input, pos, branches, token.quantifier, tokens, index, required_end);
    }

    let matches_here = input.get(pos).is_some_and(|&c| token.matches_char(c));

    match token.quantifier {
        Quantifier::One => {
            if !matches_here {
                return None;
            }
            match_at(input, pos + 1, tokens, index + 1, required_end)
        }
        Quantifier::ZeroOrOne => {
            if matches_here {
                if let Some(end) = match_at(input, pos + 1, tokens, index + 1, required_end) {
                    return Some(end);
                }
            }
            match_at(input, pos, tokens, index + 1, required_end)
        }
        Quantifier::OneOrMore => {
            if !matches_here {
                return None;
            }
            let run = input[pos..]
                .iter()
                .take_while(|&&c| token.matches_char(c))
                .count();

            // Longest run first, then give characters back one at a time.
            (1..=run)
                .rev()
                .find_map(|n| match_at(input, pos + n, tokens, index + 1, required_end))
        }
    }
}

// Matches one branch on its own, consuming as much as it wants.
fn match_branch(input: &[char], pos: usize, branch: &str) -> Option<usize> {
    let branch_tokens = compile(branch);
    trace!(
        "branch {branch:?} compiled to {} tokens, trying at {pos}",
        branch_tokens.len()
    );
    match_at(input, pos, &branch_tokens, 0, None)
}

// First branch whose match is followed by a successful continuation.
fn match_any_branch(
    input: &[char],
    pos: usize,
    branches: &[String],
    tokens: &[Token],
    index: usize,
    required_end: Option<usize>,
) -> Option<usize> {
    branches.iter().find_map(|branch| {
        let end = match_branch(input, pos, branch)?;
        match_at(input, end, tokens, index + 1, required_end)
    })
}

fn match_alternation(
    input: &[char],
    pos: usize,
    branches: &[String],
    quantifier: Quantifier,
    tokens: &[Token],
    index: usize,
    required_end: Option<usize>,
) -> Option<usize> {
    match quantifier {
        Quantifier::One => match_any_branch(input, pos, branches, tokens, index, required_end),
        Quantifier::ZeroOrOne => match_any_branch(input, pos, branches, tokens, index, required_end)
            .or_else(|| match_at(input, pos, tokens, index + 1, required_end)),
        Quantifier::OneOrMore => {
            // Each repetition takes the first branch that matches where the
            // previous one stopped. Repeating ends at the first position where
            // no branch matches, or after a repetition that consumed nothing.
            let mut ends = Vec::new();
            let mut cur = pos;
            while let Some(end) = branches
                .iter()
                .find_map(|branch| match_branch(input, cur, branch))
            {
                ends.push(end);
                if end == cur {
                    break;
                }
                cur = end;
            }

            ends.iter()
                .rev()
                .find_map(|&end| match_at(input, end, tokens, index + 1, required_end))
        }
    }
}

/// Runs a compiled pattern over `input` and returns the matched span as
/// character positions.
///
/// Patterns anchored only at the end are tried from the last start position
/// backwards, so the reported span is the shortest matching suffix.
pub(crate) fn search(pattern: &Pattern, input: &[char]) -> Option<(usize, usize)> {
    let len = input.len();
    let tokens = &pattern.tokens;
    let strategy = Strategy::for_pattern(pattern);
    debug!(
        "matching {} tokens against {len} chars using {strategy:?}",
        tokens.len()
    );

    let attempt = |start: usize, required_end: Option<usize>| {
        match_at(input, start, tokens, 0, required_end).map(|end| (start, end))
    };

    // An empty body needs no special case here: `^$` only fits an empty
    // input, while a lone `^` or `$` fits at position 0 or at the end.
    match strategy {
        Strategy::Exact => attempt(0, Some(len)),
        Strategy::FromStart => attempt(0, None),
        Strategy::AtEnd => (0..=len).rev().find_map(|start| attempt(start, Some(len))),
        Strategy::Anywhere => (0..=len).find_map(|start| attempt(start, None)),
    }
}

/// Reports whether `pattern` matches `input`.
pub fn match_pattern(input: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    Pattern::new(pattern).is_match(input)
}

/// Returns the part of `input` matched by `pattern`.
pub fn find_match<'a>(input: &'a str, pattern: &str) -> Option<&'a str> {
    Pattern::new(pattern).find(input)
}
