use crate::regex::ast::{AnchorKind, Quantifier, Shorthand, Token, TokenKind};

/// Compiles a raw pattern into its token sequence.
///
/// Compilation never fails: an unterminated `[` or an unbalanced `(` is read
/// as a literal character and scanning resumes right after it.
pub fn compile(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let kind = match c {
            '\\' if i + 1 < chars.len() => {
                let escaped = chars[i + 1];
                i += 2;
                match escaped {
                    'd' => TokenKind::Shorthand(Shorthand::Digit),
                    'w' => TokenKind::Shorthand(Shorthand::Word),
                    's' => TokenKind::Shorthand(Shorthand::Whitespace),
                    other => TokenKind::Literal(other),
                }
            }
            '[' => match find_class_end(&chars, i) {
                Some(end) => {
                    let body = &chars[i + 1..end];
                    i = end + 1;
                    match body.split_first() {
                        Some((&'^', rest)) => TokenKind::CharClass {
                            members: rest.to_vec(),
                            negated: true,
                        },
                        _ => TokenKind::CharClass {
                            members: body.to_vec(),
                            negated: false,
                        },
                    }
                }
                None => {
                    i += 1;
                    TokenKind::Literal('[')
                }
            },
            '(' => match find_group_end(&chars, i) {
                Some(end) => {
                    let branches = split_branches(&chars[i + 1..end]);
                    i = end + 1;
                    TokenKind::Alternation(branches)
                }
                None => {
                    i += 1;
                    TokenKind::Literal('(')
                }
            },
            '.' => {
                i += 1;
                TokenKind::Shorthand(Shorthand::Any)
            }
            '^' => {
                i += 1;
                TokenKind::Anchor(AnchorKind::Start)
            }
            '$' => {
                i += 1;
                TokenKind::Anchor(AnchorKind::End)
            }
            _ => {
                i += 1;
                TokenKind::Literal(c)
            }
        };

        let mut token = Token::new(kind);

        // A single `+` or `?` binds to the token just read. A second one is
        // left for the next iteration and becomes a literal.
        match chars.get(i) {
            Some('+') => {
                token.quantifier = Quantifier::OneOrMore;
                i += 1;
            }
            Some('?') => {
                token.quantifier = Quantifier::ZeroOrOne;
                i += 1;
            }
            _ => {}
        }

        tokens.push(token);
    }
    tokens
}

// Index of the first `]` after the `[` at `open`.
fn find_class_end(chars: &[char], open: usize) -> Option<usize> {
    chars[open + 1..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| open + 1 + offset)
}

// Index of the `)` closing the `(` at `open`, counting nested groups.
fn find_group_end(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 1;
    let mut i = open + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits a group body on `|` characters that are not inside a nested group.
fn split_branches(body: &[char]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current_part = String::new();
    let mut paren_depth = 0usize;
    let mut chars = body.iter();

    while let Some(&c) = chars.next() {
        match c {
            '\\' => {
                current_part.push(c);
                if let Some(&escaped) = chars.next() {
                    current_part.push(escaped);
                }
                continue;
            }
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '|' if paren_depth == 0 => {
                parts.push(std::mem::take(&mut current_part));
                continue;
            }
            _ => {}
        }
        current_part.push(c);
    }
    parts.push(current_part);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(c: char) -> Token {
        Token::new(TokenKind::Literal(c))
    }

    fn quantified(kind: TokenKind, quantifier: Quantifier) -> Token {
        Token { kind, quantifier }
    }

    fn alt(branches: &[&str]) -> TokenKind {
        TokenKind::Alternation(branches.iter().map(|b| b.to_string()).collect())
    }

    #[test]
    fn compiles_literals() {
        assert_eq!(compile("ab"), vec![lit('a'), lit('b')]);
        assert!(compile("").is_empty());
    }

    #[test]
    fn compiles_escapes() {
        assert_eq!(
            compile(r"\d\w\s\.\\"),
            vec![
                Token::new(TokenKind::Shorthand(Shorthand::Digit)),
                Token::new(TokenKind::Shorthand(Shorthand::Word)),
                Token::new(TokenKind::Shorthand(Shorthand::Whitespace)),
                lit('.'),
                lit('\\'),
            ]
        );
    }

    #[test]
    fn trailing_backslash_is_literal() {
        assert_eq!(compile("a\\"), vec![lit('a'), lit('\\')]);
    }

    #[test]
    fn escaped_anchor_is_plain_literal() {
        assert_eq!(compile(r"\^\$"), vec![lit('^'), lit('$')]);
    }

    #[test]
    fn compiles_character_classes() {
        assert_eq!(
            compile("[abc][^xy][]"),
            vec![
                Token::new(TokenKind::CharClass {
                    members: vec!['a', 'b', 'c'],
                    negated: false,
                }),
                Token::new(TokenKind::CharClass {
                    members: vec!['x', 'y'],
                    negated: true,
                }),
                Token::new(TokenKind::CharClass {
                    members: vec![],
                    negated: false,
                }),
            ]
        );
    }

    #[test]
    fn unterminated_class_falls_back_to_literal() {
        assert_eq!(compile("[ab"), vec![lit('['), lit('a'), lit('b')]);
    }

    #[test]
    fn compiles_groups_as_alternations() {
        assert_eq!(compile("(cat|dog)"), vec![Token::new(alt(&["cat", "dog"]))]);
        assert_eq!(compile("(ab)"), vec![Token::new(alt(&["ab"]))]);
        assert_eq!(compile("(a|)"), vec![Token::new(alt(&["a", ""]))]);
    }

    #[test]
    fn splits_only_on_top_level_pipes() {
        assert_eq!(
            compile("(a(b|c)|d)"),
            vec![Token::new(alt(&["a(b|c)", "d"]))]
        );
    }

    #[test]
    fn escapes_inside_groups_are_opaque() {
        assert_eq!(compile(r"(\)|\|)"), vec![Token::new(alt(&[r"\)", r"\|"]))]);
    }

    #[test]
    fn unbalanced_group_falls_back_to_literal() {
        assert_eq!(compile("(ab"), vec![lit('('), lit('a'), lit('b')]);
        assert_eq!(compile("a)"), vec![lit('a'), lit(')')]);
    }

    #[test]
    fn attaches_quantifiers() {
        assert_eq!(
            compile("a+b?(x|y)+"),
            vec![
                quantified(TokenKind::Literal('a'), Quantifier::OneOrMore),
                quantified(TokenKind::Literal('b'), Quantifier::ZeroOrOne),
                quantified(alt(&["x", "y"]), Quantifier::OneOrMore),
            ]
        );
    }

    #[test]
    fn quantifiers_do_not_stack() {
        assert_eq!(
            compile("a++"),
            vec![
                quantified(TokenKind::Literal('a'), Quantifier::OneOrMore),
                lit('+'),
            ]
        );
        assert_eq!(
            compile("a?+"),
            vec![
                quantified(TokenKind::Literal('a'), Quantifier::ZeroOrOne),
                lit('+'),
            ]
        );
    }

    #[test]
    fn anchors_take_quantifiers_like_any_token() {
        assert_eq!(
            compile("a^+b"),
            vec![
                lit('a'),
                quantified(TokenKind::Anchor(AnchorKind::Start), Quantifier::OneOrMore),
                lit('b'),
            ]
        );
        assert_eq!(
            compile("a$?b"),
            vec![
                lit('a'),
                quantified(TokenKind::Anchor(AnchorKind::End), Quantifier::ZeroOrOne),
                lit('b'),
            ]
        );
        assert_eq!(
            compile("a$++"),
            vec![
                lit('a'),
                quantified(TokenKind::Anchor(AnchorKind::End), Quantifier::OneOrMore),
                lit('+'),
            ]
        );
    }

    #[test]
    fn anchors_are_tagged_wherever_they_appear() {
        assert_eq!(
            compile("a^$"),
            vec![
                lit('a'),
                Token::new(TokenKind::Anchor(AnchorKind::Start)),
                Token::new(TokenKind::Anchor(AnchorKind::End)),
            ]
        );
    }

    #[test]
    fn compiling_twice_is_identical() {
        let pattern = r"^(\d+|[^x]?)a\s$";
        assert_eq!(compile(pattern), compile(pattern));
    }
}
