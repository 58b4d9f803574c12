/// Built-in single character predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    Digit,      // \d
    Word,       // \w
    Whitespace, // \s
    Any,        // .
}

impl Shorthand {
    pub fn matches(self, c: char) -> bool {
        match self {
            Shorthand::Digit => is_decimal_digit(c),
            Shorthand::Word => c.is_alphabetic() || is_decimal_digit(c) || c == '_',
            Shorthand::Whitespace => is_separator_space(c),
            Shorthand::Any => true,
        }
    }
}

/// ASCII digits plus the non-ASCII numeric characters, such as `٣` or `३`.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && c.is_numeric())
}

/// Unicode whitespace minus the no-break spaces and NEL, plus the ASCII
/// information separators.
fn is_separator_space(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Start, // ^
    End,   // $
}

impl AnchorKind {
    /// The character this anchor stands for when it is not at a boundary.
    pub fn as_char(self) -> char {
        match self {
            AnchorKind::Start => '^',
            AnchorKind::End => '$',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    #[default]
    One,
    ZeroOrOne, // ?
    OneOrMore, // +
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Literal(char),
    Shorthand(Shorthand),
    CharClass { members: Vec<char>, negated: bool }, // [abc], [^abc]
    Alternation(Vec<String>),                        // (a|b), branches kept as raw patterns
    Anchor(AnchorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub quantifier: Quantifier,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            quantifier: Quantifier::One,
        }
    }

    pub fn is_anchor(&self, anchor: AnchorKind) -> bool {
        matches!(self.kind, TokenKind::Anchor(a) if a == anchor)
    }

    /// Tests a single input character against this token.
    ///
    /// Alternations span a variable number of characters and never match here.
    pub fn matches_char(&self, c: char) -> bool {
        match &self.kind {
            TokenKind::Literal(l) => c == *l,
            TokenKind::Shorthand(s) => s.matches(c),
            TokenKind::CharClass { members, negated } => members.contains(&c) != *negated,
            TokenKind::Anchor(a) => c == a.as_char(),
            TokenKind::Alternation(_) => false,
        }
    }
}
