pub mod ast;
pub mod matcher;
pub mod parser;
pub mod pattern;

pub use ast::{AnchorKind, Quantifier, Shorthand, Token, TokenKind};
pub use matcher::{find_match, match_at, match_pattern};
pub use parser::compile;
pub use pattern::Pattern;
