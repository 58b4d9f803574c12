//! A small backtracking regex matcher.
//!
//! Supported syntax: literals, `.`, `\d`, `\w`, `\s`, `[abc]`, `[^abc]`,
//! `(a|b)` groups, the `?` and `+` quantifiers, and the `^` / `$` anchors.
//! Malformed constructs are read as literal characters rather than rejected.
//!
//! ```
//! use tinygrep::regex::{find_match, match_pattern};
//!
//! assert!(match_pattern("I see a cat", "(cat|dog)"));
//! assert_eq!(find_match("order 66 now", r"\d+"), Some("66"));
//! ```

pub mod app;
pub mod cli;
pub mod regex;

pub use regex::{Pattern, find_match, match_pattern};
