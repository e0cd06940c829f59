//! regcraft: typed expression trees compiled into regular-expression patterns.
//!
//! Instead of hand-writing regex syntax, callers assemble a tree of [`Node`]s
//! and compile it into a pattern string for the `regex-automata` engine:
//! - `node` - the closed set of node variants and their capability table
//! - `tokens` - predefined atoms (digit, word, anchors, Unicode classes)
//! - `compile` - escaping, structural compilation, capture-name checks
//! - `tree` - build facade applying mode flags with a fresh context per build
//! - `captures` - post-match extraction of named groups
//! - `helpers` - prebuilt patterns composed from the public vocabulary
//!
//! # Example
//!
//! ```
//! use regcraft_lib::{exp, Options, find_captures, tokens, Node};
//!
//! let tree = exp![Node::capture("word", [tokens::WORD_CHAR.one_or_more()])];
//! assert_eq!(tree.build(&Options::default()).unwrap(), r"(?P<word>\w+)");
//!
//! let re = tree.compile(&Options::default()).unwrap();
//! let caps = find_captures(&re, "ab cd").unwrap();
//! assert_eq!(caps["word"], vec![Some("ab"), Some("cd")]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod captures;
pub mod compile;
pub mod diagnostics;
pub mod explain;
pub mod helpers;
pub mod node;
pub mod tokens;
pub mod tree;

#[cfg(test)]
mod test_utils;

pub use captures::{Captures, find_captures};
pub use diagnostics::{DiagnosticKind, Diagnostics, Severity};
pub use node::{Capability, Node, NodeKind, Repeat, Token};
pub use tree::{ExprTree, Options};

/// Errors that can occur while compiling an expression tree.
///
/// The structural kinds are detected during compilation; the first one found
/// in a depth-first, left-to-right traversal aborts the build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid capture group name `{0}`")]
    InvalidCaptureName(String),

    #[error("duplicate capture group name `{0}`")]
    DuplicateCaptureName(String),

    #[error("{0} cannot be put in a character class")]
    InvalidCharClassMember(String),

    #[error("{0} cannot be repeated")]
    NotRepeatable(NodeKind),

    #[error("between repetition has min > max ({min} > {max})")]
    QuantifierRange { min: u32, max: u32 },

    #[error("raw fragment `{fragment}` is not a valid pattern: {reason}")]
    RawFragmentSyntax { fragment: String, reason: String },

    /// The assembled pattern was rejected by the regex engine.
    #[error("regex engine rejected the pattern: {0}")]
    EngineRejected(String),
}

/// Result type for tree compilation.
pub type Result<T> = std::result::Result<T, Error>;
