//! Build facade: top-level node sequences and global mode flags.

use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};

use crate::compile::CompileCtx;
use crate::diagnostics::Diagnostics;
use crate::explain::Explain;
use crate::node::Node;
use crate::{Error, Result};

/// Build options. Each mode flag maps to one inline flag letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// `(?i)`
    pub case_insensitive: bool,
    /// `(?m)`
    pub multiline: bool,
    /// `(?s)`
    pub dot_matches_newline: bool,
    /// Record advisories such as redundant `between` quantifiers.
    pub show_warnings: bool,
}

impl Options {
    /// Combined inline flag group, e.g. `(?is)`; empty when no mode is set.
    pub fn mode_prefix(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multiline {
            letters.push('m');
        }
        if self.dot_matches_newline {
            letters.push('s');
        }
        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }
}

/// A top-level sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprTree {
    nodes: Vec<Node>,
}

/// Build an [`ExprTree`] from a list of nodes.
///
/// ```
/// use regcraft_lib::{exp, tokens, Node, Options};
/// let tree = exp![tokens::LINE_START, Node::lit("a.b")];
/// assert_eq!(tree.must_build(&Options::default()), r"^(?:a\.b)");
/// ```
#[macro_export]
macro_rules! exp {
    ($($node:expr),* $(,)?) => {{
        let nodes: ::std::vec::Vec<$crate::Node> = ::std::vec![$($node),*];
        $crate::ExprTree::new(nodes)
    }};
}

impl ExprTree {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Compile the tree into a pattern string.
    pub fn build(&self, opts: &Options) -> Result<String> {
        self.build_with_diagnostics(opts).map(|(pattern, _)| pattern)
    }

    /// Compile the tree, also returning the advisories collected on the way.
    ///
    /// A fresh [`CompileCtx`] is created per call; nothing is shared between builds.
    pub fn build_with_diagnostics(&self, opts: &Options) -> Result<(String, Diagnostics)> {
        let mut ctx = CompileCtx::new(opts.show_warnings);
        let body = ctx.compile_nodes(&self.nodes)?;
        let pattern = opts.mode_prefix() + &body;

        tracing::debug!(
            len = pattern.len(),
            captures = ctx.capture_count(),
            "built pattern"
        );
        Ok((pattern, ctx.into_diagnostics()))
    }

    /// Like [`ExprTree::build`], but aborts on error.
    ///
    /// # Panics
    ///
    /// Panics if the tree does not compile. Only use it for trees known to be valid.
    pub fn must_build(&self, opts: &Options) -> String {
        self.build(opts)
            .unwrap_or_else(|e| panic!("failed to build pattern: {e}"))
    }

    /// Build the pattern and hand it to the regex engine.
    pub fn compile(&self, opts: &Options) -> Result<Regex> {
        self.compile_with_diagnostics(opts).map(|(re, _)| re)
    }

    /// Like [`ExprTree::compile`], keeping the advisories of the build.
    pub fn compile_with_diagnostics(&self, opts: &Options) -> Result<(Regex, Diagnostics)> {
        let (pattern, diagnostics) = self.build_with_diagnostics(opts)?;
        let re = Regex::new(&pattern).map_err(|e| Error::EngineRejected(e.to_string()))?;
        Ok((re, diagnostics))
    }

    /// # Panics
    ///
    /// Panics if the tree does not compile or the engine rejects the pattern.
    pub fn must_compile(&self, opts: &Options) -> Regex {
        self.compile(opts)
            .unwrap_or_else(|e| panic!("failed to compile pattern: {e}"))
    }

    /// Indented outline of the tree, one node per line.
    pub fn explain(&self) -> String {
        Explain::new(&self.nodes).to_string()
    }
}

impl From<Vec<Node>> for ExprTree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<Node> for ExprTree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter)
    }
}
