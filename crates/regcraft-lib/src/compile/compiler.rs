//! Compile context and node dispatch.

use indexmap::IndexSet;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::node::Node;
use crate::{Error, Result};

use super::literal::escape_literal;

/// Per-build compilation state.
///
/// Created fresh for every top-level build and discarded afterwards, so
/// capture-name uniqueness never leaks across builds or threads.
#[derive(Debug, Default)]
pub struct CompileCtx {
    pub(super) names: IndexSet<String>,
    show_warnings: bool,
    diagnostics: Diagnostics,
}

impl CompileCtx {
    pub fn new(show_warnings: bool) -> Self {
        Self {
            names: IndexSet::new(),
            show_warnings,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn show_warnings(&self) -> bool {
        self.show_warnings
    }

    /// Capture names registered so far, in traversal order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn capture_count(&self) -> usize {
        self.names.len()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Record an advisory; a no-op unless warnings are enabled.
    pub(super) fn advise(&mut self, kind: DiagnosticKind, message: String) {
        if self.show_warnings() {
            self.diagnostics.report(kind).message(message).emit();
        }
    }

    /// Compile one node into a pattern fragment.
    pub fn compile(&mut self, node: &Node) -> Result<String> {
        match node {
            Node::Literal(text) => Ok(escape_literal(text, false)),
            Node::Raw(text) => compile_raw(text),
            Node::Token(token) => Ok(token.pattern.to_string()),
            Node::Sequence(nodes) => self.compile_nodes(nodes),
            Node::Group(nodes) => self.compile_group(nodes),
            Node::Capture { name, children } => self.compile_capture(name, children),
            Node::Alternation(nodes) => self.compile_alternation(nodes),
            Node::CharClass { members, negate } => self.compile_char_class(members, *negate),
            Node::Repetition { child, repeat } => self.compile_repetition(child, *repeat),
        }
    }

    /// Concatenate the fragments of `nodes`; the first error aborts.
    pub fn compile_nodes(&mut self, nodes: &[Node]) -> Result<String> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.compile(node)?);
        }
        Ok(out)
    }

    fn compile_group(&mut self, nodes: &[Node]) -> Result<String> {
        let body = self.compile_nodes(nodes)?;
        if body.is_empty() {
            return Ok(body);
        }
        Ok(format!("(?:{body})"))
    }

    fn compile_alternation(&mut self, nodes: &[Node]) -> Result<String> {
        if nodes.is_empty() {
            return Ok(String::new());
        }

        let mut branches = Vec::with_capacity(nodes.len());
        for node in nodes {
            branches.push(self.compile(node)?);
        }
        Ok(format!("(?:{})", branches.join("|")))
    }
}

/// Raw fragments pass through verbatim once they parse on their own.
///
/// Breakage that only appears once the fragment is embedded (an unbalanced
/// group closed by the surrounding pattern, say) is not detected here.
fn compile_raw(text: &str) -> Result<String> {
    regex_syntax::Parser::new()
        .parse(text)
        .map_err(|e| Error::RawFragmentSyntax {
            fragment: text.to_string(),
            reason: syntax_reason(&e),
        })?;
    Ok(text.to_string())
}

fn syntax_reason(e: &regex_syntax::Error) -> String {
    match e {
        regex_syntax::Error::Parse(e) => e.kind().to_string(),
        regex_syntax::Error::Translate(e) => e.kind().to_string(),
        _ => e.to_string(),
    }
}
