//! Named captures.

use std::sync::LazyLock;

use regex_automata::meta::Regex;

use crate::node::Node;
use crate::tree::Options;
use crate::{Error, Result, exp, tokens};

use super::CompileCtx;

/// `^(?:[a-z]|[A-Z])[a-zA-Z0-9_]*$`, assembled from the library's own vocabulary.
static CAPTURE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = exp![
        tokens::LINE_START,
        Node::or([tokens::LOWER_LATIN, tokens::UPPER_LATIN]),
        Node::class([tokens::LATIN_DIGIT, Node::lit("_")]).zero_or_more(),
        tokens::LINE_END,
    ]
    .must_build(&Options::default());
    Regex::new(&pattern).expect("capture name pattern must compile")
});

/// An ASCII letter followed by ASCII word characters.
pub fn is_valid_capture_name(name: &str) -> bool {
    CAPTURE_NAME.is_match(name)
}

impl CompileCtx {
    /// A capture without children compiles to nothing and never consumes its name.
    pub(super) fn compile_capture(&mut self, name: &str, children: &[Node]) -> Result<String> {
        if children.is_empty() {
            return Ok(String::new());
        }
        if !is_valid_capture_name(name) {
            return Err(Error::InvalidCaptureName(name.to_string()));
        }
        if !self.names.insert(name.to_string()) {
            return Err(Error::DuplicateCaptureName(name.to_string()));
        }

        let body = self.compile_nodes(children)?;
        Ok(format!("(?P<{name}>{body})"))
    }
}
