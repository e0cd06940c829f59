//! Character classes.

use crate::node::{Capability, Node};
use crate::{Error, Result};

use super::CompileCtx;
use super::literal::escape_literal;

impl CompileCtx {
    pub(super) fn compile_char_class(&mut self, members: &[Node], negate: bool) -> Result<String> {
        let mut body = String::new();
        for member in members {
            if !member.supports(Capability::CharClassable) {
                return Err(Error::InvalidCharClassMember(member.describe()));
            }
            let fragment = match member {
                Node::Literal(text) => escape_literal(text, true),
                // `[a-z]` inside `[...]` becomes `a-z`
                Node::Token(token) => token.bracketed_body().unwrap_or(token.pattern).to_string(),
                Node::CharClass { .. } => self.compile(member)?,
                Node::Raw(_)
                | Node::Sequence(_)
                | Node::Group(_)
                | Node::Capture { .. }
                | Node::Alternation(_)
                | Node::Repetition { .. } => {
                    unreachable!("{} rejected by the capability table", member.kind())
                }
            };
            body.push_str(&fragment);
        }

        // Never emit `[]` or `[^]`.
        if body.is_empty() {
            return Ok(body);
        }

        if negate {
            Ok(format!("[^{body}]"))
        } else if body.starts_with('^') {
            Ok(format!(r"[\{body}]"))
        } else {
            Ok(format!("[{body}]"))
        }
    }
}
