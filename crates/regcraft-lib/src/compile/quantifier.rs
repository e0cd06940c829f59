//! Repetition and its reduction policy.

use crate::diagnostics::DiagnosticKind;
use crate::node::{Capability, Node, Repeat};
use crate::{Error, Result};

use super::CompileCtx;

impl CompileCtx {
    pub(super) fn compile_repetition(&mut self, child: &Node, repeat: Repeat) -> Result<String> {
        if !child.supports(Capability::Repeatable) {
            return Err(Error::NotRepeatable(child.kind()));
        }

        let fragment = if drops_child(repeat) {
            // Dropped children never reach the output, so neither do their capture names.
            let names = std::mem::take(&mut self.names);
            let compiled = self.compile(child);
            self.names = names;
            compiled?
        } else {
            self.compile(child)?
        };

        if let Repeat::Between { min, max } = repeat
            && min > max
        {
            return Err(Error::QuantifierRange { min, max });
        }

        // Quantifying nothing is a no-op.
        if fragment.is_empty() {
            return Ok(fragment);
        }

        match self.quantifier_suffix(repeat) {
            Some(suffix) => Ok(fragment + &suffix),
            None => Ok(String::new()),
        }
    }

    /// The suffix for `repeat`, or `None` when the child must be dropped.
    fn quantifier_suffix(&mut self, repeat: Repeat) -> Option<String> {
        match repeat {
            Repeat::AtLeast(0) => Some("*".to_string()),
            Repeat::AtLeast(1) => Some("+".to_string()),
            Repeat::AtLeast(n) => Some(format!("{{{n},}}")),
            Repeat::Exactly(0) => None,
            Repeat::Exactly(n) => Some(format!("{{{n}}}")),
            Repeat::Between { min: 0, max: 1 } => {
                self.advise(
                    DiagnosticKind::BetweenCouldBeOptional,
                    "`.between(0, 1)` could use `.optional()` instead".to_string(),
                );
                Some("?".to_string())
            }
            Repeat::Between { min, max } if min == max => {
                self.advise(
                    DiagnosticKind::BetweenCouldBeExactly,
                    format!("`.between({min}, {max})` could use `.exactly({min})` instead"),
                );
                (min > 0).then(|| format!("{{{min}}}"))
            }
            Repeat::Between { min, max } => Some(format!("{{{min},{max}}}")),
            Repeat::Optional => Some("?".to_string()),
        }
    }
}

/// Repeats whose suffix is `None` in the reduction table.
fn drops_child(repeat: Repeat) -> bool {
    matches!(
        repeat,
        Repeat::Exactly(0) | Repeat::Between { min: 0, max: 0 }
    )
}
