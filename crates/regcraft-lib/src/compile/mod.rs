//! Tree-to-pattern compilation.
//!
//! Every node compiles to a pattern fragment; fragments of siblings are
//! concatenated in declaration order. One [`CompileCtx`] lives for exactly one
//! build and carries the capture names used so far plus the warnings flag.
//!
//! The compiler is split into focused modules:
//! - `compiler`: context state, dispatch, sequences, groups, alternations, raw fragments
//! - `literal`: context-sensitive escaping of literal text
//! - `capture`: capture-name format check and registration
//! - `char_class`: member validation, flattening and negation
//! - `quantifier`: repetition reduction policy

mod capture;
mod char_class;
mod compiler;
mod literal;
mod quantifier;

#[cfg(test)]
mod literal_tests;
#[cfg(test)]
mod quantifier_tests;

pub use capture::is_valid_capture_name;
pub use compiler::CompileCtx;
pub use literal::escape_literal;
