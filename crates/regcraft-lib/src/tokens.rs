//! Predefined token catalogue.
//!
//! Each constant is a [`Node::Token`]. Tokens flagged class-safe may appear in
//! a character class; bracketed ones are spliced into the parent class body.

use crate::node::{Node, Token};

const fn atom(pattern: &'static str) -> Node {
    Node::Token(Token::new(pattern, true, true))
}

const fn meta(pattern: &'static str, repeatable: bool) -> Node {
    Node::Token(Token::new(pattern, false, repeatable))
}

// Whitespace

/// `\s`
pub const WHITESPACE: Node = atom(r"\s");
/// `\S`
pub const NON_WHITESPACE: Node = atom(r"\S");
/// `\t`
pub const TAB: Node = atom(r"\t");
/// `\n`
pub const NEWLINE: Node = atom(r"\n");
/// `\r`
pub const RETURN: Node = atom(r"\r");
/// `(?:\r\n|\n|\r)`
pub const LINE_BREAK: Node = meta(r"(?:\r\n|\n|\r)", true);
/// A single ASCII space.
pub const SPACE: Node = atom(" ");
/// `\p{Z}`: all Unicode space separators (space, no-break space, thin space, ideographic space).
pub const SPACE_SEPARATOR: Node = atom(r"\p{Z}");

// Letters

/// `[a-z]`
pub const LOWER_LATIN: Node = atom("[a-z]");
/// `[A-Z]`
pub const UPPER_LATIN: Node = atom("[A-Z]");
/// `[a-zA-Z]`
pub const LATIN: Node = atom("[a-zA-Z]");
/// `[a-zA-Z0-9]`
pub const LATIN_DIGIT: Node = atom("[a-zA-Z0-9]");
/// `\p{Latin}`: Latin script letters including accented and extended ones (ä, ß, ñ, ç).
pub const EXTENDED_LATIN: Node = atom(r"\p{Latin}");
/// `\p{L}`: all Unicode letters.
pub const LETTER: Node = atom(r"\p{L}");
/// `\p{Lu}`
pub const UPPER_LETTER: Node = atom(r"\p{Lu}");
/// `\p{Ll}`
pub const LOWER_LETTER: Node = atom(r"\p{Ll}");
/// `\p{Cyrillic}`
pub const CYRILLIC: Node = atom(r"\p{Cyrillic}");
/// `\p{Greek}`
pub const GREEK: Node = atom(r"\p{Greek}");
/// `\p{Arabic}`
pub const ARABIC: Node = atom(r"\p{Arabic}");
/// `\p{Hebrew}`
pub const HEBREW: Node = atom(r"\p{Hebrew}");
/// `\p{Han}`: CJK ideographs.
pub const HAN: Node = atom(r"\p{Han}");
/// `[\p{L}\p{N}\p{P}\p{S}]`: printable characters.
pub const PRINTABLE: Node = atom(r"[\p{L}\p{N}\p{P}\p{S}]");

// Digits

/// `\p{Nd}`: Unicode decimal digits.
pub const DIGIT_UNICODE: Node = atom(r"\p{Nd}");
/// `\p{N}`: digits, Roman numerals, fractions, superscripts.
pub const NUMERIC: Node = atom(r"\p{N}");
/// `[0-9A-Fa-f]`
pub const HEX_DIGIT: Node = atom("[0-9A-Fa-f]");
/// `\d`
pub const DIGIT: Node = atom(r"\d");
/// `\D`
pub const NON_DIGIT: Node = atom(r"\D");

// Punctuation and symbols

/// `\p{P}`
pub const PUNCTUATION: Node = atom(r"\p{P}");
/// `\p{S}`: currency, math, emoji and similar.
pub const SYMBOL: Node = atom(r"\p{S}");

// Word characters

/// `\w`
pub const WORD_CHAR: Node = atom(r"\w");
/// `\W`
pub const NON_WORD_CHAR: Node = atom(r"\W");

// Meta and assertions

/// `.`
pub const ANY_CHAR: Node = meta(".", true);
/// `^`
pub const LINE_START: Node = meta("^", false);
/// `$`
pub const LINE_END: Node = meta("$", false);
/// `\b`
pub const WORD_BOUNDARY: Node = meta(r"\b", false);
/// `\B`
pub const NON_WORD_BOUNDARY: Node = meta(r"\B", false);
