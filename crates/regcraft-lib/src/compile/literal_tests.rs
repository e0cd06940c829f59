use crate::test_utils::expect_pattern;
use crate::{Node, Options, exp};

use super::escape_literal;

#[test]
fn single_plain_character_stays_bare() {
    assert_eq!(escape_literal("a", false), "a");
    assert_eq!(escape_literal("é", false), "é");
}

#[test]
fn single_special_character_is_escaped_without_group() {
    assert_eq!(escape_literal(".", false), r"\.");
    assert_eq!(escape_literal("\\", false), r"\\");
    assert_eq!(escape_literal("$", false), r"\$");
}

#[test]
fn multi_character_literal_is_grouped() {
    assert_eq!(escape_literal("ab", false), "(?:ab)");
    assert_eq!(escape_literal("a.b", false), r"(?:a\.b)");
    assert_eq!(escape_literal("日本", false), "(?:日本)");
}

#[test]
fn empty_literal_is_empty() {
    assert_eq!(escape_literal("", false), "");
    assert_eq!(escape_literal("", true), "");
}

#[test]
fn every_general_special_is_escaped() {
    assert_eq!(
        escape_literal(r".*+-!?:#()[]{}^$|\", false),
        r"(?:\.\*\+\-\!\?\:\#\(\)\[\]\{\}\^\$\|\\)"
    );
}

#[test]
fn angle_brackets_stay_bare() {
    assert_eq!(escape_literal("<%>", false), "(?:<%>)");
}

#[test]
fn class_position_escapes_only_class_specials() {
    assert_eq!(escape_literal(".%+?", true), ".%+?");
    assert_eq!(escape_literal("-.", true), r"\-.");
    assert_eq!(escape_literal("a]", true), r"a\]");
    assert_eq!(escape_literal("[^", true), r"\[^");
    assert_eq!(escape_literal("&&~~", true), r"\&\&\~\~");
}

#[test]
fn class_position_is_never_grouped() {
    assert_eq!(escape_literal("abc", true), "abc");
}

#[test]
fn quantifier_binds_to_whole_literal() {
    assert_eq!(expect_pattern([Node::lit("ab").one_or_more()]), "(?:ab)+");
    assert_eq!(expect_pattern([Node::lit(".").optional()]), r"\.?");
}

const PUNCTUATION: &str = r#".*+-!?:#<>()[]{}^$|\&~"'"#;

#[test]
fn punctuation_literal_matches_itself() {
    let re = exp![Node::lit(PUNCTUATION)].must_compile(&Options::default());
    assert!(re.is_match(PUNCTUATION));
    assert!(!re.is_match("abc"));

    for c in PUNCTUATION.chars() {
        let text = c.to_string();
        let re = exp![Node::lit(text.as_str())].must_compile(&Options::default());
        assert!(re.is_match(&text), "{text}");
    }
}

#[test]
fn punctuation_class_member_matches_itself() {
    for c in PUNCTUATION.chars() {
        let text = c.to_string();
        let re = exp![Node::class([Node::lit(text.as_str())])].must_compile(&Options::default());
        assert!(re.is_match(&text), "{text}");
        assert!(!re.is_match("a"), "{text}");
    }

    let re = exp![Node::class([Node::lit(PUNCTUATION)]).one_or_more()]
        .must_compile(&Options::default());
    let whole = re.find(PUNCTUATION).unwrap();
    assert_eq!(whole.range(), 0..PUNCTUATION.len());
}
