use indoc::indoc;

use crate::test_utils::{expect_error, expect_pattern};
use crate::tokens::{DIGIT, LINE_START, WORD_BOUNDARY};
use crate::{DiagnosticKind, Error, ExprTree, Node, NodeKind, Options};

fn a() -> Node {
    Node::lit("a")
}

#[test]
fn at_least() {
    assert_eq!(expect_pattern([a().at_least(0)]), "a*");
    assert_eq!(expect_pattern([a().zero_or_more()]), "a*");
    assert_eq!(expect_pattern([a().at_least(1)]), "a+");
    assert_eq!(expect_pattern([a().one_or_more()]), "a+");
    assert_eq!(expect_pattern([a().at_least(3)]), "a{3,}");
}

#[test]
fn exactly() {
    assert_eq!(expect_pattern([a().exactly(3)]), "a{3}");
    assert_eq!(expect_pattern([a().exactly(1)]), "a{1}");
}

#[test]
fn exactly_zero_drops_the_child() {
    assert_eq!(expect_pattern([Node::lit("x"), a().exactly(0)]), "x");
}

#[test]
fn between() {
    assert_eq!(expect_pattern([a().between(2, 5)]), "a{2,5}");
    assert_eq!(expect_pattern([a().between(0, 9)]), "a{0,9}");
}

#[test]
fn between_zero_one_equals_optional() {
    assert_eq!(expect_pattern([a().between(0, 1)]), "a?");
    assert_eq!(expect_pattern([a().between(0, 1)]), expect_pattern([a().optional()]));
}

#[test]
fn between_equal_bounds_equals_exactly() {
    assert_eq!(expect_pattern([a().between(3, 3)]), "a{3}");
    assert_eq!(expect_pattern([a().between(3, 3)]), expect_pattern([a().exactly(3)]));
    assert_eq!(expect_pattern([a().between(0, 0)]), "");
}

#[test]
fn between_with_inverted_bounds_is_rejected() {
    let err = expect_error([DIGIT.between(5, 2)]);
    assert_eq!(err, Error::QuantifierRange { min: 5, max: 2 });
    insta::assert_snapshot!(err, @"between repetition has min > max (5 > 2)");
}

#[test]
fn inverted_bounds_are_rejected_even_for_empty_child() {
    assert_eq!(
        expect_error([Node::group([]).between(5, 2)]),
        Error::QuantifierRange { min: 5, max: 2 }
    );
}

#[test]
fn child_error_wins_over_range_error() {
    assert_eq!(
        expect_error([Node::group([Node::capture("1", [a()])]).between(5, 2)]),
        Error::InvalidCaptureName("1".to_string())
    );
}

#[test]
fn empty_child_vanishes() {
    assert_eq!(expect_pattern([Node::group([]).one_or_more()]), "");
    assert_eq!(expect_pattern([Node::lit("").exactly(3)]), "");
    assert_eq!(expect_pattern([Node::class([]).optional()]), "");
}

#[test]
fn groups_and_alternations_can_be_repeated() {
    assert_eq!(
        expect_pattern([Node::group([a(), DIGIT]).one_or_more()]),
        r"(?:a\d)+"
    );
    assert_eq!(
        expect_pattern([Node::or([a(), DIGIT]).optional()]),
        r"(?:a|\d)?"
    );
}

#[test]
fn non_repeatable_children_are_rejected() {
    assert_eq!(
        expect_error([LINE_START.optional()]),
        Error::NotRepeatable(NodeKind::Token)
    );
    assert_eq!(
        expect_error([WORD_BOUNDARY.one_or_more()]),
        Error::NotRepeatable(NodeKind::Token)
    );
    assert_eq!(
        expect_error([Node::capture("x", [a()]).optional()]),
        Error::NotRepeatable(NodeKind::Capture)
    );
    assert_eq!(
        expect_error([Node::seq([a()]).one_or_more()]),
        Error::NotRepeatable(NodeKind::Sequence)
    );
    assert_eq!(
        expect_error([Node::raw("a").exactly(2)]),
        Error::NotRepeatable(NodeKind::Raw)
    );
}

#[test]
fn nested_repetition_is_rejected() {
    let err = expect_error([a().optional().optional()]);
    assert_eq!(err, Error::NotRepeatable(NodeKind::Repetition));
    insta::assert_snapshot!(err, @"repetition cannot be repeated");
}

#[test]
fn redundant_between_is_reported_when_warnings_enabled() {
    let tree = ExprTree::new([a().between(0, 1), DIGIT.between(3, 3), a().between(1, 2)]);
    let opts = Options {
        show_warnings: true,
        ..Options::default()
    };

    let (pattern, diagnostics) = tree.build_with_diagnostics(&opts).unwrap();
    assert_eq!(pattern, r"a?\d{3}a{1,2}");

    let kinds: Vec<_> = diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [
            DiagnosticKind::BetweenCouldBeOptional,
            DiagnosticKind::BetweenCouldBeExactly
        ]
    );
    assert_eq!(
        diagnostics.render(),
        indoc! {"
            warning: `.between(0, 1)` could use `.optional()` instead
            warning: `.between(3, 3)` could use `.exactly(3)` instead
        "}
    );
}

#[test]
fn redundant_between_is_silent_by_default() {
    let tree = ExprTree::new([a().between(0, 1), a().between(2, 2)]);

    let (pattern, diagnostics) = tree.build_with_diagnostics(&Options::default()).unwrap();
    assert_eq!(pattern, "a?a{2}");
    assert!(diagnostics.is_empty());
}

#[test]
fn warnings_do_not_change_the_pattern() {
    let tree = ExprTree::new([a().between(0, 1), a().between(4, 4)]);
    let loud = Options {
        show_warnings: true,
        ..Options::default()
    };
    assert_eq!(
        tree.build(&loud).unwrap(),
        tree.build(&Options::default()).unwrap()
    );
}

#[test]
fn dropped_child_does_not_register_capture_names() {
    let x = || Node::group([Node::capture("a", [Node::lit("x")])]);
    assert_eq!(
        expect_pattern([x().exactly(0), Node::capture("a", [Node::lit("y")])]),
        "(?P<a>y)"
    );
    assert_eq!(
        expect_pattern([Node::capture("a", [Node::lit("y")]), x().between(0, 0)]),
        "(?P<a>y)"
    );
}

#[test]
fn dropped_child_is_still_validated() {
    assert_eq!(
        expect_error([Node::group([Node::capture("1", [a()])]).exactly(0)]),
        Error::InvalidCaptureName("1".to_string())
    );
    assert_eq!(
        expect_error([Node::group([
            Node::capture("d", [a()]),
            Node::capture("d", [a()]),
        ])
        .exactly(0)]),
        Error::DuplicateCaptureName("d".to_string())
    );
}

#[test]
fn kept_child_registers_capture_names() {
    assert_eq!(
        expect_error([
            Node::group([Node::capture("a", [Node::lit("x")])]).exactly(2),
            Node::capture("a", [Node::lit("y")]),
        ]),
        Error::DuplicateCaptureName("a".to_string())
    );
}
