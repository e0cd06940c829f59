//! Prebuilt patterns composed purely from the public node constructors.
//!
//! Each helper is a named capture, so the helpers that reuse [`domain`] put a
//! `Domain` capture in the tree; two such helpers cannot share one build.
//!
//! Word characters here are ASCII (`[a-zA-Z0-9_]`), not the engine's Unicode `\w`.

use crate::node::Node;
use crate::tokens::{DIGIT, LATIN_DIGIT, WHITESPACE};

/// Helper name → constructor.
pub const ALL: &[(&str, fn() -> Node)] = &[
    ("domain", domain),
    ("email", email),
    ("phone", international_phone),
    ("credit-card", credit_card),
    ("url", full_url),
];

/// Look up a helper by its [`ALL`] name.
pub fn by_name(name: &str) -> Option<Node> {
    ALL.iter()
        .find(|(helper, _)| *helper == name)
        .map(|(_, build)| build())
}

/// ASCII word characters plus `extra`, as one class.
fn word_class(extra: &str) -> Node {
    Node::class([LATIN_DIGIT, Node::lit(format!("_{extra}"))])
}

/// `example.com`, `a-b.io`; captures `Domain`.
pub fn domain() -> Node {
    Node::capture(
        "Domain",
        [
            Node::or([
                LATIN_DIGIT,
                Node::group([
                    LATIN_DIGIT,
                    Node::class([LATIN_DIGIT, Node::lit("-.")]).zero_or_more(),
                    LATIN_DIGIT,
                ]),
            ]),
            Node::lit("."),
            LATIN_DIGIT.between(1, 63),
        ],
    )
}

/// `user.name+tag@example.com`; captures `Email`, `Email_localPart`, `Email_domain`.
pub fn email() -> Node {
    Node::capture(
        "Email",
        [
            Node::capture(
                "Email_localPart",
                [Node::or([
                    word_class("%+"),
                    Node::group([
                        word_class("%+"),
                        word_class(".%+-").zero_or_more(),
                        word_class("%+-"),
                    ]),
                ])
                .between(1, 64)],
            ),
            Node::lit("@"),
            Node::capture("Email_domain", [domain()]),
        ],
    )
}

/// `+1 (555) 123-4567`; captures `Phone`, `Phone_countryCode`, `Phone_areaCode`.
pub fn international_phone() -> Node {
    Node::capture(
        "Phone",
        [
            Node::lit("+"),
            Node::capture("Phone_countryCode", [DIGIT.between(1, 3)]),
            WHITESPACE.optional(),
            Node::capture(
                "Phone_areaCode",
                [Node::or([
                    DIGIT.exactly(3),
                    Node::group([Node::lit("("), DIGIT.exactly(3), Node::lit(")")]),
                ])],
            ),
            Node::class([DIGIT, Node::lit(" .-")]).between(0, 13),
            DIGIT,
        ],
    )
}

/// Four groups of four digits, optionally separated by a space or dash.
pub fn credit_card() -> Node {
    Node::capture(
        "CreditCard",
        [Node::group([DIGIT.exactly(4), Node::class([Node::lit(" -")]).optional()]).exactly(4)],
    )
}

/// `https://example.com:8080/path?query#fragment`, split into named parts.
pub fn full_url() -> Node {
    Node::capture(
        "FullUrl",
        [
            Node::capture(
                "FullUrl_protocol",
                [Node::or([Node::lit("http"), Node::lit("https"), Node::lit("ftp")])],
            ),
            Node::lit("://"),
            Node::capture("FullUrl_domain", [domain()]),
            Node::group([
                Node::lit(":"),
                Node::capture("Url_port", [DIGIT.one_or_more()]),
            ])
            .optional(),
            Node::capture(
                "FullUrl_path",
                [Node::group([
                    Node::lit("/"),
                    word_class("%/-._~").zero_or_more(),
                ])
                .optional()],
            ),
            Node::capture(
                "FullUrl_query",
                [Node::group([
                    Node::lit("?"),
                    word_class("=&%+-._~").zero_or_more(),
                ])
                .optional()],
            ),
            Node::capture(
                "FullUrl_fragment",
                [Node::group([
                    Node::lit("#"),
                    word_class("%-._~").zero_or_more(),
                ])
                .optional()],
            ),
        ],
    )
}
