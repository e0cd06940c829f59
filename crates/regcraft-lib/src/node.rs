//! Expression tree nodes.
//!
//! All nodes are variants of one closed enum. Which variant may nest where is
//! answered by a single table, [`Node::supports`], rather than per-type markers.

use std::fmt;

/// A fixed built-in atom such as `\d`, `^` or `\p{Greek}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Pattern text emitted verbatim.
    pub pattern: &'static str,
    /// Whether the pattern keeps its meaning inside `[...]`.
    pub class_safe: bool,
    /// Whether a quantifier may follow the pattern.
    pub repeatable: bool,
}

impl Token {
    pub const fn new(pattern: &'static str, class_safe: bool, repeatable: bool) -> Self {
        Self {
            pattern,
            class_safe,
            repeatable,
        }
    }

    /// Bracketed tokens (`[a-z]`) are spliced into a parent class without their brackets.
    pub fn bracketed_body(&self) -> Option<&'static str> {
        self.pattern
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
    }
}

/// Quantifier applied by [`Node::Repetition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    AtLeast(u32),
    Exactly(u32),
    Between { min: u32, max: u32 },
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text escaped before emission.
    Literal(String),
    /// Unescaped passthrough; must parse as a pattern on its own.
    Raw(String),
    Token(Token),
    Sequence(Vec<Node>),
    /// Non-capturing group `(?:...)`.
    Group(Vec<Node>),
    /// Named capture `(?P<name>...)`.
    Capture { name: String, children: Vec<Node> },
    Alternation(Vec<Node>),
    CharClass { members: Vec<Node>, negate: bool },
    Repetition { child: Box<Node>, repeat: Repeat },
}

/// Variant tag, used in errors and explain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Raw,
    Token,
    Sequence,
    Group,
    Capture,
    Alternation,
    CharClass,
    Repetition,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Literal => "literal",
            NodeKind::Raw => "raw fragment",
            NodeKind::Token => "token",
            NodeKind::Sequence => "sequence",
            NodeKind::Group => "group",
            NodeKind::Capture => "capture",
            NodeKind::Alternation => "alternation",
            NodeKind::CharClass => "character class",
            NodeKind::Repetition => "repetition",
        };
        f.write_str(name)
    }
}

/// Structural positions a node may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// A quantifier may be attached to the node.
    Repeatable,
    /// The node may be a direct child of an alternation, capture or sequence.
    Capturable,
    /// The node may be a direct member of a character class.
    CharClassable,
}

impl Node {
    pub fn lit(text: impl Into<String>) -> Self {
        Node::Literal(text.into())
    }

    /// Unescaped fragment. Not recommended: only its standalone syntax is checked.
    pub fn raw(text: impl Into<String>) -> Self {
        Node::Raw(text.into())
    }

    pub fn seq(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(nodes.into_iter().collect())
    }

    pub fn group(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Group(nodes.into_iter().collect())
    }

    pub fn capture(name: impl Into<String>, nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Capture {
            name: name.into(),
            children: nodes.into_iter().collect(),
        }
    }

    pub fn or(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Alternation(nodes.into_iter().collect())
    }

    pub fn class(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::CharClass {
            members: nodes.into_iter().collect(),
            negate: false,
        }
    }

    pub fn not_class(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::CharClass {
            members: nodes.into_iter().collect(),
            negate: true,
        }
    }

    pub fn repeat(self, repeat: Repeat) -> Self {
        Node::Repetition {
            child: Box::new(self),
            repeat,
        }
    }

    /// `*`, `+` or `{n,}`.
    pub fn at_least(self, n: u32) -> Self {
        self.repeat(Repeat::AtLeast(n))
    }

    pub fn zero_or_more(self) -> Self {
        self.at_least(0)
    }

    pub fn one_or_more(self) -> Self {
        self.at_least(1)
    }

    pub fn exactly(self, n: u32) -> Self {
        self.repeat(Repeat::Exactly(n))
    }

    /// `{min,max}`; prefer [`Node::optional`] or [`Node::exactly`] where they fit.
    pub fn between(self, min: u32, max: u32) -> Self {
        self.repeat(Repeat::Between { min, max })
    }

    pub fn optional(self) -> Self {
        self.repeat(Repeat::Optional)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(_) => NodeKind::Literal,
            Node::Raw(_) => NodeKind::Raw,
            Node::Token(_) => NodeKind::Token,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Group(_) => NodeKind::Group,
            Node::Capture { .. } => NodeKind::Capture,
            Node::Alternation(_) => NodeKind::Alternation,
            Node::CharClass { .. } => NodeKind::CharClass,
            Node::Repetition { .. } => NodeKind::Repetition,
        }
    }

    /// Capability table. Every variant must answer every capability.
    pub fn supports(&self, capability: Capability) -> bool {
        match (self, capability) {
            (_, Capability::Capturable) => true,

            (Node::Token(t), Capability::Repeatable) => t.repeatable,
            (Node::Token(t), Capability::CharClassable) => t.class_safe,

            (
                Node::Literal(_) | Node::Group(_) | Node::Alternation(_) | Node::CharClass { .. },
                Capability::Repeatable,
            ) => true,
            (
                Node::Raw(_) | Node::Sequence(_) | Node::Capture { .. } | Node::Repetition { .. },
                Capability::Repeatable,
            ) => false,

            (Node::Literal(_) | Node::CharClass { .. }, Capability::CharClassable) => true,
            (
                Node::Raw(_)
                | Node::Sequence(_)
                | Node::Group(_)
                | Node::Capture { .. }
                | Node::Alternation(_)
                | Node::Repetition { .. },
                Capability::CharClassable,
            ) => false,
        }
    }

    /// Short human-readable description, e.g. ``token `$` `` or `group`.
    pub fn describe(&self) -> String {
        match self {
            Node::Token(t) => format!("token `{}`", t.pattern),
            Node::Literal(text) | Node::Raw(text) => format!("{} `{}`", self.kind(), text),
            Node::Capture { name, .. } => format!("capture `{name}`"),
            _ => self.kind().to_string(),
        }
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}
