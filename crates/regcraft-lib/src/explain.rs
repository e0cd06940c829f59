//! Human-readable outline of an expression tree.

use std::fmt;

use crate::node::{Node, Repeat};

pub struct Explain<'a> {
    nodes: &'a [Node],
}

impl<'a> Explain<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for Explain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes {
            write_node(f, node, 0)?;
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = depth * 2)?;
    match node {
        Node::Literal(text) => writeln!(f, "Lit {text:?}"),
        Node::Raw(text) => writeln!(f, "Raw {text:?}"),
        Node::Token(token) => writeln!(f, "Token {}", token.pattern),
        Node::Sequence(children) => {
            writeln!(f, "Seq")?;
            write_children(f, children, depth)
        }
        Node::Group(children) => {
            writeln!(f, "Group")?;
            write_children(f, children, depth)
        }
        Node::Capture { name, children } => {
            writeln!(f, "Capture {name:?}")?;
            write_children(f, children, depth)
        }
        Node::Alternation(children) => {
            writeln!(f, "Or")?;
            write_children(f, children, depth)
        }
        Node::CharClass { members, negate } => {
            writeln!(f, "{}", if *negate { "NotClass" } else { "Class" })?;
            write_children(f, members, depth)
        }
        Node::Repetition { child, repeat } => {
            match repeat {
                Repeat::AtLeast(n) => writeln!(f, "AtLeast({n})")?,
                Repeat::Exactly(n) => writeln!(f, "Exactly({n})")?,
                Repeat::Between { min, max } => writeln!(f, "Between({min}, {max})")?,
                Repeat::Optional => writeln!(f, "Optional")?,
            }
            write_node(f, child, depth + 1)
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Node], depth: usize) -> fmt::Result {
    for child in children {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}
