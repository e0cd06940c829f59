use crate::{Error, ExprTree, Node, Options};

/// Builds `nodes` with default options, panicking on error.
pub fn expect_pattern(nodes: impl IntoIterator<Item = Node>) -> String {
    let tree: ExprTree = nodes.into_iter().collect();
    match tree.build(&Options::default()) {
        Ok(pattern) => pattern,
        Err(e) => panic!("expected a pattern, got error: {e}"),
    }
}

/// Builds `nodes` with default options, panicking if the build succeeds.
pub fn expect_error(nodes: impl IntoIterator<Item = Node>) -> Error {
    let tree: ExprTree = nodes.into_iter().collect();
    match tree.build(&Options::default()) {
        Ok(pattern) => panic!("expected an error, got pattern `{pattern}`"),
        Err(e) => e,
    }
}
