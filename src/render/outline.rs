// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Indented text outline of a tree, one node per line.

use crate::data_structures::morse_tree::{MorseNodeView, Symbol};

/// Label printed for the root node.
const ROOT_LABEL: &str = "root";

/// Label printed for nodes without a character.
const VACANT_LABEL: &str = "(empty)";

/// Renders the tree as an indented outline.
///
/// Every line holds the node's code and its character; children are indented
/// two spaces deeper than their parent, dot child first.
pub fn outline<N: MorseNodeView>(root: Option<&N>) -> String {
    let Some(root) = root else {
        return "(empty tree)".to_string();
    };
    let mut lines = Vec::new();
    walk(root, &mut String::new(), &mut lines);
    lines.join("\n")
}

fn walk<N: MorseNodeView>(node: &N, path: &mut String, lines: &mut Vec<String>) {
    let label = node
        .character()
        .map_or_else(|| VACANT_LABEL.to_string(), |c| c.to_string());
    let code = if path.is_empty() { ROOT_LABEL } else { path.as_str() };
    lines.push(format!("{:indent$}{code} {label}", "", indent = path.len() * 2));

    for symbol in [Symbol::Dot, Symbol::Dash] {
        if let Some(child) = node.child(symbol) {
            path.push(symbol.as_char());
            walk(child, path, lines);
            path.pop();
        }
    }
}
