//! Outline - text projection of a hierarchy forest
//!
//! Only visible nodes are listed: children of a collapsed node are skipped
//! even when they have been built.

use crate::domain::entities::{NavigableNode, NodePath};

/// One visible row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub path: NodePath,
    pub depth: usize,
    pub name: String,
    pub expanded: bool,
    pub selected: bool,
    pub navigable: bool,
}

/// Visible rows of `forest`, parents before children
pub fn flatten(forest: &[NavigableNode]) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    for (index, node) in forest.iter().enumerate() {
        push_rows(node, NodePath::root(index), &mut rows);
    }
    rows
}

fn push_rows(node: &NavigableNode, path: NodePath, rows: &mut Vec<OutlineRow>) {
    rows.push(OutlineRow {
        path: path.clone(),
        depth: path.depth(),
        name: node.name.clone(),
        expanded: node.expanded,
        selected: node.selected,
        navigable: node.navigable,
    });
    if node.expanded {
        for (index, child) in node.children().iter().enumerate() {
            push_rows(child, path.child(index), rows);
        }
    }
}

/// Render `forest` as indented text.
///
/// `[-]` marks an expanded node, `[+]` a collapsed navigable one and the
/// selected node ends with ` *`.
pub fn render_outline(forest: &[NavigableNode]) -> String {
    let mut out = String::new();
    for row in flatten(forest) {
        let marker = match (row.expanded, row.navigable) {
            (true, _) => "[-]",
            (false, true) => "[+]",
            (false, false) => "   ",
        };
        out.push_str(&"    ".repeat(row.depth));
        out.push_str(marker);
        out.push(' ');
        out.push_str(&row.name);
        if row.selected {
            out.push_str(" *");
        }
        out.push('\n');
    }
    out
}
