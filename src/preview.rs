use crate::tree::{Tree, TreeNode};
use colored::Colorize;
use std::{fmt::Write, path::Path};

/// Render one node (and its children) with a nice ASCII style.
fn render_node(out: &mut String, name: &str, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let label = match node {
        TreeNode::File(_) => name.green(),
        TreeNode::Directory(_) => name.blue(),
    };
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector, label);

    if let TreeNode::Directory(children) = node {
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        render_children(out, children, &child_prefix);
    }
}

fn render_children(out: &mut String, tree: &Tree, prefix: &str) {
    let len = tree.len();
    for (i, (name, node)) in tree.iter().enumerate() {
        render_node(out, name, node, prefix, i == len - 1);
    }
}

/// Renders `tree` as it would be created under `destination`, without touching the disk.
pub fn render(destination: &Path, tree: &Tree) -> String {
    // the root node represents the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Legend: {} = (directory), {} = (file)\n",
        "blue".blue(),
        "green".green()
    );
    let _ = writeln!(out, "{}", root_name.blue());
    render_children(&mut out, tree, "");

    out
}
