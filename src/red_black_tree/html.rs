use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree::Tree;
use std::fmt::Display;
use std::io::{self, Write};

const INDENT: &[u8] = b"  ";

fn indent<W>(w: &mut W, line: &str, depth: usize) -> io::Result<()>
where
    W: Write,
{
    for _ in 0..depth {
        w.write_all(INDENT)?;
    }
    w.write_all(line.as_bytes())
}

/// Writes the nested list markup of `tree` wrapped in a `tree` container.
pub fn write_tree<U, W>(tree: &Tree<U>, w: &mut W) -> io::Result<()>
where
    U: Display,
    W: Write,
{
    w.write_all(b"<div class=\"tree\">\n")?;
    if let Some(ref node) = tree {
        indent(w, "<ul>\n", 1)?;
        write_node(node, w, 1)?;
        indent(w, "</ul>\n", 1)?;
    }
    w.write_all(b"</div>\n")
}

fn write_node<U, W>(node: &Node<U>, w: &mut W, depth: usize) -> io::Result<()>
where
    U: Display,
    W: Write,
{
    indent(w, "<li>\n", depth + 1)?;

    let tag = match node.color {
        Color::Red => "red",
        Color::Black => "black",
    };
    let label = format!(
        "<{} href=\"#\">{}/{}</{}>\n",
        tag, node.entry.key, node.entry.value, tag,
    );
    indent(w, &label, depth + 2)?;

    let has_children = node.left.is_some() || node.right.is_some();
    if has_children {
        indent(w, "<ul>\n", depth + 2)?;
    }
    if let Some(ref child) = node.left {
        write_node(child, w, depth + 2)?;
    }
    if let Some(ref child) = node.right {
        write_node(child, w, depth + 2)?;
    }
    if has_children {
        indent(w, "</ul>\n", depth + 2)?;
    }

    indent(w, "</li>\n", depth + 1)
}
