//! Debug printers.

use std::fmt::{Debug, Write};

use crate::types::Node;

/// A lazily rendered child line; receives the indentation for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders children below a header in tree-dump style (`├─`, `└─`, `│`).
///
/// Trailing `None` entries are skipped; inner `None` entries are skipped
/// without affecting which child is drawn as the last one.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = child(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}

/// Renders a subtree, one node per line, with each node's cached height.
///
/// Absent children of a non-leaf node are drawn as `∅` so left and right
/// stay distinguishable.
pub fn print_node<N>(node: Option<&N>, tab: &str) -> String
where
    N: Node,
    N::Value: Debug,
{
    let Some(n) = node else {
        return "∅".to_string();
    };

    let header = format!("{:?} [h={}]", n.value(), n.height());
    if n.left().is_none() && n.right().is_none() {
        return header;
    }

    let left: &PrintChild<'_> = &|tab| format!("← {}", print_node(n.left(), tab));
    let right: &PrintChild<'_> = &|tab| format!("→ {}", print_node(n.right(), tab));
    format!("{header}{}", print_tree(tab, &[Some(left), Some(right)]))
}

/// In-order dump as `value(height) ` per node.
pub fn in_order_with_heights<N>(node: Option<&N>) -> String
where
    N: Node,
    N::Value: Debug,
{
    fn walk<N>(node: Option<&N>, out: &mut String)
    where
        N: Node,
        N::Value: Debug,
    {
        if let Some(n) = node {
            walk(n.left(), out);
            let _ = write!(out, "{:?}({}) ", n.value(), n.height());
            walk(n.right(), out);
        }
    }

    let mut out = String::new();
    walk(node, &mut out);
    out
}
