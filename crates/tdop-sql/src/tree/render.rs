//! Text renderings of a [`Tree`].
//!
//! `Display` produces an S-expression: a leaf is its value, any other node
//! is `(value child child ...)`. [`Tree::dot`] produces a Graphviz digraph,
//! e.g. for `dot -Tpng`.

use core::fmt;

use super::Tree;

impl<V: fmt::Display> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.value());
        }
        write!(f, "({}", self.value())?;
        for child in self {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}

impl<V: fmt::Display> Tree<V> {
    /// Renders the tree as an S-expression.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        self.to_string()
    }

    /// Returns a `Display` adapter rendering the tree in Graphviz dot format.
    #[must_use]
    pub const fn dot(&self) -> Dot<'_, V> {
        Dot(self)
    }

    /// Renders the tree in Graphviz dot format.
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }
}

/// Graphviz rendering of a tree, see [`Tree::dot`].
///
/// Nodes are numbered in pre-order starting at 1. Each node contributes a
/// label statement, and each child an edge statement emitted after the
/// child's own subtree. The numbering is rebuilt on every render.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a, V>(&'a Tree<V>);

struct Numbered<'a, V> {
    id: usize,
    value: &'a V,
    children: Vec<Numbered<'a, V>>,
}

fn number<'a, V>(tree: &'a Tree<V>, next: &mut usize) -> Numbered<'a, V> {
    let id = *next;
    *next += 1;
    let children = tree.iter().map(|child| number(child, next)).collect();
    Numbered {
        id,
        value: tree.value(),
        children,
    }
}

fn write_node<V: fmt::Display>(f: &mut fmt::Formatter<'_>, node: &Numbered<'_, V>) -> fmt::Result {
    let label = escape_label(&node.value.to_string());
    write!(f, "\n{} [label=\"{label}\"];", node.id)?;
    for child in &node.children {
        write_node(f, child)?;
        write!(f, "\n{} -> {};", node.id, child.id)?;
    }
    Ok(())
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<V: fmt::Display> fmt::Display for Dot<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbered = number(self.0, &mut 1);
        f.write_str("digraph ast {")?;
        write_node(f, &numbered)?;
        f.write_str("\n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<&'static str> {
        Tree::new("root")
            .with_value("a")
            .with_value("b")
            .with_child(Tree::new("r2").with_value("c").with_value("d"))
    }

    #[test]
    fn test_leaf_sexpr_is_bare_value() {
        assert_eq!(Tree::new("x").to_sexpr(), "x");
    }

    #[test]
    fn test_nested_sexpr() {
        assert_eq!(sample().to_string(), "(root a b (r2 c d))");
    }

    #[test]
    fn test_single_node_dot() {
        assert_eq!(Tree::new(7).to_dot(), "digraph ast {\n1 [label=\"7\"];\n}");
    }

    #[test]
    fn test_dot_preorder_ids_and_edges() {
        let expected = "digraph ast {\n\
            1 [label=\"root\"];\n\
            2 [label=\"a\"];\n\
            1 -> 2;\n\
            3 [label=\"b\"];\n\
            1 -> 3;\n\
            4 [label=\"r2\"];\n\
            5 [label=\"c\"];\n\
            4 -> 5;\n\
            6 [label=\"d\"];\n\
            4 -> 6;\n\
            1 -> 4;\n\
            }";
        assert_eq!(sample().to_dot(), expected);
    }

    #[test]
    fn test_dot_is_stable_across_renders() {
        let tree = sample();
        assert_eq!(tree.to_dot(), tree.to_dot());
        assert_eq!(tree.dot().to_string(), tree.to_dot());
    }

    #[test]
    fn test_dot_escapes_labels() {
        let tree = Tree::new("say \"hi\"").with_value("a\\b");
        let dot = tree.to_dot();
        assert!(dot.contains(r#"1 [label="say \"hi\""];"#));
        assert!(dot.contains(r#"2 [label="a\\b"];"#));
    }
}
