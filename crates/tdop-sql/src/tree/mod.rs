//! Generic ordered tree used as the parser's AST.
//!
//! Every node owns its children; there are no parent links. Rendering to an
//! S-expression (`Display`) and to Graphviz `dot` (see [`Tree::to_dot`]
//! and [`Dot`]) is implemented alongside.

mod render;

pub use render::Dot;

/// A node holding one value and an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<V> {
    value: V,
    children: Vec<Tree<V>>,
}

impl<V> Tree<V> {
    /// Creates a leaf.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Appends `child` as the last child.
    pub fn push(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Appends a leaf holding `value` as the last child.
    pub fn push_value(&mut self, value: V) -> &mut Self {
        self.push(Self::new(value))
    }

    /// Builder form of [`Tree::push`].
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`Tree::push_value`].
    #[must_use]
    pub fn with_value(self, value: V) -> Self {
        self.with_child(Self::new(value))
    }

    /// The value stored at this node.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// The `i`th child, if any.
    #[must_use]
    pub fn child(&self, i: usize) -> Option<&Self> {
        self.children.get(i)
    }

    /// All children, left to right.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over the direct children.
    pub fn iter(&self) -> std::slice::Iter<'_, Self> {
        self.children.iter()
    }

    /// Builds a tree of the same shape with every value mapped through `f`.
    #[must_use]
    pub fn map<U>(&self, f: &impl Fn(&V) -> U) -> Tree<U> {
        Tree {
            value: f(&self.value),
            children: self.children.iter().map(|child| child.map(f)).collect(),
        }
    }

    /// Total number of nodes, this one included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Long operator chains build trees as deep as they are long; tear them down
// with an explicit stack instead of recursing once per level.
impl<V> Drop for Tree<V> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<'a, V> IntoIterator for &'a Tree<V> {
    type Item = &'a Tree<V>;
    type IntoIter = std::slice::Iter<'a, Tree<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<&'static str> {
        let mut root = Tree::new("root");
        root.push_value("a")
            .push_value("b")
            .push(Tree::new("r2").with_value("c").with_value("d"));
        root
    }

    #[test]
    fn test_new_is_leaf() {
        let leaf = Tree::new(1);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.child_count(), 0);
        assert_eq!(*leaf.value(), 1);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let root = sample();
        let values: Vec<&str> = root.iter().map(|c| *c.value()).collect();
        assert_eq!(values, ["a", "b", "r2"]);
        assert!(!root.is_leaf());
        assert_eq!(root.child_count(), 3);
    }

    #[test]
    fn test_child_lookup() {
        let root = sample();
        let r2 = root.child(2).unwrap();
        assert_eq!(*r2.value(), "r2");
        assert_eq!(r2.children().len(), 2);
        assert!(root.child(3).is_none());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let root = sample();
        let mut leaves = 0;
        for child in &root {
            if child.is_leaf() {
                leaves += 1;
            }
        }
        assert_eq!(leaves, 2);
    }

    #[test]
    fn test_map_preserves_shape() {
        let lengths = sample().map(&|s: &&str| s.len());
        assert_eq!(*lengths.value(), 4);
        assert_eq!(*lengths.child(2).unwrap().value(), 2);
        assert_eq!(lengths.node_count(), 6);
    }

    fn chain(depth: usize) -> Tree<usize> {
        (1..depth).fold(Tree::new(0), |lhs, i| Tree::new(i).with_child(lhs))
    }

    #[test]
    fn test_deep_tree_count_and_drop() {
        let deep = chain(200_000);
        assert_eq!(deep.node_count(), 200_000);
        drop(deep);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Tree::new(()).node_count(), 1);
        assert_eq!(sample().node_count(), 6);
    }
}
