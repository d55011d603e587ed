//! Structural statistics for a radix tree.
//!
//! Useful for checking how much label sharing a key set gets, and for
//! debugging the shape of the tree after a sequence of splits.

use crate::node::Node;

/// A snapshot of the shape of a [`RadixTree`](crate::RadixTree).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of nodes, including the root
    pub num_nodes: usize,
    /// Number of edges (always `num_nodes - 1`)
    pub num_edges: usize,
    /// Number of nodes at which a stored key ends
    pub num_leaves: usize,
    /// Number of nodes without outgoing edges
    pub num_terminals: usize,
    /// Longest root-to-node path, in edges
    pub max_depth: usize,
    /// Total number of symbols held in edge labels
    pub label_symbols: usize,
}

impl TreeStats {
    pub(crate) fn collect<S, V>(root: &Node<S, V>) -> Self {
        let mut stats = TreeStats::default();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            stats.num_nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);

            if node.is_leaf() {
                stats.num_leaves += 1;
            }
            if node.children.is_empty() {
                stats.num_terminals += 1;
            }

            for edge in &node.children {
                stats.num_edges += 1;
                stats.label_symbols += edge.label.len();
                stack.push((&*edge.dest, depth + 1));
            }
        }

        stats
    }

    /// Average number of label symbols per edge.
    pub fn average_label_len(&self) -> f64 {
        if self.num_edges == 0 {
            0.0
        } else {
            self.label_symbols as f64 / self.num_edges as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root() {
        let root: Node<u8, u32> = Node::new();
        let stats = TreeStats::collect(&root);

        assert_eq!(stats.num_nodes, 1);
        assert_eq!(stats.num_edges, 0);
        assert_eq!(stats.num_leaves, 0);
        assert_eq!(stats.num_terminals, 1);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.average_label_len(), 0.0);
    }

    #[test]
    fn test_shape() {
        let mut root: Node<u8, u32> = Node::new();
        root.push_leaf(b"foo", 3).push_leaf(b"bar", 4);
        root.push_leaf(b"x", 5);

        let stats = TreeStats::collect(&root);

        assert_eq!(stats.num_nodes, 4);
        assert_eq!(stats.num_edges, 3);
        assert_eq!(stats.num_leaves, 3);
        assert_eq!(stats.num_terminals, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.label_symbols, 7);
        assert!((stats.average_label_len() - 7.0 / 3.0).abs() < f64::EPSILON);
    }
}
