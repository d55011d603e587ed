//! Internal node implementation for the radix tree.
//!
//! This module contains the `Node` and `Edge` types that make up the tree.
//! Every node is owned by exactly one edge (through a `Box`), so dropping the
//! root releases the whole graph. Teardown and cloning walk the tree with an
//! explicit stack, so their stack use does not grow with the depth of the tree.

/// A position in the compressed trie.
///
/// A node is a leaf when a stored key ends exactly here, in which case it
/// carries that key's value.
#[derive(Debug)]
pub(crate) struct Node<S, V> {
    /// Outgoing edges in insertion order
    pub children: Vec<Edge<S, V>>,

    /// The value of the key ending at this node, if any
    pub value: Option<V>,
}

/// A labelled transition to an exclusively owned child node.
#[derive(Debug)]
pub(crate) struct Edge<S, V> {
    /// Symbols consumed when following this edge. Never empty.
    pub label: Vec<S>,

    /// The node this edge leads to
    pub dest: Box<Node<S, V>>,
}

impl<S, V> Node<S, V> {
    /// Creates a node with no children and no value.
    pub fn new() -> Self {
        Node {
            children: Vec::new(),
            value: None,
        }
    }

    /// Creates a leaf node holding `value`.
    pub fn with_value(value: V) -> Self {
        Node {
            children: Vec::new(),
            value: Some(value),
        }
    }

    /// Returns whether a stored key terminates at this node.
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }
}

impl<S: Clone, V> Node<S, V> {
    /// Appends a new leaf for `suffix` and returns it.
    pub fn push_leaf(&mut self, suffix: &[S], value: V) -> &mut Node<S, V> {
        debug_assert!(!suffix.is_empty(), "edge labels must not be empty");

        let index = self.children.len();
        self.children.push(Edge::new(suffix.to_vec(), Node::with_value(value)));
        &mut *self.children[index].dest
    }
}

impl<S, V> Drop for Node<S, V> {
    fn drop(&mut self) {
        // Every descendant is dropped with its children already detached
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut edge) = pending.pop() {
            pending.append(&mut edge.dest.children);
        }
    }
}

impl<S: Clone, V: Clone> Clone for Node<S, V> {
    fn clone(&self) -> Self {
        // Pre-order with the last child visited first; reversed, this is a
        // post-order in which children appear in their original order.
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.children.iter().map(|edge| &*edge.dest));
        }

        let mut built: Vec<Node<S, V>> = Vec::new();
        for node in order.into_iter().rev() {
            let copies = built.split_off(built.len() - node.children.len());
            let children = node
                .children
                .iter()
                .zip(copies)
                .map(|(edge, dest)| Edge::new(edge.label.clone(), dest))
                .collect();

            built.push(Node {
                children,
                value: node.value.clone(),
            });
        }

        built.pop().unwrap_or_else(Node::new)
    }
}

impl<S, V> Edge<S, V> {
    pub fn new(label: Vec<S>, dest: Node<S, V>) -> Self {
        Edge {
            label,
            dest: Box::new(dest),
        }
    }
}

impl<S: Clone, V> Edge<S, V> {
    /// Splits this edge after `at` symbols.
    ///
    /// A new intermediate node is placed between this edge and its old
    /// destination. The old destination, with its whole subtree and value,
    /// hangs off the new node under the remainder of the label. Returns the
    /// intermediate node.
    pub fn split(&mut self, at: usize) -> &mut Node<S, V> {
        assert!(
            at > 0 && at < self.label.len(),
            "split point {} outside label of length {}",
            at,
            self.label.len()
        );

        let suffix = self.label.split_off(at);
        let old_dest = std::mem::replace(&mut self.dest, Box::new(Node::new()));
        self.dest.children.push(Edge {
            label: suffix,
            dest: old_dest,
        });

        &mut *self.dest
    }
}
