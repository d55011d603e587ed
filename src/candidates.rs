//! Depth-first enumeration of the keys stored below a node.
//!
//! This module provides the `Candidates` iterator returned by
//! [`RadixTree::candidates`](crate::RadixTree::candidates) and
//! [`RadixTree::iter`](crate::RadixTree::iter).

use std::fmt;
use std::marker::PhantomData;

use crate::key::RadixKey;
use crate::node::Node;

/// An iterator over the keys and values stored below some prefix.
///
/// Each visited node carries the full symbol path from the root, so stored keys
/// are rebuilt by concatenating the prefix with the labels walked below it.
/// Iteration order follows edge insertion order and is otherwise unspecified.
///
/// # Panics
///
/// Panics if [`RadixKey::from_symbols`] rejects the symbols of a key that was
/// accepted on insertion. A `RadixKey` implementation must be able to rebuild
/// any key from the symbols it produced.
pub struct Candidates<'a, K: RadixKey, V> {
    /// Nodes still to visit, with the symbols accumulated on the way to them
    stack: Vec<(Vec<K::Symbol>, &'a Node<K::Symbol, V>)>,

    _key_type: PhantomData<K>,
}

impl<'a, K: RadixKey, V> Candidates<'a, K, V> {
    pub(crate) fn new(path: Vec<K::Symbol>, node: &'a Node<K::Symbol, V>) -> Self {
        Candidates {
            stack: vec![(path, node)],
            _key_type: PhantomData,
        }
    }

    pub(crate) fn empty() -> Self {
        Candidates {
            stack: Vec::new(),
            _key_type: PhantomData,
        }
    }
}

impl<'a, K: RadixKey, V> Iterator for Candidates<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            // Reverse push so children pop in insertion order
            for edge in node.children.iter().rev() {
                let mut child_path = Vec::with_capacity(path.len() + edge.label.len());
                child_path.extend_from_slice(&path);
                child_path.extend_from_slice(&edge.label);
                self.stack.push((child_path, &*edge.dest));
            }

            if let Some(value) = &node.value {
                match K::from_symbols(path) {
                    Ok(key) => return Some((key, value)),
                    Err(err) => panic!("stored key could not be rebuilt from its symbols: {}", err),
                }
            }
        }

        None
    }
}

impl<'a, K: RadixKey, V> fmt::Debug for Candidates<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidates")
            .field("pending", &self.stack.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_tree() -> Node<u8, u32> {
        // ban ─┬─ ana (1)
        //      └─ dana (2)
        // foo (3) ── bar (4)
        let mut root = Node::new();
        let ban = root.push_leaf(b"ban", 0);
        ban.value = None;
        ban.push_leaf(b"ana", 1);
        ban.push_leaf(b"dana", 2);
        root.push_leaf(b"foo", 3).push_leaf(b"bar", 4);
        root
    }

    #[test]
    fn test_iterate_whole_tree() {
        let root = sample_tree();
        let results: HashSet<(String, u32)> = Candidates::<String, u32>::new(Vec::new(), &root)
            .map(|(key, value)| (key, *value))
            .collect();

        let expected: HashSet<(String, u32)> = [
            ("banana".to_string(), 1),
            ("bandana".to_string(), 2),
            ("foo".to_string(), 3),
            ("foobar".to_string(), 4),
        ]
        .iter()
        .cloned()
        .collect();

        assert_eq!(results, expected);
    }

    #[test]
    fn test_iterate_subtree() {
        let root = sample_tree();
        let foo = &root.children[1].dest;

        let results: Vec<(String, &u32)> = Candidates::new(b"foo".to_vec(), foo).collect();

        assert_eq!(results, vec![("foo".to_string(), &3), ("foobar".to_string(), &4)]);
    }

    #[test]
    fn test_insertion_order() {
        let root = sample_tree();
        let ban = &root.children[0].dest;

        let keys: Vec<String> = Candidates::<String, u32>::new(b"ban".to_vec(), ban)
            .map(|(key, _)| key)
            .collect();

        assert_eq!(keys, vec!["banana".to_string(), "bandana".to_string()]);
    }

    #[test]
    fn test_empty() {
        let mut candidates = Candidates::<String, u32>::empty();
        assert!(candidates.next().is_none());
    }
}
