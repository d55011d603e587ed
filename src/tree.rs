//! The main radix tree implementation.
//!
//! This module contains the `RadixTree` type, which provides the primary API
//! for inserting keys and querying them exactly or by prefix.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::candidates::Candidates;
use crate::key::{KeySymbols, RadixKey};
use crate::node::Node;
use crate::stats::TreeStats;
use crate::util::{common_prefix_length, is_prefix_of, matches_as_prefix};
use crate::Error;

/// A mutable radix tree (compressed trie).
///
/// Edges are labelled with runs of symbols rather than single symbols, so keys
/// sharing a long prefix store that prefix once. Inserting a key that diverges
/// partway through an existing label splits the label and adds a branching
/// node; existing keys and their values are never disturbed.
///
/// Insertion is first-write-wins: inserting a key that is already present
/// leaves the stored value unchanged. Use [`get_mut`](RadixTree::get_mut) to
/// update a value in place.
pub struct RadixTree<K: RadixKey, V> {
    /// The root node. Never a leaf.
    pub(crate) root: Node<K::Symbol, V>,

    /// The number of keys stored in the tree
    size: usize,

    _key_type: PhantomData<K>,
}

impl<K: RadixKey, V> RadixTree<K, V> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_index::RadixTree;
    ///
    /// let tree = RadixTree::<String, i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTree {
            root: Node::new(),
            size: 0,
            _key_type: PhantomData,
        }
    }

    /// Returns the number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a key-value pair, returning `true` if the key was newly stored.
    ///
    /// An empty key is ignored. If the key is already present the stored value
    /// is kept and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_index::RadixTree;
    ///
    /// let mut tree = RadixTree::<String, i32>::new();
    /// assert!(tree.insert("banana".to_string(), 1));
    /// assert!(!tree.insert("banana".to_string(), 2));
    ///
    /// assert_eq!(tree.get("banana"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Inserts a key-value pair, reporting why nothing was stored.
    ///
    /// Returns [`Error::EmptyKey`] for an empty key and
    /// [`Error::DuplicateKey`] if the key is already present. In both cases the
    /// tree is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the walk consumes more symbols than the key holds, which
    /// would mean sibling labels are no longer prefix-disjoint.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), Error> {
        let symbols = key.symbols();
        if symbols.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut node = &mut self.root;
        let mut pos = 0;

        while pos < symbols.len() {
            // (edge index, symbols consumed, whether the edge must be split)
            let step = node.children.iter().enumerate().find_map(|(index, edge)| {
                if is_prefix_of(&edge.label, symbols, pos) {
                    return Some((index, edge.label.len(), false));
                }

                match common_prefix_length(&edge.label, 0, symbols, pos) {
                    0 => None,
                    shared => Some((index, shared, true)),
                }
            });

            let (index, consumed, split) = match step {
                Some(step) => step,
                None => break,
            };

            let edge = &mut node.children[index];
            node = if split { edge.split(consumed) } else { &mut *edge.dest };
            pos += consumed;
        }

        assert!(
            pos <= symbols.len(),
            "insertion consumed {} symbols of a {} symbol key",
            pos,
            symbols.len()
        );

        if pos == symbols.len() {
            // The key ends on an existing node: either a stored key or a branch point.
            if node.is_leaf() {
                return Err(Error::DuplicateKey);
            }
            node.value = Some(value);
        } else {
            node.push_leaf(&symbols[pos..], value);
        }

        self.size += 1;
        Ok(())
    }

    /// Returns `true` if `key` is stored in the tree.
    ///
    /// An empty key is never stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_index::RadixTree;
    ///
    /// let mut tree = RadixTree::<String, i32>::new();
    /// tree.insert("banana".to_string(), 1);
    ///
    /// assert!(tree.exists("banana"));
    /// assert!(!tree.exists("ban"));
    /// ```
    pub fn exists<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        self.find_node(key, true).is_some()
    }

    /// Retrieves a reference to the value stored for `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_index::RadixTree;
    ///
    /// let mut tree = RadixTree::<String, i32>::new();
    /// tree.insert("foo".to_string(), 3);
    ///
    /// assert_eq!(tree.get("foo"), Some(&3));
    /// assert_eq!(tree.get("foop"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        self.find_node(key, true).and_then(|node| node.value.as_ref())
    }

    /// Retrieves a mutable reference to the value stored for `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        let symbols = key.symbols();
        if symbols.is_empty() {
            return None;
        }

        let mut node = &mut self.root;
        let mut pos = 0;

        while pos < symbols.len() {
            let edge = node
                .children
                .iter_mut()
                .find(|edge| matches_as_prefix(symbols, pos, &edge.label, 0))?;
            pos += edge.label.len();
            node = &mut *edge.dest;
        }

        node.value.as_mut()
    }

    /// Returns the value stored for `key`, or `V::default()` if it is absent.
    ///
    /// A missing key cannot be told apart from a key stored with the default
    /// value; use [`get`](RadixTree::get) when the difference matters.
    pub fn get_value<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
        V: Default + Clone,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Returns every stored key that starts with `prefix`.
    ///
    /// The order of the returned keys is unspecified. An empty prefix yields
    /// no keys; use [`iter`](RadixTree::iter) to walk the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_index::RadixTree;
    ///
    /// let tree: RadixTree<String, i32> = vec![
    ///     ("banana".to_string(), 1),
    ///     ("bandana".to_string(), 2),
    ///     ("foo".to_string(), 3),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let mut keys = tree.find_candidates("ban");
    /// keys.sort();
    /// assert_eq!(keys, vec!["banana".to_string(), "bandana".to_string()]);
    /// ```
    pub fn find_candidates<Q>(&self, prefix: &Q) -> Vec<K>
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        self.candidates(prefix).map(|(key, _)| key).collect()
    }

    /// Returns an iterator over the stored keys starting with `prefix`, along
    /// with their values.
    ///
    /// The prefix may end in the middle of an edge label. An empty prefix
    /// yields nothing.
    pub fn candidates<Q>(&self, prefix: &Q) -> Candidates<'_, K, V>
    where
        K: Borrow<Q>,
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        let symbols = prefix.symbols();
        if symbols.is_empty() {
            return Candidates::empty();
        }

        match self.find_prefix_node(symbols) {
            Some((path, node)) => Candidates::new(path, node),
            None => Candidates::empty(),
        }
    }

    /// Returns an iterator over every stored key and its value.
    pub fn iter(&self) -> Candidates<'_, K, V> {
        Candidates::new(Vec::new(), &self.root)
    }

    /// Gathers structural statistics about the tree.
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    /// Follows edges whose labels are fully contained in `key`.
    ///
    /// With `leaf_only` unset, any node ending exactly at `key` is returned,
    /// including branch points that hold no value.
    pub(crate) fn find_node<Q>(&self, key: &Q, leaf_only: bool) -> Option<&Node<K::Symbol, V>>
    where
        Q: KeySymbols<Symbol = K::Symbol> + ?Sized,
    {
        let symbols = key.symbols();
        if symbols.is_empty() {
            return None;
        }

        let mut node = &self.root;
        let mut pos = 0;

        while pos < symbols.len() {
            let edge = node
                .children
                .iter()
                .find(|edge| matches_as_prefix(symbols, pos, &edge.label, 0))?;
            pos += edge.label.len();
            node = &*edge.dest;
        }

        if leaf_only && !node.is_leaf() {
            return None;
        }

        Some(node)
    }

    // Like find_node, but the prefix may stop partway along a label. Returns
    // the node below that point together with its full symbol path.
    fn find_prefix_node(&self, prefix: &[K::Symbol]) -> Option<(Vec<K::Symbol>, &Node<K::Symbol, V>)> {
        let mut path = prefix.to_vec();
        let mut node = &self.root;
        let mut pos = 0;

        while pos < prefix.len() {
            let edge = node
                .children
                .iter()
                .find(|edge| common_prefix_length(&edge.label, 0, prefix, pos) > 0)?;

            if matches_as_prefix(prefix, pos, &edge.label, 0) {
                pos += edge.label.len();
            } else if is_prefix_of(&prefix[pos..], &edge.label, 0) {
                // Complete the key with the rest of the label
                let remaining = prefix.len() - pos;
                path.extend_from_slice(&edge.label[remaining..]);
                pos = prefix.len();
            } else {
                return None;
            }

            node = &*edge.dest;
        }

        Some((path, node))
    }
}

impl<K: RadixKey, V> Default for RadixTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey, V: Clone> Clone for RadixTree<K, V> {
    fn clone(&self) -> Self {
        RadixTree {
            root: self.root.clone(),
            size: self.size,
            _key_type: PhantomData,
        }
    }
}

impl<K, V> fmt::Debug for RadixTree<K, V>
where
    K: RadixKey + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: RadixKey, V> FromIterator<(K, V)> for RadixTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RadixTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: RadixKey, V> Extend<(K, V)> for RadixTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: RadixKey, V> IntoIterator for &'a RadixTree<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Candidates<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
