//! A mutable BST where nothing recurses. Point operations walk a cursor over the owning links
//! (the tree's root slot or a parent's `left`/`right` slot), so "which side of which parent do I
//! rewrite" is simply the slot the cursor currently points at.
//!
//! # Examples
//!
//! ```
//! use iterbst::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&'a'), None);
//!
//! tree.insert('a', 2);
//! assert_eq!(tree.search(&'a'), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! assert_eq!(tree.insert('a', 3), Some(2));
//! assert_eq!(tree.search(&'a'), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&'a'), Some(3));
//! assert_eq!(tree.search(&'a'), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::InvariantError;

pub mod traversal;

pub use traversal::{Inorder, Postorder, Preorder};

/// An owning link to a subtree. `None` is the empty spot below a leaf (or an empty tree).
type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree without any rebalancing. This can be used for inserting, searching, and
/// deleting keys and values, and for walking them in preorder, inorder or postorder.
///
/// Keys default to single characters and values to integers.
pub struct Tree<K = char, V = i32> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    // The derived drop would recurse once per level through the `Box`es.
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut to_visit: Vec<(&Node<K, V>, usize)> = Vec::new();
        to_visit.extend(self.root.as_deref().map(|root| (root, 1)));

        while let Some((node, depth)) = to_visit.pop() {
            tallest = tallest.max(depth);
            to_visit.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            to_visit.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        tallest
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value in place and returns the old one; no node is allocated in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.search(&1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.search(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let slot = locate(&mut self.root, &key);
        if let Some(node) = slot {
            trace!("key already present, overwriting its value");
            return Some(mem::replace(&mut node.value, value));
        }

        *slot = Some(Node::new_boxed(key, value));
        self.len += 1;
        trace!(len = self.len, "linked new leaf");
        None
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children is not unlinked itself: it takes over the key and value of the
    /// rightmost node of its left subtree, and that node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.delete(&1), None);
    /// assert_eq!(tree.search(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let slot = locate(&mut self.root, key);
        let has_two_children = slot
            .as_deref()
            .is_some_and(|node| node.left.is_some() && node.right.is_some());

        let removed = if has_two_children {
            trace!("deleting node with two children");
            let Node {
                key: target_key,
                value: target_value,
                left,
                ..
            } = slot.as_deref_mut()?;
            replace_by_rightmost(target_key, target_value, left)?
        } else {
            let mut removed = slot.take()?;
            *slot = removed.left.take().or_else(|| removed.right.take());
            trace!(promoted = slot.is_some(), "unlinked node with at most one child");
            removed
        };

        self.len -= 1;
        let Node { value, .. } = *removed;
        Some(value)
    }

    /// Frees every node, leaving the tree exactly as [`Tree::new`] would.
    ///
    /// Only the root is ever touched: while it has two children it pulls in the rightmost node of
    /// its left subtree (freeing that node), and once it has at most one child it is freed and the
    /// child becomes the new root. Every freed node is childless by then, so dropping it is
    /// shallow no matter how deep the tree was.
    pub fn dispose(&mut self) {
        let mut freed = 0usize;

        while let Some(root) = self.root.as_deref_mut() {
            let unlinked = if root.left.is_some() && root.right.is_some() {
                let Node {
                    key, value, left, ..
                } = root;
                replace_by_rightmost(key, value, left)
            } else if let Some(mut old_root) = self.root.take() {
                self.root = old_root.left.take().or_else(|| old_root.right.take());
                Some(old_root)
            } else {
                None
            };

            drop(unlinked);
            freed += 1;
        }

        self.len = 0;
        if freed > 0 {
            debug!(freed, "disposed tree");
        }
    }

    /// Checks that inorder keys are strictly ascending and that [`Tree::len`] matches the number
    /// of reachable nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use iterbst::iterative::Tree;
    ///
    /// let tree: Tree = "hello".chars().zip(0..).collect();
    /// assert!(tree.validate().is_ok());
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError>
    where
        K: Ord,
    {
        let mut counted = 0;
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if previous.is_some_and(|previous| previous >= key) {
                return Err(InvariantError::OutOfOrder { position: counted });
            }
            previous = Some(key);
            counted += 1;
        }

        if counted != self.len {
            return Err(InvariantError::LenMismatch {
                recorded: self.len,
                counted,
            });
        }

        Ok(())
    }
}

/// Walks down from `slot` and returns the link that holds `key`, or the empty link where `key`
/// would have to be attached.
fn locate<'a, K: Ord, V>(mut slot: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V> {
    while let Some(node) = slot.as_deref() {
        let ordering = key.cmp(&node.key);
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = slot {
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    slot
}

/// Swaps `key` and `value` with the contents of the rightmost node of `subtree`, then unlinks
/// that node by promoting its left child (it has no right child) into its slot.
///
/// The unlinked node is returned childless and holding the swapped-out key and value. An empty
/// `subtree` leaves everything untouched and yields `None`.
fn replace_by_rightmost<K, V>(
    key: &mut K,
    value: &mut V,
    subtree: &mut Link<K, V>,
) -> Option<Box<Node<K, V>>> {
    let mut slot = subtree;
    while slot.as_deref().is_some_and(|node| node.right.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.right;
        }
    }

    let mut rightmost = slot.take()?;
    *slot = rightmost.left.take();
    trace!(promoted_left = slot.is_some(), "unlinked rightmost donor");

    mem::swap(key, &mut rightmost.key);
    mem::swap(value, &mut rightmost.value);
    Some(rightmost)
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. Each child link exclusively owns its subtree; there are no parent pointers.
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}
