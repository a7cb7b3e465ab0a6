//! Preorder, inorder and postorder walks driven by explicit stacks.
//!
//! Every order is built on the same primitive: the left spine of a subtree, i.e. the subtree root
//! followed by its left child, that child's left child, and so on until a node has no left
//! child. The stacks only hold shared references, so a traversal can never outlive or modify the
//! tree it walks.
//!
//! # Examples
//!
//! ```
//! use iterbst::iterative::Tree;
//!
//! let tree: Tree = "5381479".chars().zip(0..).collect();
//!
//! let preorder: String = tree.iter_preorder().map(|(key, _)| key).collect();
//! let inorder: String = tree.iter_inorder().map(|(key, _)| key).collect();
//! let postorder: String = tree.iter_postorder().map(|(key, _)| key).collect();
//!
//! assert_eq!(preorder, "5314879");
//! assert_eq!(inorder, "1345789");
//! assert_eq!(postorder, "1437985");
//!
//! // The visitor forms walk the same orders.
//! let mut visited = Vec::new();
//! tree.postorder(|key, _| visited.push(*key));
//! assert_eq!(visited.into_iter().collect::<String>(), postorder);
//! ```

use std::iter::FusedIterator;

use super::{Node, Tree};

/// The left spine of a subtree, yielded from the subtree root downwards.
struct LeftSpine<'a, K, V> {
    current: Option<&'a Node<K, V>>,
}

impl<'a, K, V> LeftSpine<'a, K, V> {
    fn new(subtree: Option<&'a Node<K, V>>) -> Self {
        Self { current: subtree }
    }
}

impl<'a, K, V> Iterator for LeftSpine<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.left.as_deref();
        Some(node)
    }
}

/// Iterator over a tree's entries in preorder (node, left, right).
///
/// Each node is yielded as it is pushed during a left spine descent. The stack keeps the nodes
/// whose right subtree has not been started yet.
pub struct Preorder<'a, K, V> {
    descent: LeftSpine<'a, K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Preorder<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>) -> Self {
        Self {
            descent: LeftSpine::new(root),
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.descent.next() {
                self.stack.push(node);
                return Some(node.entry());
            }

            let parent = self.stack.pop()?;
            self.descent = LeftSpine::new(parent.right.as_deref());
        }
    }
}

impl<K, V> FusedIterator for Preorder<'_, K, V> {}

/// Iterator over a tree's entries in inorder (left, node, right), i.e. by ascending key.
///
/// A node is yielded when it is popped: everything on its left has been pushed and popped by
/// then. Its right subtree's left spine is pushed right after.
pub struct Inorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Inorder<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>) -> Self {
        Self {
            stack: LeftSpine::new(root).collect(),
        }
    }
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(LeftSpine::new(node.right.as_deref()));
        Some(node.entry())
    }
}

impl<K, V> FusedIterator for Inorder<'_, K, V> {}

/// Iterator over a tree's entries in postorder (left, right, node).
///
/// `first_visit` runs parallel to `to_visit`. A node popped for the first time goes back on the
/// stack, marked as seen, above its right subtree's left spine. Only when it is popped a second
/// time, with both subtrees done, is it yielded.
pub struct Postorder<'a, K, V> {
    to_visit: Vec<&'a Node<K, V>>,
    first_visit: Vec<bool>,
}

impl<'a, K, V> Postorder<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut postorder = Self {
            to_visit: Vec::new(),
            first_visit: Vec::new(),
        };
        postorder.push_left_spine(root);
        postorder
    }

    fn push_left_spine(&mut self, subtree: Option<&'a Node<K, V>>) {
        for node in LeftSpine::new(subtree) {
            self.to_visit.push(node);
            self.first_visit.push(true);
        }
    }
}

impl<'a, K, V> Iterator for Postorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.to_visit.pop()?;
            if !self.first_visit.pop()? {
                return Some(node.entry());
            }

            self.to_visit.push(node);
            self.first_visit.push(false);
            self.push_left_spine(node.right.as_deref());
        }
    }
}

impl<K, V> FusedIterator for Postorder<'_, K, V> {}

impl<K, V> Tree<K, V> {
    /// Iterates over the entries in ascending key order. Same as [`Tree::iter_inorder`].
    pub fn iter(&self) -> Inorder<'_, K, V> {
        self.iter_inorder()
    }

    /// Iterates over the entries in preorder: a node, then its left subtree, then its right
    /// subtree.
    pub fn iter_preorder(&self) -> Preorder<'_, K, V> {
        Preorder::new(self.root.as_deref())
    }

    /// Iterates over the entries in inorder, which for a BST is ascending key order.
    pub fn iter_inorder(&self) -> Inorder<'_, K, V> {
        Inorder::new(self.root.as_deref())
    }

    /// Iterates over the entries in postorder: a node's left subtree, then its right subtree,
    /// then the node.
    pub fn iter_postorder(&self) -> Postorder<'_, K, V> {
        Postorder::new(self.root.as_deref())
    }

    /// Calls `visit` on every entry in preorder.
    pub fn preorder(&self, mut visit: impl FnMut(&K, &V)) {
        for (key, value) in self.iter_preorder() {
            visit(key, value);
        }
    }

    /// Calls `visit` on every entry in inorder.
    pub fn inorder(&self, mut visit: impl FnMut(&K, &V)) {
        for (key, value) in self.iter_inorder() {
            visit(key, value);
        }
    }

    /// Calls `visit` on every entry in postorder.
    pub fn postorder(&self, mut visit: impl FnMut(&K, &V)) {
        for (key, value) in self.iter_postorder() {
            visit(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Inorder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
