//! This crate exposes a Binary Search Tree (BST) whose operations never recurse. Every walk over
//! the structure is a loop over owning links, and traversals keep their bookkeeping on explicit
//! stacks instead of the call stack.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. This tree does no rebalancing, so an adversarial insertion
//! order (e.g. ascending keys) degrades it to a linked list of height `N`. That is exactly the
//! shape where recursive algorithms overflow the stack, and why nothing here recurses.
//!
//! ## Traversals
//!
//! Preorder, inorder and postorder walks are available both as lazy iterators and as
//! visitor-taking methods. See [`iterative::traversal`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iterative;

pub use error::InvariantError;
pub use iterative::Tree;

#[cfg(test)]
mod test;
