//! A minimal, unbalanced Binary Search Tree (BST) of unique values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a node. A node stores a value and will sometimes
//! have child nodes. In this crate a node *is* a tree: every [`Tree`] is the
//! subtree rooted at itself. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! This tree adds a third: no two values in the tree compare equal. Inserting
//! a value that is already present fails with [`DuplicateValue`] and leaves
//! the tree as it was.
//!
//! Nothing here keeps the tree balanced. Its shape is entirely decided by the
//! order of insertion, so inserting already sorted values produces a tree
//! that is really a linked list and every operation becomes `O(N)`.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new(5);
//! for x in [3, 8, 1, 4, 7, 9] {
//!     tree.insert(x).unwrap();
//! }
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.find(&6), None);
//!
//! let err = tree.insert(8).unwrap_err();
//! assert_eq!(err.value(), &8);
//!
//! assert_eq!(tree.render(), "1\n3\n4\n5\n7\n8\n9\n");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod tree;


pub use error::DuplicateValue;
pub use tree::Tree;
