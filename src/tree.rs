//! The tree itself. A [`Tree`] is a node holding one value and up to two
//! owned subtrees, so every node is also the root of its own tree.
//!
//! All traversals walk the tree with loops or an explicit stack rather than
//! recursion. A tree built from sorted input is as deep as it is long and
//! recursing down it would exhaust the call stack.

use std::cmp;
use std::fmt;

use log::{debug, trace};

use crate::error::DuplicateValue;

type Child<T> = Option<Box<Tree<T>>>;

/// A Binary Search Tree of unique values. This can be used for inserting
/// and finding values. There is no rebalancing and no deletion.
///
/// # Examples
///
/// ```
/// use unbalanced_bst::Tree;
///
/// let mut tree = Tree::new("m");
/// tree.insert("a").unwrap();
/// tree.insert("z").unwrap();
///
/// assert_eq!(tree.find(&"a"), Some(&"a"));
/// assert!(tree.insert("m").is_err());
/// assert_eq!(tree.render(), "a\nm\nz\n");
/// ```
pub struct Tree<T> {
    value: T,
    /// Values strictly less than `value`.
    left: Child<T>,
    /// Values strictly greater than `value`.
    right: Child<T>,
}

impl<T> Drop for Tree<T> {
    // Unlinks children onto a heap allocated stack so each `Box` is dropped
    // with no grandchildren attached.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Tree<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Creates a tree holding just `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node. For a whole tree that is the root value,
    /// which is always the first value the tree was built with.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Inserts `value` as a new leaf. If a value comparing equal is already in
    /// the tree, nothing changes and `value` is returned inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new(2);
    /// assert!(tree.insert(1).is_ok());
    ///
    /// let err = tree.insert(1).unwrap_err();
    /// assert_eq!(err.into_value(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValue<T>>
    where
        T: Ord,
    {
        let mut node = self;
        let mut depth = 1;
        loop {
            let slot = match value.cmp(&node.value) {
                cmp::Ordering::Less => &mut node.left,
                cmp::Ordering::Greater => &mut node.right,
                cmp::Ordering::Equal => {
                    debug!("rejected duplicate value at depth {}", depth);
                    return Err(DuplicateValue::new(value));
                }
            };

            depth += 1;
            match slot {
                Some(child) => node = &mut **child,
                None => {
                    *slot = Some(Box::new(Tree::new(value)));
                    trace!("inserted leaf at depth {}", depth);
                    return Ok(());
                }
            }
        }
    }

    /// Potentially finds the stored value equal to `target`. If no value
    /// compares equal, `None` is returned.
    ///
    /// Each step compares the stored value against `target` (never the
    /// other way around) and descends left when the stored value is greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.insert(4).unwrap();
    ///
    /// assert_eq!(tree.find(&4), Some(&4));
    /// assert_eq!(tree.find(&6), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let next = match node.value.cmp(target) {
                cmp::Ordering::Equal => return Some(&node.value),
                cmp::Ordering::Greater => node.left.as_deref(),
                cmp::Ordering::Less => node.right.as_deref(),
            };
            node = next?;
        }
    }

    /// Whether a value equal to `target` is in the tree.
    pub fn contains(&self, target: &T) -> bool
    where
        T: Ord,
    {
        self.find(target).is_some()
    }

    /// Number of values in the tree. A tree always holds at least its root.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        count
    }

    /// How many levels are in the tree. A tree with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// The stored values in ascending order, walked with an explicit stack.
    fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut ancestors = Vec::new();
        let mut cursor = Some(self);
        loop {
            while let Some(node) = cursor {
                ancestors.push(node);
                cursor = node.left.as_deref();
            }

            match ancestors.pop() {
                Some(node) => {
                    values.push(&node.value);
                    cursor = node.right.as_deref();
                }
                None => return values,
            }
        }
    }

    /// Renders the values in ascending order, one per line, each followed by
    /// a `\n`. This is the same as the [`Display`][fmt::Display] output.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

/// Writes an in-order walk of the tree into the formatter.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.in_order() {
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Lists the values in ascending order. The shape is left out, see
/// [`height`][Tree::height].
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order()).finish()
    }
}
