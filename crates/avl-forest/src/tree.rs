use std::fmt;

use crate::error::InvariantError;
use crate::iter::{InOrder, PreOrder};
use crate::print::{in_order_with_heights, print_node};
use crate::types::{AvlNode, Link};
use crate::util;

/// Height-balanced ordered set.
///
/// Holds nothing but the root link; size and height are derived on demand.
/// Dropping the tree releases its nodes through [`AvlTree::destroy`]'s
/// post-order walk.
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Single-node tree.
    pub fn from_value(value: T) -> Self {
        Self {
            root: Some(AvlNode::leaf(value)),
        }
    }

    pub fn root(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values, counted by walking the tree.
    pub fn len(&self) -> usize {
        util::size(&self.root)
    }

    pub fn height(&self) -> i32 {
        util::height(&self.root)
    }

    pub fn balance_factor(&self) -> i32 {
        util::balance_factor(&self.root)
    }

    pub fn min(&self) -> Option<&T> {
        util::find_minimum(&self.root).map(|n| &n.value)
    }

    pub fn max(&self) -> Option<&T> {
        util::find_maximum(&self.root).map(|n| &n.value)
    }

    /// Values in ascending order.
    pub fn iter(&self) -> InOrder<'_, AvlNode<T>> {
        InOrder::new(self.root.as_deref())
    }

    /// Values in node, left, right order.
    pub fn pre_order(&self) -> PreOrder<'_, AvlNode<T>> {
        PreOrder::new(self.root.as_deref())
    }

    pub fn for_each_in_order<F: FnMut(&T)>(&self, mut visit: F) {
        util::traverse_in_order(&self.root, &mut visit);
    }

    /// First value in pre-order matching `predicate`.
    pub fn find<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<&T> {
        util::find_pre_order(&self.root, &mut predicate)
    }

    /// Releases every node, children before parent. Returns the number of
    /// released nodes.
    pub fn destroy(mut self) -> usize {
        util::destroy(self.root.take())
    }

    /// Removes every value, leaving an empty tree.
    pub fn clear(&mut self) {
        util::destroy(self.root.take());
    }
}

impl<T: Ord> AvlTree<T> {
    /// Builds a tree by inserting `values` one at a time, in order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Inserts `value`; returns `false` if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.root = util::insert(self.root.take(), value);
        true
    }

    /// Removes `value`; returns `false` if it was not present.
    pub fn delete(&mut self, value: &T) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.root = util::delete(self.root.take(), value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.root, value).is_some()
    }

    /// The stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        util::find(&self.root, value).map(|n| &n.value)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.root)
    }
}

impl<T: Clone> AvlTree<T> {
    /// Owned copy of the values in pre-order.
    pub fn to_pre_order_vec(&self) -> Vec<T> {
        util::traverse_pre_order(&self.root)
    }
}

impl<T: fmt::Debug> AvlTree<T> {
    pub fn to_tree_string(&self) -> String {
        format!("AvlTree {}", print_node(self.root.as_deref(), ""))
    }

    /// In-order `value(height) ` dump.
    pub fn to_heights_string(&self) -> String {
        in_order_with_heights(self.root.as_deref())
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        util::destroy(self.root.take());
    }
}

impl<T: Clone> Clone for AvlTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.root = util::insert(self.root.take(), value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, AvlNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
