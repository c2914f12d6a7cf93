//! Free-function AVL algorithms over owned child links.
//!
//! Mutating functions consume a subtree and return its (possibly new) root,
//! which the caller stores back into the slot it took the subtree from.
//! Recursion depth is bounded by tree height.

use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::types::{AvlNode, Link};

/// Height of a subtree; `0` when absent.
#[inline]
pub fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// `height(left) - height(right)`; `0` when absent.
#[inline]
pub fn balance_factor<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| node_balance(n))
}

#[inline]
fn node_balance<T>(node: &AvlNode<T>) -> i32 {
    height(&node.left) - height(&node.right)
}

/// Single left rotation around `x`; `x.right` becomes the subtree root.
///
/// Returns `x` untouched if it has no right child.
pub fn rotate_left<T>(mut x: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    log::trace!("rotate_left: new subtree height {}", y.height);
    y
}

/// Single right rotation around `x`; `x.left` becomes the subtree root.
///
/// Returns `x` untouched if it has no left child.
pub fn rotate_right<T>(mut x: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut y) = x.left.take() else {
        return x;
    };
    x.left = y.right.take();
    x.update_height();
    y.right = Some(x);
    y.update_height();
    log::trace!("rotate_right: new subtree height {}", y.height);
    y
}

fn side_of<T: Ord>(child: &Link<T>, value: &T) -> Ordering {
    child.as_ref().map_or(Ordering::Equal, |c| value.cmp(&c.value))
}

/// Inserts `value` under `root`. Equal values are rejected and leave the
/// subtree unchanged.
pub fn insert<T: Ord>(root: Link<T>, value: T) -> Link<T> {
    let Some(mut node) = root else {
        return Some(AvlNode::leaf(value));
    };

    // Which side of the child the value lands on picks single vs. double rotation.
    let side = match value.cmp(&node.value) {
        Ordering::Less => {
            let side = side_of(&node.left, &value);
            node.left = insert(node.left.take(), value);
            side
        }
        Ordering::Greater => {
            let side = side_of(&node.right, &value);
            node.right = insert(node.right.take(), value);
            side
        }
        Ordering::Equal => return Some(node),
    };

    node.update_height();
    Some(rebalance_after_insert(node, side))
}

fn rebalance_after_insert<T>(mut node: Box<AvlNode<T>>, side: Ordering) -> Box<AvlNode<T>> {
    let bf = node_balance(&node);
    if bf > 1 {
        if side == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        if side == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Removes `value` from under `root`. Absent values are a no-op.
///
/// A node with two children keeps its place in the tree and takes over the
/// in-order successor's value; the successor node is the one released. Any
/// reference to "the node holding `x`" is therefore not stable across this
/// call.
pub fn delete<T: Ord>(root: Link<T>, value: &T) -> Link<T> {
    let mut node = root?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => {
            node = match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => child,
                (Some(left), Some(right)) => {
                    let (right, successor) = take_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                    node
                }
            };
        }
    }

    node.update_height();
    Some(rebalance_after_delete(node))
}

/// Detaches the minimum of a subtree, rebalancing along the left spine the
/// same way [`delete`] does on its way back up.
fn take_min<T>(mut node: Box<AvlNode<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let AvlNode { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            node.update_height();
            (Some(rebalance_after_delete(node)), min)
        }
    }
}

fn rebalance_after_delete<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let bf = node_balance(&node);
    if bf > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Leftmost node of a subtree.
pub fn find_minimum<T>(link: &Link<T>) -> Option<&AvlNode<T>> {
    let mut curr = link.as_deref()?;
    while let Some(l) = curr.left.as_deref() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of a subtree.
pub fn find_maximum<T>(link: &Link<T>) -> Option<&AvlNode<T>> {
    let mut curr = link.as_deref()?;
    while let Some(r) = curr.right.as_deref() {
        curr = r;
    }
    Some(curr)
}

/// Finds the node holding a value equal to `value`.
pub fn find<'a, T: Ord>(link: &'a Link<T>, value: &T) -> Option<&'a AvlNode<T>> {
    let mut curr = link.as_deref();
    while let Some(n) = curr {
        curr = match value.cmp(&n.value) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
            Ordering::Equal => return Some(n),
        };
    }
    None
}

/// First value, in pre-order (node, left, right), matching `predicate`.
///
/// Useful when the predicate is unrelated to the ordering, e.g. a geometric
/// hit test over values positioned by their place in the tree.
pub fn find_pre_order<'a, T, P>(link: &'a Link<T>, predicate: &mut P) -> Option<&'a T>
where
    P: FnMut(&T) -> bool,
{
    let node = link.as_deref()?;
    if predicate(&node.value) {
        return Some(&node.value);
    }
    find_pre_order(&node.left, predicate).or_else(|| find_pre_order(&node.right, predicate))
}

/// Visits values in ascending order.
pub fn traverse_in_order<T, F>(link: &Link<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(n) = link {
        traverse_in_order(&n.left, visit);
        visit(&n.value);
        traverse_in_order(&n.right, visit);
    }
}

/// Values in pre-order (node, left, right), the order used to externalize a
/// tree's contents.
pub fn traverse_pre_order<T: Clone>(link: &Link<T>) -> Vec<T> {
    fn walk<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
        if let Some(n) = link {
            out.push(n.value.clone());
            walk(&n.left, out);
            walk(&n.right, out);
        }
    }

    let mut out = Vec::new();
    walk(link, &mut out);
    out
}

/// Number of nodes under `link`.
pub fn size<T>(link: &Link<T>) -> usize {
    link.as_ref()
        .map_or(0, |n| 1 + size(&n.left) + size(&n.right))
}

/// Releases every node of the subtree, children before parent, and returns
/// how many nodes were released.
///
/// Runs with an explicit stack, so depth is not limited by the call stack.
pub fn destroy<T>(root: Link<T>) -> usize {
    let mut released = 0;
    let mut stack: Vec<(Box<AvlNode<T>>, bool)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, false));
    }

    while let Some((mut node, expanded)) = stack.pop() {
        if expanded {
            drop(node);
            released += 1;
            continue;
        }
        let left = node.left.take();
        let right = node.right.take();
        stack.push((node, true));
        if let Some(right) = right {
            stack.push((right, false));
        }
        if let Some(left) = left {
            stack.push((left, false));
        }
    }

    log::debug!("destroy: released {released} nodes");
    released
}

/// Checks ordering, cached heights and balance of the whole subtree.
pub fn assert_avl_tree<T: Ord>(link: &Link<T>) -> Result<(), InvariantError> {
    fn validate<T>(link: &Link<T>) -> Result<i32, InvariantError> {
        let Some(n) = link else {
            return Ok(0);
        };
        let lh = validate(&n.left)?;
        let rh = validate(&n.right)?;
        let expected = 1 + lh.max(rh);
        if n.height != expected {
            return Err(InvariantError::HeightMismatch {
                expected,
                actual: n.height,
            });
        }
        let balance_factor = lh - rh;
        if !(-1..=1).contains(&balance_factor) {
            return Err(InvariantError::Unbalanced { balance_factor });
        }
        Ok(expected)
    }

    validate(link)?;

    let mut prev: Option<&T> = None;
    for (index, value) in crate::iter::InOrder::new(link.as_deref()).enumerate() {
        if let Some(prev) = prev {
            if prev >= value {
                return Err(InvariantError::Unordered { index });
            }
        }
        prev = Some(value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> Link<i32> {
        values
            .iter()
            .fold(None, |root, &v| insert(root, v))
    }

    #[test]
    fn rotations_recompute_both_heights() {
        let mut x = AvlNode::leaf(1);
        let mut y = AvlNode::leaf(2);
        y.right = Some(AvlNode::leaf(3));
        y.update_height();
        x.right = Some(y);
        x.update_height();
        assert_eq!(x.height, 3);

        let root = rotate_left(x);
        assert_eq!(root.value, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.left.as_ref().map(|n| n.height), Some(1));

        let root = rotate_right(root);
        assert_eq!(root.value, 1);
        assert_eq!(root.height, 3);
    }

    #[test]
    fn rotation_without_child_is_identity() {
        let leaf = AvlNode::leaf(7);
        assert_eq!(rotate_left(leaf).value, 7);
        assert_eq!(rotate_right(AvlNode::leaf(8)).value, 8);
    }

    #[test]
    fn empty_subtree_queries() {
        let empty: Link<i32> = None;
        assert_eq!(height(&empty), 0);
        assert_eq!(balance_factor(&empty), 0);
        assert!(find_minimum(&empty).is_none());
        assert!(find_maximum(&empty).is_none());
        assert!(delete(empty, &1).is_none());
    }

    #[test]
    fn delete_with_two_children_takes_successor_value() {
        let root = build(&[20, 10, 30, 25, 40]);
        let root = delete(root, &20);
        assert_eq!(root.as_ref().map(|n| n.value), Some(25));
        assert_eq!(traverse_pre_order(&root), vec![25, 10, 30, 40]);
        assert_avl_tree(&root).unwrap();
    }

    #[test]
    fn delete_rebalances_with_equal_child_factor() {
        // Removing 10 leaves 30 with balance factor 0 under a right-heavy root:
        // a single left rotation is chosen.
        let root = build(&[20, 10, 30, 25, 40]);
        let root = delete(root, &10);
        assert_eq!(traverse_pre_order(&root), vec![30, 20, 25, 40]);
        assert_avl_tree(&root).unwrap();
    }

    #[test]
    fn delete_right_left_case() {
        let root = build(&[20, 10, 30, 25]);
        let root = delete(root, &10);
        assert_eq!(traverse_pre_order(&root), vec![25, 20, 30]);
        assert_avl_tree(&root).unwrap();
    }

    #[test]
    fn destroy_counts_every_node() {
        let root = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(size(&root), 7);
        assert_eq!(destroy(root), 7);
        assert_eq!(destroy::<i32>(None), 0);
    }

    #[test]
    fn broken_height_is_reported() {
        let mut root = build(&[2, 1, 3]);
        if let Some(n) = root.as_mut() {
            n.height = 5;
        }
        assert_eq!(
            assert_avl_tree(&root),
            Err(InvariantError::HeightMismatch {
                expected: 2,
                actual: 5
            })
        );
    }
}
