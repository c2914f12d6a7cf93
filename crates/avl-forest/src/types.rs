//! Node types.
//!
//! Every node exclusively owns its children through a [`Link`]. There is no
//! parent back-reference, so restructuring is done by moving boxes between
//! child slots (`Option::take` out of one slot, assign into another).

/// An owned, possibly absent, subtree.
pub type Link<T> = Option<Box<AvlNode<T>>>;

/// Read-only view of a binary tree node, used by printers and iterators.
pub trait Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
    /// Cached height of the subtree rooted at this node, at least `1`.
    fn height(&self) -> i32;
}

/// A node of the height-balanced tree.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) height: i32,
}

impl<T> AvlNode<T> {
    /// Creates a detached leaf with height `1`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Creates a boxed leaf, ready to be placed into a [`Link`].
    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + crate::util::height(&self.left).max(crate::util::height(&self.right));
    }
}

impl<T> Node for AvlNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn height(&self) -> i32 {
        self.height
    }
}
