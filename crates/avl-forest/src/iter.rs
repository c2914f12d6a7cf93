//! Lazy traversal iterators.
//!
//! Both iterators keep an explicit stack of borrowed nodes, so they are
//! restartable by cloning and never recurse.

use std::iter::FusedIterator;

use crate::types::Node;

/// Ascending (left, node, right) traversal.
#[derive(Debug)]
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut curr: Option<&'a N>) {
        while let Some(n) = curr {
            self.stack.push(n);
            curr = n.left();
        }
    }
}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, N: Node> Iterator for InOrder<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right());
        Some(n.value())
    }
}

impl<N: Node> FusedIterator for InOrder<'_, N> {}

/// Node, left, right traversal.
#[derive(Debug)]
pub struct PreOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: Node> PreOrder<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<N> Clone for PreOrder<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, N: Node> Iterator for PreOrder<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        if let Some(r) = n.right() {
            self.stack.push(r);
        }
        if let Some(l) = n.left() {
            self.stack.push(l);
        }
        Some(n.value())
    }
}

impl<N: Node> FusedIterator for PreOrder<'_, N> {}
