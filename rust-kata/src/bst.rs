//! Binary search tree with a pruned range sum.
//!
//! [`range_sum`] descends recursively and returns its partial sum instead of
//! threading an accumulator through the calls. The pruning relies on the BST
//! invariant: a node below `low` has nothing useful on its left, a node above
//! `high` has nothing useful on its right.

use std::cmp::Ordering;

/// A tree node. Fields are public so callers can assemble trees by hand;
/// [`range_sum`] assumes they respect the BST ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    #[inline]
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn new(value: i64, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

/// Sum of every value in `[low, high]` reachable from `node`.
///
/// An absent node sums to 0. An empty range (`low > high`) sums to 0.
/// The sum wraps on overflow. Recursion depth is the tree height; use
/// [`Bst::range_sum`] for trees that may be list-shaped.
pub fn range_sum(node: Option<&Node>, low: i64, high: i64) -> i64 {
    let Some(node) = node else {
        return 0;
    };
    let v = node.value;
    let own = if (low..=high).contains(&v) { v } else { 0 };
    let left = if v >= low {
        range_sum(node.left.as_deref(), low, high)
    } else {
        0
    };
    let right = if v <= high {
        range_sum(node.right.as_deref(), low, high)
    } else {
        0
    };
    own.wrapping_add(left).wrapping_add(right)
}

/// Owning binary search tree; duplicate values are ignored on insert.
#[derive(Debug, Default)]
pub struct Bst {
    root: Option<Box<Node>>,
    len: usize,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a hand-built tree. The caller vouches for the BST ordering.
    pub fn from_root(root: Node) -> Self {
        let mut tree = Self {
            root: Some(Box::new(root)),
            len: 0,
        };
        tree.len = tree.values().len();
        tree
    }

    /// Insert `value`; returns false if it was already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node::leaf(value)));
        self.len += 1;
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Same pruning and result as [`range_sum`], walked with an explicit
    /// stack so the depth of the tree does not matter.
    pub fn range_sum(&self, low: i64, high: i64) -> i64 {
        let mut sum = 0i64;
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            let v = node.value;
            if (low..=high).contains(&v) {
                sum = sum.wrapping_add(v);
            }
            if v >= low {
                stack.extend(node.left.as_deref());
            }
            if v <= high {
                stack.extend(node.right.as_deref());
            }
        }
        sum
    }

    /// Values in ascending order.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root();
        while cur.is_some() || !stack.is_empty() {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                cur = node.right.as_deref();
            }
        }
        out
    }
}

impl FromIterator<i64> for Bst {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Bst::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl Drop for Bst {
    // Unlink children onto an explicit stack so a degenerate (list-shaped)
    // tree does not recurse once per node on drop.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
