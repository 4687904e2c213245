//! Binary-tree recursion: depth, diameter, BST validity, LCA, level order.
//!
//! Trees are strictly owned: each node owns its children through
//! `Option<Box<TreeNode>>`, so there are no cycles and no shared nodes.
//! The recursive routines use stack depth proportional to tree height.

use std::collections::VecDeque;

/// A binary tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A leaf holding `val`.
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i32, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Builds a tree from its level-order serialization, `None` marking a
    /// missing child (`[3, 9, 20, null, null, 15, 7]`).
    ///
    /// Children are listed only for present nodes, so the slot of each child
    /// follows from a running cursor rather than from `2i + 1` arithmetic.
    pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
        let mut slots: Vec<Option<Box<TreeNode>>> = values
            .iter()
            .map(|v| v.map(|val| Box::new(TreeNode::new(val))))
            .collect();
        if !matches!(slots.first(), Some(Some(_))) {
            return None;
        }

        // (parent slot, left slot, right slot); children always sit after their parent.
        let mut links = Vec::new();
        let mut cursor = 1;
        for (idx, value) in values.iter().enumerate() {
            if cursor >= values.len() {
                break;
            }
            if value.is_some() {
                links.push((idx, cursor, cursor + 1));
                cursor += 2;
            }
        }

        // Attach bottom-up so every child is complete before its parent takes it.
        for &(parent, left, right) in links.iter().rev() {
            let left = slots.get_mut(left).and_then(Option::take);
            let right = slots.get_mut(right).and_then(Option::take);
            if let Some(node) = slots[parent].as_mut() {
                node.left = left;
                node.right = right;
            }
        }
        slots.swap_remove(0)
    }

    /// First node holding `val`, in pre-order.
    pub fn find(&self, val: i32) -> Option<&TreeNode> {
        if self.val == val {
            return Some(self);
        }
        self.left
            .as_deref()
            .and_then(|n| n.find(val))
            .or_else(|| self.right.as_deref().and_then(|n| n.find(val)))
    }
}

/// Number of nodes on the longest root-to-leaf path.
pub fn max_depth(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + max_depth(node.left.as_deref()).max(max_depth(node.right.as_deref())),
    }
}

/// Number of edges on the longest path between any two nodes.
///
/// The path need not pass through the root, so each subtree reports both its
/// height and the best diameter found inside it.
pub fn diameter_of_binary_tree(root: Option<&TreeNode>) -> usize {
    height_and_diameter(root).1
}

/// `(height, best diameter)` of the subtree rooted at `node`.
fn height_and_diameter(node: Option<&TreeNode>) -> (usize, usize) {
    let Some(node) = node else {
        return (0, 0);
    };
    let (left_h, left_best) = height_and_diameter(node.left.as_deref());
    let (right_h, right_best) = height_and_diameter(node.right.as_deref());

    let through_here = left_h + right_h;
    (
        1 + left_h.max(right_h),
        through_here.max(left_best).max(right_best),
    )
}

/// Whether the tree is a binary search tree with strictly ordered keys.
///
/// Each node narrows the open interval its descendants must fall in; a value
/// equal to a bound is invalid.
pub fn is_valid_bst(root: Option<&TreeNode>) -> bool {
    within_bounds(root, None, None)
}

fn within_bounds(node: Option<&TreeNode>, low: Option<i32>, high: Option<i32>) -> bool {
    let Some(node) = node else {
        return true;
    };
    if low.is_some_and(|low| node.val <= low) || high.is_some_and(|high| node.val >= high) {
        return false;
    }
    within_bounds(node.left.as_deref(), low, Some(node.val))
        && within_bounds(node.right.as_deref(), Some(node.val), high)
}

/// Lowest common ancestor of nodes `p` and `q`, compared by identity.
///
/// Searches post-order. A subtree reports whichever target it contains; the
/// first node where both sides report is the answer. If only one target is in
/// the tree, that target is returned.
pub fn lowest_common_ancestor<'a>(
    root: Option<&'a TreeNode>,
    p: &TreeNode,
    q: &TreeNode,
) -> Option<&'a TreeNode> {
    let node = root?;
    if std::ptr::eq(node, p) || std::ptr::eq(node, q) {
        return Some(node);
    }

    let left = lowest_common_ancestor(node.left.as_deref(), p, q);
    let right = lowest_common_ancestor(node.right.as_deref(), p, q);
    match (left, right) {
        (Some(_), Some(_)) => Some(node),
        (found, None) | (None, found) => found,
    }
}

/// Node values grouped by depth, top level first, left to right.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();

    while !queue.is_empty() {
        // The queue holds exactly one level at this point.
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else {
                break;
            };
            level.push(node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels.push(level);
    }
    levels
}
