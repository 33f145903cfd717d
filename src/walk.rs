//! Pre-order walks over shortcut trees.
//!
//! The cleaner, the hotkey gate and the legacy patches all use these instead
//! of their own recursion.

use crate::model::{LegacyShortcut, Shortcut};

/// A node that owns an ordered list of children.
pub trait TreeNode: Sized {
    fn children(&self) -> &[Self];
    fn children_mut(&mut self) -> &mut Vec<Self>;
}

impl TreeNode for Shortcut {
    fn children(&self) -> &[Self] {
        &self.sub_list
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.sub_list
    }
}

impl TreeNode for LegacyShortcut {
    fn children(&self) -> &[Self] {
        &self.sub_list
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.sub_list
    }
}

/// Visit `node`, then walk the children it has after the visit.
///
/// A visitor that clears a node's children therefore prunes that subtree
/// from the walk.
pub fn walk_mut<N, F>(node: &mut N, visit: &mut F)
where
    N: TreeNode,
    F: FnMut(&mut N),
{
    visit(node);
    for child in node.children_mut() {
        walk_mut(child, visit);
    }
}

/// [`walk_mut`] over every tree of a forest.
pub fn walk_all_mut<N, F>(nodes: &mut [N], visit: &mut F)
where
    N: TreeNode,
    F: FnMut(&mut N),
{
    for node in nodes {
        walk_mut(node, visit);
    }
}

/// Number of nodes in a forest.
pub fn count_nodes<N: TreeNode>(nodes: &[N]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + count_nodes(n.children()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Shortcut> {
        vec![
            Shortcut::action("a", ""),
            Shortcut::category(
                "b",
                vec![
                    Shortcut::action("c", ""),
                    Shortcut::category("d", vec![Shortcut::action("e", "")]),
                ],
            ),
        ]
    }

    #[test]
    fn test_preorder() {
        let mut nodes = tree();
        let mut seen = Vec::new();
        walk_all_mut(&mut nodes, &mut |sh: &mut Shortcut| seen.push(sh.name.clone()));
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_visitor_can_prune() {
        let mut nodes = tree();
        let mut seen = Vec::new();
        walk_all_mut(&mut nodes, &mut |sh: &mut Shortcut| {
            seen.push(sh.name.clone());
            if sh.name == "d" {
                sh.sub_list.clear();
            }
        });
        assert_eq!(seen, ["a", "b", "c", "d"]);
        assert_eq!(count_nodes(&nodes), 4);
    }

    #[test]
    fn test_count_nodes() {
        assert_eq!(count_nodes(&tree()), 5);
        assert_eq!(count_nodes::<Shortcut>(&[]), 0);
    }
}
