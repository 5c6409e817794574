use std::cmp::Ordering;

use crate::types::RbNodeLike;

/// Finds the node whose key compares equal to `key`.
///
/// Returns `None` when descent falls off the tree.
pub fn lookup<N, C>(arena: &[N], root: Option<u32>, key: &N::Key, comparator: &C) -> Option<u32>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        let node = &arena[i as usize];
        curr = match comparator(key, node.key()) {
            Ordering::Less => node.l(),
            Ordering::Greater => node.r(),
            Ordering::Equal => return Some(i),
        };
    }
    None
}
