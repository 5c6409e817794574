//! Full-tree invariant check, for tests and diagnostics.

use std::cmp::Ordering;

use crate::error::RbError;
use crate::types::RbNodeLike;

struct Walk<'a, N, C> {
    arena: &'a [N],
    comparator: &'a C,
    seen: Vec<bool>,
    prev: Option<u32>,
    count: usize,
}

/// Checks every red-black invariant of the tree at `root` and returns its
/// node count.
///
/// Verified: the root is black, no red node has a red child, all paths to a
/// leaf carry the same number of black nodes, in-order keys are strictly
/// increasing under `comparator`, and no node is reachable twice.
pub fn validate<N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<usize, RbError>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    let Some(top) = root else {
        return Ok(0);
    };
    if arena[top as usize].is_red() {
        return Err(RbError::RedRoot(top));
    }

    let mut walk = Walk {
        arena,
        comparator,
        seen: vec![false; arena.len()],
        prev: None,
        count: 0,
    };
    walk.visit(root)?;
    Ok(walk.count)
}

impl<N, C> Walk<'_, N, C>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    /// Returns the black height of the subtree, sentinel excluded.
    fn visit(&mut self, node: Option<u32>) -> Result<usize, RbError> {
        let Some(i) = node else {
            return Ok(0);
        };
        if std::mem::replace(&mut self.seen[i as usize], true) {
            return Err(RbError::Cycle(i));
        }

        let arena = self.arena;
        let n = &arena[i as usize];
        let (l, r) = (n.l(), n.r());
        if n.is_red() {
            for c in [l, r].into_iter().flatten() {
                if arena[c as usize].is_red() {
                    return Err(RbError::RedRed { parent: i, child: c });
                }
            }
        }

        let left = self.visit(l)?;
        if let Some(prev) = self.prev {
            if (self.comparator)(arena[prev as usize].key(), n.key()) != Ordering::Less {
                return Err(RbError::Order { prev, next: i });
            }
        }
        self.prev = Some(i);
        self.count += 1;
        let right = self.visit(r)?;

        if left != right {
            return Err(RbError::BlackHeight {
                node: i,
                left,
                right,
            });
        }
        Ok(left + usize::from(n.is_black()))
    }
}
