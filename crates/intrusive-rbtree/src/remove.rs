//! Deletion by key with black-height fix-up.
//!
//! The ancestor chain is kept explicitly: `path[0]` is the root (held by the
//! caller's root slot) and every later frame records the direction taken
//! from the frame before it. Fix-up walks back up this chain and may grow it
//! by one frame when a rotation pushes a new node between a deficit and its
//! parent.

use std::cmp::Ordering;

use log::{error, trace};
use smallvec::SmallVec;

use crate::access::{child, color_of, is_red, paint, relink, set_child, take_place, Slot};
use crate::error::RbError;
use crate::types::{Color, Dir, RbNodeLike};

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: u32,
    dir: Dir,
}

/// Red-black tree height is bounded by `2 * log2(n + 1)`, which stays within
/// this many frames for any arena addressable by `u32`.
type Path = SmallVec<[Frame; 64]>;

/// Position of a black-height deficit: the child slot of `path[depth - 1]`
/// on side `dir`, or the root slot when `depth == 0`.
#[derive(Clone, Copy, Debug)]
struct Deficit {
    depth: usize,
    dir: Dir,
}

#[inline]
fn slot_of(path: &Path, k: usize) -> Slot {
    if k == 0 {
        Slot::Root
    } else {
        Slot::Child(path[k - 1].node, path[k].dir)
    }
}

/// Removes the node whose key compares equal to `key`.
///
/// Returns the removed node, or `None` if no such key is present (the tree
/// is left untouched). When the removed node had two children, its in-order
/// neighbour is moved into its position rather than copying payloads, so
/// every node that stays in the tree keeps its identity.
pub fn remove<N, C>(arena: &mut [N], root: &mut Option<u32>, key: &N::Key, comparator: &C) -> Option<u32>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    let mut path = Path::new();
    // The root is treated as a left child of the root slot, which makes the
    // two-children case below prefer the successor at the top.
    let mut dir = Dir::Left;
    let mut curr = *root;
    let target = loop {
        let i = curr?;
        path.push(Frame { node: i, dir });
        let node = &arena[i as usize];
        match comparator(key, node.key()) {
            Ordering::Less => {
                dir = Dir::Left;
                curr = node.l();
            }
            Ordering::Greater => {
                dir = Dir::Right;
                curr = node.r();
            }
            Ordering::Equal => break i,
        }
    };

    let t = path.len() - 1;
    let l = child(arena, target, Dir::Left);
    let r = child(arena, target, Dir::Right);

    let (removed_color, replacement, deficit) = match (l, r) {
        (None, c) | (c, None) => {
            let removed_color = color_of(arena, Some(target));
            relink(arena, root, slot_of(&path, t), c);
            let deficit = Deficit {
                depth: t,
                dir: path[t].dir,
            };
            (removed_color, c, deficit)
        }
        (Some(_), Some(_)) => {
            // Walk one step away from the direction we arrived by, then as
            // far as possible back towards it.
            let towards = path[t].dir;
            let mut curr = child(arena, target, towards.flip());
            let mut step = towards.flip();
            while let Some(i) = curr {
                path.push(Frame { node: i, dir: step });
                step = towards;
                curr = child(arena, i, towards);
            }

            let x = path.len() - 1;
            let extreme = path[x].node;
            let c = child(arena, extreme, towards.flip());
            let removed_color = color_of(arena, Some(extreme));

            relink(arena, root, slot_of(&path, t), Some(extreme));
            take_place(arena, extreme, target);
            path[t].node = extreme;

            // `path[x - 1]` may itself be `extreme` now, which is exactly the
            // link that has to be cut.
            relink(arena, root, slot_of(&path, x), c);
            let deficit = Deficit {
                depth: x,
                dir: path[x].dir,
            };
            (removed_color, c, deficit)
        }
    };

    if removed_color == Color::Red {
        return Some(target);
    }
    if let Some(c) = replacement {
        if is_red(arena, Some(c)) {
            paint(arena, c, Color::Black);
            return Some(target);
        }
    }

    path.truncate(deficit.depth);
    if let Err(err) = rebalance(arena, root, &mut path, deficit) {
        error!("remove: {err}");
    }
    Some(target)
}

/// Absorbs a black-height deficit of one, walking up the chain as needed.
fn rebalance<N>(arena: &mut [N], root: &mut Option<u32>, path: &mut Path, mut at: Deficit) -> Result<(), RbError>
where
    N: RbNodeLike,
{
    loop {
        if at.depth == 0 {
            return Ok(());
        }
        let d = at.dir;
        let p = path[at.depth - 1].node;

        let Some(s) = child(arena, p, d.flip()) else {
            return Err(RbError::MissingSibling { parent: p });
        };

        if is_red(arena, Some(s)) {
            trace!("remove: red sibling {s}, rotate at {p}");
            paint(arena, p, Color::Red);
            paint(arena, s, Color::Black);
            relink(arena, root, slot_of(path, at.depth - 1), Some(s));
            let inner = child(arena, s, d);
            set_child(arena, s, d, Some(p));
            set_child(arena, p, d.flip(), inner);

            path[at.depth - 1].node = s;
            path.push(Frame { node: p, dir: d });
            at.depth += 1;
        }

        let p = path[at.depth - 1].node;
        let mut s = match child(arena, p, d.flip()) {
            Some(s) if !is_red(arena, Some(s)) => s,
            _ => return Err(RbError::SiblingNotBlack { parent: p }),
        };
        let near = child(arena, s, d);
        let mut far = child(arena, s, d.flip());

        if !is_red(arena, far) {
            paint(arena, s, Color::Red);
            match near {
                Some(n) if is_red(arena, Some(n)) => {
                    trace!("remove: red near nephew {n}, rotate at {s}");
                    paint(arena, n, Color::Black);
                    set_child(arena, p, d.flip(), Some(n));
                    let inner = child(arena, n, d.flip());
                    set_child(arena, s, d, inner);
                    set_child(arena, n, d.flip(), Some(s));
                    far = Some(s);
                    s = n;
                }
                _ => {
                    if is_red(arena, Some(p)) {
                        trace!("remove: black nephews, red parent {p}");
                        paint(arena, p, Color::Black);
                        return Ok(());
                    }
                    trace!("remove: black nephews, deficit moves to {p}");
                    at = Deficit {
                        depth: at.depth - 1,
                        dir: path[at.depth - 1].dir,
                    };
                    path.truncate(at.depth);
                    continue;
                }
            }
        }

        let Some(far) = far.filter(|&f| is_red(arena, Some(f))) else {
            return Err(RbError::FarNephewNotRed { sibling: s });
        };

        trace!("remove: red far nephew {far}, rotate at {p}");
        relink(arena, root, slot_of(path, at.depth - 1), Some(s));
        let inner = child(arena, s, d);
        set_child(arena, p, d.flip(), inner);
        set_child(arena, s, d, Some(p));
        let parent_color = color_of(arena, Some(p));
        paint(arena, s, parent_color);
        paint(arena, p, Color::Black);
        paint(arena, far, Color::Black);
        return Ok(());
    }
}
