//! Recursive insertion with red-black fix-up on the unwind.
//!
//! Each frame knows three generations: the current node C, the slot that
//! holds C (which names the parent P and the direction P -> C) and the slot
//! that holds P (which names the grandparent G). The call stack is the
//! ancestor stack; a fix-up that recolors G is handed two frames up.

use std::cmp::Ordering;

use log::trace;

use crate::access::{child, init_root, is_red, paint, relink, set_child, take_place, Slot};
use crate::types::{Color, Dir, RbNodeLike};

/// What a frame reports to its caller while unwinding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fixup {
    Done,
    /// The child this frame descended into is red: check it against the
    /// current node.
    Check,
    /// Grandparent was recolored red: the caller passes `Check` one more
    /// frame up.
    CheckGrandparent,
}

struct Insertion<'a, N, C> {
    arena: &'a mut [N],
    root: &'a mut Option<u32>,
    comparator: &'a C,
    node: u32,
    replaced: Option<u32>,
}

/// Inserts node `n` into the tree at `root`.
///
/// Returns `None` for a fresh key. When a node with an equal key is already
/// present, `n` takes over its exact position (links and color) and the
/// displaced node is returned; its own link fields are left as they were.
pub fn insert<N, C>(arena: &mut [N], root: &mut Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    let Some(top) = *root else {
        init_root(arena, n);
        *root = Some(n);
        return None;
    };

    let mut insertion = Insertion {
        arena: &mut *arena,
        root: &mut *root,
        comparator,
        node: n,
        replaced: None,
    };
    insertion.descend(top, Slot::Root, Slot::Root);
    let replaced = insertion.replaced;

    if let Some(top) = *root {
        paint(arena, top, Color::Black);
    }
    replaced
}

impl<N, C> Insertion<'_, N, C>
where
    N: RbNodeLike,
    C: Fn(&N::Key, &N::Key) -> Ordering,
{
    fn descend(&mut self, c: u32, up: Slot, pup: Slot) -> Fixup {
        let ord = (self.comparator)(
            self.arena[self.node as usize].key(),
            self.arena[c as usize].key(),
        );
        let dir = match ord {
            Ordering::Less => Dir::Left,
            Ordering::Greater => Dir::Right,
            Ordering::Equal => {
                self.replace(c, up);
                return Fixup::Done;
            }
        };

        let n = match child(self.arena, c, dir) {
            Some(next) => match self.descend(next, Slot::Child(c, dir), up) {
                Fixup::Done => return Fixup::Done,
                Fixup::Check => next,
                Fixup::CheckGrandparent => return Fixup::Check,
            },
            None => {
                self.link_leaf(c, dir);
                self.node
            }
        };

        self.fix_red(c, n, dir, up, pup)
    }

    fn replace(&mut self, c: u32, up: Slot) {
        relink(self.arena, self.root, up, Some(self.node));
        take_place(self.arena, self.node, c);
        self.replaced = Some(c);
    }

    fn link_leaf(&mut self, c: u32, dir: Dir) {
        let node = &mut self.arena[self.node as usize];
        node.set_color(Color::Red);
        node.set_l(None);
        node.set_r(None);
        set_child(self.arena, c, dir, Some(self.node));
    }

    /// `n` hangs off `c` on side `dir` and is red.
    fn fix_red(&mut self, c: u32, n: u32, dir: Dir, up: Slot, pup: Slot) -> Fixup {
        if !is_red(self.arena, Some(c)) {
            return Fixup::Done;
        }
        // A red node at the root is repainted by the top-level call.
        let Slot::Child(p, dp) = up else {
            return Fixup::Done;
        };

        let u = child(self.arena, p, dp.flip());
        if is_red(self.arena, u) {
            trace!("insert: red uncle, recolor at {p}");
            paint(self.arena, p, Color::Red);
            paint(self.arena, c, Color::Black);
            if let Some(u) = u {
                paint(self.arena, u, Color::Black);
            }
            return Fixup::CheckGrandparent;
        }

        let (mut c, mut n) = (c, n);
        if dir != dp {
            trace!("insert: inner grandchild, rotate at {c}");
            set_child(self.arena, p, dp, Some(n));
            let inner = child(self.arena, n, dp);
            set_child(self.arena, c, dir, inner);
            set_child(self.arena, n, dp, Some(c));
            std::mem::swap(&mut c, &mut n);
        }

        trace!("insert: outer grandchild, rotate at {p}");
        paint(self.arena, c, Color::Black);
        paint(self.arena, p, Color::Red);
        relink(self.arena, self.root, pup, Some(c));
        let inner = child(self.arena, c, dp.flip());
        set_child(self.arena, p, dp, inner);
        set_child(self.arena, c, dp.flip(), Some(p));
        Fixup::Done
    }
}
