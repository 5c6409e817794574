//! Arena field accessors shared by search, insertion and deletion.
//!
//! This is the only layer that touches node links and colors directly.
//! Indices are trusted: an index outside the arena panics on slice access.

use crate::types::{Color, Dir, RbNodeLike};

/// The link that holds a node: either the caller's root slot or a child
/// link of `parent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Child(u32, Dir),
}

#[inline]
pub(crate) fn child<N: RbNodeLike>(arena: &[N], i: u32, dir: Dir) -> Option<u32> {
    let n = &arena[i as usize];
    match dir {
        Dir::Left => n.l(),
        Dir::Right => n.r(),
    }
}

#[inline]
pub(crate) fn set_child<N: RbNodeLike>(arena: &mut [N], i: u32, dir: Dir, v: Option<u32>) {
    let n = &mut arena[i as usize];
    match dir {
        Dir::Left => n.set_l(v),
        Dir::Right => n.set_r(v),
    }
}

/// Color of a link target. The sentinel (`None`) is always black.
#[inline]
pub fn color_of<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> Color {
    match i {
        Some(i) => arena[i as usize].color(),
        None => Color::Black,
    }
}

#[inline]
pub(crate) fn is_red<N: RbNodeLike>(arena: &[N], i: Option<u32>) -> bool {
    color_of(arena, i) == Color::Red
}

#[inline]
pub(crate) fn paint<N: RbNodeLike>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

/// Points `slot` at `v`.
#[inline]
pub(crate) fn relink<N: RbNodeLike>(
    arena: &mut [N],
    root: &mut Option<u32>,
    slot: Slot,
    v: Option<u32>,
) {
    match slot {
        Slot::Root => *root = v,
        Slot::Child(p, dir) => set_child(arena, p, dir, v),
    }
}

/// Gives `to` the tree position of `from`: both child links and the color.
/// The slot that held `from` is not updated here.
#[inline]
pub(crate) fn take_place<N: RbNodeLike>(arena: &mut [N], to: u32, from: u32) {
    let (l, r, color) = {
        let f = &arena[from as usize];
        (f.l(), f.r(), f.color())
    };
    let t = &mut arena[to as usize];
    t.set_l(l);
    t.set_r(r);
    t.set_color(color);
}

/// Prepares `n` as a valid one-node tree: black, both children absent.
pub fn init_root<N: RbNodeLike>(arena: &mut [N], n: u32) {
    let node = &mut arena[n as usize];
    node.set_color(Color::Black);
    node.set_l(None);
    node.set_r(None);
}
