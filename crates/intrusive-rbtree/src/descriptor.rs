use std::cmp::Ordering;

use crate::access;
use crate::error::RbError;
use crate::types::{Color, RbNodeLike};

/// Tree-wide configuration: the comparator every operation on one tree
/// shares.
///
/// Mixing descriptors whose comparators disagree on the same tree breaks the
/// ordering invariant; nothing checks for it.
#[derive(Clone, Copy, Debug)]
pub struct Descriptor<C> {
    comparator: C,
}

fn natural_order<K: Ord + ?Sized>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

impl<K: Ord + ?Sized> Descriptor<fn(&K, &K) -> Ordering> {
    /// Orders keys by their [`Ord`] implementation.
    pub fn natural() -> Self {
        Self::new(natural_order::<K>)
    }
}

impl<C> Descriptor<C> {
    pub const fn new(comparator: C) -> Self {
        Self { comparator }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// See [`access::init_root`].
    pub fn init_root<N: RbNodeLike>(&self, arena: &mut [N], n: u32) {
        access::init_root(arena, n)
    }

    /// Color of `n`; `None` reads as black.
    pub fn color<N: RbNodeLike>(&self, arena: &[N], n: Option<u32>) -> Color {
        access::color_of(arena, n)
    }

    /// See [`crate::insert::insert`].
    pub fn insert<N>(&self, arena: &mut [N], root: &mut Option<u32>, n: u32) -> Option<u32>
    where
        N: RbNodeLike,
        C: Fn(&N::Key, &N::Key) -> Ordering,
    {
        crate::insert::insert(arena, root, n, &self.comparator)
    }

    /// See [`crate::remove::remove`].
    pub fn remove<N>(&self, arena: &mut [N], root: &mut Option<u32>, key: &N::Key) -> Option<u32>
    where
        N: RbNodeLike,
        C: Fn(&N::Key, &N::Key) -> Ordering,
    {
        crate::remove::remove(arena, root, key, &self.comparator)
    }

    /// See [`crate::search::lookup`].
    pub fn lookup<N>(&self, arena: &[N], root: Option<u32>, key: &N::Key) -> Option<u32>
    where
        N: RbNodeLike,
        C: Fn(&N::Key, &N::Key) -> Ordering,
    {
        crate::search::lookup(arena, root, key, &self.comparator)
    }

    /// See [`crate::validate::validate`].
    pub fn validate<N>(&self, arena: &[N], root: Option<u32>) -> Result<usize, RbError>
    where
        N: RbNodeLike,
        C: Fn(&N::Key, &N::Key) -> Ordering,
    {
        crate::validate::validate(arena, root, &self.comparator)
    }
}
