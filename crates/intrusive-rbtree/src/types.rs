//! Node trait definitions and the stock record type.
//!
//! Nodes are caller-owned records sitting in a caller-owned arena (`[N]`).
//! Each "pointer" is an `Option<u32>` index into that arena; `None` plays the
//! role of the sentinel leaf and always reads as black.

use crate::color::ColorBit;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Direction of a child link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Child links (`l`, `r`) embedded in a host record.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Red-black specific node behavior.
///
/// The engine knows nothing else about the record: the key is only ever
/// handed to the tree's comparator.
pub trait RbNodeLike: Node {
    type Key: ?Sized;

    fn key(&self) -> &Self::Key;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    #[inline]
    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

/// Ready-made record with a key, a value and a flags byte.
///
/// Bit 0 of `flags` ([`RbNode::COLOR`]) holds the color; the remaining bits
/// belong to the caller and are never touched by the engine.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub flags: u8,
}

impl<K, V> RbNode<K, V> {
    pub const COLOR: ColorBit = ColorBit::new(0b1);

    pub fn new(k: K, v: V) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
            flags: 0,
        }
    }
}

impl<K, V> Node for RbNode<K, V> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> RbNodeLike for RbNode<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.k
    }

    fn color(&self) -> Color {
        Self::COLOR.get(self.flags)
    }

    fn set_color(&mut self, color: Color) {
        Self::COLOR.set(&mut self.flags, color);
    }
}
