//! The pool record driven by the benchmark.

use std::cmp::Ordering;

use intrusive_rbtree::{Color, ColorBit, Descriptor, Node, RbNodeLike};

/// Lowest bit of `mark` holds the color.
pub const MARK: ColorBit = ColorBit::new(1);

/// A pool entry keyed by `n`.
#[derive(Clone, Debug)]
pub struct Dirent {
    pub n: i32,
    pub mark: u8,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl Dirent {
    pub fn new(n: i32) -> Self {
        Self {
            n,
            mark: 0,
            l: None,
            r: None,
        }
    }
}

impl Node for Dirent {
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

impl RbNodeLike for Dirent {
    type Key = i32;

    fn key(&self) -> &i32 {
        &self.n
    }

    fn color(&self) -> Color {
        MARK.get(self.mark)
    }

    fn set_color(&mut self, color: Color) {
        MARK.set(&mut self.mark, color);
    }
}

fn int_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

pub type DirentTree = Descriptor<fn(&i32, &i32) -> Ordering>;

/// Descriptor shared by every pool tree.
pub const TREE: DirentTree = Descriptor::new(int_cmp);

/// Pool of `count` records keyed `0..count`, record `i` at index `i`.
pub fn pool(count: usize) -> Vec<Dirent> {
    (0..count as i32).map(Dirent::new).collect()
}
