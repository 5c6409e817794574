//! Intrusive red-black tree engine.
//!
//! The tree's links and color live inside caller-owned records, and the
//! records live in a caller-owned arena slice. The engine never allocates,
//! copies or frees a record; it only rewrites the `l` / `r` links and the
//! color of records it is given.
//!
//! All "pointers" are `Option<u32>` indices into the arena. `None` is the
//! sentinel: an absent child, an empty tree, and the "not found" answer.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`RbNodeLike`] traits, [`Color`], [`Dir`], stock [`RbNode`] record |
//! [`color`] | [`ColorBit`]: color stored as one bit of a shared flags byte |
//! [`access`] | field accessors, [`init_root`], [`color_of`] |
//! [`search`] | [`lookup`] |
//! [`insert`](mod@insert) | recursive insertion and red-black fix-up |
//! [`remove`](mod@remove) | deletion by key and black-height fix-up |
//! [`descriptor`] | [`Descriptor`]: one tree's comparator plus the operation set |
//! [`validate`](mod@validate) | full invariant check |
//!
//! # Example
//!
//! ```
//! use intrusive_rbtree::{Descriptor, RbNode};
//! use std::cmp::Ordering;
//!
//! let tree = Descriptor::<fn(&u32, &u32) -> Ordering>::natural();
//! let mut arena: Vec<RbNode<u32, &str>> =
//!     vec![RbNode::new(2, "two"), RbNode::new(1, "one"), RbNode::new(3, "three")];
//! let mut root = None;
//!
//! for i in 0..3 {
//!     assert_eq!(tree.insert(&mut arena, &mut root, i), None);
//! }
//! let one = tree.lookup(&arena, root, &1).unwrap();
//! assert_eq!(arena[one as usize].v, "one");
//!
//! assert_eq!(tree.remove(&mut arena, &mut root, &2), Some(0));
//! assert_eq!(tree.lookup(&arena, root, &2), None);
//! assert_eq!(tree.validate(&arena, root), Ok(2));
//! ```
//!
//! # Concurrency
//!
//! Mutating operations take `&mut` to both the arena and the root slot, so
//! the borrow checker serializes them; [`lookup`] only needs `&[N]` and can
//! run alongside other lookups.

pub mod access;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod insert;
pub mod remove;
pub mod search;
pub mod types;
pub mod validate;

pub use access::{color_of, init_root};
pub use color::ColorBit;
pub use descriptor::Descriptor;
pub use error::RbError;
pub use insert::insert;
pub use remove::remove;
pub use search::lookup;
pub use types::{Color, Dir, Node, RbNode, RbNodeLike};
pub use validate::validate;
