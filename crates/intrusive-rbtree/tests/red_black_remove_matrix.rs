use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};

use intrusive_rbtree::{color_of, insert, lookup, remove, validate, Color, Dir, RbNode, RbNodeLike};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

type Arena = Vec<RbNode<i32, i32>>;

fn rb_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn insert_value(arena: &mut Arena, root: &mut Option<u32>, value: i32) -> u32 {
    arena.push(RbNode::new(value, value));
    let idx = (arena.len() - 1) as u32;
    assert_eq!(insert(arena, root, idx, &rb_cmp), None);
    if let Err(err) = validate(arena, *root, &rb_cmp) {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
    idx
}

fn delete_value(arena: &mut Arena, root: &mut Option<u32>, value: i32) -> Option<u32> {
    let removed = remove(arena, root, &value, &rb_cmp);
    if let Err(err) = validate(arena, *root, &rb_cmp) {
        panic!("invalid red-black tree after delete({value}): {err}");
    }
    removed
}

fn size(arena: &Arena, root: Option<u32>) -> usize {
    validate(arena, root, &rb_cmp).expect("valid tree")
}

fn in_order(arena: &Arena, root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = arena[i as usize].l;
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(arena[i as usize].k);
        curr = arena[i as usize].r;
    }
    out
}

/// First node (breadth-first) with two children that hangs off a `dir` link.
fn two_child_node(arena: &Arena, root: Option<u32>, dir: Dir) -> Option<(u32, u32)> {
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(p) = queue.pop_front() {
        let n = &arena[p as usize];
        let c = match dir {
            Dir::Left => n.l,
            Dir::Right => n.r,
        };
        if let Some(c) = c {
            let cn = &arena[c as usize];
            if cn.l.is_some() && cn.r.is_some() {
                return Some((p, c));
            }
        }
        queue.extend(n.l);
        queue.extend(n.r);
    }
    None
}

#[test]
fn rb_remove_from_empty_tree_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    assert_eq!(remove(&mut arena, &mut root, &1, &rb_cmp), None);
    assert_eq!(root, None);
}

#[test]
fn rb_remove_only_node_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    let idx = insert_value(&mut arena, &mut root, 1);
    assert_eq!(delete_value(&mut arena, &mut root, 1), Some(idx));
    assert_eq!(root, None);
}

#[test]
fn rb_remove_various_numbers_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut arena, &mut root, value);
    }
    assert_eq!(size(&arena, root), 13);

    delete_value(&mut arena, &mut root, 100);
    assert_eq!(size(&arena, root), 12);

    assert!(delete_value(&mut arena, &mut root, 33).is_some());
    assert_eq!(delete_value(&mut arena, &mut root, 33), None);
    assert_eq!(size(&arena, root), 11);

    delete_value(&mut arena, &mut root, 10);
    assert_eq!(size(&arena, root), 10);

    delete_value(&mut arena, &mut root, 60);
    assert_eq!(size(&arena, root), 9);

    delete_value(&mut arena, &mut root, 22);
    assert_eq!(size(&arena, root), 8);
    assert_eq!(in_order(&arena, root), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn rb_remove_numbers_from_0_to_100_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, i);
        assert_eq!(size(&arena, root), (i + 1) as usize);
    }
    for i in 0..=100 {
        assert_eq!(delete_value(&mut arena, &mut root, i), Some(i as u32));
        assert_eq!(size(&arena, root), (100 - i) as usize);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_remove_numbers_from_100_to_11_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in (11..=100).rev() {
        insert_value(&mut arena, &mut root, i);
    }
    for i in (11..=100).rev() {
        delete_value(&mut arena, &mut root, i);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_remove_numbers_both_directions_from_50_matrix() {
    let mut arena = Arena::new();
    let mut root = None;

    for i in 0..=100 {
        insert_value(&mut arena, &mut root, 50 + i);
        insert_value(&mut arena, &mut root, 50 - i);
    }
    for i in 0..=100 {
        delete_value(&mut arena, &mut root, 50 - i);
        delete_value(&mut arena, &mut root, 50 + i);
    }
    assert_eq!(root, None);
}

#[test]
fn rb_remove_absent_key_leaves_tree_unchanged_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for value in (0..64).map(|i| i * 2) {
        insert_value(&mut arena, &mut root, value);
    }
    let before = arena.clone();
    let root_before = root;

    for absent in [-1, 1, 63, 127, 1000] {
        assert_eq!(delete_value(&mut arena, &mut root, absent), None);
    }
    assert_eq!(root, root_before);
    for (a, b) in arena.iter().zip(&before) {
        assert_eq!((a.l, a.r, a.flags), (b.l, b.r, b.flags));
    }
    assert_eq!(size(&arena, root), 64);
}

/// ```text
///            8
///        4        12
///      2   6    10  14
/// ```
/// Inner nodes black, leaves red; index `i` holds the `i`-th key listed.
fn fixture() -> (Arena, Option<u32>) {
    let mut arena: Arena = [8, 4, 12, 2, 6, 10, 14]
        .into_iter()
        .map(|k| RbNode::new(k, k))
        .collect();
    for (p, l, r) in [(0, 1, 2), (1, 3, 4), (2, 5, 6)] {
        arena[p].l = Some(l);
        arena[p].r = Some(r);
    }
    for leaf in 3..7 {
        arena[leaf].set_color(Color::Red);
    }
    assert_eq!(validate(&arena, Some(0), &rb_cmp), Ok(7));
    (arena, Some(0))
}

#[test]
fn rb_remove_two_child_root_splices_successor_matrix() {
    let (mut arena, mut root) = fixture();

    assert_eq!(delete_value(&mut arena, &mut root, 8), Some(0));
    assert_eq!(root, Some(5));
    assert_eq!((arena[5].l, arena[5].r), (Some(1), Some(2)));
    assert_eq!(color_of(&arena, root), Color::Black);
    assert_eq!(arena[2].l, None);
    assert_eq!(in_order(&arena, root), vec![2, 4, 6, 10, 12, 14]);
}

#[test]
fn rb_remove_two_child_left_link_uses_successor_matrix() {
    let (mut arena, mut root) = fixture();

    assert_eq!(delete_value(&mut arena, &mut root, 4), Some(1));
    assert_eq!(arena[0].l, Some(4));
    assert_eq!((arena[4].l, arena[4].r), (Some(3), None));
    assert_eq!(color_of(&arena, Some(4)), Color::Black);
    for (key, idx) in [(8, 0), (12, 2), (2, 3), (6, 4), (10, 5), (14, 6)] {
        assert_eq!(lookup(&arena, root, &key, &rb_cmp), Some(idx));
    }
}

#[test]
fn rb_remove_two_child_right_link_uses_predecessor_matrix() {
    let (mut arena, mut root) = fixture();

    assert_eq!(delete_value(&mut arena, &mut root, 12), Some(2));
    assert_eq!(arena[0].r, Some(5));
    assert_eq!((arena[5].l, arena[5].r), (None, Some(6)));
    assert_eq!(color_of(&arena, Some(5)), Color::Black);
    assert_eq!(in_order(&arena, root), vec![2, 4, 6, 8, 10, 14]);
}

/// Builds a tree from `(key, red)` records and `(parent, left, right)`
/// links without checking any invariant.
fn broken(records: &[(i32, bool)], links: &[(usize, Option<u32>, Option<u32>)]) -> Arena {
    let mut arena: Arena = records
        .iter()
        .map(|&(k, red)| {
            let mut n = RbNode::new(k, k);
            if red {
                n.set_color(Color::Red);
            }
            n
        })
        .collect();
    for &(p, l, r) in links {
        arena[p].l = l;
        arena[p].r = r;
    }
    arena
}

#[test]
fn rb_remove_black_leaf_without_sibling_still_unlinks_matrix() {
    // Black root 2 with a lone black left child 1: black height differs.
    let mut arena = broken(&[(2, false), (1, false)], &[(0, Some(1), None)]);
    let mut root = Some(0);

    assert_eq!(remove(&mut arena, &mut root, &1, &rb_cmp), Some(1));
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);
    assert_eq!(lookup(&arena, root, &1, &rb_cmp), None);
    assert_eq!(validate(&arena, root, &rb_cmp), Ok(1));
}

#[test]
fn rb_remove_red_sibling_without_inner_child_stops_fixup_matrix() {
    // Black root 2, black left 1, childless red right 3.
    let mut arena = broken(
        &[(2, false), (1, false), (3, true)],
        &[(0, Some(1), Some(2))],
    );
    let mut root = Some(0);

    assert_eq!(remove(&mut arena, &mut root, &1, &rb_cmp), Some(1));
    // The red-sibling rotation has already happened when the fix-up stops.
    assert_eq!(root, Some(2));
    assert_eq!(arena[2].l, Some(0));
    assert_eq!((arena[0].l, arena[0].r), (None, None));
    assert_eq!(color_of(&arena, Some(2)), Color::Black);
    assert_eq!(in_order(&arena, root), vec![2, 3]);
}

#[test]
fn rb_remove_two_child_nodes_keep_identities_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for i in 0..63 {
        insert_value(&mut arena, &mut root, i);
    }
    for dir in [Dir::Left, Dir::Right, Dir::Left, Dir::Right] {
        let (_, c) = two_child_node(&arena, root, dir).expect("a two-child node");
        let key = arena[c as usize].k;
        assert_eq!(delete_value(&mut arena, &mut root, key), Some(c));
        for other in in_order(&arena, root) {
            // Keys equal indices here.
            assert_eq!(lookup(&arena, root, &other, &rb_cmp), Some(other as u32));
        }
    }
    assert_eq!(size(&arena, root), 59);
}

#[test]
fn rb_remove_1000_random_keys_in_random_order_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(2014);
    let mut keys: Vec<i32> = (1..=1000).collect();
    keys.shuffle(&mut rng);

    let mut arena = Arena::new();
    let mut root = None;
    let mut index_of = std::collections::HashMap::new();
    for &key in &keys {
        index_of.insert(key, insert_value(&mut arena, &mut root, key));
    }

    let mut remaining: BTreeSet<i32> = keys.iter().copied().collect();
    keys.shuffle(&mut rng);
    for &key in &keys {
        assert_eq!(delete_value(&mut arena, &mut root, key), Some(index_of[&key]));
        remaining.remove(&key);
        assert_eq!(in_order(&arena, root), remaining.iter().copied().collect::<Vec<_>>());
        assert_eq!(lookup(&arena, root, &key, &rb_cmp), None);
    }
    assert_eq!(root, None);
    assert_eq!(remove(&mut arena, &mut root, &1, &rb_cmp), None);
}

#[test]
fn rb_remove_and_reinsert_same_records_matrix() {
    let mut arena = Arena::new();
    let mut root = None;
    for i in 0..200 {
        insert_value(&mut arena, &mut root, i);
    }
    for round in 0..3 {
        for i in (round..200).step_by(3) {
            let idx = delete_value(&mut arena, &mut root, i).expect("present");
            assert_eq!(insert(&mut arena, &mut root, idx, &rb_cmp), None);
            assert_eq!(size(&arena, root), 200);
        }
    }
    assert_eq!(in_order(&arena, root), (0..200).collect::<Vec<_>>());
}
