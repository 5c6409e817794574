//! Graphviz export of a tree, and launching a viewer on the result.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::Command;

use intrusive_rbtree::RbNodeLike;
use log::{debug, warn};

/// Writes the tree at `root` as a `digraph RBTree`.
///
/// Vertices are named by arena index and labelled with the key; `rank` is the
/// depth below the root.
pub fn write_dot<W, N>(out: &mut W, arena: &[N], root: Option<u32>) -> io::Result<()>
where
    W: Write,
    N: RbNodeLike,
    N::Key: Display,
{
    writeln!(out, "digraph RBTree {{")?;
    if let Some(root) = root {
        dot_rec(out, arena, root, 0)?;
    }
    writeln!(out, "}}")
}

fn dot_rec<W, N>(out: &mut W, arena: &[N], i: u32, rank: usize) -> io::Result<()>
where
    W: Write,
    N: RbNodeLike,
    N::Key: Display,
{
    let n = &arena[i as usize];
    let color = if n.is_red() { "red" } else { "black" };
    writeln!(out, "  {i} [label=\"{}\" color=\"{color}\" rank={rank}];", n.key())?;
    for c in [n.l(), n.r()].into_iter().flatten() {
        writeln!(out, "  {i} -> {c};")?;
        dot_rec(out, arena, c, rank + 1)?;
    }
    Ok(())
}

/// Writes the DOT rendering to the file at `path`.
pub fn save<N>(path: &Path, arena: &[N], root: Option<u32>) -> io::Result<()>
where
    N: RbNodeLike,
    N::Key: Display,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(&mut out, arena, root)?;
    out.flush()
}

/// Opens `path` in `viewer`, optionally blocking until the viewer exits.
pub fn show(path: &Path, viewer: &str, wait: bool) -> io::Result<()> {
    debug!("launching {viewer} on {}", path.display());
    let mut child = Command::new(viewer).arg(path).spawn()?;
    if wait {
        let status = child.wait()?;
        if !status.success() {
            warn!("{viewer} exited with {status}");
        }
    }
    Ok(())
}
