use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

/// Structural problems found in a tree.
///
/// The `MissingSibling`, `SiblingNotBlack` and `FarNephewNotRed` variants are
/// raised by deletion fix-up and mean the tree was already broken before the
/// call; they are logged, never returned from `remove`. The rest come from
/// [`validate`](crate::validate::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RbError {
    #[error("deficit under {parent} has no sibling")]
    MissingSibling { parent: u32 },
    #[error("sibling under {parent} is not black")]
    SiblingNotBlack { parent: u32 },
    #[error("far nephew under {sibling} is not red")]
    FarNephewNotRed { sibling: u32 },
    #[error("root {0} is not black")]
    RedRoot(u32),
    #[error("red node {parent} has red child {child}")]
    RedRed { parent: u32, child: u32 },
    #[error("black height mismatch under {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("node order violated: {prev} is not before {next}")]
    Order { prev: u32, next: u32 },
    #[error("node {0} reached twice")]
    Cycle(u32),
}
