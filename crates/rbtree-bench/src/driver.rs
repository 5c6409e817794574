//! The add / false-delete / delete / false-delete run.

use std::fmt;
use std::time::{Duration, Instant};

use intrusive_rbtree::RbError;
use log::{debug, info, warn};
use thiserror::Error;

use crate::config::Config;
use crate::dot;
use crate::record::{pool, Dirent, TREE};
use crate::shuffle::Shuffler;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("inserting fresh key {key} replaced record {previous}")]
    Replaced { key: i32, previous: u32 },
    #[error("key {key} not found")]
    Missing { key: i32 },
    #[error("absent key {key} removed record {removed}")]
    Phantom { key: i32, removed: u32 },
    #[error("tree still holds records after the deletion phase")]
    NotEmpty,
    #[error("invalid tree: {0}")]
    Invalid(#[from] RbError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct Report {
    pub seed: u64,
    pub count: usize,
    pub insert: Duration,
    pub lookup: Duration,
    pub remove: Duration,
}

pub fn run(config: &Config) -> Result<Report, DriverError> {
    let mut shuffler = Shuffler::new(config.seed);
    info!("seeded with {}", shuffler.seed);

    let mut arena = pool(config.count);
    let mut root = None;

    info!("testing {} additions", config.count);
    let order = shuffler.permutation(config.count);
    let start = Instant::now();
    for &i in &order {
        if let Some(previous) = TREE.insert(&mut arena, &mut root, i) {
            return Err(DriverError::Replaced {
                key: arena[i as usize].n,
                previous,
            });
        }
    }
    let insert = start.elapsed();
    let size = TREE.validate(&arena, root)?;
    debug!("addition phase done, {size} records");

    let start = Instant::now();
    for i in 0..config.count as u32 {
        let key = arena[i as usize].n;
        if TREE.lookup(&arena, root, &key) != Some(i) {
            return Err(DriverError::Missing { key });
        }
    }
    let lookup = start.elapsed();

    if let Some(path) = &config.dot {
        dot::save(path, &arena, root)?;
        info!("wrote {}", path.display());
        if config.show {
            if let Err(e) = dot::show(path, &config.viewer, true) {
                warn!("cannot launch {}: {e}", config.viewer);
            }
        }
    }

    info!("testing false delete");
    false_delete(&mut arena, &mut root, -1)?;
    TREE.validate(&arena, root)?;

    info!("testing {} deletions", config.count);
    let order = shuffler.permutation(config.count);
    let start = Instant::now();
    for &i in &order {
        let key = arena[i as usize].n;
        if TREE.remove(&mut arena, &mut root, &key).is_none() {
            return Err(DriverError::Missing { key });
        }
    }
    let remove = start.elapsed();
    if TREE.validate(&arena, root)? != 0 {
        return Err(DriverError::NotEmpty);
    }

    info!("testing false delete");
    false_delete(&mut arena, &mut root, 1)?;
    TREE.validate(&arena, root)?;

    Ok(Report {
        seed: shuffler.seed,
        count: config.count,
        insert,
        lookup,
        remove,
    })
}

fn false_delete(
    arena: &mut [Dirent],
    root: &mut Option<u32>,
    key: i32,
) -> Result<(), DriverError> {
    match TREE.remove(arena, root, &key) {
        Some(removed) => Err(DriverError::Phantom { key, removed }),
        None => Ok(()),
    }
}

fn ops_per_sec(n: usize, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0;
    }
    (n as f64 / secs) as u64
}

fn group(n: u64) -> String {
    // comma-grouped number
    let s = n.to_string();
    let mut out = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  seed {}, {} records", self.seed, self.count)?;
        writeln!(f, "  {:<12}  {:>12}  {:>16}", "operation", "total", "ops/sec")?;
        writeln!(f, "  {}", "-".repeat(44))?;
        for (label, elapsed) in [
            ("insert", self.insert),
            ("lookup", self.lookup),
            ("remove", self.remove),
        ] {
            writeln!(
                f,
                "  {:<12}  {:>12}  {:>16}",
                label,
                format!("{elapsed:.2?}"),
                group(ops_per_sec(self.count, elapsed))
            )?;
        }
        Ok(())
    }
}
