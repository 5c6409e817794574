//! Benchmark driver and Graphviz exporter for `intrusive-rbtree`.
//!
//! Both are plain consumers of the engine's public operations:
//!
//! - [`driver`] fills a record pool, inserts every record in a seeded random
//!   order, deletes them all in a second order, probes absent keys before and
//!   after, and times each phase.
//! - [`dot`] renders a tree as a `digraph` and can hand the file to a viewer.

pub mod config;
pub mod dot;
pub mod driver;
pub mod record;
pub mod shuffle;

pub use config::{Config, ConfigError};
pub use driver::{run, DriverError, Report};
