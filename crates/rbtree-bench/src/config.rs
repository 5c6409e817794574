//! Command-line configuration.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: rbtree-bench [SEED] [--count N] [--dot FILE] [--show] [--viewer CMD] [--verbose]

  SEED          seed for the insertion and deletion orders (random if absent)
  --count N     number of records in the pool (default 4096)
  --dot FILE    write the tree after the insertion phase as Graphviz DOT
  --show        open the DOT file in a viewer and wait for it to exit
  --viewer CMD  viewer to launch with --show (default dotty)
  --verbose     log phase progress";

pub const DEFAULT_COUNT: usize = 1 << 12;
pub const DEFAULT_VIEWER: &str = "dotty";
pub const DEFAULT_DOT_FILE: &str = "rbtree.dot";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unexpected argument: {0}")]
    Unexpected(String),
    #[error("help requested")]
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub count: usize,
    pub dot: Option<PathBuf>,
    pub show: bool,
    pub viewer: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            count: DEFAULT_COUNT,
            dot: None,
            show: false,
            viewer: DEFAULT_VIEWER.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Parses arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::Help),
                "--count" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--count"))?;
                    config.count = match value.parse::<usize>() {
                        // Keys are `i32`.
                        Ok(n) if n > 0 && n <= i32::MAX as usize => n,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                flag: "--count",
                                value,
                            })
                        }
                    };
                }
                "--dot" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--dot"))?;
                    config.dot = Some(PathBuf::from(value));
                }
                "--viewer" => {
                    config.viewer = args.next().ok_or(ConfigError::MissingValue("--viewer"))?;
                }
                "--show" => config.show = true,
                "--verbose" | "-v" => config.verbose = true,
                other if other.starts_with('-') && other.parse::<i64>().is_err() => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ if config.seed.is_none() => {
                    // Negative seeds are accepted and reinterpreted.
                    let seed = arg
                        .parse::<u64>()
                        .or_else(|_| arg.parse::<i64>().map(|s| s as u64))
                        .map_err(|_| ConfigError::InvalidValue {
                            flag: "SEED",
                            value: arg.clone(),
                        })?;
                    config.seed = Some(seed);
                }
                _ => return Err(ConfigError::Unexpected(arg)),
            }
        }
        if config.show && config.dot.is_none() {
            config.dot = Some(PathBuf::from(DEFAULT_DOT_FILE));
        }
        Ok(config)
    }
}
