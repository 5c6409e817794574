//! `rbtree-bench`: time insertion and deletion of a shuffled record pool.
//!
//! Usage:
//!   rbtree-bench [SEED] [--count N] [--dot FILE] [--show] [--viewer CMD] [--verbose]

use rbtree_bench::config::USAGE;
use rbtree_bench::{run, Config, ConfigError};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }
}

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    initialize_logging(config.verbose);

    match run(&config) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("an error occurred: {e}");
            std::process::exit(1);
        }
    }
}
