//! `avl-tree` — build an AVL tree from a JSON array and print a view of it.
//!
//! Usage:
//!   avl-tree <in-order|pre-order|heights|tree|stats> [--delete <value>]...
//!
//! Values are read from stdin as a JSON array of integers and inserted in
//! order. The log level is taken from `AVL_TREE_LOG` (default `warn`).

use avl_forest::cli::{parse_args, run, LOG_ENV};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Read, Write};

fn main() {
    let log_level = std::env::var(LOG_ENV).ok();
    let options = match parse_args(std::env::args().skip(1), log_level.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Already-installed logger wins.
    let _ = TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&buf, &options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                log::error!("failed to write output: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
