//! Helpers behind the `avl-tree` binary.
//!
//! The binary reads a JSON array of integers from stdin, inserts them in
//! order, removes every `--delete <value>` and prints the requested view.

use log::LevelFilter;
use serde_json::json;
use thiserror::Error;

use crate::tree::AvlTree;

/// Environment variable holding the log level of the binary.
pub const LOG_ENV: &str = "AVL_TREE_LOG";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage: avl-tree <in-order|pre-order|heights|tree|stats> [--delete <value>]...")]
    Usage,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("--delete expects an integer, got {0:?}")]
    InvalidDelete(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
    #[error("input must be a JSON array of integers: {0}")]
    Input(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    InOrder,
    PreOrder,
    Heights,
    Tree,
    Stats,
}

impl Command {
    fn parse(s: &str) -> Result<Self, CliError> {
        match s {
            "in-order" => Ok(Self::InOrder),
            "pre-order" => Ok(Self::PreOrder),
            "heights" => Ok(Self::Heights),
            "tree" => Ok(Self::Tree),
            "stats" => Ok(Self::Stats),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub delete: Vec<i64>,
    pub log_level: LevelFilter,
}

/// Parses a log level name, defaulting to `warn` when unset.
pub fn parse_log_level(value: Option<&str>) -> Result<LevelFilter, CliError> {
    match value {
        None => Ok(LevelFilter::Warn),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidLogLevel(s.to_string())),
    }
}

/// Parses the arguments after the program name.
pub fn parse_args<I>(args: I, log_level: Option<&str>) -> Result<Options, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = Command::parse(&args.next().ok_or(CliError::Usage)?)?;

    let mut delete: Vec<i64> = Vec::new();
    while let Some(arg) = args.next() {
        if arg != "--delete" {
            return Err(CliError::Usage);
        }
        let value = args.next().ok_or(CliError::Usage)?;
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidDelete(value.clone()))?;
        delete.push(parsed);
    }

    Ok(Options {
        command,
        delete,
        log_level: parse_log_level(log_level)?,
    })
}

/// Builds the tree from `input` and renders the requested view.
pub fn run(input: &str, options: &Options) -> Result<String, CliError> {
    let values: Vec<i64> = serde_json::from_str(input.trim())?;
    let mut tree = AvlTree::from_values(values);
    log::info!("built tree with {} values", tree.len());

    for value in &options.delete {
        if !tree.delete(value) {
            log::warn!("value {value} not present, nothing deleted");
        }
    }

    let out = match options.command {
        Command::InOrder => serde_json::to_string(&tree.iter().collect::<Vec<_>>())?,
        Command::PreOrder => serde_json::to_string(&tree.to_pre_order_vec())?,
        Command::Heights => tree.to_heights_string().trim_end().to_string(),
        Command::Tree => tree.to_tree_string(),
        Command::Stats => json!({
            "len": tree.len(),
            "height": tree.height(),
            "balance_factor": tree.balance_factor(),
            "min": tree.min(),
            "max": tree.max(),
        })
        .to_string(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_command_and_deletes() {
        let options = parse_args(args(&["pre-order", "--delete", "5", "--delete", "-2"]), None).unwrap();
        assert_eq!(options.command, Command::PreOrder);
        assert_eq!(options.delete, vec![5, -2]);
        assert_eq!(options.log_level, LevelFilter::Warn);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse_args(args(&[]), None), Err(CliError::Usage)));
        assert!(matches!(
            parse_args(args(&["sideways"]), None),
            Err(CliError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_args(args(&["tree", "--delete", "x"]), None),
            Err(CliError::InvalidDelete(_))
        ));
        assert!(matches!(
            parse_args(args(&["tree", "--delete"]), None),
            Err(CliError::Usage)
        ));
        assert!(matches!(
            parse_args(args(&["tree"]), Some("loud")),
            Err(CliError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse_log_level(Some("TRACE")).unwrap(), LevelFilter::Trace);
        assert_eq!(parse_log_level(Some("off")).unwrap(), LevelFilter::Off);
    }

    #[test]
    fn runs_views() {
        let input = "[41, 20, 65, 11, 50, 29, 26, 23, 55]";
        let mut options = parse_args(args(&["in-order"]), None).unwrap();
        assert_eq!(run(input, &options).unwrap(), "[11,20,23,26,29,41,50,55,65]");

        options.command = Command::PreOrder;
        assert_eq!(run(input, &options).unwrap(), "[41,20,11,26,23,29,55,50,65]");

        options.command = Command::Heights;
        options.delete = vec![41, 1000];
        assert_eq!(
            run(input, &options).unwrap(),
            "11(1) 20(3) 23(1) 26(2) 29(1) 50(4) 55(2) 65(1)"
        );
    }

    #[test]
    fn stats_view() {
        let options = parse_args(args(&["stats"]), None).unwrap();
        let out: serde_json::Value = serde_json::from_str(&run("[1, 2, 3]", &options).unwrap()).unwrap();
        assert_eq!(
            out,
            json!({"len": 3, "height": 2, "balance_factor": 0, "min": 1, "max": 3})
        );
    }

    #[test]
    fn rejects_malformed_input() {
        let options = parse_args(args(&["tree"]), None).unwrap();
        assert!(matches!(run("[1, \"a\"]", &options), Err(CliError::Input(_))));
    }
}
