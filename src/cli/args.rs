//! CLI argument parsing
//!
//! The report consumes no positional arguments; the only inputs are option
//! flags. Anything positional is rejected.

use crate::cli::{Error, Result};

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Database file path (explicitly set or None for resolution)
    pub db_path: Option<String>,

    /// JSON output flag
    pub json_output: bool,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

/// Parse CLI arguments from std::env::args()
///
/// Grammar:
/// ```text
/// scan-report [options]
///
/// OPTIONS:
///   --db-path <path>    Database file to inspect
///   --json              Output JSON
///   --version           Show version
///   --help              Show help
/// ```
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args {
        db_path: None,
        json_output: false,
        show_version: false,
        show_help: false,
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                args_out.show_version = true;
            }
            "--help" | "-h" => {
                args_out.show_help = true;
            }
            "--json" => {
                args_out.json_output = true;
            }
            "--db-path" => {
                let path = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--db-path requires a path".to_string())
                })?;
                args_out.db_path = Some(path);
            }
            arg if arg.starts_with("--") => {
                return Err(Error::InvalidArgs(format!("Unknown option: {}", arg)));
            }
            other => {
                return Err(Error::InvalidArgs(format!(
                    "Unexpected argument: {}",
                    other
                )));
            }
        }
    }

    Ok(args_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_args() {
        let args = parse_args(vec!["scan-report".to_string()]);
        assert!(args.is_ok());
        let parsed = args.unwrap();
        assert!(parsed.db_path.is_none());
        assert!(!parsed.json_output);
        assert!(!parsed.show_version);
        assert!(!parsed.show_help);
    }

    #[test]
    fn test_parse_version_flag() {
        let args = parse_args(vec!["scan-report".to_string(), "--version".to_string()]);
        assert!(args.is_ok());
        assert!(args.unwrap().show_version);
    }

    #[test]
    fn test_parse_help_flag() {
        let args = parse_args(vec!["scan-report".to_string(), "--help".to_string()]);
        assert!(args.is_ok());
        assert!(args.unwrap().show_help);
    }

    #[test]
    fn test_parse_db_path_option() {
        let args = parse_args(vec![
            "scan-report".to_string(),
            "--db-path".to_string(),
            "/tmp/barcodes.db".to_string(),
        ]);
        assert!(args.is_ok());
        assert_eq!(args.unwrap().db_path, Some("/tmp/barcodes.db".to_string()));
    }

    #[test]
    fn test_parse_db_path_missing_value() {
        let args = parse_args(vec!["scan-report".to_string(), "--db-path".to_string()]);
        assert!(args.is_err());
    }

    #[test]
    fn test_parse_json_flag() {
        let args = parse_args(vec!["scan-report".to_string(), "--json".to_string()]);
        assert!(args.is_ok());
        assert!(args.unwrap().json_output);
    }

    #[test]
    fn test_parse_unknown_option() {
        let args = parse_args(vec!["scan-report".to_string(), "--frobnicate".to_string()]);
        assert!(args.is_err());
    }

    #[test]
    fn test_parse_rejects_positional() {
        let args = parse_args(vec!["scan-report".to_string(), "barcodes.db".to_string()]);
        assert!(args.is_err());
    }
}
