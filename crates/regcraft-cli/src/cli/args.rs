//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, value_parser};
use regcraft_lib::helpers;

/// Helper pattern name (positional).
pub fn helper_arg() -> Arg {
    Arg::new("helper")
        .value_name("HELPER")
        .required(true)
        .value_parser(PossibleValuesParser::new(
            helpers::ALL.iter().map(|(name, _)| *name),
        ))
        .help("Helper pattern (see `regcraft helpers`)")
}

/// Case-insensitive matching (-i/--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .short('i')
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Match case-insensitively")
}

/// `^`/`$` match at line boundaries (-m/--multiline).
pub fn multiline_arg() -> Arg {
    Arg::new("multiline")
        .short('m')
        .long("multiline")
        .action(ArgAction::SetTrue)
        .help("Let ^ and $ match at line boundaries")
}

/// `.` matches newlines (-s/--dot-all).
pub fn dot_all_arg() -> Arg {
    Arg::new("dot_all")
        .short('s')
        .long("dot-all")
        .action(ArgAction::SetTrue)
        .help("Let . match newlines")
}

/// Report redundant quantifiers (-w/--warnings).
pub fn warnings_arg() -> Arg {
    Arg::new("warnings")
        .short('w')
        .long("warnings")
        .action(ArgAction::SetTrue)
        .help("Report advisories on stderr")
}

/// JSON options file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with build options; flags are applied on top")
}

/// Print the tree outline instead of the pattern (--explain).
pub fn explain_arg() -> Arg {
    Arg::new("explain")
        .long("explain")
        .action(ArgAction::SetTrue)
        .help("Print the expression tree instead of the pattern")
}

/// Inline text to search (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .conflicts_with("file")
        .help("Text to search (reads stdin when neither TEXT nor --file is given)")
}

/// File to search (--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to search")
}

/// Single-line JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Debug logging on stderr (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .global(true)
        .action(ArgAction::SetTrue)
        .help("Enable debug logging")
}
