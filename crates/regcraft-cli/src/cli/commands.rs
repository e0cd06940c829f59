//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the build option flags shared by `build` and `find`.
fn with_option_args(cmd: Command) -> Command {
    cmd.arg(ignore_case_arg())
        .arg(multiline_arg())
        .arg(dot_all_arg())
        .arg(warnings_arg())
        .arg(config_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("regcraft")
        .about("Build regular expressions from typed expression trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(helpers_command())
        .subcommand(build_command())
        .subcommand(find_command())
}

/// List the prebuilt helper patterns.
pub fn helpers_command() -> Command {
    Command::new("helpers").about("List helper patterns")
}

/// Compile a helper and print its pattern.
pub fn build_command() -> Command {
    let cmd = Command::new("build")
        .about("Print the pattern a helper compiles to")
        .after_help(
            r#"EXAMPLES:
  regcraft build email                 # pattern on stdout
  regcraft build url -i                # with (?i) prefix
  regcraft build domain --explain      # tree outline
  regcraft build phone --config o.json # options from a JSON file"#,
        )
        .arg(helper_arg())
        .arg(explain_arg());

    with_option_args(cmd)
}

/// Run a helper over text and print its named captures.
pub fn find_command() -> Command {
    let cmd = Command::new("find")
        .about("Print the named captures a helper finds in text")
        .override_usage(
            "\
  regcraft find <HELPER> <TEXT>
  regcraft find <HELPER> --file <FILE>
  regcraft find <HELPER> < input.txt",
        )
        .after_help(
            r#"EXAMPLES:
  regcraft find email 'mail a@b.io'     # inline text
  regcraft find url --file page.html    # text from a file
  cat log.txt | regcraft find phone     # text from stdin
  regcraft find domain 'x.io' --compact # single-line JSON"#,
        )
        .arg(helper_arg())
        .arg(text_arg())
        .arg(file_arg())
        .arg(compact_arg());

    with_option_args(cmd)
}
