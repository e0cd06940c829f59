use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use regcraft_lib::{ExprTree, Options, helpers};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown helper '{0}' (run 'regcraft helpers' for the list)")]
    UnknownHelper(String),

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Build(#[from] regcraft_lib::Error),

    #[error("failed to serialize captures: {0}")]
    Output(serde_json::Error),
}

/// Option flags from the command line, layered over an optional JSON file.
pub struct OptionArgs {
    pub config: Option<PathBuf>,
    pub case_insensitive: bool,
    pub multiline: bool,
    pub dot_matches_newline: bool,
    pub show_warnings: bool,
}

/// Flags can switch a mode on but never off a file-enabled one.
pub fn load_options(args: &OptionArgs) -> Result<Options, CommandError> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => Options::default(),
    };

    Ok(Options {
        case_insensitive: base.case_insensitive || args.case_insensitive,
        multiline: base.multiline || args.multiline,
        dot_matches_newline: base.dot_matches_newline || args.dot_matches_newline,
        show_warnings: base.show_warnings || args.show_warnings,
    })
}

fn load_config(path: &Path) -> Result<Options, CommandError> {
    let content = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CommandError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// A single-node tree holding the named helper.
pub fn load_helper(name: &str) -> Result<ExprTree, CommandError> {
    helpers::by_name(name)
        .map(|node| ExprTree::new([node]))
        .ok_or_else(|| CommandError::UnknownHelper(name.to_string()))
}

/// Inline text wins, then `file`, then stdin.
pub fn load_text(text: Option<&str>, file: Option<&Path>) -> Result<String, CommandError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CommandError::Stdin)?;
    Ok(buf)
}
