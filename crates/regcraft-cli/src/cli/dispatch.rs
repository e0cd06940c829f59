//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields of one subcommand
//! - `From<*Params>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::build::BuildArgs;
use crate::commands::find::FindArgs;
use crate::commands::input_loader::OptionArgs;

pub struct HelpersParams;

impl HelpersParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

/// Build option flags plus the optional JSON file they are layered on.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OptionParams {
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub warnings: bool,
    pub config: Option<PathBuf>,
}

impl OptionParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ignore_case: m.get_flag("ignore_case"),
            multiline: m.get_flag("multiline"),
            dot_all: m.get_flag("dot_all"),
            warnings: m.get_flag("warnings"),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<OptionParams> for OptionArgs {
    fn from(p: OptionParams) -> Self {
        Self {
            config: p.config,
            case_insensitive: p.ignore_case,
            multiline: p.multiline,
            dot_matches_newline: p.dot_all,
            show_warnings: p.warnings,
        }
    }
}

pub struct BuildParams {
    pub helper: String,
    pub explain: bool,
    pub options: OptionParams,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            helper: helper_name(m),
            explain: m.get_flag("explain"),
            options: OptionParams::from_matches(m),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            helper: p.helper,
            explain: p.explain,
            options: p.options.into(),
        }
    }
}

pub struct FindParams {
    pub helper: String,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub compact: bool,
    pub options: OptionParams,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            helper: helper_name(m),
            text: m.get_one::<String>("text").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            compact: m.get_flag("compact"),
            options: OptionParams::from_matches(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        Self {
            helper: p.helper,
            text: p.text,
            file: p.file,
            compact: p.compact,
            options: p.options.into(),
        }
    }
}

/// The helper positional is required, so clap guarantees it is present.
fn helper_name(m: &ArgMatches) -> String {
    m.get_one::<String>("helper").cloned().unwrap_or_default()
}
