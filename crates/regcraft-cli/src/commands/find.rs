use std::path::PathBuf;

use regcraft_lib::find_captures;

use super::input_loader::{CommandError, OptionArgs, load_helper, load_options, load_text};

pub struct FindArgs {
    pub helper: String,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub compact: bool,
    pub options: OptionArgs,
}

/// JSON captures (`null` when nothing matched) and rendered advisories.
pub struct FindOutput {
    pub json: String,
    pub diagnostics: String,
    pub found: bool,
}

pub fn run(args: FindArgs) {
    let output = execute(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    eprint!("{}", output.diagnostics);
    println!("{}", output.json);

    if !output.found {
        std::process::exit(1);
    }
}

pub fn execute(args: &FindArgs) -> Result<FindOutput, CommandError> {
    let tree = load_helper(&args.helper)?;
    let opts = load_options(&args.options)?;
    let text = load_text(args.text.as_deref(), args.file.as_deref())?;

    let (re, diagnostics) = tree.compile_with_diagnostics(&opts)?;
    let captures = find_captures(&re, &text);
    tracing::debug!(found = captures.is_some(), "searched {} bytes", text.len());

    let json = if args.compact {
        serde_json::to_string(&captures)
    } else {
        serde_json::to_string_pretty(&captures)
    }
    .map_err(CommandError::Output)?;

    Ok(FindOutput {
        json,
        diagnostics: diagnostics.render(),
        found: captures.is_some(),
    })
}
