use super::input_loader::{CommandError, OptionArgs, load_helper, load_options};

pub struct BuildArgs {
    pub helper: String,
    pub explain: bool,
    pub options: OptionArgs,
}

/// The pattern (or outline) for stdout and rendered advisories for stderr.
pub struct BuildOutput {
    pub stdout: String,
    pub diagnostics: String,
}

pub fn run(args: BuildArgs) {
    match execute(&args) {
        Ok(output) => {
            eprint!("{}", output.diagnostics);
            print!("{}", output.stdout);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &BuildArgs) -> Result<BuildOutput, CommandError> {
    let tree = load_helper(&args.helper)?;
    // A bad --config fails in every mode, --explain included.
    let opts = load_options(&args.options)?;

    if args.explain {
        return Ok(BuildOutput {
            stdout: tree.explain(),
            diagnostics: String::new(),
        });
    }

    let (pattern, diagnostics) = tree.build_with_diagnostics(&opts)?;
    Ok(BuildOutput {
        stdout: format!("{}\n", pattern),
        diagnostics: diagnostics.render(),
    })
}
