mod cli;
mod commands;
mod logging;

use cli::{BuildParams, FindParams, HelpersParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("helpers", m)) => {
            let _params = HelpersParams::from_matches(m);
            commands::helpers::run();
        }
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        Some(("find", m)) => {
            let params = FindParams::from_matches(m);
            commands::find::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
