mod cli;
mod commands;
mod logging;

use cli::{CheckParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
