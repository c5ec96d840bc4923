//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("idlcheck")
        .about("Detect unused imports in IDL source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
}

/// Check source files for unused imports.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check source files for unused imports")
        .override_usage(
            "\
  idlcheck check <SOURCE>
  idlcheck check <DIR>
  idlcheck check - < source.json",
        )
        .after_help(
            r#"EXAMPLES:
  idlcheck check api.json                # single source file
  idlcheck check schemas/                # every *.json file in a directory
  idlcheck check api.json --format json  # machine-readable report
  cat api.json | idlcheck check -        # read from stdin"#,
        )
        .arg(source_path_arg())
        .arg(format_arg())
        .arg(color_arg())
}
