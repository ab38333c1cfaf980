use std::process::ExitCode;

use clap::Parser;
use yamlcfg::cli::{Arguments, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    run_cli(&args).into()
}
