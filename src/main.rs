use clap::Parser;
use routepath::cli::{run_cli, Cli};
use routepath::logging::{init_logging, LogConfig};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_env())?;
    run_cli(cli)
}
