//! CLI entry point for level-by-level circuit pattern growth

use circuitgrow::io::cli::{Cli, PatternRunner};
use clap::Parser;

fn main() -> circuitgrow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut runner = PatternRunner::new(cli);
    runner.process()?;
    Ok(())
}
