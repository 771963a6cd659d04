mod analysis;
mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("textprep=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run(std::env::args().skip(1).collect())
}
