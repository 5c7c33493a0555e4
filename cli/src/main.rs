use anyhow::Result;
use clap::Parser;

use hksave_cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = run(&cli)?;
    println!("{out}");
    Ok(())
}
