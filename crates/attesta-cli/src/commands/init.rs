//! `attesta init` — Write a default scenario configuration file.

use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file.
    #[arg(short, long, default_value = "attesta.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = CliConfig::default();
    config.save(&args.output)?;

    println!("Wrote default configuration to {}", args.output.display());
    println!(
        "Edit the [scenario] section, then run: attesta run --config {}",
        args.output.display()
    );
    Ok(())
}
