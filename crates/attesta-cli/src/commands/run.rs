//! `attesta run` — Run one issue → present → verify exchange and render the
//! results.

use clap::Args;
use std::path::PathBuf;

use attesta_core::Claim;
use attesta_sim::Scenario;

use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file with a [scenario] section.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Issuer display name (overrides the config).
    #[arg(long)]
    pub issuer: Option<String>,

    /// Holder display name (overrides the config).
    #[arg(long)]
    pub holder: Option<String>,

    /// Verifier display name (overrides the config).
    #[arg(long)]
    pub verifier: Option<String>,

    /// Claim as `name=value`; repeat for multiple claims. Replaces the
    /// configured claim set when given.
    #[arg(long = "claim", value_name = "NAME=VALUE")]
    pub claims: Vec<String>,

    /// Print the full report as one JSON document instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    init_tracing(&config.logging.level);

    let scenario = apply_overrides(config.scenario, args)?;
    let report = attesta_sim::run(&scenario)?;

    if args.json {
        // Key-sorted structured output.
        let value = serde_json::to_value(&report)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("=== Credential Issued ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::to_value(&report.credential)?)?
    );
    println!();
    println!("=== Presentation ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::to_value(&report.presentation)?)?
    );
    println!();
    println!(
        "Verification result: {}",
        if report.valid { "VALID" } else { "INVALID" }
    );
    println!();
    println!("Issuer DID:   {}", report.issuer_did);
    println!("Holder DID:   {}", report.holder_did);
    println!("Verifier DID: {}", report.verifier_did);

    Ok(())
}

fn apply_overrides(mut scenario: Scenario, args: &RunArgs) -> anyhow::Result<Scenario> {
    if let Some(name) = &args.issuer {
        scenario.issuer_name = name.clone();
    }
    if let Some(name) = &args.holder {
        scenario.holder_name = name.clone();
    }
    if let Some(name) = &args.verifier {
        scenario.verifier_name = name.clone();
    }
    if !args.claims.is_empty() {
        scenario.claims = args
            .claims
            .iter()
            .map(|raw| parse_claim(raw))
            .collect::<anyhow::Result<Vec<Claim>>>()?;
    }
    Ok(scenario)
}

fn parse_claim(raw: &str) -> anyhow::Result<Claim> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("claim must be NAME=VALUE, got: {}", raw))?;
    Ok(Claim::new(name, value))
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
