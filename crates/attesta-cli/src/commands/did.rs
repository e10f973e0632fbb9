//! `attesta did` — Generate a DID for a display name.

use clap::Args;

use attesta_identity::random_did;

#[derive(Args, Debug)]
pub struct DidArgs {
    /// Display name to derive the DID from.
    pub name: String,
}

pub fn run(args: &DidArgs) -> anyhow::Result<()> {
    let did = random_did(&args.name)?;
    println!("{}", did);
    Ok(())
}
