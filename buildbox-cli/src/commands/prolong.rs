use buildbox_shared::errors::TIMESTAMP_FORMAT;
use clap::Args;

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct ProlongArgs {
    /// Hours to add to the current expiration (negative shortens it)
    #[arg(long, allow_hyphen_values = true)]
    pub hours: i64,
}

pub fn execute(args: ProlongArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let builder = global.create_builder()?;
    let new_expiration = builder.prolong(args.hours)?;

    println!(
        "Expiration set to {}",
        new_expiration.format(TIMESTAMP_FORMAT)
    );
    Ok(())
}
