use buildbox_shared::errors::TIMESTAMP_FORMAT;

use crate::cli::GlobalFlags;

pub fn execute(global: &GlobalFlags) -> anyhow::Result<()> {
    let builder = global.create_builder()?;
    let released = builder.release()?;

    println!(
        "Builder released, expiration set to {}",
        released.format(TIMESTAMP_FORMAT)
    );
    println!("You can log out now; the machine will be reclaimed shortly.");
    Ok(())
}
