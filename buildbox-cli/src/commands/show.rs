use crate::cli::GlobalFlags;

pub fn execute(global: &GlobalFlags) -> anyhow::Result<()> {
    let builder = global.create_builder()?;

    println!("Remaining time: {}", builder.remaining_time()?);
    println!(
        "Build PID: {}",
        builder.build_pid().unwrap_or_else(|| "none".to_string())
    );
    Ok(())
}
