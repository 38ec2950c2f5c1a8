const HELP_TEXT: &str = "\
You are logged in to an ephemeral build machine. It was allocated for a
single build and will be destroyed automatically once its expiration time
passes; nothing stored on it survives teardown.

Terms of use:

  - The machine is yours alone until it expires. Use it to reproduce and
    debug the build it was allocated for; do not point anything
    production-facing at it or keep data here you cannot lose.
  - The expiration can be pushed out with 'buildbox prolong --hours N',
    up to a hard ceiling derived from the moment your SSH access was
    granted. Requests past the ceiling are rejected and both the
    requested and the allowed timestamps are shown.
  - When you are done, run 'buildbox release'. The machine is reclaimed
    within about a minute and stops occupying capacity.

Typical workflow:

  buildbox show               remaining lifetime and the build PID
  buildbox prolong --hours 8  keep the machine until tomorrow morning
  buildbox release            hand the machine back now

The countdown printed by 'show' is already capped at the ceiling, so the
time you see is the time you get.";

pub fn execute() -> anyhow::Result<()> {
    println!("{HELP_TEXT}");
    Ok(())
}
