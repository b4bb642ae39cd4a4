use std::io::Write;

use netplan_trainer_common::document::INITIAL_DOCUMENT;

/// Prints the starting template unadorned so it can be redirected to a file.
pub fn template() -> anyhow::Result<()> {
    write_template(&mut std::io::stdout().lock())?;
    Ok(())
}

fn write_template(out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(INITIAL_DOCUMENT.as_bytes())?;
    out.flush()
}
