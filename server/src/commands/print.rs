use std::io::Write;

use color_eyre::eyre::WrapErr;

use crate::{components::resume, Result};

pub(crate) fn print_markup() -> Result<()> {
    write_markup(&mut std::io::stdout().lock())
}

fn write_markup(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", resume().into_string()).wrap_err("Couldn't write markup")?;

    Ok(())
}
