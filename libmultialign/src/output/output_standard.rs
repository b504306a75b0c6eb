use super::Report;

use anyhow::Result;
use std::io::Write;

pub fn write_standard_output(report: &Report, out: &mut impl Write) -> Result<()> {
    write!(out, "{report}")?;
    Ok(())
}
