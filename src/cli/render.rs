//! Output formats for the command-line host.

use std::io::Write;

use anyhow::Result;

use crate::executor::{ExecutionAction, ResultItem};

/// Print items as the launcher would list them, one block per item.
pub fn write_plain(out: &mut dyn Write, items: &[ResultItem]) -> Result<()> {
    for item in items {
        writeln!(out, "{}", item.title)?;
        writeln!(out, "    {}", item.description)?;
        if let Some(ExecutionAction::OpenUrl { url }) = &item.action {
            writeln!(out, "    {}", url)?;
        }
    }
    Ok(())
}

/// Print items as a JSON array for hosts that render them themselves.
pub fn write_json(out: &mut dyn Write, items: &[ResultItem]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    Ok(())
}
