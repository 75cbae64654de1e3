//! Repair and area command handlers

use anyhow::Result;

use paddock::domain::services::{area, parse_points};
use paddock::presentation::output;

use super::CommandContext;

pub fn cmd_repair(ctx: &CommandContext) -> Result<()> {
    let report = ctx.engines.activation.repair()?;
    ctx.emit(&report, output::repair_report)
}

/// Area needs neither a store nor an acting account
pub fn cmd_area(format: output::OutputFormat, points: &str) -> Result<()> {
    let boundary = parse_points(points)?;
    println!("{}", output::area(format, area(&boundary))?);
    Ok(())
}
