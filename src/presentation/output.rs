//! Output Rendering
//!
//! Text for people, pretty JSON for scripts. Text renderers return strings
//! without a trailing newline; printing is left to the command handlers.

use serde::Serialize;

use crate::application::{FarmDeletion, FenceCreation, RepairReport};
use crate::domain::entities::{Account, Farm, Fence};
use crate::domain::value_objects::FarmToken;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Render `value` as JSON, or as text through `text`
    pub fn render<T, F>(&self, value: &T, text: F) -> serde_json::Result<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(value),
            OutputFormat::Text => Ok(text(value)),
        }
    }
}

pub fn account_line(account: &Account) -> String {
    match account.developer.as_ref() {
        Some(dev) => format!("{} ({}, developer {})", account.token, account.role, dev),
        None => format!("{} ({})", account.token, account.role),
    }
}

/// One farm per line; `*` marks a selected farm
pub fn farm_line(farm: &Farm) -> String {
    let marker = if farm.selected { "*" } else { " " };
    format!(
        "{} {} [{}] fences: {} cows: {}",
        marker, farm.name, farm.token, farm.fence_count, farm.cow_count
    )
}

pub fn farm_list(farms: &[Farm]) -> String {
    if farms.is_empty() {
        return "no farms".to_string();
    }
    farms.iter().map(farm_line).collect::<Vec<_>>().join("\n")
}

/// One fence per line; `*` marks the active fence of its farm
pub fn fence_line(fence: &Fence) -> String {
    let marker = if fence.active { "*" } else { " " };
    let farm = fence.farm.as_ref().map_or("-", FarmToken::as_str);
    format!(
        "{} {} [{}] farm: {} area: {:.2}",
        marker, fence.name, fence.token, farm, fence.area
    )
}

pub fn fence_list(fences: &[Fence]) -> String {
    if fences.is_empty() {
        return "no fences".to_string();
    }
    fences.iter().map(fence_line).collect::<Vec<_>>().join("\n")
}

pub fn fence_creation(creation: &FenceCreation) -> String {
    let created = fence_line(&creation.fence);
    if creation.repair.is_clean() && creation.repair.orphans.is_empty() {
        created
    } else {
        format!("{}\n{}", created, repair_report(&creation.repair))
    }
}

pub fn farm_deletion(deletion: &FarmDeletion) -> String {
    let head = format!("deleted {} [{}]", deletion.farm.name, deletion.farm.token);
    match deletion.transferred_to.as_ref() {
        Some(target) => format!(
            "{}; {} cows moved to {}",
            head,
            deletion.cows_moved(),
            target
        ),
        None if deletion.cows > 0 => {
            format!("{}; {} cows released", head, deletion.cows_released())
        }
        None => head,
    }
}

pub fn repair_report(report: &RepairReport) -> String {
    if report.is_clean() && report.orphans.is_empty() {
        return "nothing to repair".to_string();
    }

    let mut lines = Vec::new();
    if !report.activated.is_empty() {
        lines.push(format!("activated: {}", join(&report.activated)));
    }
    for recount in &report.recounted {
        lines.push(format!(
            "recounted: {} ({} -> {})",
            recount.farm, recount.recorded, recount.actual
        ));
    }
    if !report.detached.is_empty() {
        lines.push(format!("detached: {}", join(&report.detached)));
    } else if !report.orphans.is_empty() {
        lines.push(format!("orphans (left in place): {}", join(&report.orphans)));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct AreaOutput {
    area: f64,
}

/// Area with two decimals, or `{"area": ...}` in JSON
pub fn area(format: OutputFormat, value: f64) -> serde_json::Result<String> {
    format.render(&AreaOutput { area: value }, |a| format!("{:.2}", a.area))
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
