//! Fence command handler

use anyhow::Result;

use paddock::application::FenceDraft;
use paddock::domain::services::parse_points;
use paddock::domain::value_objects::{FarmToken, FenceToken};
use paddock::presentation::output;
use paddock::presentation::FenceCommands;

use super::CommandContext;

pub fn cmd_fence(ctx: &CommandContext, command: &FenceCommands) -> Result<()> {
    let acting = ctx.acting()?;
    let engines = &ctx.engines;

    match command {
        FenceCommands::Create {
            name,
            farm,
            points,
            auto_rename,
        } => {
            let boundary = parse_points(points)?;
            let mut draft = FenceDraft::new(name.clone().unwrap_or_default(), boundary)
                .with_auto_rename(*auto_rename);
            if let Some(farm) = farm {
                draft = draft.on_farm(FarmToken::new(farm.as_str()));
            }
            let creation = engines.fences.create(acting, &draft)?;
            ctx.emit(&creation, output::fence_creation)
        }
        FenceCommands::Rename { fence, name } => {
            let fence = engines
                .fences
                .rename(acting, &FenceToken::new(fence.as_str()), name)?;
            ctx.emit(&fence, output::fence_line)
        }
        FenceCommands::Delete { fence } => {
            let removed = engines
                .fences
                .delete(acting, &FenceToken::new(fence.as_str()))?;
            ctx.emit(&removed, output::fence_line)
        }
        FenceCommands::Select { fence, farm } => {
            let farm = farm.as_deref().map(FarmToken::new);
            let selected = engines.activation.select(
                acting,
                &FenceToken::new(fence.as_str()),
                farm.as_ref(),
            )?;
            ctx.emit(&selected, output::fence_line)
        }
        FenceCommands::List { farm } => {
            let farm = farm.as_deref().map(FarmToken::new);
            let fences = engines.fences.list(acting, farm.as_ref())?;
            ctx.emit(fences.as_slice(), output::fence_list)
        }
    }
}
