//! Farm command handler

use anyhow::Result;

use paddock::application::FarmDraft;
use paddock::domain::value_objects::{EntityKind, FarmToken};
use paddock::error::PaddockError;
use paddock::presentation::output;
use paddock::presentation::FarmCommands;

use super::CommandContext;

pub fn cmd_farm(ctx: &CommandContext, command: &FarmCommands) -> Result<()> {
    let acting = ctx.acting()?;
    let engines = &ctx.engines;

    match command {
        FarmCommands::Create {
            name,
            gps,
            auto_rename,
        } => {
            let draft = FarmDraft::new(name.clone().unwrap_or_default())
                .with_gps(gps.as_str())
                .with_auto_rename(*auto_rename);
            let farm = engines.farms.create(acting, &draft)?;
            ctx.emit(&farm, output::farm_line)
        }
        FarmCommands::Rename { farm, name } => {
            let farm = engines
                .farms
                .rename(acting, &FarmToken::new(farm.as_str()), name)?;
            ctx.emit(&farm, output::farm_line)
        }
        FarmCommands::Locate { farm, gps } => {
            let farm = engines
                .farms
                .update_location(acting, &FarmToken::new(farm.as_str()), gps)?;
            ctx.emit(&farm, output::farm_line)
        }
        FarmCommands::Delete { farm, transfer_to } => {
            let target = transfer_to.as_deref().map(FarmToken::new);
            let deletion =
                engines
                    .farms
                    .delete(acting, &FarmToken::new(farm.as_str()), target.as_ref())?;
            ctx.emit(&deletion, output::farm_deletion)
        }
        FarmCommands::Select { farm } => {
            let token = FarmToken::new(farm.as_str());
            let selected = engines.selection.select_one(acting, &token)?;
            match selected {
                Some(farm) => ctx.emit(&farm, output::farm_line),
                None => Err(PaddockError::not_found(EntityKind::Farm, token.as_str()).into()),
            }
        }
        FarmCommands::SelectAll => {
            let farms = engines.selection.select_all(acting)?;
            ctx.emit(farms.as_slice(), output::farm_list)
        }
        FarmCommands::List => {
            let farms = engines.farms.list(acting)?;
            ctx.emit(farms.as_slice(), output::farm_list)
        }
    }
}
