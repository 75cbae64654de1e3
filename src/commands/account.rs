//! Account command handler

use anyhow::Result;

use paddock::domain::value_objects::AccountToken;
use paddock::presentation::output;
use paddock::presentation::AccountCommands;

use super::CommandContext;

pub fn cmd_account(ctx: &CommandContext, command: &AccountCommands) -> Result<()> {
    match command {
        AccountCommands::Add {
            token,
            account_role,
            developer,
        } => {
            let developer = developer.as_deref().map(AccountToken::new);
            let account = ctx.engines.accounts.register(
                &AccountToken::new(token.as_str()),
                *account_role,
                developer.as_ref(),
            )?;
            ctx.emit(&account, output::account_line)
        }
    }
}
