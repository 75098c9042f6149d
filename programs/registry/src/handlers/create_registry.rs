use anchor_lang::prelude::*;

use crate::CreateRegistry;

/// Creates the registry and records the paying signer as its authority.
///
/// This is the one-off setup step: every later registration is checked
/// against the authority stored here. The registry lives at a fixed
/// address, so the account layer rejects a repeat call.
pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
    msg!("Creating voting registry");

    let registry = &mut ctx.accounts.registry;
    registry.bump = ctx.bumps.registry;
    registry.authority = ctx.accounts.payer.key();
    registry.candidates = 0;
    registry.total_votes = 0;

    Ok(())
}
