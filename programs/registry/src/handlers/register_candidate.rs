use anchor_lang::prelude::*;

use crate::{
    state::{Candidate, CandidateRegistered},
    ErrorCode, RegisterCandidate,
};

/// Registers a candidate under `name`.
///
/// Only the registry authority may register. The candidate account is
/// created at an address derived from the name, so registering the same
/// name twice fails when the runtime refuses to re-create the account —
/// and the whole transaction reverts on any failure, leaving no record
/// behind.
///
/// # Arguments
/// * `name` - Candidate name; 1..=32 bytes, also the derivation seed
pub fn register_candidate(ctx: Context<RegisterCandidate>, name: String) -> Result<()> {
    require!(
        ctx.accounts
            .registry
            .is_authority(&ctx.accounts.authority.key()),
        ErrorCode::InvalidAuthority
    );
    require!(Candidate::is_valid_name(&name), ErrorCode::InvalidCandidateName);

    msg!("Registering candidate {}", name);

    let candidate = &mut ctx.accounts.candidate;
    candidate.bump = ctx.bumps.candidate;
    candidate.name = name;
    candidate.tally = 0;

    let registry = &mut ctx.accounts.registry;
    registry.candidates = registry.candidates.saturating_add(1);

    let clock = Clock::get()?;
    emit!(CandidateRegistered {
        name: candidate.name.clone(),
        candidate: candidate.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
