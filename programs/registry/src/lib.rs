// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod voting_registry {
    use super::*;

    pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
        handlers::create_registry::create_registry(ctx)
    }

    pub fn register_candidate(ctx: Context<RegisterCandidate>, name: String) -> Result<()> {
        handlers::register_candidate::register_candidate(ctx, name)
    }

    #[allow(unused_variables)]
    pub fn cast_vote(ctx: Context<CastVote>, name: String) -> Result<()> {
        handlers::cast_vote::cast_vote(ctx, name)
    }
}

#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The fixed seed makes the registry a singleton: a second
    /// `create_registry` fails when the runtime refuses to re-create the
    /// account.
    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct RegisterCandidate<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Created fresh on every registration; a name that already has a
    /// record makes the `init` fail instead of overwriting it.
    #[account(
        init,
        payer = authority,
        space = 8 + Candidate::INIT_SPACE,
        seeds = [CANDIDATE_SEED, name.as_bytes()],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CastVote<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Must already exist: a vote for an unregistered name is rejected
    /// here, when no account backs the derived address.
    #[account(
        mut,
        seeds = [CANDIDATE_SEED, name.as_bytes()],
        bump = candidate.bump,
    )]
    pub candidate: Account<'info, Candidate>,
}
