use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not the registry authority")]
    InvalidAuthority,
    #[msg("Candidate name must be between 1 and 32 bytes")]
    InvalidCandidateName,
    #[msg("Vote tally overflowed")]
    TallyOverflow,
}
