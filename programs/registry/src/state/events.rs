use anchor_lang::prelude::*;

#[event]
pub struct CandidateRegistered {
    /// Candidate name, as registered
    pub name: String,
    /// Address of the candidate record
    pub candidate: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    /// Address of the candidate record
    pub candidate: Pubkey,
    /// Tally after this vote
    pub tally: u64,
    pub timestamp: i64,
}
