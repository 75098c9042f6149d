use anchor_lang::prelude::*;

use crate::constants::{CANDIDATE_SEED, MAX_CANDIDATE_NAME_LEN, MIN_CANDIDATE_NAME_LEN};
use crate::error::ErrorCode;

/// One ballot-line entry. Lives at a PDA derived from the candidate name,
/// so the name itself is the only lookup key clients need.
#[account]
#[derive(InitSpace)]
pub struct Candidate {
    /// PDA bump seed
    pub bump: u8,
    /// Human-readable name, also the derivation seed
    #[max_len(MAX_CANDIDATE_NAME_LEN)]
    pub name: String,
    /// Accepted votes
    pub tally: u64,
}

impl Candidate {
    /// Derives the candidate address for `name`.
    ///
    /// Off-chain readers use this to fetch the account and read `tally`
    /// directly; no on-chain getter exists.
    pub fn pda(name: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CANDIDATE_SEED, name.as_bytes()], &crate::ID)
    }

    /// Names must fit in a single PDA seed slot.
    pub fn is_valid_name(name: &str) -> bool {
        (MIN_CANDIDATE_NAME_LEN..=MAX_CANDIDATE_NAME_LEN).contains(&name.len())
    }

    /// Adds one accepted vote and returns the new tally.
    pub fn record_vote(&mut self) -> Result<u64> {
        self.tally = self.tally.checked_add(1).ok_or(ErrorCode::TallyOverflow)?;
        Ok(self.tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(tally: u64) -> Candidate {
        Candidate {
            bump: 254,
            name: "alice".to_string(),
            tally,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(Candidate::pda("alice"), Candidate::pda("alice"));
    }

    #[test]
    fn distinct_names_derive_distinct_addresses() {
        let (alice, _) = Candidate::pda("alice");
        let (bob, _) = Candidate::pda("bob");
        assert_ne!(alice, bob);
    }

    #[test]
    fn three_votes_tally_three() {
        let mut candidate = candidate(0);
        for _ in 0..3 {
            candidate.record_vote().unwrap();
        }
        assert_eq!(candidate.tally, 3);
    }

    #[test]
    fn record_vote_reports_the_new_tally() {
        let mut candidate = candidate(41);
        assert_eq!(candidate.record_vote().unwrap(), 42);
    }

    #[test]
    fn saturated_tally_rejects_further_votes() {
        let mut candidate = candidate(u64::MAX);
        assert!(candidate.record_vote().is_err());
        assert_eq!(candidate.tally, u64::MAX);
    }

    #[test]
    fn name_must_fit_a_seed_slot() {
        assert!(!Candidate::is_valid_name(""));
        assert!(Candidate::is_valid_name("a"));
        assert!(Candidate::is_valid_name(&"a".repeat(32)));
        assert!(!Candidate::is_valid_name(&"a".repeat(33)));
    }
}
