use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;

/// Singleton configuration account for the registry.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// PDA bump seed
    pub bump: u8,
    /// The only key allowed to register candidates
    pub authority: Pubkey,
    /// Number of registered candidates
    pub candidates: u32,
    /// Votes accepted across all candidates
    pub total_votes: u64,
}

impl Registry {
    /// Derives the registry address for this program deployment.
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[REGISTRY_SEED], &crate::ID)
    }

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_predicate_matches_configured_key_only() {
        let authority = Pubkey::new_unique();
        let registry = Registry {
            bump: 255,
            authority,
            candidates: 0,
            total_votes: 0,
        };

        assert!(registry.is_authority(&authority));
        assert!(!registry.is_authority(&Pubkey::new_unique()));
    }

    #[test]
    fn registry_address_is_stable() {
        assert_eq!(Registry::pda(), Registry::pda());
    }
}
