// PDA seed prefixes
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const CANDIDATE_SEED: &[u8] = b"candidate";

// Candidate names double as PDA seeds, so the upper bound is the runtime's
// 32-byte per-seed limit.
pub const MIN_CANDIDATE_NAME_LEN: usize = 1;
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;
