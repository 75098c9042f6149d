pub mod create_registry;
pub use create_registry::*;

pub mod register_candidate;
pub use register_candidate::*;

pub mod cast_vote;
pub use cast_vote::*;
