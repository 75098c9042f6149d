pub mod candidate;
pub use candidate::*;

pub mod events;
pub use events::*;

pub mod registry;
pub use registry::*;
