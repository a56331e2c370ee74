// core.rs splits responsibilities into submodules: block structure, chain
// management, validation, and the lock-guarded shared handle.
pub mod block;
pub mod chain;
pub mod shared;
pub mod validation;

pub use block::*;
pub use chain::*;
pub use shared::*;
pub use validation::*;
