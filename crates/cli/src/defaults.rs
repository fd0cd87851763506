//! Shared default values for the command line.

pub const MIN_POOL_SIZE: usize = 1;
pub const MAX_POOL_SIZE: usize = 4;
pub const TRIALS: usize = 10;
