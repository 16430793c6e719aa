//! Parallel execution
mod executor;
mod method;

pub use executor::{ExecutionPlan, ParallelExecutor};
pub use method::ParallelizationMethod;
