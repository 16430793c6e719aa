//! Parallelization settings
use super::ParallelExecutor;
use crate::error::{Error, Result};
use std::thread;

/// How bulk passes over a mesh are parallelised
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum ParallelizationMethod {
    /// Run on the calling thread
    #[default]
    SingleThread,
    /// Use every available hardware thread
    MultiThread,
    /// Use at most the given number of threads
    Workers(usize),
}

impl ParallelizationMethod {
    /// The maximum number of workers
    pub fn max_workers(&self) -> usize {
        match self {
            ParallelizationMethod::SingleThread => 1,
            ParallelizationMethod::MultiThread => {
                thread::available_parallelism().map_or(1, |n| n.get())
            }
            ParallelizationMethod::Workers(n) => *n,
        }
    }

    /// Check that the method allows at least one worker
    pub fn validate(&self) -> Result<()> {
        match self {
            ParallelizationMethod::Workers(0) => {
                Err(Error::invalid("parallelization needs at least one worker"))
            }
            _ => Ok(()),
        }
    }

    /// Create an executor
    pub fn executor(&self) -> Result<ParallelExecutor> {
        match self {
            ParallelizationMethod::SingleThread => Ok(ParallelExecutor::sequential()),
            _ => ParallelExecutor::new(self.max_workers()),
        }
    }
}
