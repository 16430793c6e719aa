//! Block-wise parallel execution
use crate::error::{Error, Result};
use log::trace;
use rayon::prelude::*;
use std::ops::Range;

const DEFAULT_CACHE_LINE_SIZE: usize = 64;

/// The split of an index range into contiguous blocks, one per worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    block_size: usize,
    blocks: Vec<Range<usize>>,
}

impl ExecutionPlan {
    /// Number of workers, which equals the number of blocks
    pub fn workers(&self) -> usize {
        self.blocks.len()
    }

    /// Number of indices per block (the last block may be shorter)
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The blocks
    pub fn blocks(&self) -> &[Range<usize>] {
        &self.blocks
    }
}

/// Splits index ranges into blocks and runs a task on every block in parallel
///
/// Blocks are contiguous and disjoint. Their size is rounded up to a whole number of cache
/// lines of elements, and there are never more blocks than `max_workers` or than indices.
/// Each call returns once every block has run to completion. Blocks are run in no particular
/// order.
#[derive(Debug)]
pub struct ParallelExecutor {
    max_workers: usize,
    cache_line_size: usize,
    element_size: usize,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor that uses at most `max_workers` threads
    pub fn new(max_workers: usize) -> Result<Self> {
        if max_workers == 0 {
            return Err(Error::invalid("an executor needs at least one worker"));
        }
        let pool = if max_workers > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(max_workers)
                    .build()?,
            )
        } else {
            None
        };
        Ok(Self {
            max_workers,
            cache_line_size: DEFAULT_CACHE_LINE_SIZE,
            element_size: std::mem::size_of::<f64>(),
            pool,
        })
    }

    /// Create an executor that runs every block on the calling thread
    pub fn sequential() -> Self {
        Self {
            max_workers: 1,
            cache_line_size: DEFAULT_CACHE_LINE_SIZE,
            element_size: std::mem::size_of::<f64>(),
            pool: None,
        }
    }

    /// Set the cache line size in bytes
    pub fn with_cache_line_size(mut self, bytes: usize) -> Self {
        self.cache_line_size = bytes.max(1);
        self
    }

    /// Set the size in bytes of one element of the processed data
    pub fn with_element_size(mut self, bytes: usize) -> Self {
        self.element_size = bytes.max(1);
        self
    }

    /// The maximum number of workers
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Split `[0, size)` into blocks
    pub fn plan(&self, size: usize) -> ExecutionPlan {
        let workers = self.max_workers.min(size);
        if workers == 0 {
            return ExecutionPlan {
                block_size: 0,
                blocks: vec![],
            };
        }
        let elements_per_line = (self.cache_line_size / self.element_size).max(1);
        let block_size = size.div_ceil(workers).div_ceil(elements_per_line) * elements_per_line;
        let blocks = (0..workers)
            .map(|i| i * block_size)
            .take_while(|start| *start < size)
            .map(|start| start..(start + block_size).min(size))
            .collect::<Vec<_>>();
        trace!(
            "Split {size} indices into {} blocks of {block_size}",
            blocks.len()
        );
        ExecutionPlan { block_size, blocks }
    }

    fn run<R, F>(&self, blocks: Vec<Range<usize>>, task: &F) -> Vec<R>
    where
        R: Send,
        F: Fn(Range<usize>) -> R + Sync,
    {
        match &self.pool {
            Some(pool) if blocks.len() > 1 => {
                pool.install(|| blocks.into_par_iter().map(task).collect())
            }
            _ => blocks.into_iter().map(task).collect(),
        }
    }

    /// Run `task` on every block of `[0, size)`
    pub fn for_each_block<F>(&self, size: usize, task: F)
    where
        F: Fn(Range<usize>) + Sync,
    {
        let plan = self.plan(size);
        self.run(plan.blocks, &task);
    }

    /// Run `task` on every block and combine the block results
    ///
    /// The order in which block results are combined is unspecified, so `combine` must be
    /// associative and commutative for the result type.
    pub fn reduce<R, F, C>(&self, size: usize, identity: R, task: F, combine: C) -> R
    where
        R: Send,
        F: Fn(Range<usize>) -> R + Sync,
        C: Fn(R, R) -> R,
    {
        self.partial_reduce(size, task)
            .into_iter()
            .fold(identity, combine)
    }

    /// Run `task` on every block and return the block results in block order
    pub fn partial_reduce<R, F>(&self, size: usize, task: F) -> Vec<R>
    where
        R: Send,
        F: Fn(Range<usize>) -> R + Sync,
    {
        let plan = self.plan(size);
        self.run(plan.blocks, &task)
    }

    /// Run `task` on disjoint mutable chunks of `data`, one chunk per block
    ///
    /// The task receives the offset of its chunk in `data` and the chunk.
    pub fn for_each_chunk_mut<E, F>(&self, data: &mut [E], task: F)
    where
        E: Send,
        F: Fn(usize, &mut [E]) + Sync,
    {
        let plan = self.plan(data.len());
        if plan.workers() == 0 {
            return;
        }
        let block_size = plan.block_size();
        match &self.pool {
            Some(pool) if plan.workers() > 1 => pool.install(|| {
                data.par_chunks_mut(block_size)
                    .enumerate()
                    .for_each(|(i, chunk)| task(i * block_size, chunk))
            }),
            _ => data
                .chunks_mut(block_size)
                .enumerate()
                .for_each(|(i, chunk)| task(i * block_size, chunk)),
        }
    }
}

impl Default for ParallelExecutor {
    fn default() -> Self {
        Self::sequential()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty() {
        let e = ParallelExecutor::new(4).unwrap();
        assert_eq!(e.plan(0).workers(), 0);
        let calls = AtomicUsize::new(0);
        let r = e.reduce(
            0,
            7.0,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                1.0
            },
            |a, b| a + b,
        );
        assert_eq!(r, 7.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(e.partial_reduce(0, |r| r.len()).is_empty());
    }

    #[test]
    fn test_single_element() {
        let e = ParallelExecutor::new(16).unwrap();
        let plan = e.plan(1);
        assert_eq!(plan.workers(), 1);
        assert_eq!(plan.blocks(), &[0..1]);
    }

    #[test]
    fn test_zero_workers() {
        assert!(matches!(
            ParallelExecutor::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_cache_line_rounding() {
        let e = ParallelExecutor::new(8).unwrap();
        let plan = e.plan(100);
        // 8 doubles per 64 byte line: ceil(100 / 8) = 13 rounds up to 16
        assert_eq!(plan.block_size(), 16);
        assert_eq!(plan.workers(), 7);
        assert_eq!(plan.blocks().last(), Some(&(96..100)));

        let e = ParallelExecutor::new(3)
            .unwrap()
            .with_element_size(64);
        let plan = e.plan(10);
        assert_eq!(plan.block_size(), 4);
        assert_eq!(plan.blocks(), &[0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_blocks_cover_range() {
        for workers in 1..6 {
            let e = ParallelExecutor::new(workers).unwrap().with_element_size(16);
            for size in 0..50 {
                let plan = e.plan(size);
                assert!(plan.workers() <= workers.min(size));
                let mut next = 0;
                for b in plan.blocks() {
                    assert_eq!(b.start, next);
                    assert!(b.end > b.start);
                    next = b.end;
                }
                assert_eq!(next, size);
            }
        }
    }

    #[test]
    fn test_reduce_sum() {
        let data = (0..1000).map(|i| i as f64).collect::<Vec<_>>();
        for workers in [1, 2, 4, 7] {
            let e = ParallelExecutor::new(workers).unwrap();
            let s = e.reduce(
                data.len(),
                0.0,
                |r| data[r].iter().sum::<f64>(),
                |a, b| a + b,
            );
            assert_eq!(s, 499500.0);
        }
    }

    #[test]
    fn test_partial_reduce_order() {
        let e = ParallelExecutor::new(4).unwrap();
        let parts = e.partial_reduce(64, |r| r.start);
        assert_eq!(parts, vec![0, 16, 32, 48]);
    }

    #[test]
    fn test_for_each_block() {
        let e = ParallelExecutor::new(3).unwrap();
        let visited = AtomicUsize::new(0);
        e.for_each_block(41, |r| {
            visited.fetch_add(r.len(), Ordering::SeqCst);
        });
        assert_eq!(visited.load(Ordering::SeqCst), 41);
    }

    #[test]
    fn test_for_each_chunk_mut() {
        let e = ParallelExecutor::new(4).unwrap();
        let mut data = vec![0usize; 70];
        e.for_each_chunk_mut(&mut data, |offset, chunk| {
            for (i, v) in chunk.iter_mut().enumerate() {
                *v = offset + i;
            }
        });
        assert_eq!(data, (0..70).collect::<Vec<_>>());
    }
}
