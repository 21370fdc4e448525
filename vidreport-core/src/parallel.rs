//! Worker pool abstraction for concurrent probing.
//!
//! The scanner hands each directory's batch of probe jobs to a
//! [`ParallelExecutor`] and gets the results back in input order, so the
//! aggregation that follows never depends on completion order.

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::{CoreError, CoreResult};

/// Runs a function over a batch of items, possibly in parallel.
pub trait ParallelExecutor {
    /// Applies `f` to every item and returns the results in input order.
    fn run_parallel<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send;
}

/// Executes every job in order on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl ParallelExecutor for SequentialExecutor {
    fn run_parallel<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        items.iter().map(f).collect()
    }
}

/// Executes jobs on a dedicated rayon thread pool of fixed size.
pub struct ThreadPoolExecutor {
    pool: rayon::ThreadPool,
}

impl ThreadPoolExecutor {
    /// Builds a pool with `threads` workers.
    pub fn new(threads: usize) -> CoreResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vidreport-probe-{i}"))
            .build()
            .map_err(|e| CoreError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ParallelExecutor for ThreadPoolExecutor {
    fn run_parallel<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        // Indexed parallel collect keeps input order.
        self.pool.install(|| items.par_iter().map(f).collect())
    }
}

/// Executor chosen at runtime from the configured job count.
pub enum WorkerPool {
    Sequential(SequentialExecutor),
    Threads(ThreadPoolExecutor),
}

impl WorkerPool {
    /// One job runs sequentially; more jobs get a thread pool.
    ///
    /// Falls back to sequential execution if the pool cannot be built.
    pub fn new(jobs: usize) -> Self {
        if jobs <= 1 {
            debug!("Probing sequentially");
            return WorkerPool::Sequential(SequentialExecutor);
        }
        match ThreadPoolExecutor::new(jobs) {
            Ok(executor) => {
                debug!("Probing with {} worker threads", executor.threads());
                WorkerPool::Threads(executor)
            }
            Err(e) => {
                warn!("{e}; probing sequentially instead");
                WorkerPool::Sequential(SequentialExecutor)
            }
        }
    }
}

impl ParallelExecutor for WorkerPool {
    fn run_parallel<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match self {
            WorkerPool::Sequential(executor) => executor.run_parallel(items, f),
            WorkerPool::Threads(executor) => executor.run_parallel(items, f),
        }
    }
}
