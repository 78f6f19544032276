//! Parallelization options
use crate::types::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::env;
use std::num::NonZeroUsize;
use std::thread;

/// Maximum number of threads used during evaluation
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ThreadCount {
    /// Let the thread pool decide
    #[default]
    Automatic,
    /// Use at most this many threads
    Fixed(NonZeroUsize),
}

impl ThreadCount {
    /// The integer form of the policy, with -1 for automatic
    pub fn as_raw(&self) -> i32 {
        match self {
            ThreadCount::Automatic => -1,
            ThreadCount::Fixed(n) => i32::try_from(n.get()).unwrap_or(i32::MAX),
        }
    }
}

/// Options controlling parallel execution
///
/// The thread count is not validated here: [ThreadCount] can only hold a positive
/// count or the automatic policy.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ParallelizationOptions {
    max_thread_count: ThreadCount,
}

impl ParallelizationOptions {
    /// Create new options with the given thread count policy
    pub fn new(max_thread_count: ThreadCount) -> Self {
        Self { max_thread_count }
    }

    /// Current thread count policy
    pub fn max_thread_count(&self) -> ThreadCount {
        self.max_thread_count
    }

    /// Replace the thread count policy
    pub fn set_max_thread_count(&mut self, max_thread_count: ThreadCount) {
        self.max_thread_count = max_thread_count;
    }

    /// Number of threads that a pool created from these options will use
    ///
    /// This does not depend on the pool the caller is running in.
    pub fn resolved_thread_count(&self) -> usize {
        match self.max_thread_count {
            ThreadCount::Automatic => automatic_thread_count(),
            ThreadCount::Fixed(n) => n.get(),
        }
    }

    /// Create a pool
    pub fn create_pool(&self) -> Result<ThreadPool> {
        let num_threads = match self.max_thread_count {
            // Zero lets rayon pick the number of threads
            ThreadCount::Automatic => 0,
            ThreadCount::Fixed(n) => n.get(),
        };
        Ok(ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("bempp-evaluation-{i}"))
            .build()?)
    }

    /// Run `op` inside a pool created from these options
    pub fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> Result<R> {
        let pool = self.create_pool()?;
        Ok(pool.install(op))
    }
}

/// The number of threads rayon's builder picks when asked for zero threads
fn automatic_thread_count() -> usize {
    let from_env = |name: &str| {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&n| n > 0)
    };
    from_env("RAYON_NUM_THREADS")
        .or_else(|| from_env("RAYON_RS_NUM_CPUS"))
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get))
}
