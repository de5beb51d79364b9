use std::thread;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemProfile {
    pub logical_cores: usize,
    pub worker_threads: usize,
}

impl SystemProfile {
    /// Sizes the serving runtime. `requested` of 0 means auto-detect.
    pub fn detect(requested: usize) -> Self {
        let cores = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self::for_cores(cores, requested)
    }

    pub fn for_cores(cores: usize, requested: usize) -> Self {
        let cores = cores.max(1);

        let worker_threads = if requested > 0 {
            requested
        } else if cores <= 1 {
            // Single core: 1 compute + 1 I/O
            warn!("CPU constraint detected (cores: {}), running with 2 workers", cores);
            2
        } else {
            cores
        };

        Self {
            logical_cores: cores,
            worker_threads,
        }
    }
}
