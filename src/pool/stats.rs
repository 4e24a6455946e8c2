//! Buffer pool statistics tracking

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Statistics snapshot for pool monitoring
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Total number of buffers ever constructed by the pool
    pub total_constructed: usize,
    /// Number of buffers currently held by owners
    pub currently_in_use: usize,
    /// Peak number of buffers held simultaneously
    pub peak_in_use: usize,
    /// Total number of allocations served
    pub total_allocations: u64,
    /// Total number of zero-transition returns to the pool
    pub total_returns: u64,
}

impl PoolStats {
    /// Create a new statistics instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Fraction of constructed buffers currently held (0.0 to 1.0)
    pub fn utilization(&self) -> f64 {
        if self.total_constructed == 0 {
            return 0.0;
        }
        self.currently_in_use as f64 / self.total_constructed as f64
    }

    /// Get a summary string of the statistics
    pub fn summary(&self) -> String {
        format!(
            "PoolStats {{ constructed: {}, in_use: {}, peak: {}, \
             allocations: {}, returns: {}, utilization: {:.2}% }}",
            self.total_constructed,
            self.currently_in_use,
            self.peak_in_use,
            self.total_allocations,
            self.total_returns,
            self.utilization() * 100.0
        )
    }
}

/// Thread-safe statistics for buffer pools
#[derive(Debug, Default)]
pub struct AtomicPoolStats {
    /// Total number of buffers ever constructed by the pool
    pub total_constructed: AtomicUsize,
    /// Number of buffers currently held by owners
    pub currently_in_use: AtomicUsize,
    /// Peak number of buffers held simultaneously
    pub peak_in_use: AtomicUsize,
    /// Total number of allocations served
    pub total_allocations: AtomicU64,
    /// Total number of zero-transition returns to the pool
    pub total_returns: AtomicU64,
}

impl AtomicPoolStats {
    /// Create a new atomic statistics instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Record an allocation being served
    pub fn record_allocation(&self) {
        self.total_allocations.fetch_add(1, Ordering::Relaxed);
        let new_in_use = self.currently_in_use.fetch_add(1, Ordering::Relaxed) + 1;

        // Update peak usage
        let current_peak = self.peak_in_use.load(Ordering::Relaxed);
        if new_in_use > current_peak {
            let _ = self.peak_in_use.compare_exchange_weak(
                current_peak,
                new_in_use,
                Ordering::Relaxed,
                Ordering::Relaxed,
            );
        }
    }

    /// Record a buffer returning to the pool on its zero transition
    pub fn record_return(&self) {
        self.total_returns.fetch_add(1, Ordering::Relaxed);
        self.currently_in_use.fetch_sub(1, Ordering::Relaxed);
    }

    /// Record newly constructed buffers
    pub fn record_construction(&self, count: usize) {
        self.total_constructed.fetch_add(count, Ordering::Relaxed);
    }

    /// Get a snapshot of the current statistics
    pub fn snapshot(&self) -> PoolStats {
        PoolStats {
            total_constructed: self.total_constructed.load(Ordering::Relaxed),
            currently_in_use: self.currently_in_use.load(Ordering::Relaxed),
            peak_in_use: self.peak_in_use.load(Ordering::Relaxed),
            total_allocations: self.total_allocations.load(Ordering::Relaxed),
            total_returns: self.total_returns.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_and_return_counts() {
        let stats = AtomicPoolStats::new();
        stats.record_construction(2);
        stats.record_allocation();
        stats.record_allocation();
        stats.record_return();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_constructed, 2);
        assert_eq!(snapshot.currently_in_use, 1);
        assert_eq!(snapshot.peak_in_use, 2);
        assert_eq!(snapshot.total_allocations, 2);
        assert_eq!(snapshot.total_returns, 1);
    }

    #[test]
    fn test_utilization() {
        let stats = PoolStats {
            total_constructed: 4,
            currently_in_use: 1,
            ..Default::default()
        };
        assert!((stats.utilization() - 0.25).abs() < f64::EPSILON);
        assert!(stats.summary().contains("in_use: 1"));
    }
}
