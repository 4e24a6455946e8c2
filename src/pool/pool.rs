//! Concurrent buffer pool

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, Weak},
};

use log::trace;

use crate::error::Result;

use super::{
    config::PoolConfig,
    managed::{ManagedBuffer, PooledBuffer},
    stats::{AtomicPoolStats, PoolStats},
};

/// A concurrent, unbounded pool of reusable buffers.
///
/// [`alloc`](Self::alloc) pops an idle instance off the free list, or
/// constructs a new one when the list is empty. Instances come back on
/// their last [`release`](crate::WireBuf::release). There is no
/// capacity limit and no eviction: idle buffers persist for the life of
/// the pool, trading peak memory retention for allocation-free reuse
/// under sustained throughput.
///
/// The pool is safe for concurrent callers; allocations never block
/// beyond the free-list lock.
#[derive(Debug)]
pub struct BufferPool {
    /// Pool name, used in log output
    name: String,
    /// Idle instances awaiting reuse
    free: Mutex<VecDeque<Arc<ManagedBuffer>>>,
    /// Usage statistics
    stats: AtomicPoolStats,
    /// Weak self-handle seeded into every buffer as its back-reference
    self_ref: Weak<BufferPool>,
}

impl BufferPool {
    /// Create a pool from a validated configuration
    pub fn new(config: PoolConfig) -> Result<Arc<Self>> {
        config.validate()?;

        let pool = Arc::new_cyclic(|self_ref| Self {
            name: config.name.clone(),
            free: Mutex::new(VecDeque::new()),
            stats: AtomicPoolStats::new(),
            self_ref: self_ref.clone(),
        });

        if config.pre_allocate {
            let mut free = pool.free.lock().unwrap();
            for _ in 0..config.initial_count {
                let buffer = Arc::new(ManagedBuffer::new(pool.self_ref.clone()));
                buffer.reserve(config.default_capacity);
                free.push_back(buffer);
            }
            drop(free);
            pool.stats.record_construction(config.initial_count);
            trace!(
                "pool {}: pre-allocated {} buffers of {} bytes",
                pool.name,
                config.initial_count,
                config.default_capacity
            );
        }

        Ok(pool)
    }

    /// Create a pool with the default configuration
    pub fn with_defaults() -> Arc<Self> {
        // The default configuration always validates.
        Self::new(PoolConfig::default()).unwrap()
    }

    /// Obtain a buffer with at least `capacity` bytes of storage.
    ///
    /// The returned handle owns one reference. Storage carried over
    /// from a prior use is never shrunk, so a recycled instance may
    /// come back larger than requested; cursors always start at zero.
    pub fn alloc(&self, capacity: usize) -> PooledBuffer {
        let reused = self.free.lock().unwrap().pop_front();
        let shared = match reused {
            Some(buffer) => buffer,
            None => {
                self.stats.record_construction(1);
                trace!("pool {}: constructing new buffer", self.name);
                Arc::new(ManagedBuffer::new(self.self_ref.clone()))
            }
        };
        shared.activate(capacity);
        self.stats.record_allocation();
        PooledBuffer::new(shared)
    }

    /// Accept an instance back after its last release
    pub(crate) fn put(&self, buffer: Arc<ManagedBuffer>) {
        self.stats.record_return();
        self.free.lock().unwrap().push_back(buffer);
        trace!("pool {}: buffer returned", self.name);
    }

    /// Pool name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of idle instances currently in the free list
    pub fn idle_count(&self) -> usize {
        self.free.lock().unwrap().len()
    }

    /// Snapshot of the usage statistics
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }
}
