//! Pooled, reference-counted buffer allocation
//!
//! This module wraps the buffer core in an atomic reference count and
//! recycles instances through a concurrent object pool, so buffers can
//! be shared across owners without copying and reclaimed without
//! allocator churn.

pub mod config;
pub mod managed;
pub mod pool;
pub mod stats;

// Re-export main types
pub use config::{PoolConfig, PoolConfigBuilder};
pub use managed::PooledBuffer;
pub use pool::BufferPool;
pub use stats::{AtomicPoolStats, PoolStats};
