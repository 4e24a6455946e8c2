//! # Wirebuf - Dual-Cursor Wire Buffers
//!
//! Wirebuf is a binary scratch-buffer library for encoding and decoding
//! fixed-width wire data (protocol framing, message payloads). Buffers
//! are in-memory staging areas fed by and drained into external I/O;
//! wirebuf itself performs no I/O and validates no schemas.
//!
//! ## Features
//!
//! - **Dual cursors**: an independent write cursor (content length) and
//!   read cursor (parse position) over one growable byte region
//! - **Typed access**: fixed-width integer reads/writes in both byte
//!   orders, floats via their little-endian bit pattern
//! - **Zero-copy views**: borrow sub-ranges of storage without copying
//! - **Rollback**: a LIFO cursor-state stack for speculative,
//!   backtrackable parsing
//! - **Pooled allocation**: reference-counted buffers recycled through
//!   a concurrent, unbounded pool
//! - **Allocation-agnostic contract**: encode/decode code written once
//!   against [`WireBuf`] runs over pooled and unpooled buffers alike
//!
//! ## Example
//!
//! ```
//! use wirebuf::{BufferPool, WireBuf};
//!
//! let pool = BufferPool::with_defaults();
//!
//! let mut buf = pool.alloc(16);
//! buf.write_u32_be(0x0102_0304);
//! buf.write_f64(2.5);
//!
//! assert_eq!(buf.read_u32_be(), 0x0102_0304);
//! assert_eq!(buf.read_f64(), 2.5);
//! assert_eq!(buf.readable(), 0);
//!
//! // The last release clears the buffer and recycles it.
//! buf.release();
//! assert_eq!(pool.idle_count(), 1);
//! ```

// Core modules
pub mod buffer;
pub mod error;
pub mod pool;

// Main API re-exports
pub use buffer::{BufferState, ByteBuffer, WireBuf};
pub use error::{Result, WirebufError};
pub use pool::{AtomicPoolStats, BufferPool, PoolConfig, PoolConfigBuilder, PoolStats, PooledBuffer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod defaults {
    /// Default storage capacity for pre-allocated buffers (4KB)
    pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

    /// Default number of buffers constructed by a pre-allocating pool
    pub const DEFAULT_INITIAL_COUNT: usize = 16;
}
