//! Dual-cursor byte buffers
//!
//! This module provides the core scratch-buffer abstraction: a growable
//! byte region with independent read and write cursors, zero-copy views
//! and a rollback stack for speculative decoding.

pub mod byte_buffer;
pub mod state;
pub mod traits;

// Re-export main types
pub use byte_buffer::ByteBuffer;
pub use state::BufferState;
pub use traits::WireBuf;
