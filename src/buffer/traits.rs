//! Buffer capability contract

use super::byte_buffer::ByteBuffer;

/// The uniform operation set over every buffer variant.
///
/// Encode/decode layers are written once against this trait and stay
/// agnostic to the allocation strategy behind a buffer:
///
/// - [`ByteBuffer`] is unmanaged: [`retain`](Self::retain) and
///   [`release`](Self::release) are no-ops and lifetime is governed by
///   the owner's scope.
/// - [`PooledBuffer`](crate::pool::PooledBuffer) is managed: the full
///   reference-counted lifecycle, returning to its pool on the last
///   release.
///
/// # Concurrency scope
///
/// `retain` and `release` are the only operations safe to invoke from
/// multiple threads on one instance. Every other operation assumes a
/// single owner at a time; transferring a buffer to another thread
/// means the new owner retains before use and releases exactly once
/// when done. Concurrent unsynchronized access to the same instance
/// through anything but `retain`/`release` is undefined behavior.
pub trait WireBuf {
    /// Register an additional owner. No-op for unmanaged buffers.
    fn retain(&self);

    /// Drop one ownership claim. No-op for unmanaged buffers; a pooled
    /// buffer whose count reaches zero is cleared and recycled.
    fn release(&self);

    /// Reset both cursors to zero without touching storage bytes
    fn clear(&mut self);

    /// Advance the write cursor by `n` without writing; returns the new
    /// write cursor
    fn add_size(&mut self, n: usize) -> usize;

    /// Current write cursor (content length)
    fn size(&self) -> usize;

    /// Current read cursor
    fn index(&self) -> usize;

    /// Length of the underlying storage
    fn capacity(&self) -> usize;

    /// Bytes available to read
    fn readable(&self) -> usize;

    /// Current tag value
    fn tag(&self) -> u64;

    /// Replace the tag, returning the previous value
    fn set_tag(&mut self, tag: u64) -> u64;

    /// Zero-copy view of the unread content
    fn bytes(&self) -> &[u8];

    /// Zero-copy view of an arbitrary storage sub-range; cursors are
    /// not moved and the caller owns the bounds
    fn shared_bytes(&self, start: usize, end: usize) -> &[u8];

    /// Mutable view of an arbitrary storage sub-range, for filling a
    /// region claimed via [`add_size`](Self::add_size)
    fn shared_bytes_mut(&mut self, start: usize, end: usize) -> &mut [u8];

    /// Move the read cursor; out-of-range targets are silently ignored
    fn seek(&mut self, index: usize);

    /// Snapshot the cursor pair for a later rollback or commit
    fn push_state(&mut self);

    /// Drop the newest snapshot, restoring it when `restore` is true.
    /// Panics without a matching [`push_state`](Self::push_state).
    fn pop_state(&mut self, restore: bool);

    /// Log cursor positions and the unread window at debug level
    fn dump(&self);

    /// Read one byte
    fn read_u8(&mut self) -> u8;
    /// Read a big-endian `u16`
    fn read_u16_be(&mut self) -> u16;
    /// Read a little-endian `u16`
    fn read_u16_le(&mut self) -> u16;
    /// Read a big-endian `u32`
    fn read_u32_be(&mut self) -> u32;
    /// Read a little-endian `u32`
    fn read_u32_le(&mut self) -> u32;
    /// Read a big-endian `i32`
    fn read_i32_be(&mut self) -> i32;
    /// Read a little-endian `i32`
    fn read_i32_le(&mut self) -> i32;
    /// Read a big-endian `u64`
    fn read_u64_be(&mut self) -> u64;
    /// Read a little-endian `u64`
    fn read_u64_le(&mut self) -> u64;
    /// Read an `f32` from its little-endian bit pattern
    fn read_f32(&mut self) -> f32;
    /// Read an `f64` from its little-endian bit pattern
    fn read_f64(&mut self) -> f64;

    /// Write one byte
    fn write_u8(&mut self, v: u8);
    /// Write a big-endian `u16`
    fn write_u16_be(&mut self, v: u16);
    /// Write a little-endian `u16`
    fn write_u16_le(&mut self, v: u16);
    /// Write a big-endian `u32`
    fn write_u32_be(&mut self, v: u32);
    /// Write a little-endian `u32`
    fn write_u32_le(&mut self, v: u32);
    /// Write a big-endian `i32`
    fn write_i32_be(&mut self, v: i32);
    /// Write a little-endian `i32`
    fn write_i32_le(&mut self, v: i32);
    /// Write a big-endian `u64`
    fn write_u64_be(&mut self, v: u64);
    /// Write a little-endian `u64`
    fn write_u64_le(&mut self, v: u64);
    /// Write an `f32` as its little-endian bit pattern
    fn write_f32(&mut self, v: f32);
    /// Write an `f64` as its little-endian bit pattern
    fn write_f64(&mut self, v: f64);
    /// Bulk-copy `data` at the write cursor
    fn write_bytes(&mut self, data: &[u8]);
}

impl WireBuf for ByteBuffer {
    fn retain(&self) {}

    fn release(&self) {}

    fn clear(&mut self) {
        ByteBuffer::clear(self);
    }

    fn add_size(&mut self, n: usize) -> usize {
        ByteBuffer::add_size(self, n)
    }

    fn size(&self) -> usize {
        ByteBuffer::size(self)
    }

    fn index(&self) -> usize {
        ByteBuffer::index(self)
    }

    fn capacity(&self) -> usize {
        ByteBuffer::capacity(self)
    }

    fn readable(&self) -> usize {
        ByteBuffer::readable(self)
    }

    fn tag(&self) -> u64 {
        ByteBuffer::tag(self)
    }

    fn set_tag(&mut self, tag: u64) -> u64 {
        ByteBuffer::set_tag(self, tag)
    }

    fn bytes(&self) -> &[u8] {
        ByteBuffer::bytes(self)
    }

    fn shared_bytes(&self, start: usize, end: usize) -> &[u8] {
        ByteBuffer::shared_bytes(self, start, end)
    }

    fn shared_bytes_mut(&mut self, start: usize, end: usize) -> &mut [u8] {
        ByteBuffer::shared_bytes_mut(self, start, end)
    }

    fn seek(&mut self, index: usize) {
        ByteBuffer::seek(self, index);
    }

    fn push_state(&mut self) {
        ByteBuffer::push_state(self);
    }

    fn pop_state(&mut self, restore: bool) {
        ByteBuffer::pop_state(self, restore);
    }

    fn dump(&self) {
        ByteBuffer::dump(self);
    }

    fn read_u8(&mut self) -> u8 {
        ByteBuffer::read_u8(self)
    }

    fn read_u16_be(&mut self) -> u16 {
        ByteBuffer::read_u16_be(self)
    }

    fn read_u16_le(&mut self) -> u16 {
        ByteBuffer::read_u16_le(self)
    }

    fn read_u32_be(&mut self) -> u32 {
        ByteBuffer::read_u32_be(self)
    }

    fn read_u32_le(&mut self) -> u32 {
        ByteBuffer::read_u32_le(self)
    }

    fn read_i32_be(&mut self) -> i32 {
        ByteBuffer::read_i32_be(self)
    }

    fn read_i32_le(&mut self) -> i32 {
        ByteBuffer::read_i32_le(self)
    }

    fn read_u64_be(&mut self) -> u64 {
        ByteBuffer::read_u64_be(self)
    }

    fn read_u64_le(&mut self) -> u64 {
        ByteBuffer::read_u64_le(self)
    }

    fn read_f32(&mut self) -> f32 {
        ByteBuffer::read_f32(self)
    }

    fn read_f64(&mut self) -> f64 {
        ByteBuffer::read_f64(self)
    }

    fn write_u8(&mut self, v: u8) {
        ByteBuffer::write_u8(self, v);
    }

    fn write_u16_be(&mut self, v: u16) {
        ByteBuffer::write_u16_be(self, v);
    }

    fn write_u16_le(&mut self, v: u16) {
        ByteBuffer::write_u16_le(self, v);
    }

    fn write_u32_be(&mut self, v: u32) {
        ByteBuffer::write_u32_be(self, v);
    }

    fn write_u32_le(&mut self, v: u32) {
        ByteBuffer::write_u32_le(self, v);
    }

    fn write_i32_be(&mut self, v: i32) {
        ByteBuffer::write_i32_be(self, v);
    }

    fn write_i32_le(&mut self, v: i32) {
        ByteBuffer::write_i32_le(self, v);
    }

    fn write_u64_be(&mut self, v: u64) {
        ByteBuffer::write_u64_be(self, v);
    }

    fn write_u64_le(&mut self, v: u64) {
        ByteBuffer::write_u64_le(self, v);
    }

    fn write_f32(&mut self, v: f32) {
        ByteBuffer::write_f32(self, v);
    }

    fn write_f64(&mut self, v: f64) {
        ByteBuffer::write_f64(self, v);
    }

    fn write_bytes(&mut self, data: &[u8]) {
        ByteBuffer::write_bytes(self, data);
    }
}
