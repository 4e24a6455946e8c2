//! Reference-counted pooled buffer

use std::{
    cell::UnsafeCell,
    fmt,
    sync::{
        atomic::{AtomicI32, Ordering},
        Arc, Weak,
    },
};

use crate::buffer::{ByteBuffer, WireBuf};

use super::pool::BufferPool;

/// Shared state behind every pooled buffer: the wrapped buffer core,
/// the owner count and a back-reference to the pool that recycles it.
pub(crate) struct ManagedBuffer {
    /// Wrapped buffer core; single-owner discipline applies to access
    inner: UnsafeCell<ByteBuffer>,
    /// Count of active owners. Zero means the instance sits in the pool.
    ref_count: AtomicI32,
    /// Owning pool; dead once the pool itself has been dropped
    pool: Weak<BufferPool>,
}

// SAFETY: the reference count is atomic, and the inner buffer is only
// reached through `PooledBuffer` under the single-owner discipline
// documented on `WireBuf`.
unsafe impl Send for ManagedBuffer {}
unsafe impl Sync for ManagedBuffer {}

impl ManagedBuffer {
    /// Construct an instance with empty storage, owned by nobody yet
    pub(crate) fn new(pool: Weak<BufferPool>) -> Self {
        Self {
            inner: UnsafeCell::new(ByteBuffer::new()),
            ref_count: AtomicI32::new(0),
            pool,
        }
    }

    /// Prepare the instance for a fresh allocation: one owner, storage
    /// grown to at least `capacity` (never shrunk), cursors at zero
    pub(crate) fn activate(&self, capacity: usize) {
        self.ref_count.store(1, Ordering::Relaxed);
        // SAFETY: the instance was just taken from the free list (or
        // newly constructed), so no other owner exists.
        let buf = unsafe { &mut *self.inner.get() };
        buf.ensure_capacity(capacity);
        buf.clear();
    }

    /// Pre-size the storage of an idle instance
    pub(crate) fn reserve(&self, capacity: usize) {
        // SAFETY: only called on instances not yet handed to any owner.
        let buf = unsafe { &mut *self.inner.get() };
        buf.ensure_capacity(capacity);
    }

    pub(crate) fn retain(&self) {
        self.ref_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Drop one ownership claim. On the transition to exactly zero the
    /// cursors are reset and the instance goes back to its pool.
    pub(crate) fn release(this: &Arc<Self>) {
        let prev = this.ref_count.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "release of a buffer that is not retained");
        if prev == 1 {
            // SAFETY: the last owner is relinquishing; nobody else may
            // touch the buffer until the pool hands it out again.
            unsafe { (*this.inner.get()).clear() };
            if let Some(pool) = this.pool.upgrade() {
                pool.put(Arc::clone(this));
            }
        }
    }

    pub(crate) fn ref_count(&self) -> i32 {
        self.ref_count.load(Ordering::Acquire)
    }
}

impl fmt::Debug for ManagedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedBuffer")
            .field("ref_count", &self.ref_count())
            .finish()
    }
}

/// Handle to a pooled, reference-counted buffer.
///
/// Handed out by [`BufferPool::alloc`](super::BufferPool::alloc) with a
/// reference count of one. Cloning the handle retains; every owner,
/// the original and each clone alike, calls [`release`](WireBuf::release)
/// exactly once, and the last release clears the buffer and returns it
/// to the pool. A handle must not be used after its own release.
///
/// `retain`/`release` are the only operations safe to call on the same
/// underlying instance from multiple threads; everything else follows
/// the single-owner discipline of [`WireBuf`].
pub struct PooledBuffer {
    shared: Arc<ManagedBuffer>,
}

impl PooledBuffer {
    pub(crate) fn new(shared: Arc<ManagedBuffer>) -> Self {
        Self { shared }
    }

    /// Current owner count, mainly useful in tests and diagnostics
    pub fn ref_count(&self) -> i32 {
        self.shared.ref_count()
    }

    #[inline]
    fn buffer(&self) -> &ByteBuffer {
        // SAFETY: single-owner discipline per the `WireBuf` contract;
        // no owner mutates the buffer while this borrow is alive.
        unsafe { &*self.shared.inner.get() }
    }

    #[inline]
    fn buffer_mut(&mut self) -> &mut ByteBuffer {
        // SAFETY: single-owner discipline per the `WireBuf` contract;
        // the exclusive handle borrow stands in for exclusive access
        // to the shared instance.
        unsafe { &mut *self.shared.inner.get() }
    }
}

/// Cloning registers an additional owner, like [`WireBuf::retain`],
/// and yields an independent handle for it to release.
impl Clone for PooledBuffer {
    fn clone(&self) -> Self {
        self.shared.retain();
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("ref_count", &self.ref_count())
            .finish()
    }
}

impl WireBuf for PooledBuffer {
    fn retain(&self) {
        self.shared.retain();
    }

    fn release(&self) {
        ManagedBuffer::release(&self.shared);
    }

    fn clear(&mut self) {
        self.buffer_mut().clear();
    }

    fn add_size(&mut self, n: usize) -> usize {
        self.buffer_mut().add_size(n)
    }

    fn size(&self) -> usize {
        self.buffer().size()
    }

    fn index(&self) -> usize {
        self.buffer().index()
    }

    fn capacity(&self) -> usize {
        self.buffer().capacity()
    }

    fn readable(&self) -> usize {
        self.buffer().readable()
    }

    fn tag(&self) -> u64 {
        self.buffer().tag()
    }

    fn set_tag(&mut self, tag: u64) -> u64 {
        self.buffer_mut().set_tag(tag)
    }

    fn bytes(&self) -> &[u8] {
        self.buffer().bytes()
    }

    fn shared_bytes(&self, start: usize, end: usize) -> &[u8] {
        self.buffer().shared_bytes(start, end)
    }

    fn shared_bytes_mut(&mut self, start: usize, end: usize) -> &mut [u8] {
        self.buffer_mut().shared_bytes_mut(start, end)
    }

    fn seek(&mut self, index: usize) {
        self.buffer_mut().seek(index);
    }

    fn push_state(&mut self) {
        self.buffer_mut().push_state();
    }

    fn pop_state(&mut self, restore: bool) {
        self.buffer_mut().pop_state(restore);
    }

    fn dump(&self) {
        self.buffer().dump();
    }

    fn read_u8(&mut self) -> u8 {
        self.buffer_mut().read_u8()
    }

    fn read_u16_be(&mut self) -> u16 {
        self.buffer_mut().read_u16_be()
    }

    fn read_u16_le(&mut self) -> u16 {
        self.buffer_mut().read_u16_le()
    }

    fn read_u32_be(&mut self) -> u32 {
        self.buffer_mut().read_u32_be()
    }

    fn read_u32_le(&mut self) -> u32 {
        self.buffer_mut().read_u32_le()
    }

    fn read_i32_be(&mut self) -> i32 {
        self.buffer_mut().read_i32_be()
    }

    fn read_i32_le(&mut self) -> i32 {
        self.buffer_mut().read_i32_le()
    }

    fn read_u64_be(&mut self) -> u64 {
        self.buffer_mut().read_u64_be()
    }

    fn read_u64_le(&mut self) -> u64 {
        self.buffer_mut().read_u64_le()
    }

    fn read_f32(&mut self) -> f32 {
        self.buffer_mut().read_f32()
    }

    fn read_f64(&mut self) -> f64 {
        self.buffer_mut().read_f64()
    }

    fn write_u8(&mut self, v: u8) {
        self.buffer_mut().write_u8(v);
    }

    fn write_u16_be(&mut self, v: u16) {
        self.buffer_mut().write_u16_be(v);
    }

    fn write_u16_le(&mut self, v: u16) {
        self.buffer_mut().write_u16_le(v);
    }

    fn write_u32_be(&mut self, v: u32) {
        self.buffer_mut().write_u32_be(v);
    }

    fn write_u32_le(&mut self, v: u32) {
        self.buffer_mut().write_u32_le(v);
    }

    fn write_i32_be(&mut self, v: i32) {
        self.buffer_mut().write_i32_be(v);
    }

    fn write_i32_le(&mut self, v: i32) {
        self.buffer_mut().write_i32_le(v);
    }

    fn write_u64_be(&mut self, v: u64) {
        self.buffer_mut().write_u64_be(v);
    }

    fn write_u64_le(&mut self, v: u64) {
        self.buffer_mut().write_u64_le(v);
    }

    fn write_f32(&mut self, v: f32) {
        self.buffer_mut().write_f32(v);
    }

    fn write_f64(&mut self, v: f64) {
        self.buffer_mut().write_f64(v);
    }

    fn write_bytes(&mut self, data: &[u8]) {
        self.buffer_mut().write_bytes(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unowned_instance_starts_at_zero() {
        let managed = ManagedBuffer::new(Weak::new());
        assert_eq!(managed.ref_count(), 0);
    }

    #[test]
    fn test_activate_sets_single_owner_and_capacity() {
        let managed = Arc::new(ManagedBuffer::new(Weak::new()));
        managed.activate(64);
        let mut buf = PooledBuffer::new(managed);
        assert_eq!(buf.ref_count(), 1);
        assert_eq!(buf.capacity(), 64);
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.index(), 0);

        buf.write_u32_be(7);
        assert_eq!(buf.size(), 4);
        buf.release();
    }

    #[test]
    fn test_clone_retains() {
        let managed = Arc::new(ManagedBuffer::new(Weak::new()));
        managed.activate(16);
        let buf = PooledBuffer::new(managed);
        let second = buf.clone();
        assert_eq!(buf.ref_count(), 2);
        second.release();
        assert_eq!(buf.ref_count(), 1);
        buf.release();
    }

    #[test]
    #[should_panic(expected = "not retained")]
    fn test_double_release_is_detected() {
        let managed = Arc::new(ManagedBuffer::new(Weak::new()));
        managed.activate(16);
        let buf = PooledBuffer::new(managed);
        buf.release();
        buf.release();
    }
}
