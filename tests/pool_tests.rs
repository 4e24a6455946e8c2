//! Pool lifecycle and concurrency tests
//! Tests focused on reference-count transitions, recycling correctness
//! and balanced concurrent alloc/retain/release sequences.

use std::{
    sync::{Arc, Barrier},
    thread,
};

use wirebuf::{BufferPool, PoolConfig, WireBuf};

#[test]
fn alloc_retain_release_lifecycle() {
    let pool = BufferPool::with_defaults();

    let buf = pool.alloc(4);
    assert_eq!(buf.ref_count(), 1);

    let second_owner = buf.clone();
    assert_eq!(buf.ref_count(), 2);

    buf.release();
    assert_eq!(second_owner.ref_count(), 1);
    assert_eq!(pool.idle_count(), 0);

    second_owner.release();
    assert_eq!(pool.idle_count(), 1);

    let stats = pool.stats();
    assert_eq!(stats.total_allocations, 1);
    assert_eq!(stats.total_returns, 1);
    assert_eq!(stats.currently_in_use, 0);
}

#[test]
fn write_seek_read_scenario() {
    let pool = BufferPool::with_defaults();

    let mut buf = pool.alloc(4);
    buf.write_u32_be(0x0102_0304);
    buf.seek(0);
    assert_eq!(buf.read_u32_be(), 0x0102_0304);
    assert_eq!(buf.capacity(), 4);
    assert_eq!(buf.readable(), 0);
    buf.release();
}

#[test]
fn rollback_scenario_on_pooled_buffer() {
    let pool = BufferPool::with_defaults();

    let mut buf = pool.alloc(8);
    buf.push_state();
    buf.write_u8(7);
    buf.pop_state(true);
    assert_eq!(buf.size(), 0);
    buf.release();
}

#[test]
fn dropped_handle_without_release_leaks_from_inventory() {
    let pool = BufferPool::with_defaults();

    let buf = pool.alloc(16);
    drop(buf); // no release: the pool never sees this instance again

    assert_eq!(pool.idle_count(), 0);
    assert_eq!(pool.stats().currently_in_use, 1);
}

#[test]
fn release_after_pool_is_gone_is_harmless() {
    let pool = BufferPool::with_defaults();
    let buf = pool.alloc(16);
    drop(pool);

    // The weak back-reference is dead; the buffer is simply dropped.
    buf.release();
}

#[test]
fn concurrent_balanced_lifecycles_lose_nothing() {
    let pool = BufferPool::with_defaults();

    let thread_count = 4;
    let iterations = 200;
    let barrier = Arc::new(Barrier::new(thread_count));

    let mut handles = Vec::new();
    for thread_id in 0..thread_count {
        let pool = Arc::clone(&pool);
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait(); // synchronized start for maximum contention

            for i in 0..iterations {
                let mut buf = pool.alloc(64);
                let marker = (thread_id as u64) << 32 | i as u64;
                buf.write_u64_be(marker);
                buf.write_u64_le(marker);

                // Hand a clone to a "second owner" and release both
                let second_owner = buf.clone();
                assert!(buf.ref_count() >= 2);

                assert_eq!(buf.read_u64_be(), marker);
                assert_eq!(buf.read_u64_le(), marker);

                buf.release();
                second_owner.release();

                if i % 50 == 0 {
                    thread::yield_now();
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = pool.stats();
    let expected = (thread_count * iterations) as u64;
    assert_eq!(stats.total_allocations, expected);
    assert_eq!(stats.total_returns, expected);
    assert_eq!(stats.currently_in_use, 0);

    // Every constructed instance is back exactly once: a double return
    // would leave more idle instances than were ever constructed, a
    // lost one would leave fewer.
    assert_eq!(pool.idle_count(), stats.total_constructed);
}

#[test]
fn concurrently_held_buffers_are_distinct_instances() {
    let pool = BufferPool::with_defaults();

    let thread_count = 8;
    let barrier = Arc::new(Barrier::new(thread_count));

    let mut handles = Vec::new();
    for thread_id in 0..thread_count {
        let pool = Arc::clone(&pool);
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();

            // Hold the buffer while every other thread holds one too
            let mut buf = pool.alloc(32);
            let marker = 0xA5A5_0000_0000_0000u64 | thread_id as u64;
            buf.write_u64_be(marker);

            barrier.wait(); // all threads have written

            assert_eq!(buf.read_u64_be(), marker);
            buf.release();
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(pool.stats().currently_in_use, 0);
    assert_eq!(pool.idle_count(), pool.stats().total_constructed);
}

#[test]
fn pre_allocated_pool_reuses_before_constructing() {
    let pool = BufferPool::new(
        PoolConfig::new("preallocated")
            .with_default_capacity(128)
            .with_initial_count(2)
            .with_pre_allocate(true),
    )
    .unwrap();

    let a = pool.alloc(16);
    let b = pool.alloc(16);
    assert_eq!(pool.stats().total_constructed, 2);

    // Third allocation outgrows the pre-allocated set
    let c = pool.alloc(16);
    assert_eq!(pool.stats().total_constructed, 3);

    a.release();
    b.release();
    c.release();
    assert_eq!(pool.idle_count(), 3);
}
