//! Basic usage example of the wirebuf scratch-buffer library

use wirebuf::{BufferPool, PoolConfig, Result, WireBuf};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Wirebuf Scratch Buffer Example");
    println!("==============================");

    // Create a buffer pool
    let pool_config = PoolConfig::new("example_pool")
        .with_default_capacity(4096)
        .with_initial_count(8)
        .with_pre_allocate(true);

    println!("\nCreating buffer pool: {}", pool_config.name);
    let pool = BufferPool::new(pool_config)?;

    println!("Buffer pool created successfully!");
    println!("  Idle buffers: {}", pool.idle_count());

    // Encode a small frame
    println!("\nEncoding a frame...");
    let mut buf = pool.alloc(64);
    buf.set_tag(0x01); // caller-defined message kind
    buf.write_u16_be(0xCAFE);
    buf.write_u32_be(42);
    buf.write_f64(3.5);
    println!("  Wrote {} bytes (capacity {})", buf.size(), buf.capacity());
    buf.dump();

    // Hand the frame to a second owner without copying
    let second_owner = buf.clone();
    println!("  Reference count after clone: {}", buf.ref_count());

    // Speculative decode with rollback
    println!("\nDecoding...");
    buf.push_state();
    let magic = buf.read_u16_be();
    if magic != 0xCAFE {
        buf.pop_state(true); // not ours, undo
    } else {
        buf.pop_state(false); // commit
        println!("  magic  = {:#06X}", magic);
        println!("  value  = {}", buf.read_u32_be());
        println!("  factor = {}", buf.read_f64());
    }

    // Both owners release; the last release recycles the buffer
    buf.release();
    second_owner.release();

    let stats = pool.stats();
    println!("\nPool statistics: {}", stats.summary());
    println!("  Idle buffers: {}", pool.idle_count());

    Ok(())
}
