//! Memory-hierarchy probes: cache and TLB latency, allocator traffic,
//! bandwidth.

use std::hint::black_box;

use pulsebench_core::Stopwatch;
use rand::seq::SliceRandom;

/// Build a random pointer-chase permutation of the given length.
fn chase_table(len: usize) -> Vec<usize> {
    let mut table: Vec<usize> = (0..len).collect();
    table.shuffle(&mut rand::thread_rng());
    table
}

/// Pointer chase inside a 1024-entry table (L1-resident): per-hop latency.
pub fn l1_latency() -> impl FnMut() -> f64 {
    let table = chase_table(1024);
    move || {
        let sw = Stopwatch::start();
        let mut c = 0usize;
        for _ in 0..5000 {
            c = table[c];
        }
        black_box(c);
        sw.elapsed_nanos() / 5000.0
    }
}

/// Page-stride touches over a 1 MiB buffer: every access lands on a new page.
pub fn tlb_miss() -> impl FnMut() -> f64 {
    let buf = vec![1u8; 1024 * 1024];
    move || {
        let sw = Stopwatch::start();
        let mut sink = 0usize;
        for i in 0..1000usize {
            sink += buf[(i * 4096) % buf.len()] as usize;
        }
        black_box(sink);
        sw.elapsed_nanos() / 1000.0
    }
}

/// Ten short-lived 1 KiB zeroed allocations.
pub fn alloc_pressure() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..10 {
            let buf = vec![0u8; 1024];
            black_box(&buf);
        }
        sw.elapsed_micros()
    }
}

/// Cost ratio of strided-random vs sequential reads over the same buffer.
/// Returns a dimensionless ratio, not a duration.
pub fn rnd_seq_ratio() -> impl FnMut() -> f64 {
    const N: usize = 10_000;
    let data = vec![1i32; N];
    move || {
        let sw = Stopwatch::start();
        for i in 0..N {
            black_box(data[i]);
        }
        let sequential = sw.elapsed_secs();

        let sw = Stopwatch::start();
        for i in 0..N {
            black_box(data[(i * 167) % N]);
        }
        let random = sw.elapsed_secs();

        random / sequential.max(1e-9)
    }
}

/// 100 copies of a 1 KiB buffer.
pub fn memcpy_speed() -> impl FnMut() -> f64 {
    let src = [7u8; 1024];
    let mut dst = [0u8; 1024];
    move || {
        let sw = Stopwatch::start();
        for _ in 0..100 {
            dst.copy_from_slice(black_box(&src));
        }
        black_box(&dst);
        sw.elapsed_micros()
    }
}

/// Pointer chase inside a 1M-entry table (beyond L2): far-cache latency.
pub fn l3_latency() -> impl FnMut() -> f64 {
    let table = chase_table(1024 * 1024);
    move || {
        let sw = Stopwatch::start();
        let mut c = 0usize;
        for _ in 0..1000 {
            c = table[c];
        }
        black_box(c);
        sw.elapsed_nanos() / 1000.0
    }
}

/// 100 small boxed allocations held live together, then dropped together.
pub fn fragmentation() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        let mut held: Vec<Box<[u8; 64]>> = Vec::with_capacity(100);
        for _ in 0..100 {
            held.push(Box::new([0u8; 64]));
        }
        black_box(&held);
        drop(held);
        sw.elapsed_micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chase_table_is_a_permutation() {
        let mut table = chase_table(256);
        table.sort_unstable();
        assert_eq!(table, (0..256).collect::<Vec<usize>>());
    }

    #[test]
    fn test_rnd_seq_ratio_is_positive() {
        let mut probe = rnd_seq_ratio();
        let r = probe();
        assert!(r.is_finite());
        assert!(r >= 0.0);
    }
}
