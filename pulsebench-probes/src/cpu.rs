//! Compute-bound probes: arithmetic loops, branch behavior, dispatch cost.

use std::hint::black_box;

use pulsebench_core::Stopwatch;
use rand::Rng;

/// 32x32 Mandelbrot escape-iteration grid, up to 64 iterations per point.
pub fn mandelbrot() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for y in 0..32 {
            for x in 0..32 {
                let cr = (x as f64 - 16.0) * 4.0 / 32.0;
                let ci = (y as f64 - 16.0) * 4.0 / 32.0;
                let (mut zr, mut zi) = (0.0f64, 0.0f64);
                let mut i = 0;
                while zr * zr + zi * zi < 4.0 && i < 64 {
                    let t = zr * zr - zi * zi + cr;
                    zi = 2.0 * zr * zi + ci;
                    zr = t;
                    i += 1;
                }
                black_box(i);
            }
        }
        sw.elapsed_millis()
    }
}

/// Rotate-and-xor mixing loop standing in for a hash round function.
pub fn sha256_sim() -> impl FnMut() -> f64 {
    || {
        let mut h: u32 = 0x6a09_e667;
        let sw = Stopwatch::start();
        for i in 0..100_000u32 {
            h = h.rotate_left(5) ^ i ^ 0xbb67_ae85;
        }
        black_box(h);
        sw.elapsed_micros()
    }
}

/// Data-dependent branching over a random bit vector: the predictor cannot
/// learn the pattern.
pub fn branch_penalty() -> impl FnMut() -> f64 {
    let mut rng = rand::thread_rng();
    let bits: Vec<bool> = (0..1000).map(|_| rng.gen()).collect();
    move || {
        let sw = Stopwatch::start();
        let mut v: i64 = 0;
        for &b in &bits {
            if b {
                v += 1;
            } else {
                v -= 1;
            }
        }
        black_box(v);
        sw.elapsed_micros()
    }
}

fn fib(n: u64) -> u64 {
    if n <= 1 { n } else { fib(n - 1) + fib(n - 2) }
}

/// Naive recursive Fibonacci of 20: call overhead and stack traffic.
pub fn recursion_fib() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        black_box(fib(black_box(20)));
        sw.elapsed_millis()
    }
}

/// Serial dependent floating-point divides.
pub fn fp_division() -> impl FnMut() -> f64 {
    || {
        let mut a = 1.1f64;
        let b = 1.2f64;
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            a = black_box(a / black_box(b));
        }
        black_box(a);
        sw.elapsed_micros()
    }
}

/// log/exp round trips.
pub fn transcendental() -> impl FnMut() -> f64 {
    || {
        let mut x = 0.5f64;
        let sw = Stopwatch::start();
        for _ in 0..1000 {
            x = black_box(x.exp().ln());
        }
        black_box(x);
        sw.elapsed_micros()
    }
}

/// Sieve of Eratosthenes to 1000.
pub fn prime_sieve() -> impl FnMut() -> f64 {
    || {
        const N: usize = 1000;
        let mut prime = vec![true; N + 1];
        let sw = Stopwatch::start();
        let mut i = 2;
        while i * i <= N {
            if prime[i] {
                let mut j = i * i;
                while j <= N {
                    prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        black_box(&prime);
        sw.elapsed_micros()
    }
}

/// Serial dependent square roots.
pub fn math_sqrt() -> impl FnMut() -> f64 {
    || {
        let mut x = 100.0f64;
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            x = black_box(x.sqrt());
        }
        black_box(x);
        sw.elapsed_micros()
    }
}

trait Dispatched {
    fn apply(&self, x: u64) -> u64;
}

struct Indirect;

impl Dispatched for Indirect {
    #[inline(never)]
    fn apply(&self, x: u64) -> u64 {
        black_box(x)
    }
}

/// Per-call cost of dynamic (vtable) dispatch.
pub fn virtual_calls() -> impl FnMut() -> f64 {
    let obj: Box<dyn Dispatched> = Box::new(Indirect);
    move || {
        let sw = Stopwatch::start();
        let mut acc = 0u64;
        for i in 0..1000u64 {
            acc = obj.apply(acc ^ i);
        }
        black_box(acc);
        sw.elapsed_nanos() / 1000.0
    }
}

/// Long run of trivially serial increments; variance here is scheduler
/// steal/jitter, not the arithmetic.
pub fn steal_jitter() -> impl FnMut() -> f64 {
    || {
        let mut x = 0u64;
        let sw = Stopwatch::start();
        for _ in 0..100_000 {
            x += 1;
            black_box(x);
        }
        sw.elapsed_micros()
    }
}

/// Rotate/popcount dependency chain.
pub fn bit_manipulation() -> impl FnMut() -> f64 {
    || {
        let mut x: u64 = 1;
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            x = x.rotate_left(1) ^ u64::from(x.count_ones());
        }
        black_box(x);
        sw.elapsed_micros()
    }
}

/// Fused multiply-add chain.
pub fn fma_throughput() -> impl FnMut() -> f64 {
    || {
        let (mut a, b, c) = (1.0f64, 2.0f64, 3.0f64);
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            a = black_box(a.mul_add(b, c));
        }
        black_box(a);
        sw.elapsed_micros()
    }
}

/// Classic xorshift32 generator loop.
pub fn xorshift_prng() -> impl FnMut() -> f64 {
    || {
        let mut x: u32 = 1;
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
        }
        black_box(x);
        sw.elapsed_micros()
    }
}

/// Serial add/xor chain with a two-instruction dependency per step.
pub fn ilp_dependency() -> impl FnMut() -> f64 {
    || {
        let (mut a, b) = (1i32, 2i32);
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            a = black_box(a.wrapping_add(b) ^ b);
        }
        black_box(a);
        sw.elapsed_micros()
    }
}

/// Serial dependent integer divides.
pub fn integer_division() -> impl FnMut() -> f64 {
    || {
        let mut a = 100i32;
        let b = 3i32;
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            a = black_box(black_box(a) / b + 100);
        }
        black_box(a);
        sw.elapsed_micros()
    }
}
