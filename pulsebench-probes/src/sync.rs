//! Concurrency-primitive probes: thread lifecycle, locks, atomics, fences,
//! scheduler behavior.

use std::hint::black_box;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering, fence};
use std::thread;
use std::time::Duration;

use pulsebench_core::Stopwatch;

/// Spawn-and-join of an empty thread.
pub fn thread_spawn() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        thread::spawn(|| {}).join().expect("spawned thread panicked");
        sw.elapsed_micros()
    }
}

/// 1000 uncontended lock/unlock cycles.
pub fn mutex_latency() -> impl FnMut() -> f64 {
    let m = Mutex::new(());
    move || {
        let sw = Stopwatch::start();
        for _ in 0..1000 {
            drop(m.lock().expect("mutex poisoned"));
        }
        sw.elapsed_micros()
    }
}

/// 10,000 relaxed fetch_add operations on one atomic.
pub fn atomic_increment() -> impl FnMut() -> f64 {
    || {
        let a = AtomicU64::new(0);
        let sw = Stopwatch::start();
        for _ in 0..10_000 {
            a.fetch_add(1, Ordering::SeqCst);
        }
        black_box(a.load(Ordering::SeqCst));
        sw.elapsed_micros()
    }
}

/// A single voluntary yield back to the scheduler.
pub fn context_switch() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        thread::yield_now();
        sw.elapsed_micros()
    }
}

/// Two threads racing compare-exchange increments on a shared counter.
pub fn atomic_cas() -> impl FnMut() -> f64 {
    || {
        let counter = AtomicU64::new(0);
        let contend = |counter: &AtomicU64| {
            for _ in 0..1000 {
                let mut e = counter.load(Ordering::Relaxed);
                while let Err(actual) =
                    counter.compare_exchange_weak(e, e + 1, Ordering::SeqCst, Ordering::Relaxed)
                {
                    e = actual;
                }
            }
        };
        let sw = Stopwatch::start();
        thread::scope(|s| {
            s.spawn(|| contend(&counter));
            s.spawn(|| contend(&counter));
        });
        sw.elapsed_micros()
    }
}

#[repr(align(64))]
struct PaddedCounter(AtomicU64);

/// Two threads incrementing adjacent counters padded to separate cache
/// lines; measures the cost floor the padding leaves behind.
pub fn false_sharing() -> impl FnMut() -> f64 {
    || {
        let slots = [PaddedCounter(AtomicU64::new(0)), PaddedCounter(AtomicU64::new(0))];
        let sw = Stopwatch::start();
        thread::scope(|s| {
            for slot in &slots {
                s.spawn(move || {
                    for _ in 0..1000 {
                        slot.0.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });
        sw.elapsed_micros()
    }
}

/// 1000 sequentially-consistent memory fences.
pub fn mem_barrier() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..1000 {
            fence(Ordering::SeqCst);
        }
        sw.elapsed_nanos() / 1000.0
    }
}

/// Per-call overshoot of 100 minimal sleeps: timer slack plus scheduler
/// wake-up latency.
pub fn sched_jitter() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..100 {
            thread::sleep(Duration::from_nanos(1));
        }
        sw.elapsed_micros() / 100.0
    }
}
