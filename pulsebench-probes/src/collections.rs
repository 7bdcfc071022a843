//! Container and string probes: std collection operations under small,
//! fixed workloads.

use std::collections::{BTreeMap, BinaryHeap, HashMap};
use std::hint::black_box;

use pulsebench_core::Stopwatch;

/// Sort 1000 pre-sorted integers into descending order.
pub fn vector_sort() -> impl FnMut() -> f64 {
    || {
        let mut v: Vec<i32> = (0..1000).collect();
        let sw = Stopwatch::start();
        v.sort_unstable_by(|a, b| b.cmp(a));
        black_box(&v);
        sw.elapsed_micros()
    }
}

/// 1000 substring searches in a short haystack.
pub fn string_search() -> impl FnMut() -> f64 {
    let haystack = String::from("the quick brown fox");
    move || {
        let sw = Stopwatch::start();
        for _ in 0..1000 {
            black_box(black_box(haystack.as_str()).find("fox"));
        }
        sw.elapsed_micros()
    }
}

/// 1000 pushes into a fresh vector (growth reallocations included).
pub fn vec_pushback() -> impl FnMut() -> f64 {
    || {
        let mut v = Vec::new();
        let sw = Stopwatch::start();
        for i in 0..1000 {
            v.push(i);
        }
        black_box(&v);
        sw.elapsed_micros()
    }
}

/// 100 single-byte string appends.
pub fn string_concat() -> impl FnMut() -> f64 {
    || {
        let mut s = String::new();
        let sw = Stopwatch::start();
        for _ in 0..100 {
            s.push('a');
        }
        black_box(&s);
        sw.elapsed_micros()
    }
}

/// 100 ordered-map insertions.
pub fn map_insertion() -> impl FnMut() -> f64 {
    || {
        let mut m = BTreeMap::new();
        let sw = Stopwatch::start();
        for i in 0..100 {
            m.insert(i, i);
        }
        black_box(&m);
        sw.elapsed_micros()
    }
}

/// 100 hash-map insertions with keys spaced to collide in small tables.
pub fn hash_collision() -> impl FnMut() -> f64 {
    || {
        let mut m = HashMap::new();
        let sw = Stopwatch::start();
        for i in 0..100 {
            m.insert(i * 1024, i);
        }
        black_box(&m);
        sw.elapsed_micros()
    }
}

/// 100 binary searches over a sorted 1000-element vector.
pub fn binary_search() -> impl FnMut() -> f64 {
    let v: Vec<i32> = (0..1000).collect();
    move || {
        let sw = Stopwatch::start();
        for i in 0..100 {
            black_box(v.binary_search(&i).is_ok());
        }
        sw.elapsed_micros()
    }
}

/// Byte-rotate transform over a 100-character buffer (encode-style pass).
pub fn byte_rotate() -> impl FnMut() -> f64 {
    || {
        let mut buf = vec![b'A'; 100];
        let sw = Stopwatch::start();
        for c in buf.iter_mut() {
            *c = (*c + 1) % 128;
        }
        black_box(&buf);
        sw.elapsed_micros()
    }
}

/// 100 pushes into a binary heap.
pub fn heap_priority() -> impl FnMut() -> f64 {
    || {
        let mut heap = BinaryHeap::new();
        let sw = Stopwatch::start();
        for i in 0..100 {
            heap.push(i);
        }
        black_box(&heap);
        sw.elapsed_micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probes_return_non_negative_durations() {
        for probe in [
            &mut vector_sort() as &mut dyn FnMut() -> f64,
            &mut string_search(),
            &mut vec_pushback(),
            &mut heap_priority(),
        ] {
            assert!(probe() >= 0.0);
        }
    }
}
