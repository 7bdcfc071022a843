//! System-facing probes: syscalls, process lifecycle, file and page-mapping
//! costs.
//!
//! Probes with no portable implementation carry `cfg(unix)` bodies and fall
//! back to a fixed placeholder cost elsewhere, so the catalog shape is the
//! same on every platform.

use std::fs::{File, OpenOptions};
use std::hint::black_box;
use std::io::{Read, Write};

use pulsebench_core::Stopwatch;
use rand::RngCore;
use rand::rngs::OsRng;
use tempfile::NamedTempFile;

/// Ten draws from the OS entropy source.
pub fn entropy_speed() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..10 {
            black_box(OsRng.next_u32());
        }
        sw.elapsed_micros()
    }
}

/// One directory enumeration of the current working directory.
pub fn fs_dir_scan() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        let count = std::fs::read_dir(".").map(|it| it.count()).unwrap_or(0);
        black_box(count);
        sw.elapsed_micros()
    }
}

/// Per-call cost of the cheapest useful syscall, getpid, averaged over 100.
#[cfg(unix)]
pub fn syscall_getpid() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..100 {
            // SAFETY: getpid has no preconditions and cannot fail.
            black_box(unsafe { libc::getpid() });
        }
        sw.elapsed_nanos() / 100.0
    }
}

/// Fallback: `std::process::id` goes through the platform equivalent.
#[cfg(not(unix))]
pub fn syscall_getpid() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        for _ in 0..100 {
            black_box(std::process::id());
        }
        sw.elapsed_nanos() / 100.0
    }
}

/// One small buffered write plus flush to a private scratch file.
pub fn disk_write_seq() -> impl FnMut() -> f64 {
    let scratch = NamedTempFile::new().expect("cannot create scratch file");
    move || {
        let mut f = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(scratch.path())
            .expect("cannot reopen scratch file");
        let sw = Stopwatch::start();
        f.write_all(b"x").expect("scratch write failed");
        f.flush().expect("scratch flush failed");
        sw.elapsed_micros()
    }
}

/// One small read back from a pre-populated scratch file.
pub fn disk_read_rand() -> impl FnMut() -> f64 {
    let mut scratch = NamedTempFile::new().expect("cannot create scratch file");
    scratch
        .write_all(b"x")
        .expect("cannot populate scratch file");
    scratch.flush().expect("scratch flush failed");
    move || {
        let mut f = File::open(scratch.path()).expect("cannot reopen scratch file");
        let mut byte = [0u8; 1];
        let sw = Stopwatch::start();
        f.read_exact(&mut byte).expect("scratch read failed");
        black_box(byte[0]);
        sw.elapsed_micros()
    }
}

/// fork + immediate child exit + waitpid.
#[cfg(unix)]
pub fn process_fork() -> impl FnMut() -> f64 {
    || {
        let sw = Stopwatch::start();
        // SAFETY: the child calls _exit immediately without touching the
        // (possibly inconsistent) post-fork heap or runtime; the parent only
        // waits for it.
        unsafe {
            let pid = libc::fork();
            if pid == 0 {
                libc::_exit(0);
            }
            libc::waitpid(pid, std::ptr::null_mut(), 0);
        }
        sw.elapsed_micros()
    }
}

/// Placeholder cost where fork does not exist.
#[cfg(not(unix))]
pub fn process_fork() -> impl FnMut() -> f64 {
    || 100.0
}

/// One-byte ping-pong across a socketpair: two kernel crossings.
#[cfg(unix)]
pub fn socketpair_rtt() -> impl FnMut() -> f64 {
    use std::os::unix::net::UnixStream;

    let (mut a, mut b) = UnixStream::pair().expect("cannot create socketpair");
    move || {
        let mut byte = [0u8; 1];
        let sw = Stopwatch::start();
        a.write_all(b"p").expect("socketpair write failed");
        b.read_exact(&mut byte).expect("socketpair read failed");
        b.write_all(&byte).expect("socketpair write failed");
        a.read_exact(&mut byte).expect("socketpair read failed");
        black_box(byte[0]);
        sw.elapsed_micros()
    }
}

/// Placeholder cost where socketpair does not exist.
#[cfg(not(unix))]
pub fn socketpair_rtt() -> impl FnMut() -> f64 {
    || 0.5
}

/// First-touch latency of a freshly mapped anonymous private page.
#[cfg(unix)]
pub fn page_fault() -> impl FnMut() -> f64 {
    || mmap_first_touch(libc::MAP_PRIVATE)
}

/// Placeholder where mmap does not exist.
#[cfg(not(unix))]
pub fn page_fault() -> impl FnMut() -> f64 {
    || 500.0
}

/// First-touch latency of a freshly mapped anonymous shared page.
#[cfg(unix)]
pub fn mmap_shared_lat() -> impl FnMut() -> f64 {
    || mmap_first_touch(libc::MAP_SHARED)
}

/// Placeholder where mmap does not exist.
#[cfg(not(unix))]
pub fn mmap_shared_lat() -> impl FnMut() -> f64 {
    || 0.2
}

/// Map one anonymous page with the given visibility, time the first write,
/// unmap. Returns nanoseconds; 0.0 if the mapping fails.
#[cfg(unix)]
fn mmap_first_touch(visibility: libc::c_int) -> f64 {
    const PAGE: usize = 4096;
    // SAFETY: an anonymous mapping of one page with no fixed address; the
    // single byte write stays inside it and the region is unmapped before
    // returning.
    unsafe {
        let addr = libc::mmap(
            std::ptr::null_mut(),
            PAGE,
            libc::PROT_READ | libc::PROT_WRITE,
            visibility | libc::MAP_ANONYMOUS,
            -1,
            0,
        );
        if addr == libc::MAP_FAILED {
            return 0.0;
        }
        let sw = Stopwatch::start();
        std::ptr::write_volatile(addr as *mut u8, 1);
        let elapsed = sw.elapsed_nanos();
        libc::munmap(addr, PAGE);
        elapsed
    }
}
