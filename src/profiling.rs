// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Simple profiling counters for understanding rebalancing cost.
//!
//! Counters are process-wide and never reset on their own.

use std::sync::atomic::{AtomicU64, Ordering};

pub static ROTATIONS: AtomicU64 = AtomicU64::new(0);
pub static FLIPS: AtomicU64 = AtomicU64::new(0);
pub static PROBES: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn rotation() {
    ROTATIONS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn flip() {
    FLIPS.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn probe(count: usize) {
    PROBES.fetch_add(count as u64, Ordering::Relaxed);
}

pub fn reset() {
    ROTATIONS.store(0, Ordering::Relaxed);
    FLIPS.store(0, Ordering::Relaxed);
    PROBES.store(0, Ordering::Relaxed);
}

pub fn report() -> String {
    let rotations = ROTATIONS.load(Ordering::Relaxed);
    let flips = FLIPS.load(Ordering::Relaxed);
    let probes = PROBES.load(Ordering::Relaxed);

    format!(
        "Rotations: {}, Flips: {}, Probes: {}",
        rotations, flips, probes
    )
}
