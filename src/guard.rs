//! In-flight guard for brute-force requests.

use std::sync::atomic::{AtomicBool, Ordering};

/// Allows at most one brute-force request at a time, independent of any UI
/// control state.
#[derive(Debug, Default)]
pub struct BruteForceGate {
    in_flight: AtomicBool,
}

impl BruteForceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate. Returns `None` while another request holds it.
    pub fn try_acquire(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { gate: self })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop.
#[derive(Debug)]
pub struct InFlight<'a> {
    gate: &'a BruteForceGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
