//! Per-worker busy-work kernel.

use std::hint::black_box;

/// Run the CPU-bound loop for one worker and return the number of
/// iterations completed.
///
/// Each iteration folds the loop index, weighted by the worker id, into a
/// running checksum. The checksum is routed through `black_box` so the loop
/// is real work at any optimization level; the worker's contribution to the
/// aggregate is its iteration count, which keeps the aggregate
/// order-independent and verifiable.
pub fn busy_work(worker_id: u32, iterations: u64) -> u64 {
    let mut checksum: u64 = 0;
    for j in 0..iterations {
        checksum = checksum.wrapping_add(j.wrapping_mul(worker_id as u64));
    }
    black_box(checksum);
    iterations
}
