use std::sync::atomic::{AtomicU64, Ordering};

// Single counter for every snapshot taken in this process
static NEXT_SNAPSHOT_ID: AtomicU64 = AtomicU64::new(1);

pub fn generate_snapshot_id() -> u64 {
    NEXT_SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed)
}
