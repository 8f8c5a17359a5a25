use std::sync::atomic::{AtomicU32, Ordering};

/// Handle to a body tracked by a [`World`](crate::World).
/// Handles are never reused within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Identity of a [`World`](crate::World), stored on bodies as their back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldId(pub u32);

static NEXT_WORLD_ID: AtomicU32 = AtomicU32::new(1);

impl WorldId {
    /// Allocate a process-unique world id.
    pub(crate) fn next() -> Self {
        WorldId(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
    }
}
