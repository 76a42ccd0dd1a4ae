use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id_generator::generate_snapshot_id;
use crate::surface::Surface;

/// Default number of snapshots kept, base entry included
pub const DEFAULT_CAPACITY: usize = 256;

/// An immutable raster of the whole painting at one commit point
#[derive(Debug, Clone)]
pub struct Snapshot {
    id: u64,
    surface: Surface,
    opaque: bool,
}

impl Snapshot {
    pub fn new(surface: Surface) -> Self {
        let opaque = surface.is_opaque();
        Self {
            id: generate_snapshot_id(),
            surface,
            opaque,
        }
    }

    /// A snapshot of an empty canvas in the background color
    pub fn blank(width: usize, height: usize, background: Color32) -> Self {
        Self::new(Surface::filled(width, height, background))
    }

    /// Process-unique id, increasing in creation order
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Pixel memory held by this snapshot
    pub fn byte_size(&self) -> usize {
        self.surface.pixels().len() * std::mem::size_of::<Color32>()
    }
}

/// What `push` does once the history holds `capacity` snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Drop the oldest snapshot above the base entry
    #[default]
    EvictOldest,
    /// Keep growing; capacity is only a hint
    Grow,
    /// Refuse the push
    Reject,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History is full ({capacity} snapshots)")]
    CapacityExceeded { capacity: usize },
}

/// Ordered snapshots of the painting, oldest first.
///
/// Entry 0 is the cleared canvas and is never removed by `undo` or eviction,
/// so the history always holds at least one snapshot.
#[derive(Debug)]
pub struct SnapshotHistory {
    entries: Vec<Snapshot>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl SnapshotHistory {
    pub fn new(base: Snapshot, capacity: usize, policy: OverflowPolicy) -> Self {
        // A base entry plus room for at least one stroke
        let capacity = capacity.max(2);
        let mut entries = Vec::with_capacity(capacity.min(DEFAULT_CAPACITY));
        entries.push(base);
        Self {
            entries,
            capacity,
            policy,
        }
    }

    /// Appends `snapshot` as the newest entry
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), HistoryError> {
        if self.entries.len() >= self.capacity {
            match self.policy {
                OverflowPolicy::EvictOldest => {
                    let evicted = self.entries.remove(1);
                    log::debug!("History full, evicted snapshot {}", evicted.id());
                }
                OverflowPolicy::Grow => {}
                OverflowPolicy::Reject => {
                    return Err(HistoryError::CapacityExceeded {
                        capacity: self.capacity,
                    });
                }
            }
        }
        self.entries.push(snapshot);
        Ok(())
    }

    /// Removes and returns the newest entry, unless only the base is left
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Drops every entry and reseeds the history with `blank`.
    /// Returns how many entries were dropped.
    pub fn clear(&mut self, blank: Snapshot) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        self.entries.push(blank);
        dropped
    }

    /// Draws every entry in chronological order onto `target`.
    ///
    /// Opaque entries fully cover what came before them, so drawing starts
    /// from the newest opaque one.
    pub fn render_all(&self, target: &mut Surface) {
        let start = self
            .entries
            .iter()
            .rposition(Snapshot::is_opaque)
            .unwrap_or(0);
        for (i, entry) in self.entries[start..].iter().enumerate() {
            if i == 0 && entry.is_opaque() && entry.surface().size() == target.size() {
                target.copy_from(entry.surface());
            } else {
                target.blit_over(entry.surface());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the base entry is always present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Pixel memory of a full history, or `None` when `Grow` leaves it unbounded
    pub fn max_bytes(&self) -> Option<usize> {
        match self.policy {
            OverflowPolicy::Grow => None,
            _ => Some(self.capacity.saturating_mul(self.base().byte_size())),
        }
    }

    pub fn base(&self) -> &Snapshot {
        &self.entries[0]
    }

    /// The newest entry, which holds the current painting
    pub fn latest(&self) -> &Snapshot {
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
