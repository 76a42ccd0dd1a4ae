use crate::history::Snapshot;
use crate::surface::Surface;

/// Flattens the live canvas into history snapshots.
///
/// The canvas only holds the marks of the stroke in progress; everything
/// committed before lives in the newest history entry. A commit lays the
/// canvas over a copy of that entry, so each snapshot is the complete,
/// opaque painting at that point.
#[derive(Debug, Clone, Copy)]
pub struct StrokeCompositor {
    width: usize,
    height: usize,
}

impl StrokeCompositor {
    /// A compositor producing snapshots of the drawing region's size
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn commit(&self, latest: &Snapshot, canvas: &Surface) -> Snapshot {
        let mut flattened = Surface::new(self.width, self.height);
        if latest.surface().size() == flattened.size() {
            flattened.copy_from(latest.surface());
        } else {
            flattened.blit_over(latest.surface());
        }
        flattened.blit_over(canvas);
        Snapshot::new(flattened)
    }

    /// A fresh, fully transparent canvas for the next stroke
    pub fn blank_canvas(&self) -> Surface {
        Surface::new(self.width, self.height)
    }
}
