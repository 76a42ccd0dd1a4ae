use crate::geometry::{PixelRect, Point};

/// Primary pointer state for one frame, in drawing-local coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// `None` when the pointer is outside the window
    pub position: Option<Point>,
    /// The button went down this frame
    pub pressed: bool,
    /// The button is held
    pub down: bool,
    /// The button went up this frame
    pub released: bool,
}

/// Start and end of a finished (or in-progress) drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        start: Point,
        last: Point,
    },
}

/// What one frame of input did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureStep {
    /// A new gesture started this frame
    pub began: Option<Point>,
    /// Place a mark: gesture start and current pointer
    pub mark: Option<Span>,
    /// The gesture ended this frame
    pub ended: Option<Span>,
}

impl GestureStep {
    pub fn is_idle(&self) -> bool {
        self.began.is_none() && self.mark.is_none() && self.ended.is_none()
    }
}

/// Idle/Dragging state machine for strokes.
///
/// A gesture only starts from a press inside `bounds`. While dragging, frames
/// with the pointer outside `bounds` produce no mark but keep the gesture
/// alive; the release ends it wherever it happens.
#[derive(Debug, Clone)]
pub struct Gesture {
    bounds: PixelRect,
    phase: GesturePhase,
}

impl Gesture {
    pub fn new(bounds: PixelRect) -> Self {
        Self {
            bounds,
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Drops an in-progress gesture without ending it
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    pub fn update(&mut self, sample: &PointerSample) -> GestureStep {
        let mut step = GestureStep::default();
        let inside = sample
            .position
            .filter(|p| self.bounds.contains(*p));

        if let (GesturePhase::Idle, true, Some(p)) = (self.phase, sample.pressed, inside) {
            self.phase = GesturePhase::Dragging { start: p, last: p };
            step.began = Some(p);
        }

        if let GesturePhase::Dragging { start, last } = &mut self.phase {
            // A press and release can land in the same frame
            if sample.down || step.began.is_some() {
                if let Some(p) = inside {
                    *last = p;
                    step.mark = Some(Span { start: *start, end: p });
                }
            }
            if sample.released && !sample.down {
                let end = sample
                    .position
                    .map_or(*last, |p| self.bounds.clamp(p));
                step.ended = Some(Span { start: *start, end });
                self.phase = GesturePhase::Idle;
            }
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> Gesture {
        Gesture::new(PixelRect::new(0, 0, 100, 100))
    }

    fn press(x: i32, y: i32) -> PointerSample {
        PointerSample {
            position: Some(Point::new(x, y)),
            pressed: true,
            down: true,
            released: false,
        }
    }

    fn hold(x: i32, y: i32) -> PointerSample {
        PointerSample {
            position: Some(Point::new(x, y)),
            pressed: false,
            down: true,
            released: false,
        }
    }

    fn release(x: i32, y: i32) -> PointerSample {
        PointerSample {
            position: Some(Point::new(x, y)),
            pressed: false,
            down: false,
            released: true,
        }
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut gesture = gesture();

        let step = gesture.update(&press(10, 10));
        assert_eq!(step.began, Some(Point::new(10, 10)));
        assert!(gesture.is_dragging());

        let step = gesture.update(&hold(20, 30));
        assert_eq!(
            step.mark,
            Some(Span {
                start: Point::new(10, 10),
                end: Point::new(20, 30)
            })
        );

        let step = gesture.update(&release(25, 35));
        assert_eq!(
            step.ended,
            Some(Span {
                start: Point::new(10, 10),
                end: Point::new(25, 35)
            })
        );
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_press_outside_never_drags() {
        let mut gesture = gesture();

        assert!(gesture.update(&press(-5, 10)).is_idle());
        // Dragging into the canvas with the button still held
        assert!(gesture.update(&hold(10, 10)).is_idle());
        assert!(gesture.update(&release(10, 10)).is_idle());
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_leaving_bounds_pauses_marks() {
        let mut gesture = gesture();
        gesture.update(&press(50, 50));

        let step = gesture.update(&hold(150, 50));
        assert!(step.mark.is_none());
        assert!(gesture.is_dragging());

        let step = gesture.update(&release(150, 50));
        assert_eq!(step.ended.map(|s| s.end), Some(Point::new(99, 50)));
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut gesture = gesture();
        let step = gesture.update(&PointerSample {
            position: Some(Point::new(4, 4)),
            pressed: true,
            down: false,
            released: true,
        });

        assert_eq!(step.began, Some(Point::new(4, 4)));
        assert!(step.mark.is_some());
        assert!(step.ended.is_some());
        assert!(!gesture.is_dragging());
    }
}
