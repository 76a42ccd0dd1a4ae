use egui::Color32;

use crate::action::Action;
use crate::brush::{BrushSettings, BrushSize, MAX_BRUSH_SIZE_LIMIT, MIN_BRUSH_SIZE};
use crate::compositor::StrokeCompositor;
use crate::config::PaintConfig;
use crate::geometry::PixelRect;
use crate::gesture::{Gesture, GestureStep, PointerSample};
use crate::history::{Snapshot, SnapshotHistory};
use crate::surface::Surface;
use crate::tools::{Brush, Mark, MarkTarget, SelectTool, Tool, ToolKind};

/// Everything the painter mutates between frames: brush choices, the live
/// canvas and overlay, the snapshot history and the stroke gesture.
#[derive(Debug)]
pub struct PainterState {
    settings: BrushSettings,
    max_brush_size: u32,
    background: Color32,
    canvas: Surface,
    overlay: Surface,
    history: SnapshotHistory,
    compositor: StrokeCompositor,
    gesture: Gesture,
    selection: Option<PixelRect>,
    revision: u64,
}

impl PainterState {
    /// Creates the state for a `width`×`height` canvas, seeding the history
    /// with one cleared snapshot
    pub fn new(config: &PaintConfig, width: usize, height: usize) -> Self {
        let compositor = StrokeCompositor::new(width, height);
        let base = Snapshot::blank(width, height, config.background);
        let history = SnapshotHistory::new(base, config.history_capacity, config.overflow_policy);
        log::info!(
            "Painting began with {} snapshot(s), capacity {} ({:?} on overflow)",
            history.len(),
            history.capacity(),
            history.policy()
        );
        if let Some(bytes) = history.max_bytes() {
            log::info!("A full history holds up to {} MiB of snapshots", bytes >> 20);
        }
        let max_brush_size = config.max_brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE_LIMIT);

        Self {
            settings: BrushSettings {
                size: config.brush.size.min(BrushSize::new(max_brush_size)),
                ..config.brush
            },
            max_brush_size,
            background: config.background,
            canvas: compositor.blank_canvas(),
            overlay: compositor.blank_canvas(),
            history,
            compositor,
            gesture: Gesture::new(PixelRect::new(0, 0, width as i32, height as i32)),
            selection: None,
            revision: 0,
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Bumped on every change to what the painting looks like
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn settings(&self) -> BrushSettings {
        self.settings
    }

    /// Restores saved brush settings, keeping the size within bounds
    pub fn restore_settings(&mut self, settings: BrushSettings) {
        self.settings = BrushSettings {
            size: settings.size.min(BrushSize::new(self.max_brush_size)),
            ..settings
        };
    }

    pub fn tool(&self) -> ToolKind {
        self.settings.tool
    }

    pub fn color(&self) -> Color32 {
        self.settings.color
    }

    pub fn size(&self) -> BrushSize {
        self.settings.size
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn brush(&self) -> Brush {
        Brush {
            size: self.settings.size,
            color: self.settings.color,
            eraser: self.background,
        }
    }

    /// Switches tools. Ignored while a stroke is in progress.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.gesture.is_dragging() {
            log::debug!("Ignoring switch to {} during a stroke", tool.name());
            return;
        }
        if self.settings.tool != tool {
            log::debug!("Tool: {} -> {}", self.settings.tool.name(), tool.name());
            self.settings.tool = tool;
        }
    }

    pub fn select_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    pub fn increase_size(&mut self) {
        self.settings.size = self.settings.size.increased(self.max_brush_size);
    }

    pub fn decrease_size(&mut self) {
        self.settings.size = self.settings.size.decreased();
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::DecreaseSize => self.decrease_size(),
            Action::IncreaseSize => self.increase_size(),
            Action::Clear => self.clear(),
            Action::Undo => {
                self.undo();
            }
        }
    }

    /// Drops the newest snapshot. Returns false when only the cleared base is left.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                log::debug!(
                    "Undid snapshot {}, {} left",
                    snapshot.id(),
                    self.history.len()
                );
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Wipes the painting back to a single cleared snapshot
    pub fn clear(&mut self) {
        let [width, height] = self.compositor.size();
        let dropped = self
            .history
            .clear(Snapshot::blank(width, height, self.background));
        self.gesture.cancel();
        self.canvas = self.compositor.blank_canvas();
        self.overlay = self.compositor.blank_canvas();
        self.selection = None;
        self.touch();
        log::info!(
            "Canvas cleared, dropped {} snapshot(s), {} now in history",
            dropped,
            self.history.len()
        );
    }

    /// Advances the stroke gesture by one frame of pointer input
    pub fn handle_pointer(&mut self, sample: &PointerSample) -> GestureStep {
        let step = self.gesture.update(sample);
        if step.is_idle() {
            return step;
        }

        let tool = self.settings.tool;
        let brush = self.brush();

        if let Some(start) = step.began {
            if tool.target() == MarkTarget::Overlay {
                self.overlay = self.compositor.blank_canvas();
                log::debug!("Selection started at ({}, {})", start.x, start.y);
            }
        }

        if let Some(span) = step.mark {
            let mark = Mark {
                start: span.start,
                position: span.end,
                brush,
            };
            match tool.target() {
                MarkTarget::Canvas => tool.apply(&mut self.canvas, &mark),
                MarkTarget::Overlay => {
                    self.overlay.fill(Color32::TRANSPARENT);
                    tool.apply(&mut self.overlay, &mark);
                }
            }
        }

        if let Some(span) = step.ended {
            if tool.commits() {
                self.commit_stroke();
            } else {
                let mark = Mark {
                    start: span.start,
                    position: span.end,
                    brush,
                };
                self.overlay.fill(Color32::TRANSPARENT);
                tool.apply(&mut self.overlay, &mark);
                self.selection = SelectTool::selection_rect(&mark);
                log::debug!("Selection ended at ({}, {}): {:?}", span.end.x, span.end.y, self.selection);
            }
        }

        self.touch();
        step
    }

    fn commit_stroke(&mut self) {
        let before = self.history.len();
        let snapshot = self.compositor.commit(self.history.latest(), &self.canvas);
        match self.history.push(snapshot) {
            Ok(()) => log::debug!(
                "Committed stroke, history {} -> {}",
                before,
                self.history.len()
            ),
            Err(err) => log::warn!("{err}; stroke discarded"),
        }
        self.canvas = self.compositor.blank_canvas();
    }

    /// Paints history, live canvas and overlay onto `target`, bottom to top
    pub fn compose_into(&self, target: &mut Surface) {
        self.history.render_all(target);
        target.blit_over(&self.canvas);
        target.blit_over(&self.overlay);
    }

    /// The visible painting as a new surface
    pub fn compose(&self) -> Surface {
        let mut frame = self.compositor.blank_canvas();
        self.compose_into(&mut frame);
        frame
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn canvas(&self) -> &Surface {
        &self.canvas
    }

    pub fn overlay(&self) -> &Surface {
        &self.overlay
    }

    /// The last completed selection rectangle, drawing-local
    pub fn selection(&self) -> Option<PixelRect> {
        self.selection
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn canvas_size(&self) -> [usize; 2] {
        self.compositor.size()
    }
}
