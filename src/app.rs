use eframe::egui;

use crate::brush::BrushSettings;
use crate::config::PaintConfig;
use crate::error::PaintResult;
use crate::icons::IconSet;
use crate::input::{InputHandler, Shortcut};
use crate::layout::ChromeLayout;
use crate::panels::{central_panel, palette_panel, tools_panel, top_panel};
use crate::renderer::Renderer;
use crate::state::PainterState;

pub const APP_NAME: &str = "paint.xd";

/// Storage key for the brush settings restored on the next launch
const BRUSH_SETTINGS_KEY: &str = "brush_settings";

pub struct PaintApp {
    layout: ChromeLayout,
    state: PainterState,
    renderer: Renderer,
    icons: IconSet,
    input: InputHandler,
}

impl PaintApp {
    /// Called once before the first frame. Fails if an icon can't be loaded.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig, layout: ChromeLayout) -> PaintResult<Self> {
        let icons = IconSet::load(&cc.egui_ctx, &config.resources_dir)?;

        let [width, height] = layout.canvas_size();
        let mut state = PainterState::new(&config, width, height);
        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<BrushSettings>(storage, BRUSH_SETTINGS_KEY))
        {
            log::debug!("Restoring brush settings: {:?}", settings);
            state.restore_settings(settings);
        }

        Ok(Self {
            layout,
            state,
            renderer: Renderer::new(&cc.egui_ctx),
            icons,
            input: InputHandler::new(),
        })
    }

    pub fn state(&self) -> &PainterState {
        &self.state
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let shortcuts = ctx.input(|i| self.input.shortcuts(i));
        for shortcut in shortcuts {
            match shortcut {
                Shortcut::Action(action) => self.state.apply_action(action),
                Shortcut::Tool(tool) => self.state.select_tool(tool),
            }
        }
    }

    /// Ghost of the brush under the pointer, on top of everything but tooltips
    fn render_brush_preview(&self, ctx: &egui::Context) {
        let Some(pos) = self.input.last_pointer_pos() else {
            return;
        };
        if ctx.input(|i| i.pointer.latest_pos()).is_none() {
            return;
        }
        let Some(tool) = self.layout.hit_test(pos).preview_tool(self.state.tool()) else {
            return;
        };
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("brush_preview"),
        ));
        self.renderer
            .render_brush_preview(&painter, pos, tool, &self.state.brush());
    }
}

impl eframe::App for PaintApp {
    /// Only the brush settings are saved; the painting never leaves memory.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, BRUSH_SETTINGS_KEY, &self.state.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Panels that claim the window edges go first
        top_panel(ctx, &self.layout, &self.state);
        palette_panel(ctx, &self.layout, &mut self.state);
        tools_panel(ctx, &self.layout, &mut self.state, &self.icons);
        central_panel(
            ctx,
            &self.layout,
            &mut self.state,
            &mut self.renderer,
            &mut self.input,
        );

        self.render_brush_preview(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!(
            "Closing with {} snapshot(s) in history",
            self.state.history().len()
        );
    }
}
