use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::PaintConfig;
use crate::input::InputHandler;
use crate::painter_surface::PainterSurface;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::DrawingState;

/// Top-level application state. Nothing outlives the session.
pub struct PaintApp {
    config: PaintConfig,
    state: DrawingState,
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            state: DrawingState::new(),
            canvas: Canvas::new(config.background),
            renderer: Renderer::new(&config),
            input: InputHandler::new(),
            config,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns `true` when the canvas needs repainting.
    pub fn execute_command(&mut self, command: Command) -> bool {
        log::debug!("Executing {command:?}");
        command.execute(&mut self.state, &mut self.canvas)
    }

    /// Feeds this frame's pointer input to the canvas.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) -> bool {
        let mut needs_repaint = false;
        for event in self.input.process_input(ctx, canvas_rect) {
            needs_repaint |= self.canvas.handle_input(event, &self.state);
        }
        needs_repaint
    }

    pub fn render(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let mut surface = PainterSurface::new(painter, canvas_rect, self.config.oval_segments);
        self.canvas.render(&self.renderer, &mut surface, &self.state);
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
