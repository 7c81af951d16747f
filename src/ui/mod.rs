//! User interface glue between eframe and the viewer state.
//!
//! # Module Organization
//!
//! - `state` - Application state structures
//! - `canvas` - Input gathering and per-frame camera/grid updates
//! - `rendering` - Grid, ruler and HUD drawing

mod canvas;
mod rendering;
mod state;

pub use canvas::wheel_ticks;
pub use rendering::{draw_coordinates, draw_grid, draw_ruler};
pub use state::{AppState, DisplaySettings, FrameInput};

use crate::render::EguiRenderer;
use eframe::egui;

/// The eframe application: a single full-window canvas.
#[derive(Debug, Default)]
pub struct GridViewerApp {
    /// Camera, grid and display state
    pub state: AppState,
}

impl eframe::App for GridViewerApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl GridViewerApp {
    /// Runs one frame of the canvas: input, camera update, then drawing.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI the canvas fills
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let viewport = response.rect;

        let input = ui.input(FrameInput::from_egui);
        if self.state.frame_update(&input, viewport) {
            // The zoom ease advances once per frame, so keep frames coming until it settles
            ui.ctx().request_repaint();
        }

        let mut renderer = EguiRenderer::new(&painter);
        self.state.draw(&mut renderer, viewport);
    }
}

#[cfg(test)]
mod tests;
