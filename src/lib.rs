//! # Grid Viewer
//!
//! A pannable, zoomable Cartesian grid in a desktop window, with an edge ruler and
//! a live readout of the camera position.
//!
//! ## Features
//! - Middle-mouse panning, scaled so the world follows the pointer at any zoom
//! - Scroll-wheel zoom anchored at the cursor, eased toward the requested level
//! - Grid spacing that snaps between a few "nice" levels as the zoom changes
//! - Grid opacity that fades as the spacing grows
//! - Coordinate ruler along the top and right edges
//! - `G` toggles the grid

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod camera;
pub mod constants;
pub mod grid;
pub mod render;
mod ui;

pub use camera::{Camera, CameraController, CameraInput, DragState};
pub use grid::{grid_color, select_spacing, AxisLines, GridLevels, GridLevelsError, GridSnapshot};
pub use render::{with_camera_transform, CameraTransform, EguiRenderer, Renderer};
pub use ui::{
    draw_coordinates, draw_grid, draw_ruler, wheel_ticks, AppState, DisplaySettings, FrameInput,
    GridViewerApp,
};

use eframe::egui;

/// Runs the grid viewer with default settings.
///
/// Opens a window of `SCREEN_WIDTH` x `SCREEN_HEIGHT` points and blocks until it
/// is closed.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use grid_viewer::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(constants::WINDOW_TITLE)
            .with_inner_size([constants::SCREEN_WIDTH, constants::SCREEN_HEIGHT]),
        ..Default::default()
    };
    log::info!(
        "opening {}x{} window",
        constants::SCREEN_WIDTH,
        constants::SCREEN_HEIGHT
    );
    eframe::run_native(
        constants::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(GridViewerApp::default()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.camera, Camera::default());
        assert_eq!(state.controller.desired_zoom, state.camera.zoom);
        assert!(state.display.show_grid);
        assert!(state.display.show_ruler);
        assert_eq!(state.levels.as_slice(), &constants::GRID_LEVELS);
    }

    #[test]
    fn test_display_toggle_round_trip() {
        let mut display = DisplaySettings::default();
        assert!(!display.toggle_grid());
        assert!(display.toggle_grid());
        assert_eq!(display, DisplaySettings::default());
    }
}
