//! Application state management structures.
//!
//! All per-process state lives in [`AppState`], which the frame loop owns and
//! passes by reference into the update and draw steps.

use crate::camera::{Camera, CameraController, CameraInput};
use crate::constants::{GRID_DENSITY_FACTOR, SHOW_GRID_DEFAULT, SHOW_RULER};
use crate::grid::GridLevels;

/// Display options affecting what the canvas draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Whether grid lines are drawn
    pub show_grid: bool,
    /// Whether the edge ruler is drawn alongside the grid
    pub show_ruler: bool,
    /// Multiplier on the number of grid lines submitted per axis
    pub density_factor: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_grid: SHOW_GRID_DEFAULT,
            show_ruler: SHOW_RULER,
            density_factor: GRID_DENSITY_FACTOR,
        }
    }
}

impl DisplaySettings {
    /// Flips grid visibility, returning the new value.
    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }
}

/// Input gathered for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer, scroll and pan-button state for the camera
    pub camera: CameraInput,
    /// Whether the grid toggle key went down this frame
    pub toggle_grid_pressed: bool,
}

/// Everything the viewer keeps between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The view onto the world plane
    pub camera: Camera,
    /// Zoom easing and pan gesture state
    pub controller: CameraController,
    /// Grid and ruler visibility
    pub display: DisplaySettings,
    /// Spacing table the grid snaps to
    pub levels: GridLevels<'static>,
    /// Spacing chosen on the previous frame, for change logging
    pub(crate) last_spacing: Option<i32>,
}

impl Default for AppState {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            controller: CameraController::new(camera.zoom),
            camera,
            display: DisplaySettings::default(),
            levels: GridLevels::default(),
            last_spacing: None,
        }
    }
}
