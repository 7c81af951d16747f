//! Canvas input handling.
//!
//! Translates egui input into [`FrameInput`] and advances [`AppState`] by one frame.

use super::state::{AppState, FrameInput};
use crate::camera::CameraInput;
use crate::constants::{POINTS_PER_SCROLL_TICK, TOGGLE_GRID_KEY};
use crate::grid::select_spacing;
use eframe::egui;

/// Converts one mouse wheel event into wheel ticks; positive zooms in.
pub fn wheel_ticks(unit: egui::MouseWheelUnit, delta: egui::Vec2) -> f32 {
    match unit {
        egui::MouseWheelUnit::Point => delta.y / POINTS_PER_SCROLL_TICK,
        egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => delta.y,
    }
}

impl FrameInput {
    /// Reads this frame's input from egui.
    ///
    /// Scroll is taken from the raw wheel events rather than egui's smoothed
    /// scroll delta, since the camera does its own easing.
    pub fn from_egui(input: &egui::InputState) -> Self {
        let scroll_ticks = input
            .events
            .iter()
            .map(|event| match event {
                egui::Event::MouseWheel { unit, delta, .. } => wheel_ticks(*unit, *delta),
                _ => 0.0,
            })
            .sum();

        Self {
            camera: CameraInput {
                pointer: input.pointer.hover_pos(),
                scroll_ticks,
                pan_held: input.pointer.middle_down(),
            },
            toggle_grid_pressed: input.key_pressed(TOGGLE_GRID_KEY),
        }
    }
}

impl AppState {
    /// Applies one frame of input.
    ///
    /// # Arguments
    ///
    /// * `input` - Input gathered for this frame
    /// * `viewport` - Screen-space rectangle of the canvas
    ///
    /// # Returns
    ///
    /// `true` while the zoom is still easing and another frame should follow
    pub fn frame_update(&mut self, input: &FrameInput, viewport: egui::Rect) -> bool {
        if input.toggle_grid_pressed {
            let shown = self.display.toggle_grid();
            log::debug!("grid {}", if shown { "shown" } else { "hidden" });
        }

        self.controller
            .update(&mut self.camera, &input.camera, viewport);

        let spacing = select_spacing(self.camera.zoom, self.levels);
        if self.last_spacing != Some(spacing) {
            log::debug!(
                "grid spacing {:?} -> {spacing} at zoom {:.3}",
                self.last_spacing,
                self.camera.zoom
            );
            self.last_spacing = Some(spacing);
        }

        self.controller.is_easing(&self.camera)
    }
}
