//! Camera model and input-driven camera control.
//!
//! The camera maps an unbounded world plane onto the viewport: `target` is the
//! world point shown at the viewport center and `zoom` is the number of screen
//! points per world unit. [`CameraController`] advances the camera once per frame
//! from pointer, scroll and pan-button input.

use crate::constants::{CAMERA_INIT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_EASE, ZOOM_SETTLE_EPSILON, ZOOM_SPEED};
use eframe::egui;

/// A 2D orthographic camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Screen points per world unit, kept within `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f32,
    /// World-space point mapped to the center of the viewport
    pub target: egui::Pos2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: CAMERA_INIT_ZOOM,
            target: egui::Pos2::ZERO,
        }
    }
}

impl Camera {
    /// Converts screen coordinates to world coordinates.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (points)
    /// * `viewport` - Screen-space rectangle the camera renders into
    ///
    /// # Returns
    ///
    /// The world-space position shown at `screen_pos`
    pub fn screen_to_world(&self, screen_pos: egui::Pos2, viewport: egui::Rect) -> egui::Pos2 {
        self.target + (screen_pos - viewport.center()) / self.zoom
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// Inverse of [`Camera::screen_to_world`] for the same viewport.
    pub fn world_to_screen(&self, world_pos: egui::Pos2, viewport: egui::Rect) -> egui::Pos2 {
        viewport.center() + (world_pos - self.target) * self.zoom
    }

    /// World coordinate visible at the viewport's top-left corner.
    pub fn camera_space_origin(&self, viewport: egui::Rect) -> egui::Pos2 {
        self.screen_to_world(viewport.min, viewport)
    }

    /// The world-space rectangle currently covered by the viewport.
    pub fn visible_world_rect(&self, viewport: egui::Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.screen_to_world(viewport.min, viewport),
            self.screen_to_world(viewport.max, viewport),
        )
    }
}

/// Pan gesture bookkeeping for the drag button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether the pan button was already held on the previous frame
    pub active: bool,
    /// Pointer position (screen space) the next pan delta is measured from
    pub anchor: egui::Pos2,
}

/// Input consumed by the camera for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    /// Current pointer position in screen space, if the pointer is over the window
    pub pointer: Option<egui::Pos2>,
    /// Signed scroll wheel ticks received this frame (positive zooms in)
    pub scroll_ticks: f32,
    /// Whether the pan button is currently held
    pub pan_held: bool,
}

/// Drives a [`Camera`] from per-frame input.
///
/// Scrolling moves a *desired* zoom; the camera's zoom then eases toward it by a
/// fixed fraction every frame while the world point under the pointer stays put.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    /// Zoom the camera is easing toward
    pub desired_zoom: f32,
    /// Pan gesture state
    pub drag: DragState,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CAMERA_INIT_ZOOM)
    }
}

impl CameraController {
    /// Creates a controller whose desired zoom starts at `zoom`.
    pub fn new(zoom: f32) -> Self {
        Self {
            desired_zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            drag: DragState::default(),
        }
    }

    /// Advances `camera` by one frame of input.
    ///
    /// Zoom is applied first, anchored at the pointer (or the viewport center when
    /// the pointer is unknown), then the pan gesture is processed.
    ///
    /// # Arguments
    ///
    /// * `camera` - The camera to update in place
    /// * `input` - Pointer, scroll and button state for this frame
    /// * `viewport` - Screen-space rectangle the camera renders into
    ///
    /// # Returns
    ///
    /// `true` if the camera changed this frame
    pub fn update(&mut self, camera: &mut Camera, input: &CameraInput, viewport: egui::Rect) -> bool {
        let before = *camera;
        let anchor = input.pointer.unwrap_or_else(|| viewport.center());
        self.apply_zoom(camera, input.scroll_ticks, anchor, viewport);
        self.apply_pan(camera, input);
        *camera != before
    }

    /// Whether the camera's zoom has not yet reached the desired zoom.
    pub fn is_easing(&self, camera: &Camera) -> bool {
        camera.zoom != self.desired_zoom
    }

    fn apply_zoom(&mut self, camera: &mut Camera, scroll_ticks: f32, anchor: egui::Pos2, viewport: egui::Rect) {
        if scroll_ticks != 0.0 {
            self.desired_zoom = (self.desired_zoom + scroll_ticks * ZOOM_SPEED).clamp(MIN_ZOOM, MAX_ZOOM);
        }
        if !self.is_easing(camera) {
            return;
        }

        let world_before_zoom = camera.screen_to_world(anchor, viewport);

        let mut zoom = egui::lerp(camera.zoom..=self.desired_zoom, ZOOM_EASE);
        if (self.desired_zoom - zoom).abs() < ZOOM_SETTLE_EPSILON {
            zoom = self.desired_zoom;
        }
        camera.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);

        // Keep the world point under the anchor fixed on screen
        let world_after_zoom = camera.screen_to_world(anchor, viewport);
        camera.target += world_before_zoom - world_after_zoom;
    }

    fn apply_pan(&mut self, camera: &mut Camera, input: &CameraInput) {
        if !input.pan_held {
            self.drag = DragState::default();
            return;
        }
        let Some(pointer) = input.pointer else {
            return;
        };

        if !self.drag.active {
            self.drag = DragState {
                active: true,
                anchor: pointer,
            };
        } else {
            let delta = self.drag.anchor - pointer;
            camera.target += delta / camera.zoom;
            self.drag.anchor = pointer;
        }
    }
}
