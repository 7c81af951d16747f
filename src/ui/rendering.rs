//! Canvas rendering for the grid, the edge ruler and the HUD text.
//!
//! Drawing is layered: background, grid (in world space), then ruler and HUD in
//! screen space on top.

use super::state::AppState;
use crate::camera::Camera;
use crate::constants::*;
use crate::grid::GridSnapshot;
use crate::render::{with_camera_transform, CameraTransform, Renderer};
use eframe::egui;

impl AppState {
    /// Draws a full frame.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Screen-space renderer for the canvas
    /// * `viewport` - Screen-space rectangle of the canvas
    ///
    /// # Returns
    ///
    /// The grid snapshot used for this frame, if the grid was drawn
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, viewport: egui::Rect) -> Option<GridSnapshot> {
        renderer.clear(BACKGROUND_COLOR);

        let snapshot = if self.display.show_grid {
            GridSnapshot::compute(&self.camera, self.levels, self.display.density_factor, viewport)
        } else {
            None
        };

        if let Some(snapshot) = &snapshot {
            with_camera_transform(renderer, &self.camera, viewport, |r| draw_grid(snapshot, r));
            if self.display.show_ruler {
                draw_ruler(snapshot, &self.camera, viewport, renderer);
            }
        }

        draw_coordinates(&self.camera, snapshot.as_ref().map(|s| s.spacing), viewport, renderer);
        draw_help(viewport, renderer);
        snapshot
    }
}

/// Draws grid lines in world coordinates.
///
/// Every line spans the visible world rectangle on the other axis. The world
/// axes are drawn again with a heavier stroke when they are on screen.
pub fn draw_grid<R: Renderer + ?Sized>(snapshot: &GridSnapshot, renderer: &mut CameraTransform<'_, R>) {
    let visible = renderer.visible_world_rect();

    for x in snapshot.x.positions() {
        let x = x as f32;
        renderer.draw_line(
            egui::pos2(x, visible.min.y),
            egui::pos2(x, visible.max.y),
            GRID_LINE_WIDTH,
            snapshot.color,
        );
    }
    for y in snapshot.y.positions() {
        let y = y as f32;
        renderer.draw_line(
            egui::pos2(visible.min.x, y),
            egui::pos2(visible.max.x, y),
            GRID_LINE_WIDTH,
            snapshot.color,
        );
    }

    if visible.x_range().contains(0.0) {
        renderer.draw_line(
            egui::pos2(0.0, visible.min.y),
            egui::pos2(0.0, visible.max.y),
            AXIS_LINE_WIDTH,
            AXIS_COLOR,
        );
    }
    if visible.y_range().contains(0.0) {
        renderer.draw_line(
            egui::pos2(visible.min.x, 0.0),
            egui::pos2(visible.max.x, 0.0),
            AXIS_LINE_WIDTH,
            AXIS_COLOR,
        );
    }
}

/// Draws ticks and world-coordinate labels along the top and right edges.
///
/// Each on-screen grid line gets a tick. Labels are centered on top-edge ticks and
/// right-aligned against right-edge ticks; a label that would collide with the
/// previous one on the same edge is left out.
pub fn draw_ruler<R: Renderer + ?Sized>(
    snapshot: &GridSnapshot,
    camera: &Camera,
    viewport: egui::Rect,
    renderer: &mut R,
) {
    let mut last_label_right = f32::NEG_INFINITY;
    for x in snapshot.x.positions() {
        let screen_x = camera.world_to_screen(egui::pos2(x as f32, 0.0), viewport).x;
        if !viewport.x_range().contains(screen_x) {
            continue;
        }
        renderer.draw_line(
            egui::pos2(screen_x, viewport.top()),
            egui::pos2(screen_x, viewport.top() + RULER_TICK_LENGTH),
            GRID_LINE_WIDTH,
            RULER_COLOR,
        );

        let label = x.to_string();
        let width = renderer.measure_text(&label, RULER_FONT_SIZE);
        let left = screen_x - width / 2.0;
        if left >= last_label_right + RULER_LABEL_SPACING {
            let top = viewport.top() + RULER_TICK_LENGTH + RULER_LABEL_GAP;
            renderer.draw_text(&label, egui::pos2(left, top), RULER_FONT_SIZE, RULER_COLOR);
            last_label_right = left + width;
        }
    }

    let mut last_label_bottom = f32::NEG_INFINITY;
    for y in snapshot.y.positions() {
        let screen_y = camera.world_to_screen(egui::pos2(0.0, y as f32), viewport).y;
        if !viewport.y_range().contains(screen_y) {
            continue;
        }
        renderer.draw_line(
            egui::pos2(viewport.right() - RULER_TICK_LENGTH, screen_y),
            egui::pos2(viewport.right(), screen_y),
            GRID_LINE_WIDTH,
            RULER_COLOR,
        );

        let label = y.to_string();
        let top = screen_y - RULER_FONT_SIZE / 2.0;
        if top >= last_label_bottom + RULER_LABEL_SPACING {
            let width = renderer.measure_text(&label, RULER_FONT_SIZE);
            let left = viewport.right() - RULER_TICK_LENGTH - RULER_LABEL_GAP - width;
            renderer.draw_text(&label, egui::pos2(left, top), RULER_FONT_SIZE, RULER_COLOR);
            last_label_bottom = top + RULER_FONT_SIZE;
        }
    }
}

/// Draws the camera target readout in the top-left corner.
pub fn draw_coordinates<R: Renderer + ?Sized>(
    camera: &Camera,
    spacing: Option<i32>,
    viewport: egui::Rect,
    renderer: &mut R,
) {
    let left = viewport.left() + HUD_MARGIN;
    let top = viewport.top() + HUD_TOP;

    renderer.draw_text(
        &format!("X: {:.2}", camera.target.x),
        egui::pos2(left, top),
        HUD_FONT_SIZE,
        HUD_X_COLOR,
    );
    renderer.draw_text(
        &format!("Y: {:.2}", camera.target.y),
        egui::pos2(left, top + HUD_LINE_HEIGHT),
        HUD_FONT_SIZE,
        HUD_Y_COLOR,
    );

    let grid = match spacing {
        Some(spacing) => format!("Grid: {spacing}"),
        None => "Grid: off".to_owned(),
    };
    renderer.draw_text(
        &format!("Zoom: {:.2}x  {grid}", camera.zoom),
        egui::pos2(left, top + 2.0 * HUD_LINE_HEIGHT),
        HUD_FONT_SIZE,
        HUD_DETAIL_COLOR,
    );
}

fn draw_help<R: Renderer + ?Sized>(viewport: egui::Rect, renderer: &mut R) {
    renderer.draw_text(
        HELP_TEXT,
        egui::pos2(viewport.left() + HUD_MARGIN, viewport.bottom() - HELP_BOTTOM_OFFSET),
        HELP_FONT_SIZE,
        HELP_COLOR,
    );
}
