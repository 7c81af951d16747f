//! Drawing capability consumed by the grid, ruler and HUD.
//!
//! Everything the viewer draws goes through [`Renderer`], so the drawing code can
//! run against an egui painter in the app and against a recorder in tests.

use crate::camera::Camera;
use eframe::egui;

/// Minimal immediate-mode drawing surface.
///
/// Positions are in the renderer's own coordinate space: screen points for
/// [`EguiRenderer`], world units inside [`with_camera_transform`].
pub trait Renderer {
    /// Fills the whole drawing area with `color`.
    fn clear(&mut self, color: egui::Color32);

    /// Draws a straight line segment `width` screen points thick.
    fn draw_line(&mut self, from: egui::Pos2, to: egui::Pos2, width: f32, color: egui::Color32);

    /// Draws single-line text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: egui::Pos2, font_size: f32, color: egui::Color32);

    /// Width `text` would occupy when drawn at `font_size`.
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

/// [`Renderer`] backed by an egui painter.
pub struct EguiRenderer<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiRenderer<'a> {
    /// Wraps a painter; drawing is clipped to the painter's clip rect.
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl Renderer for EguiRenderer<'_> {
    fn clear(&mut self, color: egui::Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn draw_line(&mut self, from: egui::Pos2, to: egui::Pos2, width: f32, color: egui::Color32) {
        self.painter
            .line_segment([from, to], egui::Stroke::new(width, color));
    }

    fn draw_text(&mut self, text: &str, pos: egui::Pos2, font_size: f32, color: egui::Color32) {
        self.painter.text(
            pos,
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::proportional(font_size),
            color,
        );
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.painter
            .layout_no_wrap(
                text.to_owned(),
                egui::FontId::proportional(font_size),
                egui::Color32::WHITE,
            )
            .size()
            .x
    }
}

/// Renderer adapter that takes world coordinates and forwards screen coordinates.
///
/// Line widths stay in screen points; font sizes scale with zoom.
pub struct CameraTransform<'r, R: Renderer + ?Sized> {
    inner: &'r mut R,
    camera: Camera,
    viewport: egui::Rect,
}

impl<R: Renderer + ?Sized> CameraTransform<'_, R> {
    /// The visible world-space rectangle.
    pub fn visible_world_rect(&self) -> egui::Rect {
        self.camera.visible_world_rect(self.viewport)
    }
}

impl<R: Renderer + ?Sized> Renderer for CameraTransform<'_, R> {
    fn clear(&mut self, color: egui::Color32) {
        self.inner.clear(color);
    }

    fn draw_line(&mut self, from: egui::Pos2, to: egui::Pos2, width: f32, color: egui::Color32) {
        let from = self.camera.world_to_screen(from, self.viewport);
        let to = self.camera.world_to_screen(to, self.viewport);
        self.inner.draw_line(from, to, width, color);
    }

    fn draw_text(&mut self, text: &str, pos: egui::Pos2, font_size: f32, color: egui::Color32) {
        let pos = self.camera.world_to_screen(pos, self.viewport);
        self.inner
            .draw_text(text, pos, font_size * self.camera.zoom, color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.inner.measure_text(text, font_size * self.camera.zoom) / self.camera.zoom
    }
}

/// Runs `draw` with a renderer that applies the camera's pan and zoom.
///
/// # Arguments
///
/// * `renderer` - Screen-space renderer to forward to
/// * `camera` - Camera defining the world-to-screen mapping
/// * `viewport` - Screen-space rectangle the camera renders into
/// * `draw` - Drawing closure working in world coordinates
pub fn with_camera_transform<R, T>(
    renderer: &mut R,
    camera: &Camera,
    viewport: egui::Rect,
    draw: impl FnOnce(&mut CameraTransform<'_, R>) -> T,
) -> T
where
    R: Renderer + ?Sized,
{
    let mut transformed = CameraTransform {
        inner: renderer,
        camera: *camera,
        viewport,
    };
    draw(&mut transformed)
}


#[cfg(test)]
mod tests {
    use super::recording::{DrawCall, RecordingRenderer};
    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    #[test]
    fn camera_transform_maps_world_to_screen() {
        let camera = Camera {
            zoom: 2.0,
            target: egui::pos2(10.0, 20.0),
        };
        let mut recorder = RecordingRenderer::default();
        with_camera_transform(&mut recorder, &camera, viewport(), |r| {
            r.draw_line(egui::pos2(10.0, 20.0), egui::pos2(20.0, 20.0), 1.0, egui::Color32::RED);
            r.draw_text("a", egui::pos2(0.0, 0.0), 10.0, egui::Color32::RED);
        });

        assert_eq!(
            recorder.calls[0],
            DrawCall::Line {
                from: egui::pos2(400.0, 300.0),
                to: egui::pos2(420.0, 300.0),
                width: 1.0,
                color: egui::Color32::RED,
            }
        );
        assert_eq!(
            recorder.calls[1],
            DrawCall::Text {
                text: "a".to_owned(),
                pos: egui::pos2(380.0, 260.0),
                font_size: 20.0,
                color: egui::Color32::RED,
            }
        );
    }

    #[test]
    fn measured_width_is_in_world_units() {
        let camera = Camera {
            zoom: 2.0,
            target: egui::Pos2::ZERO,
        };
        let mut recorder = RecordingRenderer::default();
        let screen_width = recorder.measure_text("1234", 10.0);
        let world_width = with_camera_transform(&mut recorder, &camera, viewport(), |r| {
            r.measure_text("1234", 10.0)
        });
        assert_eq!(screen_width, 20.0);
        assert_eq!(world_width, 20.0);
    }
}
