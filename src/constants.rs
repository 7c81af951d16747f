//! Shared application-wide constants.
//! Centralizes tweakable values used across camera control, grid layout and rendering.

use eframe::egui::{Color32, Key};

// Window
/// Initial window width in logical points.
pub const SCREEN_WIDTH: f32 = 1920.0;
/// Initial window height in logical points.
pub const SCREEN_HEIGHT: f32 = 1080.0;
/// Title shown in the window decoration.
pub const WINDOW_TITLE: &str = "Grid Viewer";
/// Canvas clear color.
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(40, 35, 30);

// Camera
/// Smallest zoom factor the camera may reach.
pub const MIN_ZOOM: f32 = 0.5;
/// Largest zoom factor the camera may reach.
pub const MAX_ZOOM: f32 = 3.0;
/// Zoom factor the camera starts with.
pub const CAMERA_INIT_ZOOM: f32 = 1.0;
/// Change of the desired zoom per scroll wheel tick.
pub const ZOOM_SPEED: f32 = 0.05;
/// Fraction of the remaining distance to the desired zoom covered each frame.
pub const ZOOM_EASE: f32 = 0.1;
/// Remaining zoom distance below which the ease snaps to the desired zoom.
pub const ZOOM_SETTLE_EPSILON: f32 = 1.0e-4;
/// Scroll distance in points treated as one wheel tick for pixel-precise devices.
pub const POINTS_PER_SCROLL_TICK: f32 = 50.0;

// Grid
/// Discrete grid spacings (world units), ascending.
pub const GRID_LEVELS: [i32; 4] = [10, 20, 50, 100];
/// Multiplier applied to the number of visible lines so panning never runs out of grid.
pub const GRID_DENSITY_FACTOR: i32 = 3;
/// Base grid line color; alpha is derived from the current spacing.
pub const GRID_BASE_COLOR: Color32 = Color32::from_rgb(100, 90, 80);
/// Lowest alpha a grid line is ever drawn with.
pub const GRID_MIN_ALPHA: f32 = 50.0;
/// Highest alpha a grid line is ever drawn with.
pub const GRID_MAX_ALPHA: f32 = 255.0;
/// Grid line width in screen pixels.
pub const GRID_LINE_WIDTH: f32 = 1.0;
/// Width of the world axis lines (x = 0, y = 0).
pub const AXIS_LINE_WIDTH: f32 = 2.0;
/// Color of the world axis lines.
pub const AXIS_COLOR: Color32 = Color32::from_rgb(150, 135, 120);
/// Whether the grid is visible at startup.
pub const SHOW_GRID_DEFAULT: bool = true;
/// Key that flips grid visibility.
pub const TOGGLE_GRID_KEY: Key = Key::G;

// Ruler
/// Whether the edge ruler is drawn.
pub const SHOW_RULER: bool = true;
/// Length of a ruler tick in screen pixels.
pub const RULER_TICK_LENGTH: f32 = 6.0;
/// Gap between a tick and its label.
pub const RULER_LABEL_GAP: f32 = 2.0;
/// Minimum free space between two neighbouring ruler labels.
pub const RULER_LABEL_SPACING: f32 = 6.0;
/// Font size of ruler labels.
pub const RULER_FONT_SIZE: f32 = 10.0;
/// Color of ruler ticks and labels.
pub const RULER_COLOR: Color32 = Color32::from_rgb(200, 190, 175);

// HUD
/// Distance of HUD text from the viewport edges.
pub const HUD_MARGIN: f32 = 10.0;
/// Top edge of the first HUD line, clear of the ruler labels.
pub const HUD_TOP: f32 = 32.0;
/// Font size of the coordinate readout.
pub const HUD_FONT_SIZE: f32 = 16.0;
/// Vertical distance between HUD lines.
pub const HUD_LINE_HEIGHT: f32 = 20.0;
/// Color of the x coordinate readout.
pub const HUD_X_COLOR: Color32 = Color32::from_rgb(230, 110, 100);
/// Color of the y coordinate readout.
pub const HUD_Y_COLOR: Color32 = Color32::from_rgb(120, 200, 120);
/// Color of the zoom/spacing detail line.
pub const HUD_DETAIL_COLOR: Color32 = Color32::from_rgb(160, 150, 140);
/// Static usage hint shown at the bottom of the window.
pub const HELP_TEXT: &str =
    "Hold Middle Mouse Button to Pan. Scroll to Zoom. Press G to toggle grid.";
/// Font size of the help line.
pub const HELP_FONT_SIZE: f32 = 12.0;
/// Distance of the help line's top edge from the bottom of the viewport.
pub const HELP_BOTTOM_OFFSET: f32 = 20.0;
/// Color of the help line.
pub const HELP_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
