//! Adaptive grid spacing and per-frame grid geometry.
//!
//! The grid snaps to one of a handful of "nice" spacings depending on zoom, so
//! lines jump between levels instead of continuously swimming while the zoom eases.

use crate::camera::Camera;
use crate::constants::{GRID_BASE_COLOR, GRID_LEVELS, GRID_MAX_ALPHA, GRID_MIN_ALPHA, MAX_ZOOM};
use eframe::egui;
use std::fmt;

/// Reasons a spacing table is rejected by [`GridLevels::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridLevelsError {
    /// The table has no entries
    Empty,
    /// An entry is zero or negative
    NonPositive(i32),
    /// Entries are not strictly ascending
    NotAscending {
        /// Index of the first out-of-order entry
        index: usize,
    },
}

impl fmt::Display for GridLevelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLevelsError::Empty => write!(f, "grid level table is empty"),
            GridLevelsError::NonPositive(level) => {
                write!(f, "grid level {level} is not a positive spacing")
            }
            GridLevelsError::NotAscending { index } => {
                write!(f, "grid level at index {index} is not larger than its predecessor")
            }
        }
    }
}

impl std::error::Error for GridLevelsError {}

/// An ascending table of positive grid spacings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLevels<'a> {
    levels: &'a [i32],
}

impl Default for GridLevels<'static> {
    fn default() -> Self {
        Self { levels: &GRID_LEVELS }
    }
}

impl<'a> GridLevels<'a> {
    /// Validates a spacing table.
    ///
    /// # Arguments
    ///
    /// * `levels` - Candidate spacings, strictly ascending and positive
    ///
    /// # Returns
    ///
    /// The validated table, or the first problem found
    pub fn new(levels: &'a [i32]) -> Result<Self, GridLevelsError> {
        if levels.is_empty() {
            return Err(GridLevelsError::Empty);
        }
        if let Some(&level) = levels.iter().find(|&&level| level <= 0) {
            return Err(GridLevelsError::NonPositive(level));
        }
        if let Some(index) = levels.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(GridLevelsError::NotAscending { index: index + 1 });
        }
        Ok(Self { levels })
    }

    /// The spacings, ascending.
    pub fn as_slice(&self) -> &'a [i32] {
        self.levels
    }

    /// Smallest spacing in the table.
    pub fn smallest(&self) -> i32 {
        self.levels[0]
    }

    /// Largest spacing in the table.
    pub fn largest(&self) -> i32 {
        self.levels[self.levels.len() - 1]
    }

    /// Whether `spacing` is one of the table's entries.
    pub fn contains(&self, spacing: i32) -> bool {
        self.levels.contains(&spacing)
    }

    /// Returns the entry closest to `candidate`.
    ///
    /// Entries are scanned ascending and only a strictly closer entry replaces the
    /// current best, so a tie resolves to the smaller spacing.
    pub fn nearest(&self, candidate: f32) -> i32 {
        let mut best = self.levels[0];
        let mut best_distance = (candidate - best as f32).abs();
        for &level in &self.levels[1..] {
            let distance = (candidate - level as f32).abs();
            if distance < best_distance {
                best = level;
                best_distance = distance;
            }
        }
        best
    }
}

/// Picks the grid spacing for a zoom factor.
///
/// `ln(zoom + 1)` is normalized over the zoom range `[1, MAX_ZOOM]`, clamped to
/// `[0, 1]`, and used to interpolate between the smallest and largest level; the
/// result is snapped to the nearest level. The spacing never decreases as zoom
/// grows.
pub fn select_spacing(zoom: f32, levels: GridLevels<'_>) -> i32 {
    let log_zoom = (zoom + 1.0).ln();
    let low = 2.0_f32.ln();
    let high = (MAX_ZOOM + 1.0).ln();
    let t = ((log_zoom - low) / (high - low)).clamp(0.0, 1.0);

    let candidate = egui::lerp(levels.smallest() as f32..=levels.largest() as f32, t);
    levels.nearest(candidate)
}

/// Grid line color for a spacing: finer grids are more opaque.
///
/// Alpha is `255 * (1 - spacing / largest_level)` clamped to `[50, 255]`.
pub fn grid_color(spacing: i32, levels: GridLevels<'_>) -> egui::Color32 {
    let fade = 1.0 - spacing as f32 / levels.largest() as f32;
    let alpha = (GRID_MAX_ALPHA * fade).clamp(GRID_MIN_ALPHA, GRID_MAX_ALPHA) as u8;
    let [r, g, b, _] = GRID_BASE_COLOR.to_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

/// Line layout along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLines {
    /// Distance between neighbouring lines in world units
    pub spacing: i32,
    /// Lines emitted on each side of the aligned origin
    pub visible_lines: i32,
    /// World coordinate at the viewport's leading edge on this axis
    pub origin: f32,
    /// `trunc(origin) % spacing`, used to phase lines onto multiples of `spacing`
    pub offset: i32,
}

impl AxisLines {
    fn new(spacing: i32, origin: f32, viewport_extent: f32, density_factor: i32) -> Self {
        // |offset| < spacing, so narrowing back to i32 is lossless
        let offset = (origin as i64 % i64::from(spacing)) as i32;
        Self {
            spacing,
            visible_lines: density_factor * (viewport_extent as i32 / spacing) + 2,
            origin,
            offset,
        }
    }

    /// Integer part of the origin shifted back onto a multiple of `spacing`.
    ///
    /// Origins beyond the `i64` range saturate at its bounds.
    pub fn aligned_origin(&self) -> i64 {
        (self.origin as i64).saturating_sub(i64::from(self.offset))
    }

    /// World coordinates of every line on this axis, ascending.
    pub fn positions(&self) -> impl Iterator<Item = i64> + '_ {
        let base = self.aligned_origin();
        let spacing = i64::from(self.spacing);
        (-self.visible_lines..self.visible_lines).map(move |i| base.saturating_add(i64::from(i) * spacing))
    }
}

/// Grid geometry for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapshot {
    /// Spacing chosen from the level table
    pub spacing: i32,
    /// Vertical lines, positioned along the x axis
    pub x: AxisLines,
    /// Horizontal lines, positioned along the y axis
    pub y: AxisLines,
    /// Stroke color for ordinary grid lines
    pub color: egui::Color32,
}

impl GridSnapshot {
    /// Computes the grid for the current camera.
    ///
    /// # Arguments
    ///
    /// * `camera` - Camera the grid is viewed through
    /// * `levels` - Spacing table to snap to
    /// * `density_factor` - Multiplier on the visible line count
    /// * `viewport` - Screen-space rectangle being drawn into
    ///
    /// # Returns
    ///
    /// `None` when the viewport is less than a point wide or tall
    pub fn compute(
        camera: &Camera,
        levels: GridLevels<'_>,
        density_factor: i32,
        viewport: egui::Rect,
    ) -> Option<Self> {
        if viewport.width() < 1.0 || viewport.height() < 1.0 {
            log::trace!("skipping grid for degenerate viewport {viewport:?}");
            return None;
        }

        let spacing = select_spacing(camera.zoom, levels);
        let origin = camera.camera_space_origin(viewport);
        Some(Self {
            spacing,
            x: AxisLines::new(spacing, origin.x, viewport.width(), density_factor),
            y: AxisLines::new(spacing, origin.y, viewport.height(), density_factor),
            color: grid_color(spacing, levels),
        })
    }

    /// World-space top-left corner of the viewport.
    pub fn camera_space_origin(&self) -> egui::Pos2 {
        egui::pos2(self.x.origin, self.y.origin)
    }
}
