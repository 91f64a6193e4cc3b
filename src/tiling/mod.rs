//! Deterministic layout computation
//!
//! The tiling engine assigns one rectangle to each open non-dialog
//! window. The layout shape depends only on the window count and the
//! surface rectangle, so the same inputs always produce the same
//! assignment. Five or more windows, or the free-placement upgrade,
//! switch the desktop to manual placement and the engine leaves all
//! geometry untouched.

use log::trace;
use thiserror::Error;

use crate::lifecycle::{Rect, WindowId};

/// The surface size provider failed; tiling and maximize become
/// no-ops and windows keep their last known geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("desktop surface geometry is unavailable")]
    Unavailable,
}

/// Reports the raw desktop surface and panel placement. Implemented
/// by the shell; the manager folds in whether the panel upgrade is
/// actually installed.
pub trait SurfaceSource: Send + Sync {
    fn surface_size(&self) -> Result<(u32, u32), GeometryError>;
    fn panel_height(&self) -> u32;
    fn panel_at_top(&self) -> bool;
}

/// The inset-adjusted usable desktop area. `height` already excludes
/// the panel row; `top_inset` is nonzero only when the panel is docked
/// at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRect {
    pub width: u32,
    pub height: u32,
    pub top_inset: u32,
}

impl SurfaceRect {
    pub fn new(width: u32, height: u32, top_inset: u32) -> Self {
        Self {
            width,
            height,
            top_inset,
        }
    }

    /// Derive the usable area from a raw surface, reserving the panel
    /// row when the panel is present.
    pub fn from_source(
        source: &dyn SurfaceSource,
        panel_installed: bool,
    ) -> Result<Self, GeometryError> {
        let (width, raw_height) = source.surface_size()?;
        if !panel_installed {
            return Ok(Self::new(width, raw_height, 0));
        }
        let panel = source.panel_height().min(raw_height);
        let top_inset = if source.panel_at_top() { panel } else { 0 };
        Ok(Self::new(width, raw_height - panel, top_inset))
    }

    /// The full usable rectangle, as applied by maximize and the
    /// single-window layout.
    pub fn full_rect(&self) -> Rect {
        Rect::new(0, self.top_inset as i32, self.width, self.height)
    }
}

/// Compute the tiled rectangle for every window in `windows`, keyed by
/// input position. Returns `None` when nothing should move: free
/// placement, an empty set, or five or more windows.
///
/// Integer semantics: splits use integer division, the right column is
/// as wide as the left and starts at `width / 2`, and the bottom row
/// starts at `top_inset + height / 2`. Odd dimensions leave one unit
/// of slack at the right/bottom edge.
pub fn compute_layout(
    windows: &[WindowId],
    surface: SurfaceRect,
    free_placement: bool,
) -> Option<Vec<(WindowId, Rect)>> {
    if free_placement {
        trace!("Free placement enabled; skipping tiling pass");
        return None;
    }

    let top = surface.top_inset as i32;
    let half_w = surface.width / 2;
    let half_h = surface.height / 2;
    let mid_x = half_w as i32;
    let mid_y = top + half_h as i32;

    let rects: Vec<Rect> = match windows.len() {
        0 => return None,
        1 => vec![surface.full_rect()],
        2 => vec![
            Rect::new(0, top, half_w, surface.height),
            Rect::new(mid_x, top, half_w, surface.height),
        ],
        3 => vec![
            Rect::new(0, top, half_w, half_h),
            Rect::new(mid_x, top, half_w, half_h),
            // Bottom window spans the sum of the two top halves.
            Rect::new(0, mid_y, half_w + half_w, half_h),
        ],
        4 => vec![
            Rect::new(0, top, half_w, half_h),
            Rect::new(mid_x, top, half_w, half_h),
            Rect::new(0, mid_y, half_w, half_h),
            Rect::new(mid_x, mid_y, half_w, half_h),
        ],
        n => {
            trace!("{n} windows exceed the tiled range; leaving geometry as is");
            return None;
        }
    };

    Some(windows.iter().copied().zip(rects).collect())
}
