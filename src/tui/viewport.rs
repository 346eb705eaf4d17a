//! Pure zoom/pan state for the mind-map canvas.
//!
//! Content space uses the layout engine's units; screen space is terminal
//! cells. The projection is `screen = content * zoom + pan`. Layout never
//! reruns here — every operation is a pure transform of `{zoom, pan}`
//! plus an injected container measurement, so the controller is testable
//! without a terminal.

use crate::layout::tidy::Bounds;

pub const DEFAULT_ZOOM: f32 = 0.10;
pub const MIN_ZOOM: f32 = 0.03;
pub const MAX_ZOOM: f32 = 0.40;

/// Cells kept clear on each side when fitting.
const FIT_PADDING: f32 = 2.0;

/// Multiplier for the discrete `+`/`-` zoom steps.
pub const STEP_FACTOR: f32 = 1.15;
/// Wheel-zoom multipliers (scroll up / scroll down).
pub const WHEEL_IN: f32 = 1.08;
pub const WHEEL_OUT: f32 = 0.92;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    /// Fit `bounds` into a `container_w` × `container_h` cell area.
    ///
    /// Never upscales past 1×; degenerate bounds (non-finite or
    /// non-positive fit ratio) fall back to the neutral default zoom.
    /// The content box is centred at the chosen zoom.
    pub fn fit_to_bounds(container_w: f32, container_h: f32, bounds: &Bounds) -> Self {
        let avail_w = (container_w - FIT_PADDING * 2.0).max(1.0);
        let avail_h = (container_h - FIT_PADDING * 2.0).max(1.0);
        let fit = (avail_w / bounds.width)
            .min(avail_h / bounds.height)
            .min(1.0);
        let zoom = if fit.is_finite() && fit > 0.0 {
            clamp_zoom(fit)
        } else {
            DEFAULT_ZOOM
        };

        let content_w = bounds.width * zoom;
        let content_h = bounds.height * zoom;
        Self {
            zoom,
            pan_x: (container_w - content_w) / 2.0 - bounds.min_x * zoom,
            pan_y: (container_h - content_h) / 2.0 - bounds.min_y * zoom,
        }
    }

    /// Zoom by `factor`, keeping the content point under the screen
    /// anchor fixed. Holds even when the factor clamps.
    pub fn zoom_around(self, factor: f32, anchor_x: f32, anchor_y: f32) -> Self {
        let zoom = clamp_zoom(self.zoom * factor);
        let scale = zoom / self.zoom;
        Self {
            zoom,
            pan_x: anchor_x - (anchor_x - self.pan_x) * scale,
            pan_y: anchor_y - (anchor_y - self.pan_y) * scale,
        }
    }

    /// Pure translation. Pan is never clamped; only zoom is bounded.
    pub fn pan_by(self, dx: f32, dy: f32) -> Self {
        Self {
            pan_x: self.pan_x + dx,
            pan_y: self.pan_y + dy,
            ..self
        }
    }

    /// Project a content point to screen cells.
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.zoom + self.pan_x, y * self.zoom + self.pan_y)
    }

    /// Project a screen cell back to content space.
    pub fn to_content(&self, sx: f32, sy: f32) -> (f32, f32) {
        ((sx - self.pan_x) / self.zoom, (sy - self.pan_y) / self.zoom)
    }
}

fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min_x: f32, min_y: f32, width: f32, height: f32) -> Bounds {
        Bounds {
            min_x,
            min_y,
            max_x: min_x + width,
            max_y: min_y + height,
            width,
            height,
        }
    }

    #[test]
    fn fit_never_exceeds_one() {
        // Content smaller than the container would otherwise upscale.
        let v = Viewport::fit_to_bounds(200.0, 100.0, &bounds(0.0, 0.0, 10.0, 5.0));
        assert!(v.zoom <= 1.0);
        assert!(v.zoom <= MAX_ZOOM);
    }

    #[test]
    fn fit_keeps_zoom_in_bounds() {
        let v = Viewport::fit_to_bounds(80.0, 24.0, &bounds(0.0, 0.0, 10_000.0, 10_000.0));
        assert!(v.zoom >= MIN_ZOOM);
        let v = Viewport::fit_to_bounds(500.0, 500.0, &bounds(0.0, 0.0, 400.0, 400.0));
        assert!(v.zoom <= MAX_ZOOM);
    }

    #[test]
    fn fit_centers_the_content_box() {
        let b = bounds(100.0, 50.0, 1000.0, 400.0);
        let v = Viewport::fit_to_bounds(120.0, 40.0, &b);
        let (cx, cy) = v.to_screen(b.min_x + b.width / 2.0, b.min_y + b.height / 2.0);
        assert!((cx - 60.0).abs() < 0.5, "content midpoint x at {cx}");
        assert!((cy - 20.0).abs() < 0.5, "content midpoint y at {cy}");
    }

    #[test]
    fn degenerate_bounds_fall_back_to_default_zoom() {
        let zero = Bounds {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
            width: f32::NAN,
            height: f32::NAN,
        };
        let v = Viewport::fit_to_bounds(80.0, 24.0, &zero);
        assert_eq!(v.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn zoom_around_preserves_the_anchor_point() {
        let v = Viewport {
            zoom: 0.10,
            pan_x: 7.0,
            pan_y: -3.0,
        };
        let (ax, ay) = (31.0, 12.0);
        let before = v.to_content(ax, ay);
        let after_state = v.zoom_around(WHEEL_IN, ax, ay);
        let after = after_state.to_content(ax, ay);
        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);
    }

    #[test]
    fn zoom_around_preserves_the_anchor_under_clamping() {
        let v = Viewport {
            zoom: MAX_ZOOM,
            pan_x: 2.0,
            pan_y: 2.0,
        };
        let (ax, ay) = (10.0, 10.0);
        let before = v.to_content(ax, ay);
        let after_state = v.zoom_around(100.0, ax, ay);
        assert_eq!(after_state.zoom, MAX_ZOOM);
        let after = after_state.to_content(ax, ay);
        assert!((before.0 - after.0).abs() < 1e-3);
        assert!((before.1 - after.1).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_always_clamped() {
        let v = Viewport::default();
        assert_eq!(v.zoom_around(1000.0, 0.0, 0.0).zoom, MAX_ZOOM);
        assert_eq!(v.zoom_around(0.0001, 0.0, 0.0).zoom, MIN_ZOOM);
    }

    #[test]
    fn pan_is_unclamped() {
        let v = Viewport::default().pan_by(-10_000.0, 10_000.0);
        assert_eq!(v.pan_x, -10_000.0);
        assert_eq!(v.pan_y, 10_000.0);
        assert_eq!(v.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn pan_accumulates() {
        let v = Viewport::default().pan_by(3.0, 4.0).pan_by(-1.0, 2.0);
        assert_eq!((v.pan_x, v.pan_y), (2.0, 6.0));
    }

    #[test]
    fn screen_content_round_trip() {
        let v = Viewport {
            zoom: 0.25,
            pan_x: 5.0,
            pan_y: -2.0,
        };
        let (sx, sy) = v.to_screen(380.0, 44.0);
        let (x, y) = v.to_content(sx, sy);
        assert!((x - 380.0).abs() < 1e-3);
        assert!((y - 44.0).abs() < 1e-3);
    }
}
