//! Camera model for pan/zoom transforms.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest zoom factor the camera will reach.
pub const MIN_SCALE: f64 = 0.1;
/// Largest zoom factor the camera will reach.
pub const MAX_SCALE: f64 = 5.0;
/// Multiplicative step applied per wheel-zoom event.
pub const ZOOM_STEP: f64 = 1.1;

/// Direction of a single wheel-zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Camera manages the view transform for the infinite canvas.
///
/// It handles panning (translation) and uniform zooming (scaling),
/// converting between device coordinates (as reported by the pointer)
/// and world coordinates (the fixed space strokes are stored in).
/// Camera state is per-session and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in device units.
    pub offset: Vec2,
    /// Current uniform zoom factor.
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Camera {
    /// Create a camera at the origin with 1:1 scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// The affine transform converting world coordinates to device coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// The inverse transform for input handling (device to world).
    ///
    /// The scale clamp keeps `scale` strictly positive, so the inversion
    /// is always well defined.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    /// Convert a device point to world coordinates.
    pub fn device_to_world(&self, device_point: Point) -> Point {
        self.inverse_transform() * device_point
    }

    /// Convert a world point to device coordinates.
    pub fn world_to_device(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Apply one zoom step, keeping the world point under `pivot` fixed
    /// on screen.
    ///
    /// `pivot` is `None` when the wheel event arrives without a usable
    /// pointer position (the pointer left the canvas); the step is then
    /// skipped rather than computed against undefined input.
    pub fn zoom(&mut self, pivot: Option<Point>, direction: ZoomDirection) {
        let Some(pivot) = pivot else {
            return;
        };

        let factor = match direction {
            ZoomDirection::In => ZOOM_STEP,
            ZoomDirection::Out => 1.0 / ZOOM_STEP,
        };
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }

        // Convert the pivot to world before rescaling
        let world_point = self.device_to_world(pivot);

        self.scale = new_scale;

        // Adjust the offset so world_point stays under the pivot
        let moved = self.world_to_device(world_point);
        self.offset += Vec2::new(pivot.x - moved.x, pivot.y - moved.y);
    }

    /// Replace the pan offset. Drag-to-pan reports absolute device-space
    /// offsets, not deltas.
    pub fn pan_to(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Reset to the origin at 1:1 scale.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.scale = 1.0;
    }
}
