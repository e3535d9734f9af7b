//! Stroke capture state machine.
//!
//! Pure (state, event) transitions over pointer input, independent of
//! any UI framework's render cycle. Device positions are converted to
//! world space through the camera before being recorded.

use crate::camera::Camera;
use crate::stroke::{Stroke, ToolKind};
use kurbo::Point;

/// Capture states. At most one stroke is in flight per surface.
#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    /// A stroke is being recorded. Its tool and style were fixed at
    /// pointer-down and are not re-evaluated per point.
    Capturing(Stroke),
}

/// Turns pointer-down/move/up sequences into committed strokes.
#[derive(Debug, Clone, Default)]
pub struct StrokeCapture {
    state: CaptureState,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is currently being recorded.
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing(_))
    }

    /// The stroke being recorded, for live preview rendering.
    pub fn in_progress(&self) -> Option<&Stroke> {
        match &self.state {
            CaptureState::Capturing(stroke) => Some(stroke),
            CaptureState::Idle => None,
        }
    }

    /// Begin a stroke if the selector is a drawing tool.
    ///
    /// Returns whether a capture started. Pan and select stay idle so
    /// the host can run a camera interaction instead. A down event while
    /// already capturing is ignored; the in-flight stroke keeps going.
    pub fn pointer_down(&mut self, camera: &Camera, device: Point, tool: ToolKind) -> bool {
        if self.is_capturing() {
            return false;
        }
        let Some(draw_tool) = tool.draw_tool() else {
            return false;
        };

        let first = camera.device_to_world(device);
        self.state = CaptureState::Capturing(Stroke::start(draw_tool, first));
        true
    }

    /// Append the pointer position to the in-progress stroke.
    ///
    /// Every move event is recorded; there is no distance decimation.
    pub fn pointer_move(&mut self, camera: &Camera, device: Point) {
        if let CaptureState::Capturing(stroke) = &mut self.state {
            stroke.add_point(camera.device_to_world(device));
        }
    }

    /// Close the gesture and return the committed stroke.
    ///
    /// A stroke with fewer than two points never made a visible segment
    /// and is discarded.
    pub fn pointer_up(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            CaptureState::Capturing(stroke) if stroke.is_committable() => Some(stroke),
            _ => None,
        }
    }

    /// Abandon the in-progress stroke, if any (e.g. the board view is
    /// closing mid-gesture).
    pub fn cancel(&mut self) {
        self.state = CaptureState::Idle;
    }
}
