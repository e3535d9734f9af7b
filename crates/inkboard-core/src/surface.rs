//! Drawing surface session: camera, capture, and stroke store for one
//! open board.
//!
//! Runs single-threaded: pointer and wheel events are discrete callbacks
//! processed to completion in arrival order.

use crate::camera::{Camera, ZoomDirection};
use crate::capture::StrokeCapture;
use crate::store::StrokeStore;
use crate::stroke::{Stroke, ToolKind};
use kurbo::{Point, Vec2};

/// Pointer events as delivered by the host view, in device coordinates.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down {
        position: Point,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// One wheel-zoom step. `position` is `None` when the pointer left
    /// the canvas before the event fired.
    Scroll {
        position: Option<Point>,
        direction: ZoomDirection,
    },
}

/// Per-session state of one open board view.
///
/// Discarded when the board view closes; the camera is never persisted.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurface {
    pub camera: Camera,
    capture: StrokeCapture,
    store: StrokeStore,
    tool: ToolKind,
    /// Camera offset and pointer position at the start of a pan drag.
    pan_anchor: Option<(Vec2, Point)>,
}

impl DrawingSurface {
    /// Create an empty surface with the default (select) tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface hydrated with a board's persisted strokes.
    pub fn with_strokes(strokes: Vec<Stroke>) -> Self {
        let mut surface = Self::new();
        surface.hydrate(strokes);
        surface
    }

    /// Switch the active tool. An in-progress stroke keeps the tool it
    /// was opened with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// The stroke currently being drawn, for live preview rendering.
    pub fn preview(&self) -> Option<&Stroke> {
        self.capture.in_progress()
    }

    /// Route one pointer event.
    ///
    /// Returns a stroke when this event committed one: it has already
    /// been appended to the store optimistically, and the host hands it
    /// to the persistence bridge.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<Stroke> {
        match event {
            PointerEvent::Down { position } => {
                let started = self.capture.pointer_down(&self.camera, position, self.tool);
                if !started && self.tool == ToolKind::Pan {
                    self.pan_anchor = Some((self.camera.offset, position));
                }
                None
            }
            PointerEvent::Move { position } => {
                if self.capture.is_capturing() {
                    self.capture.pointer_move(&self.camera, position);
                } else if let Some((offset, start)) = self.pan_anchor {
                    // Drag-to-pan reports absolute offsets: the anchor
                    // offset plus the distance travelled.
                    self.camera.pan_to(offset + (position - start));
                }
                None
            }
            PointerEvent::Up { .. } => {
                self.pan_anchor = None;
                let stroke = self.capture.pointer_up()?;
                self.store.append(stroke.clone());
                Some(stroke)
            }
            PointerEvent::Scroll {
                position,
                direction,
            } => {
                self.camera.zoom(position, direction);
                None
            }
        }
    }

    /// Reset the view to the origin at 1:1 scale.
    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    /// Load persisted strokes into the session.
    pub fn hydrate(&mut self, strokes: Vec<Stroke>) {
        self.store.hydrate(strokes);
    }

    /// Substitute the whole collection, e.g. with a server's
    /// authoritative response after a save-all.
    pub fn replace_all(&mut self, strokes: Vec<Stroke>) {
        self.store.replace_all(strokes);
    }

    /// Optimistic local clear; the bridge's `clear_all` runs afterwards.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Abandon any in-progress stroke (the board view is closing).
    pub fn cancel_capture(&mut self) {
        self.capture.cancel();
        self.pan_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::DrawTool;

    fn draw_segment(surface: &mut DrawingSurface, from: Point, to: Point) -> Option<Stroke> {
        surface.handle_pointer_event(PointerEvent::Down { position: from });
        surface.handle_pointer_event(PointerEvent::Move { position: to });
        surface.handle_pointer_event(PointerEvent::Up { position: to })
    }

    #[test]
    fn test_pen_gesture_commits_and_stores() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pen);

        let stroke = draw_segment(
            &mut surface,
            Point::new(100.0, 100.0),
            Point::new(150.0, 100.0),
        )
        .unwrap();

        assert_eq!(stroke.tool, DrawTool::Pen);
        assert_eq!(
            stroke.points,
            vec![Point::new(100.0, 100.0), Point::new(150.0, 100.0)]
        );
        assert_eq!(surface.store().len(), 1);
        assert_eq!(surface.store().strokes()[0], stroke);
    }

    #[test]
    fn test_click_without_motion_commits_nothing() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pen);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
        });
        let committed = surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(10.0, 10.0),
        });

        assert!(committed.is_none());
        assert!(surface.store().is_empty());
    }

    #[test]
    fn test_order_preservation() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pen);

        let s1 = draw_segment(&mut surface, Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        let s2 = draw_segment(&mut surface, Point::new(2.0, 0.0), Point::new(3.0, 0.0)).unwrap();

        assert_eq!(surface.store().strokes(), &[s1, s2]);
    }

    #[test]
    fn test_pan_drag_moves_camera_absolutely() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pan);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
        });
        surface.handle_pointer_event(PointerEvent::Move {
            position: Point::new(130.0, 90.0),
        });

        assert!((surface.camera.offset.x - 30.0).abs() < f64::EPSILON);
        assert!((surface.camera.offset.y + 10.0).abs() < f64::EPSILON);

        let committed = surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(130.0, 90.0),
        });
        assert!(committed.is_none());
        assert!(surface.store().is_empty());
    }

    #[test]
    fn test_scroll_without_pointer_is_noop() {
        let mut surface = DrawingSurface::new();
        surface.handle_pointer_event(PointerEvent::Scroll {
            position: None,
            direction: ZoomDirection::In,
        });
        assert!((surface.camera.scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drawing_under_transformed_camera() {
        let mut surface = DrawingSurface::new();
        surface.camera.offset = Vec2::new(50.0, 50.0);
        surface.camera.scale = 2.0;
        surface.set_tool(ToolKind::Pen);

        let stroke = draw_segment(
            &mut surface,
            Point::new(150.0, 150.0),
            Point::new(250.0, 150.0),
        )
        .unwrap();

        assert_eq!(
            stroke.points,
            vec![Point::new(50.0, 50.0), Point::new(100.0, 50.0)]
        );
    }

    #[test]
    fn test_tool_switch_mid_gesture_keeps_stroke_tool() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Eraser);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        surface.set_tool(ToolKind::Pen);
        surface.handle_pointer_event(PointerEvent::Move {
            position: Point::new(5.0, 5.0),
        });
        let stroke = surface
            .handle_pointer_event(PointerEvent::Up {
                position: Point::new(5.0, 5.0),
            })
            .unwrap();

        assert_eq!(stroke.tool, DrawTool::Eraser);
    }

    #[test]
    fn test_reset_view_and_clear() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pen);
        draw_segment(&mut surface, Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();

        surface.handle_pointer_event(PointerEvent::Scroll {
            position: Some(Point::new(50.0, 50.0)),
            direction: ZoomDirection::In,
        });
        assert!(surface.camera.scale > 1.0);

        surface.reset_view();
        assert!((surface.camera.scale - 1.0).abs() < f64::EPSILON);

        surface.clear();
        assert!(surface.store().is_empty());
    }

    #[test]
    fn test_cancel_capture_abandons_gesture() {
        let mut surface = DrawingSurface::new();
        surface.set_tool(ToolKind::Pen);

        surface.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        surface.handle_pointer_event(PointerEvent::Move {
            position: Point::new(5.0, 5.0),
        });
        surface.cancel_capture();

        let committed = surface.handle_pointer_event(PointerEvent::Up {
            position: Point::new(5.0, 5.0),
        });
        assert!(committed.is_none());
        assert!(surface.store().is_empty());
    }
}
