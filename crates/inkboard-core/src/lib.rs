//! Inkboard Core Library
//!
//! Platform-agnostic drawing-surface engine for the Inkboard whiteboard
//! client: the pan/zoom camera, the stroke capture state machine, the
//! in-memory stroke store, and the persistence bridge reconciling it
//! with the remote board store.

pub mod board;
pub mod bridge;
pub mod camera;
pub mod capture;
pub mod remote;
pub mod session;
pub mod store;
pub mod stroke;
pub mod surface;

pub use board::{Board, BoardSummary};
pub use bridge::PersistenceBridge;
pub use camera::{Camera, ZoomDirection, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
pub use capture::{CaptureState, StrokeCapture};
pub use remote::{BoardStore, HttpBoardStore, MemoryBoardStore, RemoteError, RemoteResult};
pub use session::{Session, UserProfile};
pub use store::StrokeStore;
pub use stroke::{CompositeOp, DrawTool, Stroke, StrokeId, ToolKind};
pub use surface::{DrawingSurface, PointerEvent};
