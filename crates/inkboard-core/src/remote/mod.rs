//! Remote board store abstraction.
//!
//! The backend is an external collaborator exposing a small contract:
//! create/list/fetch boards, append one stroke, replace all strokes.
//! Transport and auth stay behind this boundary.

mod http;
mod memory;

pub use http::HttpBoardStore;
pub use memory::MemoryBoardStore;

use crate::board::{Board, BoardSummary};
use crate::stroke::Stroke;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors surfaced by remote board operations.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("board name must not be empty")]
    EmptyBoardName,
    #[error("a stroke needs at least two points to be persisted")]
    StrokeTooShort,
    #[error("board not found: {0}")]
    NotFound(String),
    #[error("unauthorized: the session credential was rejected")]
    Unauthorized,
    #[error("server rejected the request with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("could not decode server response: {0}")]
    Decode(String),
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Boxed future for async store operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Contract to the backend board store.
///
/// Every call is a single remote operation; the engine never retries,
/// and a failure is a terminal outcome for that one call.
pub trait BoardStore: Send + Sync {
    /// Create a named board. The server assigns the id and timestamps.
    fn create_board(&self, name: &str) -> BoxFuture<'_, RemoteResult<Board>>;

    /// Boards of the current authenticated user, in listing order.
    fn list_boards(&self) -> BoxFuture<'_, RemoteResult<Vec<BoardSummary>>>;

    /// Fetch a board together with its full stroke collection.
    fn get_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<Board>>;

    /// Append one stroke. The server may assign or override the id; the
    /// persisted form is returned.
    fn append_stroke(&self, board_id: &str, stroke: &Stroke) -> BoxFuture<'_, RemoteResult<Stroke>>;

    /// Replace the whole stroke collection (empty clears) and return
    /// the updated board.
    fn replace_strokes(
        &self,
        board_id: &str,
        strokes: &[Stroke],
    ) -> BoxFuture<'_, RemoteResult<Board>>;

    /// Rename a board.
    fn rename_board(&self, id: &str, name: &str) -> BoxFuture<'_, RemoteResult<Board>>;

    /// Delete a board outright.
    fn delete_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<()>>;
}

/// Single-future executor for driving store calls in tests.
#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
