//! Persistence bridge between local stroke-store mutations and the
//! remote board store.
//!
//! The bridge owns no state, only sequences calls. Local mutations are
//! optimistic: a failed remote call surfaces an error to the host and
//! never rolls back what was already drawn.

use crate::board::{Board, BoardSummary};
use crate::remote::{BoardStore, RemoteError, RemoteResult};
use crate::stroke::Stroke;
use log::debug;
use std::sync::Arc;

pub struct PersistenceBridge {
    store: Arc<dyn BoardStore>,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Create a named board. The name must be non-empty after trimming;
    /// validation happens before any remote call.
    pub async fn create_board(&self, name: &str) -> RemoteResult<Board> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RemoteError::EmptyBoardName);
        }
        self.store.create_board(name).await
    }

    pub async fn list_boards(&self) -> RemoteResult<Vec<BoardSummary>> {
        self.store.list_boards().await
    }

    /// Fetch a board with its stroke collection for hydration. Malformed
    /// strokes are filtered by `StrokeStore::hydrate`, not here.
    pub async fn load_board(&self, board_id: &str) -> RemoteResult<Board> {
        self.store.get_board(board_id).await
    }

    /// Persist one freshly committed stroke.
    ///
    /// The stroke store was already updated before this call; the append
    /// is fire-and-forget relative to local rendering. A stroke without a
    /// full segment is rejected here and never reaches the wire.
    pub async fn stroke_completed(&self, board_id: &str, stroke: &Stroke) -> RemoteResult<Stroke> {
        if !stroke.is_committable() {
            return Err(RemoteError::StrokeTooShort);
        }
        debug!("appending stroke {} to board {board_id}", stroke.id);
        self.store.append_stroke(board_id, stroke).await
    }

    /// Replace the whole board contents with one request.
    ///
    /// Returns the server's authoritative stroke list for re-hydration;
    /// the server may have reassigned ids or reformatted geometry. The
    /// host must keep at most one replace in flight per board.
    pub async fn save_all(&self, board_id: &str, strokes: &[Stroke]) -> RemoteResult<Vec<Stroke>> {
        debug!("replacing {} strokes on board {board_id}", strokes.len());
        let board = self.store.replace_strokes(board_id, strokes).await?;
        Ok(board.strokes)
    }

    /// Clear is replace-with-empty, with the same re-hydration step.
    /// Confirmation of the irreversible clear is the host's concern.
    pub async fn clear_all(&self, board_id: &str) -> RemoteResult<Vec<Stroke>> {
        self.save_all(board_id, &[]).await
    }

    pub async fn rename_board(&self, board_id: &str, name: &str) -> RemoteResult<Board> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RemoteError::EmptyBoardName);
        }
        self.store.rename_board(board_id, name).await
    }

    pub async fn delete_board(&self, board_id: &str) -> RemoteResult<()> {
        self.store.delete_board(board_id).await
    }
}
