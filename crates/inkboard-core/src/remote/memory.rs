//! In-memory board store for tests and ephemeral use.
//!
//! Behaves like the real backend: it validates names, reassigns stroke
//! ids on write, and returns authoritative board state from replace
//! calls.

use super::{BoardStore, BoxFuture, RemoteError, RemoteResult};
use crate::board::{Board, BoardSummary};
use crate::stroke::{Stroke, StrokeId};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

pub struct MemoryBoardStore {
    boards: RwLock<HashMap<String, Board>>,
    next_id: AtomicI64,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self {
            boards: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn fresh_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Stamp a server-side numeric id onto a stroke, exercising the
    /// client contract that persisted ids may change form.
    fn persist_stroke(&self, stroke: &Stroke) -> Stroke {
        let mut persisted = stroke.clone();
        persisted.id = StrokeId::Number(self.fresh_id().into());
        persisted
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> RemoteError {
    RemoteError::Transport(format!("lock error: {e}"))
}

impl BoardStore for MemoryBoardStore {
    fn create_board(&self, name: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let name = name.trim().to_string();
        Box::pin(async move {
            if name.is_empty() {
                return Err(RemoteError::EmptyBoardName);
            }

            let board = Board {
                id: self.fresh_id().to_string(),
                title: name,
                created_at: String::new(),
                updated_at: String::new(),
                strokes: Vec::new(),
            };

            let mut boards = self.boards.write().map_err(lock_error)?;
            boards.insert(board.id.clone(), board.clone());
            Ok(board)
        })
    }

    fn list_boards(&self) -> BoxFuture<'_, RemoteResult<Vec<BoardSummary>>> {
        Box::pin(async move {
            let boards = self.boards.read().map_err(lock_error)?;
            let mut summaries: Vec<BoardSummary> = boards.values().map(Into::into).collect();
            summaries.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(summaries)
        })
    }

    fn get_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let id = id.to_string();
        Box::pin(async move {
            let boards = self.boards.read().map_err(lock_error)?;
            boards
                .get(&id)
                .cloned()
                .ok_or(RemoteError::NotFound(id))
        })
    }

    fn append_stroke(&self, board_id: &str, stroke: &Stroke) -> BoxFuture<'_, RemoteResult<Stroke>> {
        let board_id = board_id.to_string();
        let stroke = stroke.clone();
        Box::pin(async move {
            if !stroke.is_committable() {
                return Err(RemoteError::StrokeTooShort);
            }

            let mut boards = self.boards.write().map_err(lock_error)?;
            let board = boards
                .get_mut(&board_id)
                .ok_or(RemoteError::NotFound(board_id))?;

            let persisted = self.persist_stroke(&stroke);
            board.strokes.push(persisted.clone());
            Ok(persisted)
        })
    }

    fn replace_strokes(
        &self,
        board_id: &str,
        strokes: &[Stroke],
    ) -> BoxFuture<'_, RemoteResult<Board>> {
        let board_id = board_id.to_string();
        let strokes = strokes.to_vec();
        Box::pin(async move {
            let mut boards = self.boards.write().map_err(lock_error)?;
            let board = boards
                .get_mut(&board_id)
                .ok_or(RemoteError::NotFound(board_id))?;

            board.strokes = strokes.iter().map(|s| self.persist_stroke(s)).collect();
            Ok(board.clone())
        })
    }

    fn rename_board(&self, id: &str, name: &str) -> BoxFuture<'_, RemoteResult<Board>> {
        let id = id.to_string();
        let name = name.trim().to_string();
        Box::pin(async move {
            if name.is_empty() {
                return Err(RemoteError::EmptyBoardName);
            }

            let mut boards = self.boards.write().map_err(lock_error)?;
            let board = boards.get_mut(&id).ok_or(RemoteError::NotFound(id))?;
            board.title = name;
            Ok(board.clone())
        })
    }

    fn delete_board(&self, id: &str) -> BoxFuture<'_, RemoteResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut boards = self.boards.write().map_err(lock_error)?;
            boards
                .remove(&id)
                .map(|_| ())
                .ok_or(RemoteError::NotFound(id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::block_on;
    use crate::stroke::DrawTool;
    use kurbo::Point;

    fn stroke() -> Stroke {
        let mut s = Stroke::start(DrawTool::Pen, Point::new(0.0, 0.0));
        s.add_point(Point::new(10.0, 10.0));
        s
    }

    #[test]
    fn test_create_rejects_blank_names() {
        let store = MemoryBoardStore::new();
        assert!(matches!(
            block_on(store.create_board("   ")),
            Err(RemoteError::EmptyBoardName)
        ));
    }

    #[test]
    fn test_create_trims_name() {
        let store = MemoryBoardStore::new();
        let board = block_on(store.create_board("  sketches  ")).unwrap();
        assert_eq!(board.title, "sketches");
    }

    #[test]
    fn test_list_and_get() {
        let store = MemoryBoardStore::new();
        let a = block_on(store.create_board("a")).unwrap();
        let b = block_on(store.create_board("b")).unwrap();

        let listed = block_on(store.list_boards()).unwrap();
        assert_eq!(listed.len(), 2);

        let fetched = block_on(store.get_board(&a.id)).unwrap();
        assert_eq!(fetched.title, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_get_unknown_board() {
        let store = MemoryBoardStore::new();
        assert!(matches!(
            block_on(store.get_board("nope")),
            Err(RemoteError::NotFound(_))
        ));
    }

    #[test]
    fn test_append_assigns_server_id() {
        let store = MemoryBoardStore::new();
        let board = block_on(store.create_board("a")).unwrap();

        let local = stroke();
        let persisted = block_on(store.append_stroke(&board.id, &local)).unwrap();

        assert!(matches!(persisted.id, StrokeId::Number(_)));
        assert_ne!(persisted.id, local.id);
        assert_eq!(persisted.points, local.points);

        let fetched = block_on(store.get_board(&board.id)).unwrap();
        assert_eq!(fetched.strokes.len(), 1);
    }

    #[test]
    fn test_append_rejects_short_strokes() {
        let store = MemoryBoardStore::new();
        let board = block_on(store.create_board("a")).unwrap();

        let dot = Stroke::start(DrawTool::Pen, Point::ZERO);
        assert!(matches!(
            block_on(store.append_stroke(&board.id, &dot)),
            Err(RemoteError::StrokeTooShort)
        ));
    }

    #[test]
    fn test_replace_strokes_is_authoritative() {
        let store = MemoryBoardStore::new();
        let board = block_on(store.create_board("a")).unwrap();
        block_on(store.append_stroke(&board.id, &stroke())).unwrap();

        let replaced = block_on(store.replace_strokes(&board.id, &[stroke(), stroke()])).unwrap();
        assert_eq!(replaced.strokes.len(), 2);

        let cleared = block_on(store.replace_strokes(&board.id, &[])).unwrap();
        assert!(cleared.strokes.is_empty());
    }

    #[test]
    fn test_rename_and_delete() {
        let store = MemoryBoardStore::new();
        let board = block_on(store.create_board("a")).unwrap();

        let renamed = block_on(store.rename_board(&board.id, "b")).unwrap();
        assert_eq!(renamed.title, "b");

        block_on(store.delete_board(&board.id)).unwrap();
        assert!(matches!(
            block_on(store.get_board(&board.id)),
            Err(RemoteError::NotFound(_))
        ));
    }
}
