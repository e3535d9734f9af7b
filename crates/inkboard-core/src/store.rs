//! In-memory stroke store for the currently open board.

use crate::stroke::Stroke;
use log::warn;

/// Ordered stroke collection. Index order is z-order: later strokes
/// paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with persisted strokes.
    ///
    /// Strokes carrying no points are dropped rather than failing the
    /// load: a board with some corrupt strokes still shows the valid
    /// ones.
    pub fn hydrate(&mut self, strokes: Vec<Stroke>) {
        let total = strokes.len();
        self.strokes = strokes.into_iter().filter(|s| !s.is_empty()).collect();

        let dropped = total - self.strokes.len();
        if dropped > 0 {
            warn!("dropped {dropped} pointless strokes during hydration");
        }
    }

    /// Add one committed stroke at the top of the z-order.
    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Discard the current collection and substitute the given one.
    pub fn replace_all(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }

    /// Clear is replace-with-empty.
    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Strokes in paint order (back to front).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Copy of the collection, for whole-board save requests.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
