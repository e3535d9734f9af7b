//! Stroke data model and wire encoding.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default pen color for new strokes.
pub const DEFAULT_STROKE_COLOR: &str = "#ffffff";
/// Default pen stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;
/// Erasers default to a wider footprint than pens.
pub const ERASER_STROKE_WIDTH: f64 = 20.0;

/// Pointer tool selector.
///
/// Only `Pen` and `Eraser` produce strokes; `Select` and `Pan` drive
/// camera and host interactions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Pen,
    Eraser,
    Pan,
}

impl ToolKind {
    /// The drawing tool this selector maps to, if any.
    pub fn draw_tool(self) -> Option<DrawTool> {
        match self {
            ToolKind::Pen => Some(DrawTool::Pen),
            ToolKind::Eraser => Some(DrawTool::Eraser),
            ToolKind::Select | ToolKind::Pan => None,
        }
    }
}

/// The tool a stroke was drawn with.
///
/// Determines the compositing rule, never the geometry: eraser strokes
/// are ordinary polylines whose paint operation removes underlying
/// pixels within the stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawTool {
    #[default]
    Pen,
    Eraser,
}

impl DrawTool {
    /// Paint rule for this tool. `tool` is the sole compositing signal;
    /// `color` is cosmetic and renderers ignore it for erasers.
    pub fn composite_op(self) -> CompositeOp {
        match self {
            DrawTool::Pen => CompositeOp::SourceOver,
            DrawTool::Eraser => CompositeOp::DestinationOut,
        }
    }

    /// Default stroke width for this tool.
    pub fn default_width(self) -> f64 {
        match self {
            DrawTool::Pen => DEFAULT_STROKE_WIDTH,
            DrawTool::Eraser => ERASER_STROKE_WIDTH,
        }
    }

    fn default_color(self) -> String {
        match self {
            DrawTool::Pen => DEFAULT_STROKE_COLOR.to_string(),
            DrawTool::Eraser => "#000000".to_string(),
        }
    }
}

/// How a stroke's pixels combine with previously painted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOp {
    /// Draw opaque color over existing content.
    SourceOver,
    /// Remove existing content within the stroke footprint.
    DestinationOut,
}

/// Stroke identifier.
///
/// Client-created strokes get uuid strings; the server may hand back
/// numeric ids and either form is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrokeId {
    Number(serde_json::Number),
    Text(String),
}

impl StrokeId {
    /// Generate a fresh client-side id.
    pub fn generate() -> Self {
        StrokeId::Text(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeId::Number(n) => write!(f, "{n}"),
            StrokeId::Text(s) => f.write_str(s),
        }
    }
}

/// One continuous freehand gesture: an ordered polyline in world space
/// plus render attributes. Points are append-only during capture and
/// immutable after commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub id: StrokeId,
    #[serde(default)]
    pub tool: DrawTool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width")]
    pub stroke_width: f64,
    #[serde(with = "points_wire")]
    pub points: Vec<Point>,
}

fn default_color() -> String {
    DEFAULT_STROKE_COLOR.to_string()
}

fn default_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

impl Stroke {
    /// Open a new stroke at its first world-space point.
    pub fn start(tool: DrawTool, first: Point) -> Self {
        Self {
            id: StrokeId::generate(),
            tool,
            color: tool.default_color(),
            stroke_width: tool.default_width(),
            points: vec![first],
        }
    }

    /// Append a world-space point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points were recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs at least one segment (two points) to be committed
    /// and persisted; a bare click produces nothing visible.
    pub fn is_committable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Decode a persisted `points` value.
///
/// Written as an array of `[x, y]` pairs; accepted on read as pairs, a
/// flat coordinate list `[x0, y0, x1, y1, ...]` (older clients wrote
/// this), or a JSON string encoding either.
pub(crate) fn decode_points(value: &serde_json::Value) -> Result<Vec<Point>, String> {
    use serde_json::Value;

    match value {
        Value::String(s) => {
            let inner: Value = serde_json::from_str(s)
                .map_err(|e| format!("points string is not valid JSON: {e}"))?;
            decode_points(&inner)
        }
        Value::Array(items) if items.iter().all(Value::is_number) => {
            if items.len() % 2 != 0 {
                return Err("flat points list has an odd number of coordinates".to_string());
            }
            let coords: Vec<f64> = items.iter().filter_map(Value::as_f64).collect();
            Ok(coords.chunks(2).map(|c| Point::new(c[0], c[1])).collect())
        }
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let pair = item
                    .as_array()
                    .ok_or_else(|| "expected an [x, y] pair".to_string())?;
                let x = pair
                    .first()
                    .and_then(Value::as_f64)
                    .ok_or_else(|| "pair is missing a numeric x".to_string())?;
                let y = pair
                    .get(1)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| "pair is missing a numeric y".to_string())?;
                Ok(Point::new(x, y))
            })
            .collect(),
        _ => Err("points must be an array or a JSON-encoded string".to_string()),
    }
}

mod points_wire {
    use kurbo::Point;
    use serde::de::{self, Deserializer};
    use serde::ser::{SerializeSeq, Serializer};
    use serde::Deserialize;

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(points.len()))?;
        for point in points {
            seq.serialize_element(&[point.x, point.y])?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        super::decode_points(&raw).map_err(de::Error::custom)
    }
}
