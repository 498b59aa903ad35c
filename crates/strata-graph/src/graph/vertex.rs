//! Per-vertex layout record.

use super::{AdjSet, EdgeDirection, Point, Rect, Size, VertexId};

#[derive(Debug, Clone)]
pub struct Vertex<T> {
    tag: Option<T>,
    size: Size,
    /// Level (layer) of this vertex. All vertices of one level are drawn on a single line.
    pub level: i32,
    /// Position among the vertices of the same level, 0-based.
    pub order: usize,
    /// Center of the vertex in the drawing.
    pub pos: Point,
    pub(crate) forward: AdjSet,
    pub(crate) backward: AdjSet,
    pub(crate) source: Option<VertexId>,
    pub(crate) sink: Option<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(tag: Option<T>, size: Size) -> Self {
        Self {
            tag,
            size,
            level: 0,
            order: 0,
            pos: Point::default(),
            forward: AdjSet::default(),
            backward: AdjSet::default(),
            source: None,
            sink: None,
        }
    }

    /// Caller-supplied identity; `None` for dummies.
    pub fn tag(&self) -> Option<&T> {
        self.tag.as_ref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn forward(&self) -> &AdjSet {
        &self.forward
    }

    pub fn backward(&self) -> &AdjSet {
        &self.backward
    }

    pub fn edges(&self, dir: EdgeDirection) -> &AdjSet {
        dir.edges(self)
    }

    /// True source of the long edge this dummy is a segment of.
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// True sink of the long edge this dummy is a segment of.
    pub fn sink(&self) -> Option<VertexId> {
        self.sink
    }

    pub fn is_dummy(&self) -> bool {
        self.source.is_some()
    }

    pub fn top_left(&self) -> Point {
        Point {
            x: self.pos.x - self.size.width / 2.0,
            y: self.pos.y - self.size.height / 2.0,
        }
    }

    pub fn bound_box(&self) -> Rect {
        Rect::from_origin_size(self.top_left(), self.size)
    }

    /// Left edge of the bounding box.
    pub fn left(&self) -> f64 {
        self.pos.x - self.size.width / 2.0
    }

    /// Right edge of the bounding box.
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.width / 2.0
    }
}
