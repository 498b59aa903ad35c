//! Orientation transforms.
//!
//! The layout phases always work top-down: levels are rows and x runs along a level. For
//! [`Orientation::LeftRight`] sizes are transposed on the way in and positions on the way
//! out. Transposition is its own inverse, so the same helpers serve both directions.

use crate::graph::{Point, Rect, Size};
use crate::model::Orientation;

pub fn size(size: Size, orientation: Orientation) -> Size {
    match orientation {
        Orientation::TopDown => size,
        Orientation::LeftRight => Size::new(size.height, size.width),
    }
}

pub fn point(p: Point, orientation: Orientation) -> Point {
    match orientation {
        Orientation::TopDown => p,
        Orientation::LeftRight => Point::new(p.y, p.x),
    }
}

pub fn rect(r: Rect, orientation: Orientation) -> Rect {
    match orientation {
        Orientation::TopDown => r,
        Orientation::LeftRight => Rect::new(r.y, r.x, r.height, r.width),
    }
}
