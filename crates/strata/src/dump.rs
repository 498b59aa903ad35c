use std::hash::Hash;

use serde::Serialize;

use crate::drawing::Layout;
use crate::model::Orientation;

/// Serializable view of a finished layout, in caller coordinates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot<'a, T> {
    pub orientation: Orientation,
    pub width: f64,
    pub height: f64,
    pub crossings: usize,
    pub vertices: Vec<VertexSnapshot<'a, T>>,
    pub edges: Vec<EdgeSnapshot<'a, T>>,
}

#[derive(Debug, Serialize)]
pub struct VertexSnapshot<'a, T> {
    pub id: &'a T,
    pub level: i32,
    pub order: usize,
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct EdgeSnapshot<'a, T> {
    pub from: &'a T,
    pub to: &'a T,
    pub points: Vec<[f64; 2]>,
}

impl<'a, T: Eq + Hash> LayoutSnapshot<'a, T> {
    pub fn from_layout(layout: &'a Layout<T>) -> Self {
        let vertices = layout
            .vertices()
            .filter_map(|id| {
                let rect = layout.vertex(id)?;
                Some(VertexSnapshot {
                    id,
                    level: layout.level_of(id)?,
                    order: layout.order_of(id)?,
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                })
            })
            .collect();

        let edges = layout
            .caller_edges()
            .map(|(from, to)| EdgeSnapshot {
                from,
                to,
                points: layout
                    .edge(from, to)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| [p.x, p.y])
                    .collect(),
            })
            .collect();

        let area = layout.drawing_area();
        Self {
            orientation: layout.orientation(),
            width: area.width,
            height: area.height,
            crossings: layout.crossing_count(),
            vertices,
            edges,
        }
    }
}
