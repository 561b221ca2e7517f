//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`. Empty rectangles produce nothing.
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    if rect.is_empty() {
        return Vec::new();
    }

    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}
