use serde::{Deserialize, Serialize};

/// Circular collision body (bird, collectibles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Axis-aligned rectangle (pipe halves, screen bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Circle-vs-rect overlap via closest-point distance.
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let nearest_x = circle.x.clamp(rect.x, rect.right());
    let nearest_y = circle.y.clamp(rect.y, rect.bottom());
    let dx = circle.x - nearest_x;
    let dy = circle.y - nearest_y;
    dx * dx + dy * dy < circle.radius * circle.radius
}

/// Circle-vs-circle overlap via combined-radius distance.
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let reach = a.radius + b.radius;
    dx * dx + dy * dy < reach * reach
}

/// Euclidean distance between two points.
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}
