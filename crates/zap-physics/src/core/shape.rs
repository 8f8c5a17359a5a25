use glam::Vec2;

use crate::api::config::Arena;
use crate::core::geometry::{self, Circle, Rect};

/// Collision footprint of a body. Lives inside its [`Body`](crate::Body)
/// and is anchored at the body's position, which is always the top-left
/// corner of the footprint's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
}

/// An arena edge crossed by a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Shape::Rectangle { width, height }
    }

    /// Width and height of the bounding box.
    pub fn bounding_size(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius * 2.0),
            Shape::Rectangle { width, height } => Vec2::new(width, height),
        }
    }

    /// Centre of the shape for a body at `pos`.
    pub fn center(&self, pos: Vec2) -> Vec2 {
        pos + self.bounding_size() * 0.5
    }

    /// Place the bounding box of this shape at `pos`.
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::new(pos, self.bounding_size())
    }

    /// Place this shape as a circle at `pos`. `None` for rectangles.
    pub fn circle_at(&self, pos: Vec2) -> Option<Circle> {
        match *self {
            Shape::Circle { radius } => Some(Circle::new(pos + Vec2::splat(radius), radius)),
            Shape::Rectangle { .. } => None,
        }
    }

    /// Whether this shape at `pos` overlaps `other` at `other_pos`.
    /// Circle/rectangle pairs are always tested circle-first, so the answer
    /// does not depend on which side asks.
    pub fn overlaps(&self, pos: Vec2, other: &Shape, other_pos: Vec2) -> bool {
        match (*self, *other) {
            (Shape::Circle { radius: r1 }, Shape::Circle { radius: r2 }) => geometry::circle_circle(
                &Circle::new(pos + Vec2::splat(r1), r1),
                &Circle::new(other_pos + Vec2::splat(r2), r2),
            ),
            (Shape::Circle { radius }, Shape::Rectangle { .. }) => geometry::circle_rect(
                &Circle::new(pos + Vec2::splat(radius), radius),
                &other.rect_at(other_pos),
            ),
            (Shape::Rectangle { .. }, Shape::Circle { radius }) => geometry::circle_rect(
                &Circle::new(other_pos + Vec2::splat(radius), radius),
                &self.rect_at(pos),
            ),
            (Shape::Rectangle { .. }, Shape::Rectangle { .. }) => {
                geometry::rect_rect(&self.rect_at(pos), &other.rect_at(other_pos))
            }
        }
    }

    /// The arena edge this shape at `pos` has reached, if any.
    ///
    /// Edges are tested left, right, top, bottom and the first hit wins, so a
    /// body in the top-left corner reports [`Edge::Left`]. The near edges
    /// trigger once the body is past them; the far edges trigger as soon as
    /// the footprint touches them.
    pub fn check_edge(&self, pos: Vec2, arena: Arena) -> Option<Edge> {
        // Circles are positioned by their top-left too, so their extent is
        // the diameter.
        let size = self.bounding_size();
        if pos.x < 0.0 {
            Some(Edge::Left)
        } else if pos.x + size.x >= arena.width {
            Some(Edge::Right)
        } else if pos.y < 0.0 {
            Some(Edge::Top)
        } else if pos.y + size.y >= arena.height {
            Some(Edge::Bottom)
        } else {
            None
        }
    }
}
