//! Intersection predicates for placed primitives.
//!
//! Everything here is stateless and total. Distances are compared squared,
//! so no square root is taken except when solving the line/circle quadratic.

use glam::Vec2;

/// A circle placed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle placed in world space (top-left corner + size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn w(&self) -> f32 {
        self.size.x
    }

    pub fn h(&self) -> f32 {
        self.size.y
    }
}

/// Two circles overlap when the distance between their centres is no greater
/// than the sum of their radii. Touching circles overlap.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> bool {
    let dr = c1.radius + c2.radius;
    c1.center.distance_squared(c2.center) <= dr * dr
}

pub fn point_in_circle(c: &Circle, p: Vec2) -> bool {
    c.center.distance_squared(p) <= c.radius * c.radius
}

/// Inclusive on all four sides.
pub fn point_in_rect(r: &Rect, p: Vec2) -> bool {
    p.x >= r.x() && p.x <= r.x() + r.w() && p.y >= r.y() && p.y <= r.y() + r.h()
}

/// Segment `a`-`b` against a circle.
///
/// An endpoint inside the circle is a hit. Otherwise the line through both
/// points is intersected with the circle and *both* roots must lie in
/// `[0, 1]`, i.e. the segment must cross the whole chord. A segment that only
/// reaches partway into the circle, or a line that merely grazes it (zero
/// discriminant), is reported as a miss.
pub fn line_circle_intersect(c: &Circle, a: Vec2, b: Vec2) -> bool {
    if point_in_circle(c, a) || point_in_circle(c, b) {
        return true;
    }

    let d = b - a;
    let f = a - c.center;

    let qa = d.length_squared();
    let qb = 2.0 * f.dot(d);
    let qc = f.length_squared() - c.radius * c.radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc <= 0.0 || qa == 0.0 {
        return false;
    }

    let disc = disc.sqrt();
    let t1 = (-qb + disc) / (2.0 * qa);
    let t2 = (-qb - disc) / (2.0 * qa);

    (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2)
}

/// The circle's centre lies in the rectangle, or one of the rectangle's
/// edges (left, top, bottom, right) cuts the circle.
pub fn circle_rect(c: &Circle, r: &Rect) -> bool {
    let (x, y, w, h) = (r.x(), r.y(), r.w(), r.h());
    point_in_rect(r, c.center)
        || line_circle_intersect(c, Vec2::new(x, y), Vec2::new(x, y + h))
        || line_circle_intersect(c, Vec2::new(x, y), Vec2::new(x + w, y))
        || line_circle_intersect(c, Vec2::new(x, y + h), Vec2::new(x + w, y + h))
        || line_circle_intersect(c, Vec2::new(x + w, y), Vec2::new(x + w, y + h))
}

/// Rectangle overlap.
///
/// The "top" rectangle is chosen by comparing heights rather than `y`.
/// Existing games depend on this ordering, so it stays as is: two rectangles
/// of different heights where the taller one sits above may be reported as
/// overlapping even when they are vertically apart. With equal heights `r2`
/// is taken as the top one, which makes the result order-dependent for that
/// case only.
pub fn rect_rect(r1: &Rect, r2: &Rect) -> bool {
    let (left, right) = if r1.x() < r2.x() { (r1, r2) } else { (r2, r1) };
    let (top, bottom) = if r1.h() < r2.h() { (r1, r2) } else { (r2, r1) };

    left.x() + left.w() >= right.x() && top.y() + top.h() >= bottom.y()
}
