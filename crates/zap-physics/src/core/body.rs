use glam::Vec2;

use crate::api::config::Arena;
use crate::api::types::{BodyId, WorldId};
use crate::core::shape::{Edge, Shape};

/// Kinematic state shared by everything that moves in a [`World`](crate::World).
///
/// Position is the top-left corner of the body's footprint, in pixels, with
/// Y growing downward. Velocity is in pixels per second. A mass of zero marks
/// an immovable body that forces never accelerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Position in world space (top-left of the footprint).
    pub pos: Vec2,
    /// Velocity in pixels per second.
    pub vel: Vec2,
    mass: f32,
    prev_pos: Vec2,
    shape: Option<Shape>,
    world: Option<WorldId>,
}

impl Body {
    /// Create a massless, motionless body at `pos`.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mass: 0.0,
            prev_pos: pos,
            shape: None,
            world: None,
        }
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.set_mass(mass);
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    // -- State --

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass in kilograms. Negative values are clamped to zero.
    pub fn set_mass(&mut self, mass: f32) {
        if mass < 0.0 {
            log::warn!("Body mass must not be negative (got {mass}), using 0");
            self.mass = 0.0;
        } else {
            self.mass = mass;
        }
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Attach a collision footprint, replacing any previous one.
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = Some(shape);
    }

    pub fn clear_shape(&mut self) -> Option<Shape> {
        self.shape.take()
    }

    /// Position before the most recent integration step.
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    /// The world currently tracking this body, if any.
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    pub(crate) fn set_world(&mut self, world: Option<WorldId>) {
        self.world = world;
    }

    // -- Dynamics --

    /// Advance the position by one tick of `dt` milliseconds.
    /// The position before the move is kept for [`revert_position`](Self::revert_position).
    pub fn update(&mut self, dt: f32) {
        self.prev_pos = self.pos;
        self.pos += self.vel * dt / 1000.0;
    }

    /// Apply an impulse-style force: `vel += force / mass`.
    /// Massless bodies ignore forces entirely.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.mass == 0.0 {
            return;
        }
        self.vel += force / self.mass;
    }

    /// Undo the last integration step.
    pub fn revert_position(&mut self) {
        self.pos = self.prev_pos;
    }

    /// Undo the last integration step on the X axis only.
    pub fn revert_x(&mut self) {
        self.pos.x = self.prev_pos.x;
    }

    /// Undo the last integration step on the Y axis only.
    pub fn revert_y(&mut self) {
        self.pos.y = self.prev_pos.y;
    }

    // -- Queries --

    /// Whether the footprints of the two bodies overlap.
    /// Bodies without a shape never overlap anything.
    pub fn overlaps(&self, other: &Body) -> bool {
        match (&self.shape, &other.shape) {
            (Some(a), Some(b)) => a.overlaps(self.pos, b, other.pos),
            _ => false,
        }
    }

    /// The arena edge this body has reached, if it has a shape.
    pub fn check_edge(&self, arena: Arena) -> Option<Edge> {
        self.shape.as_ref()?.check_edge(self.pos, arena)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

/// What a body collided with, handed to [`Kinematic::collide`].
#[derive(Debug)]
pub enum Contact<'a, T: ?Sized> {
    /// Another tracked body.
    Body { id: BodyId, other: &'a T },
    /// An edge of the arena.
    Edge(Edge),
}

impl<'a, T: ?Sized> Contact<'a, T> {
    pub fn edge(&self) -> Option<Edge> {
        match self {
            Contact::Edge(edge) => Some(*edge),
            Contact::Body { .. } => None,
        }
    }

    pub fn other(&self) -> Option<&'a T> {
        match self {
            Contact::Body { other, .. } => Some(*other),
            Contact::Edge(_) => None,
        }
    }

    pub fn other_id(&self) -> Option<BodyId> {
        match self {
            Contact::Body { id, .. } => Some(*id),
            Contact::Edge(_) => None,
        }
    }
}

/// Anything the world can simulate: a type that owns a [`Body`] and
/// optionally reacts to collisions.
///
/// Games implement this for their own object types (paddles, balls, players)
/// and decide in [`collide`](Kinematic::collide) how to respond, typically by
/// reverting the position and flipping or zeroing velocity. The world never
/// corrects positions by itself.
pub trait Kinematic {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Per-tick update. Override to add per-object work (animation, AI);
    /// call `self.body_mut().update(dt)` to keep the body moving.
    ///
    /// The world checks the body for collisions after this returns, even if
    /// the override never moved it.
    fn update(&mut self, dt: f32) {
        self.body_mut().update(dt);
    }

    /// Collision response hook. Does nothing by default.
    fn collide(&mut self, _contact: Contact<'_, Self>) {}
}

impl Kinematic for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}
