use glam::Vec2;

use crate::api::config::{Arena, WorldConfig};
use crate::api::types::{BodyId, WorldId};
use crate::core::body::{Body, Contact, Kinematic};
use crate::core::shape::Edge;

/// A collision detected during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// `body` moved into `other`. Both response hooks were called.
    Pair { body: BodyId, other: BodyId },
    /// `body` reached an arena edge. Only its own hook was called.
    Edge { body: BodyId, edge: Edge },
}

struct Slot<T> {
    id: BodyId,
    object: T,
}

/// Simulation container: owns the tracked bodies, applies gravity, and
/// detects collisions between bodies and against the arena edges.
///
/// Bodies are kept in insertion order and processed in that order every
/// tick, so results are deterministic for a fixed insertion sequence and dt.
/// Detection is an exhaustive pairwise scan (O(n²) per tick), which is fine
/// for tens of bodies and nothing more.
pub struct World<T: Kinematic = Body> {
    id: WorldId,
    slots: Vec<Slot<T>>,
    next_id: u32,
    gravity: f32,
    collide_with_window: bool,
    arena: Arena,
    collision_events: Vec<CollisionEvent>,
}

impl<T: Kinematic> World<T> {
    /// Create a world with the default config (gravity 200, edges on, 800×600).
    pub fn new() -> Self {
        Self::with_config(&WorldConfig::default())
    }

    pub fn with_config(config: &WorldConfig) -> Self {
        Self {
            id: WorldId::next(),
            slots: Vec::with_capacity(32),
            next_id: 1,
            gravity: config.gravity,
            collide_with_window: config.collide_with_window,
            arena: config.arena,
            collision_events: Vec::new(),
        }
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    // -- Settings --

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    pub fn collide_with_window(&self) -> bool {
        self.collide_with_window
    }

    pub fn set_collide_with_window(&mut self, enabled: bool) {
        self.collide_with_window = enabled;
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Update the arena bounds, e.g. after the window was resized.
    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
    }

    // -- Membership --

    /// Start tracking a body. It is appended after all existing bodies.
    ///
    /// # Panics
    ///
    /// Ids are never reused, so a world can hand out at most `u32::MAX - 1`
    /// of them. Inserting past that panics.
    pub fn insert(&mut self, mut object: T) -> BodyId {
        let Some(next_id) = self.next_id.checked_add(1) else {
            panic!("world {:?} exhausted its body ids", self.id);
        };

        let body = object.body_mut();
        if let Some(previous) = body.world() {
            if previous != self.id {
                log::warn!(
                    "Body still claimed by world {:?}, moving it to {:?}",
                    previous,
                    self.id
                );
            }
        }
        body.set_world(Some(self.id));

        let id = BodyId(self.next_id);
        self.next_id = next_id;
        self.slots.push(Slot { id, object });
        log::debug!(
            "Inserted body {:?} into world {:?} ({} tracked)",
            id,
            self.id,
            self.slots.len()
        );
        id
    }

    /// Stop tracking a body and hand it back. Its world back-reference is cleared.
    pub fn remove(&mut self, id: BodyId) -> Option<T> {
        let idx = self.index_of(id)?;
        // Vec::remove rather than swap_remove: iteration order is insertion order.
        let mut object = self.slots.remove(idx).object;
        object.body_mut().set_world(None);
        log::debug!("Removed body {:?} from world {:?}", id, self.id);
        Some(object)
    }

    /// Remove every body.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.collision_events.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&T> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.object)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| s.id == id).map(|s| &mut s.object)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    /// Iterate over tracked bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &T)> {
        self.slots.iter().map(|s| (s.id, &s.object))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut T)> {
        self.slots.iter_mut().map(|s| (s.id, &mut s.object))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // -- Simulation --

    /// Advance the simulation by `dt` milliseconds.
    ///
    /// Each body in turn is updated, checked for collisions (hooks fire
    /// immediately), and then has gravity applied to its velocity. Hooks see
    /// the velocity without this tick's gravity, and because gravity comes
    /// after integration it shows up in position one tick later.
    ///
    /// Detection runs for every body whether or not its
    /// [`Kinematic::update`] moved it.
    pub fn update(&mut self, dt: f32) {
        self.collision_events.clear();

        for idx in 0..self.slots.len() {
            self.slots[idx].object.update(dt);

            if let Some(event) = self.detect(idx) {
                self.collision_events.push(event);
            }

            let body = self.slots[idx].object.body_mut();
            let weight = self.gravity * body.mass() * dt / 1000.0;
            body.apply_force(Vec2::new(0.0, weight));
        }
    }

    /// Collisions detected during the most recent [`update`](Self::update).
    pub fn collisions(&self) -> &[CollisionEvent] {
        &self.collision_events
    }

    /// Run collision detection and response for one body right now.
    ///
    /// `update` already does this after moving each body; call it directly
    /// after teleporting a body. The result is not added to [`collisions`](Self::collisions).
    pub fn check_for_collision(&mut self, id: BodyId) -> Option<CollisionEvent> {
        let idx = self.index_of(id)?;
        self.detect(idx)
    }

    // -- private helpers --

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    /// The first other body (in insertion order) overlapping the body at
    /// `idx` wins. Failing that, the arena edge is checked if enabled.
    fn detect(&mut self, idx: usize) -> Option<CollisionEvent> {
        let hit = {
            let target = self.slots[idx].object.body();
            self.slots
                .iter()
                .enumerate()
                .position(|(i, s)| i != idx && s.object.body().overlaps(target))
        };

        if let Some(other_idx) = hit {
            let (which, other) = pair_mut(&mut self.slots, idx, other_idx);
            log::trace!("Collision: {:?} hit {:?}", which.id, other.id);

            other.object.collide(Contact::Body { id: which.id, other: &which.object });
            which.object.collide(Contact::Body { id: other.id, other: &other.object });

            return Some(CollisionEvent::Pair { body: which.id, other: other.id });
        }

        if !self.collide_with_window {
            return None;
        }

        let which = &mut self.slots[idx];
        let edge = which.object.body().check_edge(self.arena)?;
        log::trace!("Collision: {:?} hit {:?} edge", which.id, edge);
        which.object.collide(Contact::Edge(edge));
        Some(CollisionEvent::Edge { body: which.id, edge })
    }
}

impl<T: Kinematic> Default for World<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrow two distinct slots mutably at once.
fn pair_mut<T>(slots: &mut [Slot<T>], a: usize, b: usize) -> (&mut Slot<T>, &mut Slot<T>) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = slots.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = slots.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
