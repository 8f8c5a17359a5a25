//! 2D kinematics and discrete collision detection for arcade games.
//!
//! A [`World`] owns a set of bodies, moves them each tick, applies gravity,
//! and tells each body what it ran into through the [`Kinematic::collide`]
//! hook. Games decide how to respond.

pub mod api;
pub mod core;

// Re-export key types at crate root for convenience
pub use api::config::{Arena, ConfigError, WorldConfig};
pub use api::types::{BodyId, WorldId};
pub use core::body::{Body, Contact, Kinematic};
pub use core::geometry;
pub use core::shape::{Edge, Shape};
pub use core::time::FixedTimestep;
pub use core::world::{CollisionEvent, World};
