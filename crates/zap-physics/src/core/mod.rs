pub mod body;
pub mod geometry;
pub mod shape;
pub mod time;
pub mod world;
