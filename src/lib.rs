//! Headless core for a tile-based side-scrolling platformer.
//!
//! The crate owns the whole simulation: level parsing, player physics,
//! dynamic objects, projectiles, damage, camera, and the stage state
//! machine. Rendering, raw input, and audio playback are collaborators
//! owned by the embedder, which drives the simulation through
//! [`game::Game::tick`] and reads back [`render::RenderFrame`] snapshots.

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod input;
pub mod level;
pub mod render;
pub mod systems;
