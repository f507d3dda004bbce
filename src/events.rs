//! ECS events used for cross-system communication within a tick.

use bevy_ecs::event::Event;
use strum_macros::Display;

/// Sound cues emitted by gameplay systems. Drained into [`crate::game::TickOutput`]
/// every tick; the audio collaborator decides what they sound like.
#[derive(Event, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Jump,
    Footstep,
    Coin,
    GunPickup,
    Fire,
    Damage,
}

/// One point of damage (or more) aimed at the player. Spikes, enemy
/// contact, and enemy bullets all funnel through this event so that
/// health, shake, and respawn handling live in a single system.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit {
    pub amount: u32,
}

/// Request to (re)build the world from the level at the given index.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLevel(pub usize);
