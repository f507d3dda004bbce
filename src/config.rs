//! Runtime configuration. Everything here defaults to the values in
//! [`crate::constants`]; embedders override fields to retune a game
//! without recompiling the core.

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::{constants, level::Solidity};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Config {
    pub gravity: f32,
    /// Horizontal velocity multiplier applied when no movement intent is
    /// held. 0.0 stops instantly, 0.75 gives a short slide.
    pub friction: f32,
    pub player_speed: f32,
    pub jump_power: f32,
    pub jump_boost: f32,
    pub max_jump_time: u32,
    pub coyote_time: i32,
    pub bullet_speed: f32,
    /// Which tile classes block movement. Excluding `PHANTOM` makes
    /// phantom walls purely decorative.
    pub solidity: Solidity,
    pub viewport: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            friction: constants::FRICTION,
            player_speed: constants::PLAYER_SPEED,
            jump_power: constants::JUMP_POWER,
            jump_boost: constants::JUMP_BOOST,
            max_jump_time: constants::MAX_JUMP_TIME,
            coyote_time: constants::COYOTE_TIME,
            bullet_speed: constants::BULLET_SPEED,
            solidity: Solidity::WALLS,
            viewport: constants::VIEWPORT,
        }
    }
}
