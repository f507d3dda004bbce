//! Camera follow and screen shake. Shake only ever perturbs the render
//! offset; collision and gameplay always see unshaken coordinates.

use bevy_ecs::{
    query::With,
    resource::Resource,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use rand::Rng;

use crate::{
    config::Config,
    level::Level,
    systems::components::{EffectsRng, PlayerControlled, Position},
};

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Unshaken left edge of the viewport in world pixels.
    pub x: f32,
    pub shake_ticks: u32,
    pub shake_magnitude: f32,
    /// What the renderer should actually subtract: `x` plus this tick's
    /// jitter while a shake is live.
    pub render_offset: Vec2,
}

impl CameraState {
    pub fn begin_shake(&mut self, ticks: u32, magnitude: f32) {
        self.shake_ticks = ticks;
        self.shake_magnitude = magnitude;
    }
}

/// Centers the camera on the player, clamped to the level bounds, and
/// decays any live shake.
pub fn camera_system(
    config: Res<Config>,
    level: Res<Level>,
    mut camera: ResMut<CameraState>,
    mut rng: ResMut<EffectsRng>,
    players: Query<&Position, With<PlayerControlled>>,
) {
    if camera.shake_ticks > 0 {
        camera.shake_ticks -= 1;
    }

    let Ok(position) = players.single() else {
        return;
    };

    let max_x = (level.width_px() - config.viewport.x).max(0.0);
    camera.x = (position.0.x - config.viewport.x / 2.0).clamp(0.0, max_x);

    camera.render_offset = if camera.shake_ticks > 0 {
        let magnitude = camera.shake_magnitude;
        Vec2::new(
            camera.x + rng.0.random_range(-0.5..0.5) * magnitude,
            rng.0.random_range(-0.5..0.5) * magnitude,
        )
    } else {
        Vec2::new(camera.x, 0.0)
    };
}
