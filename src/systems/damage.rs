//! Damage application. Every damage source writes a [`PlayerHit`] event;
//! this module turns those into health loss, shake, and either a respawn
//! or the defeat transition.

use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::info;

use crate::{
    constants::{SHAKE_MAGNITUDE, SHAKE_TICKS},
    events::{AudioEvent, PlayerHit},
    level::Level,
    systems::{
        camera::CameraState,
        components::{
            body_aabb, BodySize, DynamicBody, Facing, Health, PlayerControlled, PlayerState,
            Position, Velocity,
        },
        state::GameStage,
    },
};

/// Contact damage: overlapping an enemy body costs one health per enemy
/// per tick.
pub fn touch_damage_system(
    players: Query<(&Position, &BodySize), With<PlayerControlled>>,
    enemies: Query<(&Position, &BodySize, &DynamicBody), Without<PlayerControlled>>,
    mut hits: EventWriter<PlayerHit>,
) {
    let Ok((position, body)) = players.single() else {
        return;
    };
    let player = body_aabb(position, body);

    for (epos, esize, enemy) in enemies.iter() {
        if enemy.is_enemy() && player.overlaps(&body_aabb(epos, esize)) {
            hits.write(PlayerHit { amount: 1 });
        }
    }
}

/// Applies queued hits: shake and cue per hit, then either respawn at
/// the level spawn point (health preserved) or the one-way transition to
/// defeat. Hits queued after health reaches zero are dropped.
pub fn damage_system(
    mut events: EventReader<PlayerHit>,
    mut players: Query<
        (&mut Position, &mut Velocity, &mut PlayerState, &mut Health),
        With<PlayerControlled>,
    >,
    mut stage: ResMut<GameStage>,
    mut camera: ResMut<CameraState>,
    level: Res<Level>,
    mut cues: EventWriter<AudioEvent>,
) {
    let Ok((mut position, mut velocity, mut state, mut health)) = players.single_mut() else {
        events.clear();
        return;
    };

    for hit in events.read() {
        if health.current == 0 {
            break;
        }
        health.current = health.current.saturating_sub(hit.amount);
        camera.begin_shake(SHAKE_TICKS, SHAKE_MAGNITUDE);
        cues.write(AudioEvent::Damage);

        if health.current == 0 {
            info!("player defeated");
            *stage = GameStage::GameOver { victory: false };
        } else {
            position.0 = level.spawn_point();
            velocity.0 = Vec2::ZERO;
            state.facing = Facing::Right;
        }
    }
}
