//! Bullet firing, flight, and resolution.

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Commands, Query, Res, ResMut},
};
use tracing::debug;

use crate::{
    config::Config,
    constants::{BULLET_SIZE, KILL_SCORE, TILE_SIZE},
    events::{AudioEvent, PlayerHit},
    geometry::Aabb,
    input::InputState,
    level::Level,
    systems::{
        components::{
            body_aabb, Ammo, BodySize, Bullet, BulletBundle, DynamicBody, EffectsRng, Owner,
            PlayerControlled, PlayerState, Position, Score,
        },
        particle::{spawn_burst, spawn_trail},
    },
};

/// Spawns a player bullet on a fire intent, gated on ammo. Firing with
/// an empty gun is silently ignored.
pub fn fire_system(
    mut commands: Commands,
    config: Res<Config>,
    input: Res<InputState>,
    mut ammo: ResMut<Ammo>,
    players: Query<(&Position, &BodySize, &PlayerState), With<PlayerControlled>>,
    mut cues: EventWriter<AudioEvent>,
) {
    if !input.fire_pressed {
        return;
    }
    if ammo.0 == 0 {
        debug!("fire intent ignored, no ammo");
        return;
    }
    let Ok((position, body, state)) = players.single() else {
        return;
    };

    ammo.0 -= 1;
    commands.spawn(BulletBundle {
        position: Position(position.0 + body.0 / 2.0),
        size: BodySize(BULLET_SIZE),
        bullet: Bullet {
            owner: Owner::Player,
            velocity_x: state.facing.sign() * config.bullet_speed,
        },
    });
    cues.write(AudioEvent::Fire);
}

/// Advances every bullet and resolves it, in order: player bullet
/// against enemies, enemy bullet against the player, then the bounds
/// prune. A bullet consumed by a hit never reaches the prune.
pub fn projectile_system(
    mut commands: Commands,
    level: Res<Level>,
    mut score: ResMut<Score>,
    mut rng: ResMut<EffectsRng>,
    mut bullets: Query<(Entity, &mut Position, &Bullet), Without<PlayerControlled>>,
    enemies: Query<
        (Entity, &Position, &BodySize, &DynamicBody),
        (Without<Bullet>, Without<PlayerControlled>),
    >,
    players: Query<(&Position, &BodySize), With<PlayerControlled>>,
    mut hits: EventWriter<PlayerHit>,
) {
    for (_, mut position, bullet) in bullets.iter_mut() {
        spawn_trail(&mut commands, &mut rng.0, position.0 + BULLET_SIZE / 2.0);
        position.0.x += bullet.velocity_x;
    }

    let player_aabb = players
        .single()
        .ok()
        .map(|(position, body)| body_aabb(position, body));

    // Despawns are deferred, so track kills locally to keep two bullets
    // from scoring the same enemy in one tick.
    let mut downed: Vec<Entity> = Vec::new();

    for (entity, position, bullet) in bullets.iter() {
        let aabb = Aabb::from_parts(position.0, BULLET_SIZE);
        match bullet.owner {
            Owner::Player => {
                let target = enemies.iter().find(|(enemy, epos, esize, body)| {
                    body.is_enemy()
                        && !downed.contains(enemy)
                        && aabb.overlaps(&Aabb::from_parts(epos.0, esize.0))
                });
                if let Some((enemy, epos, esize, _)) = target {
                    downed.push(enemy);
                    score.0 += KILL_SCORE;
                    debug!(score = score.0, "enemy destroyed");
                    spawn_burst(
                        &mut commands,
                        &mut rng.0,
                        Aabb::from_parts(epos.0, esize.0).center(),
                    );
                    commands.entity(enemy).despawn();
                    commands.entity(entity).despawn();
                    continue;
                }
            }
            Owner::Enemy => {
                if let Some(player) = &player_aabb {
                    if aabb.overlaps(player) {
                        hits.write(PlayerHit { amount: 1 });
                        commands.entity(entity).despawn();
                        continue;
                    }
                }
            }
        }

        if position.0.x <= -TILE_SIZE || position.0.x >= level.width_px() {
            commands.entity(entity).despawn();
        }
    }
}
