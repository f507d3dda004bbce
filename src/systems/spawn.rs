//! Level loading: tears down the previous level's transient entities and
//! builds the new one from its template.

use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::{Or, With, Without},
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use tracing::{info, warn};

use crate::{
    constants::{
        PATROL_RANGE, PATROL_SPEED, PLATFORM_RANGE, PLATFORM_SIZE, PLATFORM_SPEED,
        SHOOTER_COOLDOWN_INITIAL, TILE_SIZE,
    },
    error::GameError,
    events::LoadLevel,
    level::{DynamicSpawn, Level, LevelSet, SpawnKind},
    systems::{
        camera::CameraState,
        components::{
            BodySize, Bullet, DynamicBody, DynamicBundle, Facing, Particle, PlayerControlled,
            PlayerState, Position, Velocity,
        },
    },
};

fn dynamic_bundle(spawn: &DynamicSpawn) -> DynamicBundle {
    let (size, body) = match spawn.kind {
        SpawnKind::Patrol => (
            Vec2::splat(TILE_SIZE),
            DynamicBody::Patrol {
                speed: PATROL_SPEED,
                direction: 1.0,
                start_x: spawn.position.x,
                range: PATROL_RANGE,
            },
        ),
        SpawnKind::Platform => (
            PLATFORM_SIZE,
            DynamicBody::Platform {
                speed: PLATFORM_SPEED,
                direction: 1.0,
                start_x: spawn.position.x,
                range: PLATFORM_RANGE,
                velocity_x: PLATFORM_SPEED,
            },
        ),
        SpawnKind::Shooter => (
            Vec2::splat(TILE_SIZE),
            DynamicBody::Shooter {
                cooldown: SHOOTER_COOLDOWN_INITIAL,
                facing: Facing::Left,
            },
        ),
    };
    DynamicBundle {
        position: Position(spawn.position),
        size: BodySize(size),
        body,
    }
}

/// Swaps the live level for the requested one: despawns bullets, dynamic
/// bodies, and particles, instantiates the template, spawns its dynamic
/// objects, and repositions (never recreates) the player.
pub fn load_level_system(
    mut commands: Commands,
    mut loads: EventReader<LoadLevel>,
    templates: Res<LevelSet>,
    mut level: ResMut<Level>,
    mut camera: ResMut<CameraState>,
    transients: Query<Entity, Or<(With<Bullet>, With<DynamicBody>, With<Particle>)>>,
    mut players: Query<
        (&mut Position, &mut Velocity, &mut PlayerState),
        (With<PlayerControlled>, Without<DynamicBody>),
    >,
    mut faults: EventWriter<GameError>,
) {
    let Some(&LoadLevel(index)) = loads.read().last() else {
        return;
    };
    let Some(template) = templates.0.get(index) else {
        warn!(index, "level load request out of range");
        return;
    };

    let next = match Level::from_template(template, index) {
        Ok(next) => next,
        Err(err) => {
            faults.write(err.into());
            return;
        }
    };

    for entity in transients.iter() {
        commands.entity(entity).despawn();
    }
    for spawn in next.spawns() {
        commands.spawn(dynamic_bundle(spawn));
    }
    if let Ok((mut position, mut velocity, mut state)) = players.single_mut() {
        position.0 = next.spawn_point();
        velocity.0 = Vec2::ZERO;
        *state = PlayerState::default();
    }
    camera.x = 0.0;
    camera.shake_ticks = 0;

    info!(
        index,
        width = next.width_px(),
        objects = next.spawns().len(),
        "level loaded"
    );
    *level = next;
}
