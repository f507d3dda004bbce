//! Movement and firing for dynamic level objects.

use bevy_ecs::{
    query::{With, Without},
    system::{Commands, Query, Res},
};

use crate::{
    config::Config,
    constants::{BULLET_SIZE, SHOOTER_COOLDOWN},
    systems::components::{
        BodySize, Bullet, BulletBundle, DynamicBody, Facing, Owner, PlayerControlled, Position,
    },
};

/// Advances patrols and platforms along their horizontal track and runs
/// shooter targeting. Track bounds are open: the object flips only once
/// it has stepped past `start_x` or `start_x + range`.
pub fn dynamic_body_system(
    mut commands: Commands,
    config: Res<Config>,
    mut bodies: Query<(&mut Position, &BodySize, &mut DynamicBody), Without<PlayerControlled>>,
    players: Query<&Position, With<PlayerControlled>>,
) {
    let player_x = players.single().map(|position| position.0.x).unwrap_or(0.0);

    for (mut position, size, mut body) in bodies.iter_mut() {
        match &mut *body {
            DynamicBody::Patrol {
                speed,
                direction,
                start_x,
                range,
            } => {
                position.0.x += *speed * *direction;
                if position.0.x > *start_x + *range || position.0.x < *start_x {
                    *direction = -*direction;
                }
            }
            DynamicBody::Platform {
                speed,
                direction,
                start_x,
                range,
                velocity_x,
            } => {
                position.0.x += *speed * *direction;
                // Published before the flip so riders are carried with
                // the motion that actually happened this tick.
                *velocity_x = *speed * *direction;
                if position.0.x > *start_x + *range || position.0.x < *start_x {
                    *direction = -*direction;
                }
            }
            DynamicBody::Shooter { cooldown, facing } => {
                *cooldown -= 1;
                // A player exactly level with the turret is treated as
                // being to its right.
                *facing = if player_x < position.0.x {
                    Facing::Left
                } else {
                    Facing::Right
                };
                if *cooldown <= 0 {
                    commands.spawn(BulletBundle {
                        position: Position(position.0 + size.0 / 2.0),
                        size: BodySize(BULLET_SIZE),
                        bullet: Bullet {
                            owner: Owner::Enemy,
                            velocity_x: facing.sign() * config.bullet_speed,
                        },
                    });
                    *cooldown = SHOOTER_COOLDOWN;
                }
            }
        }
    }
}
