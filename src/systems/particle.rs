//! Cosmetic particles: bullet trails and kill bursts.

use bevy_ecs::system::{Commands, Query, Res};
use bevy_ecs::entity::Entity;
use glam::Vec2;
use rand::{rngs::SmallRng, Rng};

use crate::{
    config::Config,
    systems::components::{Particle, Position},
};

/// Short-lived smoke puff left behind a travelling bullet.
pub fn spawn_trail(commands: &mut Commands, rng: &mut SmallRng, origin: Vec2) {
    commands.spawn((
        Position(origin),
        Particle {
            velocity: Vec2::new(
                rng.random_range(-0.5..0.5),
                rng.random_range(-0.5..0.5),
            ),
            life: 10,
            max_life: 10,
            gravity: false,
            size: rng.random_range(2.0..8.0),
        },
    ));
}

/// Debris burst where an enemy was destroyed.
pub fn spawn_burst(commands: &mut Commands, rng: &mut SmallRng, origin: Vec2) {
    for _ in 0..15 {
        commands.spawn((
            Position(origin),
            Particle {
                velocity: Vec2::new(
                    rng.random_range(-2.0..2.0),
                    rng.random_range(-2.0..2.0) - 2.0,
                ),
                life: 40,
                max_life: 40,
                gravity: true,
                size: rng.random_range(2.0..8.0),
            },
        ));
    }
}

/// Advances particles and prunes the expired ones. Debris falls at half
/// gravity so bursts hang in the air a little.
pub fn particle_system(
    mut commands: Commands,
    config: Res<Config>,
    mut particles: Query<(Entity, &mut Position, &mut Particle)>,
) {
    for (entity, mut position, mut particle) in particles.iter_mut() {
        if particle.gravity {
            particle.velocity.y += config.gravity / 2.0;
        }
        let step = particle.velocity;
        position.0 += step;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            commands.entity(entity).despawn();
        }
    }
}
