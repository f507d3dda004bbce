use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;

use crate::geometry::Aabb;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Top-left corner of an entity's body, in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Collision body extent.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodySize(pub Vec2);

pub fn body_aabb(position: &Position, size: &BodySize) -> Aabb {
    Aabb::from_parts(position.0, size.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Per-tick physics flags and timers for the player.
///
/// `coyote` refills while grounded and counts down (possibly past zero)
/// in the air; a jump is honored only while it is positive.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub on_ground: bool,
    pub jumping: bool,
    pub falling: bool,
    pub jump_timer: u32,
    pub coyote: i32,
    pub facing: Facing,
    pub walk_cooldown: i32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }
}

/// Self-moving level objects, spawned from marker tiles.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum DynamicBody {
    /// Walks back and forth over `[start_x, start_x + range]`.
    Patrol {
        speed: f32,
        direction: f32,
        start_x: f32,
        range: f32,
    },
    /// Like a patrol, but rideable; `velocity_x` is published every tick
    /// so the player can be carried.
    Platform {
        speed: f32,
        direction: f32,
        start_x: f32,
        range: f32,
        velocity_x: f32,
    },
    /// Stationary turret that tracks and fires at the player.
    Shooter { cooldown: i32, facing: Facing },
}

impl DynamicBody {
    /// Whether contact with (or a bullet into) this body harms things.
    /// Platforms are rideable scenery, not enemies.
    pub fn is_enemy(&self) -> bool {
        matches!(self, DynamicBody::Patrol { .. } | DynamicBody::Shooter { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub owner: Owner,
    pub velocity_x: f32,
}

/// Cosmetic particle: bullet trails and kill bursts.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub gravity: bool,
    pub size: f32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub size: BodySize,
    pub state: PlayerState,
    pub health: Health,
}

#[derive(Bundle)]
pub struct DynamicBundle {
    pub position: Position,
    pub size: BodySize,
    pub body: DynamicBody,
}

#[derive(Bundle)]
pub struct BulletBundle {
    pub position: Position,
    pub size: BodySize,
    pub bullet: Bullet,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score(pub u32);

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ammo(pub u32);

/// Seeded RNG for shake jitter and particle scatter, kept as a resource
/// so whole runs are reproducible.
#[derive(Resource, Debug)]
pub struct EffectsRng(pub SmallRng);
