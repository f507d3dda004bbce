//! Player movement and collision. One tick runs, in order: horizontal
//! intent, jump handling, gravity, X-axis resolution against solid
//! tiles, Y-axis resolution against solid tiles, the moving-platform
//! pass, then coyote and footstep bookkeeping. Resolving each axis
//! separately is what makes sliding along walls and floors work.

use bevy_ecs::{
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res},
};

use crate::{
    config::Config,
    constants::WALK_SOUND_COOLDOWN,
    error::GameError,
    events::AudioEvent,
    geometry::Aabb,
    input::InputState,
    level::Level,
    systems::components::{
        body_aabb, BodySize, DynamicBody, Facing, PlayerControlled, PlayerState, Position, Velocity,
    },
};

pub fn player_movement_system(
    config: Res<Config>,
    input: Res<InputState>,
    level: Res<Level>,
    mut players: Query<
        (&mut Position, &mut Velocity, &mut PlayerState, &BodySize),
        With<PlayerControlled>,
    >,
    platforms: Query<(&Position, &BodySize, &DynamicBody), Without<PlayerControlled>>,
    mut cues: EventWriter<AudioEvent>,
    mut faults: EventWriter<GameError>,
) {
    let Ok((mut position, mut velocity, mut state, body)) = players.single_mut() else {
        faults.write(GameError::InvalidState(
            "expected exactly one player entity".into(),
        ));
        return;
    };

    // Horizontal intent. Left is evaluated first so holding both keys
    // resolves to the right.
    if input.left {
        velocity.0.x = -config.player_speed;
        state.facing = Facing::Left;
    }
    if input.right {
        velocity.0.x = config.player_speed;
        state.facing = Facing::Right;
    }
    if !input.left && !input.right {
        velocity.0.x *= config.friction;
    }

    if input.jump_held || input.jump_pressed {
        if state.coyote > 0 {
            velocity.0.y = -config.jump_power;
            state.jumping = true;
            state.falling = false;
            state.on_ground = false;
            state.jump_timer = 0;
            state.coyote = 0;
            cues.write(AudioEvent::Jump);
        } else if state.jumping && state.jump_timer < config.max_jump_time {
            // Variable jump height: a short boost window after the
            // impulse while the key stays held.
            velocity.0.y -= config.jump_boost;
            state.jump_timer += 1;
        }
    } else {
        state.jumping = false;
    }

    velocity.0.y += config.gravity;
    if velocity.0.y > 0.0 {
        state.falling = true;
    }

    // X axis: move, then snap out of any solid cell. The snap zeroes the
    // velocity, so later cells in the scan are no-ops.
    position.0.x += velocity.0.x;
    let aabb = body_aabb(&position, body);
    for cell in level.solid_overlaps(&aabb, config.solidity) {
        if velocity.0.x > 0.0 {
            position.0.x = cell.min.x - body.0.x;
        }
        if velocity.0.x < 0.0 {
            position.0.x = cell.max().x;
        }
        velocity.0.x = 0.0;
    }

    // Y axis: grounding is re-proven every tick, only a downward hit
    // this tick sets it.
    position.0.y += velocity.0.y;
    state.on_ground = false;
    let aabb = body_aabb(&position, body);
    for cell in level.solid_overlaps(&aabb, config.solidity) {
        if velocity.0.y > 0.0 {
            position.0.y = cell.min.y - body.0.y;
            velocity.0.y = 0.0;
            state.on_ground = true;
            state.falling = false;
        }
        if velocity.0.y < 0.0 {
            position.0.y = cell.max().y;
            velocity.0.y = 0.0;
        }
    }

    // Moving platforms. The directional tests use the pre-motion
    // position (current minus this tick's velocity) so a box that was
    // above the platform lands on it instead of clipping through, and a
    // landing carries the platform's horizontal motion.
    let mut carry = None;
    for (plat_position, plat_size, plat_body) in platforms.iter() {
        let DynamicBody::Platform { velocity_x, .. } = plat_body else {
            continue;
        };
        let platform = Aabb::from_parts(plat_position.0, plat_size.0);
        if !body_aabb(&position, body).overlaps(&platform) {
            continue;
        }
        if velocity.0.y > 0.0 && position.0.y + body.0.y - velocity.0.y <= platform.min.y {
            position.0.y = platform.min.y - body.0.y;
            velocity.0.y = 0.0;
            state.on_ground = true;
            state.falling = false;
            carry = Some(*velocity_x);
        } else if velocity.0.y < 0.0 && position.0.y - velocity.0.y >= platform.max().y {
            position.0.y = platform.max().y;
            velocity.0.y = 0.0;
        } else {
            if velocity.0.x > 0.0 {
                position.0.x = platform.min.x - body.0.x;
            }
            if velocity.0.x < 0.0 {
                position.0.x = platform.max().x;
            }
        }
    }
    if let Some(platform_velocity) = carry {
        position.0.x += platform_velocity;
    }

    if state.on_ground {
        state.coyote = config.coyote_time;
    } else {
        state.coyote -= 1;
    }

    // Footstep cadence while grounded and moving.
    if (input.left || input.right) && state.on_ground {
        state.walk_cooldown -= 1;
        if state.walk_cooldown <= 0 {
            cues.write(AudioEvent::Footstep);
            state.walk_cooldown = WALK_SOUND_COOLDOWN;
        }
    }
}
