//! Tuning constants for the simulation. All speeds are in pixels per tick
//! and all durations are in ticks; the embedder decides the tick rate.

use glam::Vec2;

/// Side length of one grid cell in pixels.
pub const TILE_SIZE: f32 = 50.0;

/// Downward acceleration applied to the player every tick.
pub const GRAVITY: f32 = 0.3;

/// Horizontal velocity decay applied when no movement intent is held.
/// Zero stops the player instantly; values below 1.0 produce a slide.
pub const FRICTION: f32 = 0.0;

/// Horizontal speed while a movement intent is held.
pub const PLAYER_SPEED: f32 = 4.0;

/// Upward impulse applied on the initial jump tick.
pub const JUMP_POWER: f32 = 8.0;

/// Extra upward velocity per boosted tick while the jump is held.
pub const JUMP_BOOST: f32 = 0.5;

/// How many ticks after the impulse the jump can still be boosted.
pub const MAX_JUMP_TIME: u32 = 1;

/// Grace window (in ticks) after walking off a ledge during which a jump
/// is still honored.
pub const COYOTE_TIME: i32 = 5;

/// Player collision body. Slightly smaller than a cell so the player fits
/// through single-tile gaps.
pub const PLAYER_SIZE: Vec2 = Vec2::new(TILE_SIZE - 10.0, TILE_SIZE - 5.0);

pub const MAX_HEALTH: u32 = 3;

/// Ticks between footstep cues while grounded and moving.
pub const WALK_SOUND_COOLDOWN: i32 = 20;

pub const BULLET_SPEED: f32 = 8.0;
pub const BULLET_SIZE: Vec2 = Vec2::new(10.0, 10.0);

pub const PATROL_SPEED: f32 = 1.0;
pub const PATROL_RANGE: f32 = 120.0;

pub const PLATFORM_SIZE: Vec2 = Vec2::new(TILE_SIZE * 2.0, TILE_SIZE / 2.0);
pub const PLATFORM_SPEED: f32 = 1.0;
pub const PLATFORM_RANGE: f32 = 160.0;

/// Ticks before a freshly spawned shooter fires for the first time.
pub const SHOOTER_COOLDOWN_INITIAL: i32 = 120;
/// Ticks between shots once a shooter is warmed up.
pub const SHOOTER_COOLDOWN: i32 = 180;

pub const COIN_SCORE: u32 = 100;
pub const KILL_SCORE: u32 = 250;

pub const START_AMMO: u32 = 1;
pub const GUN_PICKUP_AMMO: u32 = 5;

/// Screen shake triggered by damage.
pub const SHAKE_TICKS: u32 = 15;
pub const SHAKE_MAGNITUDE: f32 = 4.0;

/// Logical viewport in pixels; the camera is clamped against this.
pub const VIEWPORT: Vec2 = Vec2::new(800.0, 550.0);

/// Grid cell (row, col) the player starts in when a level declares no
/// explicit spawn point.
pub const DEFAULT_SPAWN: (usize, usize) = (1, 1);

/// Scroll speed of the home screen backdrop, in pixels per tick.
pub const BACKDROP_SCROLL_SPEED: f32 = 0.5;
