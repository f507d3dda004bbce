//! Render snapshots. The render collaborator never touches the world
//! directly; once per frame it extracts a [`RenderFrame`] and draws from
//! that alone.

use std::ops::Range;

use bevy_ecs::query::{With, Without};
use glam::Vec2;

use crate::{
    constants::{BULLET_SIZE, TILE_SIZE},
    game::Game,
    level::{Level, Tile},
    systems::{
        components::{
            Ammo, BodySize, Bullet, DynamicBody, Facing, Health, Owner, Particle,
            PlayerControlled, PlayerState, Position, Score,
        },
        Backdrop, CameraState, GameStage,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    PlayerIdle,
    PlayerJump,
    PlayerLand,
    Patrol,
    Shooter,
    Platform,
    Bullet(Owner),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub kind: SpriteKind,
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInstance {
    pub position: Vec2,
    pub size: f32,
    /// Fraction of lifetime remaining, for fade-out.
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub ammo: u32,
    pub health: u32,
    pub max_health: u32,
    pub level: usize,
}

/// What to draw on top of (or instead of) the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    None,
    Home { backdrop_scroll: f32 },
    Paused,
    Outcome {
        message: &'static str,
        final_score: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Offset to subtract from world coordinates; includes shake jitter.
    pub camera: Vec2,
    /// Grid columns within the viewport this frame.
    pub columns: Range<usize>,
    /// Non-empty tiles inside the visible window, as (row, col, tile).
    pub tiles: Vec<(usize, usize, Tile)>,
    pub sprites: Vec<SpriteInstance>,
    pub particles: Vec<ParticleInstance>,
    pub hud: Hud,
    pub overlay: Overlay,
}

impl RenderFrame {
    pub fn extract(game: &mut Game) -> Self {
        let world = &mut game.world;

        let stage = *world.resource::<GameStage>();
        let camera = *world.resource::<CameraState>();
        let score = world.resource::<Score>().0;
        let ammo = world.resource::<Ammo>().0;
        let backdrop_scroll = world.resource::<Backdrop>().scroll;
        let viewport_cols = (world.resource::<crate::config::Config>().viewport.x / TILE_SIZE)
            .ceil() as usize;

        let (level_index, columns, tiles) = {
            let level = world.resource::<Level>();
            let first_col = ((camera.x / TILE_SIZE).floor().max(0.0) as usize).min(level.cols());
            let last_col = (first_col + viewport_cols + 1).min(level.cols());
            let mut tiles = Vec::new();
            for row in 0..level.rows() {
                for col in first_col..last_col {
                    if let Some(tile) = level.tile(row, col) {
                        if tile != Tile::Empty {
                            tiles.push((row, col, tile));
                        }
                    }
                }
            }
            (level.index, first_col..last_col, tiles)
        };

        let mut sprites = Vec::new();
        let mut health = 0;
        let mut max_health = 0;

        let mut player_query = world.query_filtered::<(
            &Position,
            &BodySize,
            &PlayerState,
            &Health,
        ), With<PlayerControlled>>();
        if let Ok((position, size, state, player_health)) = player_query.single(world) {
            let kind = if state.on_ground {
                SpriteKind::PlayerIdle
            } else if state.falling {
                SpriteKind::PlayerLand
            } else {
                SpriteKind::PlayerJump
            };
            sprites.push(SpriteInstance {
                kind,
                position: position.0,
                size: size.0,
                facing: state.facing,
            });
            health = player_health.current;
            max_health = player_health.max;
        }

        let mut body_query = world
            .query_filtered::<(&Position, &BodySize, &DynamicBody), Without<PlayerControlled>>();
        for (position, size, body) in body_query.iter(world) {
            let (kind, facing) = match body {
                DynamicBody::Patrol { direction, .. } => {
                    (SpriteKind::Patrol, Facing::from_sign(*direction))
                }
                DynamicBody::Platform { .. } => (SpriteKind::Platform, Facing::Right),
                DynamicBody::Shooter { facing, .. } => (SpriteKind::Shooter, *facing),
            };
            sprites.push(SpriteInstance {
                kind,
                position: position.0,
                size: size.0,
                facing,
            });
        }

        let mut bullet_query = world.query::<(&Position, &Bullet)>();
        for (position, bullet) in bullet_query.iter(world) {
            sprites.push(SpriteInstance {
                kind: SpriteKind::Bullet(bullet.owner),
                position: position.0,
                size: BULLET_SIZE,
                facing: Facing::from_sign(bullet.velocity_x),
            });
        }

        let mut particles = Vec::new();
        let mut particle_query = world.query::<(&Position, &Particle)>();
        for (position, particle) in particle_query.iter(world) {
            particles.push(ParticleInstance {
                position: position.0,
                size: particle.size,
                alpha: particle.life as f32 / particle.max_life as f32,
            });
        }

        let overlay = match stage {
            GameStage::Home => Overlay::Home { backdrop_scroll },
            GameStage::Playing => Overlay::None,
            GameStage::Paused => Overlay::Paused,
            GameStage::GameOver { victory: true } => Overlay::Outcome {
                message: "You Win!",
                final_score: Some(score),
            },
            GameStage::GameOver { victory: false } => Overlay::Outcome {
                message: "Game Over",
                final_score: None,
            },
        };

        Self {
            camera: camera.render_offset,
            columns,
            tiles,
            sprites,
            particles,
            hud: Hud {
                score,
                ammo,
                health,
                max_health,
                level: level_index,
            },
            overlay,
        }
    }
}
