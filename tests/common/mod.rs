#![allow(dead_code)]

use bevy_ecs::query::With;
use glam::Vec2;

use platformer::{
    config::Config,
    game::{Game, TickOutput},
    input::InputState,
    level::LevelTemplate,
    systems::components::{
        Ammo, Health, PlayerControlled, PlayerState, Position, Score, Velocity,
    },
    systems::GameStage,
};

/// A bordered room: walls around the edge, a goal tucked into the top
/// right corner where tests won't reach it by accident.
pub fn grid(rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let mut cells = vec![vec![0u8; cols]; rows];
    for col in 0..cols {
        cells[0][col] = 1;
        cells[rows - 1][col] = 1;
    }
    for row in cells.iter_mut() {
        row[0] = 1;
        row[cols - 1] = 1;
    }
    cells[1][cols - 2] = 2;
    cells
}

/// Default 10x16 room. The floor's top edge is at y = 450, so the player
/// rests at y = 405.
pub fn room() -> LevelTemplate {
    LevelTemplate::new(grid(10, 16))
}

pub const FLOOR_REST_Y: f32 = 405.0;

pub fn game(levels: Vec<LevelTemplate>) -> Game {
    match Game::new(levels, Config::default()) {
        Ok(game) => game,
        Err(err) => panic!("game construction failed: {err}"),
    }
}

/// Builds a game and confirms through the home screen into `Playing`.
pub fn started(template: LevelTemplate) -> Game {
    started_with(vec![template], Config::default())
}

pub fn started_with(levels: Vec<LevelTemplate>, config: Config) -> Game {
    let mut game = match Game::new(levels, config) {
        Ok(game) => game,
        Err(err) => panic!("game construction failed: {err}"),
    };
    game.tick(InputState::confirm());
    assert_eq!(game.stage(), GameStage::Playing);
    game
}

pub fn run(game: &mut Game, input: InputState, ticks: usize) -> Vec<TickOutput> {
    (0..ticks).map(|_| game.tick(input)).collect()
}

pub fn player_position(game: &mut Game) -> Vec2 {
    let mut query = game
        .world
        .query_filtered::<&Position, With<PlayerControlled>>();
    query.single(&game.world).unwrap().0
}

pub fn player_velocity(game: &mut Game) -> Vec2 {
    let mut query = game
        .world
        .query_filtered::<&Velocity, With<PlayerControlled>>();
    query.single(&game.world).unwrap().0
}

pub fn player_state(game: &mut Game) -> PlayerState {
    let mut query = game
        .world
        .query_filtered::<&PlayerState, With<PlayerControlled>>();
    query.single(&game.world).unwrap().clone()
}

pub fn player_health(game: &mut Game) -> u32 {
    let mut query = game
        .world
        .query_filtered::<&Health, With<PlayerControlled>>();
    query.single(&game.world).unwrap().current
}

pub fn set_player_health(game: &mut Game, current: u32) {
    let mut query = game
        .world
        .query_filtered::<&mut Health, With<PlayerControlled>>();
    query.single_mut(&mut game.world).unwrap().current = current;
}

/// Teleports the player, zeroing velocity and physics flags so the next
/// tick starts clean.
pub fn place_player(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<(
        &mut Position,
        &mut Velocity,
        &mut PlayerState,
    ), With<PlayerControlled>>();
    let (mut pos, mut vel, mut state) = query.single_mut(&mut game.world).unwrap();
    pos.0 = position;
    vel.0 = Vec2::ZERO;
    *state = PlayerState::default();
}

pub fn score(game: &Game) -> u32 {
    game.world.resource::<Score>().0
}

pub fn ammo(game: &Game) -> u32 {
    game.world.resource::<Ammo>().0
}
