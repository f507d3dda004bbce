mod common;

use glam::Vec2;
use platformer::{
    constants::BULLET_SPEED,
    events::AudioEvent,
    game::Game,
    input::InputState,
    systems::components::{Bullet, DynamicBody, Owner, Position},
};
use pretty_assertions::assert_eq;

use common::{ammo, place_player, player_health, room, score, started};

fn fire() -> InputState {
    InputState {
        fire_pressed: true,
        ..InputState::idle()
    }
}

fn bullets(game: &mut Game) -> Vec<(Vec2, Owner)> {
    let mut query = game.world.query::<(&Position, &Bullet)>();
    query
        .iter(&game.world)
        .map(|(position, bullet)| (position.0, bullet.owner))
        .collect()
}

fn enemy_count(game: &mut Game) -> usize {
    let mut query = game.world.query::<&DynamicBody>();
    query
        .iter(&game.world)
        .filter(|body| body.is_enemy())
        .count()
}

#[test]
fn test_fire_spends_ammo_and_spawns_bullet() {
    let mut game = started(room());
    place_player(&mut game, Vec2::new(100.0, common::FLOOR_REST_Y));
    assert_eq!(ammo(&game), 1);

    let output = game.tick(fire());
    assert!(output.cues.contains(&AudioEvent::Fire));
    assert_eq!(ammo(&game), 0);

    let fired = bullets(&mut game);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].1, Owner::Player);

    // Facing right by default, so the bullet advances by its speed.
    let x_before = fired[0].0.x;
    game.tick(InputState::idle());
    let after = bullets(&mut game);
    assert_eq!(after[0].0.x, x_before + BULLET_SPEED);
}

#[test]
fn test_fire_without_ammo_is_ignored() {
    let mut game = started(room());
    place_player(&mut game, Vec2::new(100.0, common::FLOOR_REST_Y));

    game.tick(fire());
    assert_eq!(ammo(&game), 0);
    assert_eq!(bullets(&mut game).len(), 1);

    // Second press: no bullet, no cue, and ammo stays at zero.
    let output = game.tick(fire());
    assert!(!output.cues.contains(&AudioEvent::Fire));
    assert_eq!(ammo(&game), 0);
    assert_eq!(bullets(&mut game).len(), 1);
}

#[test]
fn test_bullets_pruned_outside_level() {
    let mut game = started(room());
    place_player(&mut game, Vec2::new(100.0, common::FLOOR_REST_Y));

    // Face left, then fire toward the level edge.
    game.tick(InputState::walk_left());
    game.tick(fire());
    assert_eq!(bullets(&mut game).len(), 1);

    common::run(&mut game, InputState::idle(), 25);
    assert_eq!(bullets(&mut game).len(), 0);
}

#[test]
fn test_player_bullet_destroys_enemy() {
    let mut cells = common::grid(10, 16);
    cells[8][6] = 5;
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    place_player(&mut game, Vec2::new(50.0, common::FLOOR_REST_Y));
    assert_eq!(enemy_count(&mut game), 1);

    game.tick(fire());
    let mut destroyed_tick = None;
    for tick in 0..100 {
        game.tick(InputState::idle());
        if enemy_count(&mut game) == 0 {
            destroyed_tick = Some(tick);
            break;
        }
    }
    assert!(destroyed_tick.is_some(), "enemy survived");
    assert_eq!(score(&game), 250);
    // The bullet was consumed by the hit.
    assert_eq!(bullets(&mut game).len(), 0);
}

#[test]
fn test_shooter_bullet_damages_player() {
    let mut cells = common::grid(10, 16);
    cells[8][8] = 9;
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    place_player(&mut game, Vec2::new(50.0, common::FLOOR_REST_Y));

    let mut hurt = false;
    for _ in 0..200 {
        let output = game.tick(InputState::idle());
        if output.cues.contains(&AudioEvent::Damage) {
            hurt = true;
            break;
        }
    }
    assert!(hurt, "shooter never hit the player");
    assert_eq!(player_health(&mut game), 2);

    // The bullet was consumed by the hit, not left in flight.
    let live: Vec<_> = bullets(&mut game)
        .into_iter()
        .filter(|(_, owner)| *owner == Owner::Enemy)
        .collect();
    assert_eq!(live.len(), 0);
}

#[test]
fn test_shooter_holds_fire_during_cooldown() {
    let mut cells = common::grid(10, 16);
    cells[8][8] = 9;
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    place_player(&mut game, Vec2::new(50.0, common::FLOOR_REST_Y));

    // Warmup is 120 ticks; one was already spent on the starting tick.
    common::run(&mut game, InputState::idle(), 100);
    assert_eq!(bullets(&mut game).len(), 0);
}
