mod common;

use glam::Vec2;
use platformer::{
    constants::{PATROL_RANGE, PATROL_SPEED, TILE_SIZE},
    game::Game,
    input::InputState,
    systems::components::{BodySize, DynamicBody, DynamicBundle, Facing, Position},
};

use common::{place_player, player_position, player_state, started};

fn patrols(game: &mut Game) -> Vec<(f32, f32)> {
    let mut query = game.world.query::<(&Position, &DynamicBody)>();
    query
        .iter(&game.world)
        .filter_map(|(position, body)| match body {
            DynamicBody::Patrol { direction, .. } => Some((position.0.x, *direction)),
            _ => None,
        })
        .collect()
}

fn shooter_facing(game: &mut Game) -> Option<Facing> {
    let mut query = game.world.query::<&DynamicBody>();
    query.iter(&game.world).find_map(|body| match body {
        DynamicBody::Shooter { facing, .. } => Some(*facing),
        _ => None,
    })
}

#[test]
fn test_patrol_reverses_at_range_bounds() {
    let mut cells = common::grid(10, 16);
    cells[8][6] = 5; // start_x = 300
    let mut game = started(platformer::level::LevelTemplate::new(cells));

    // Outbound leg: strictly increasing x until the far bound.
    let mut last_x = patrols(&mut game)[0].0;
    let mut flipped_at = None;
    for _ in 0..200 {
        game.tick(InputState::idle());
        let (x, direction) = patrols(&mut game)[0];
        if direction < 0.0 {
            flipped_at = Some(x);
            break;
        }
        assert!(x > last_x);
        last_x = x;
    }
    // The flip happens within one step past start_x + range.
    let flipped_at = flipped_at.unwrap_or_else(|| panic!("patrol never reversed"));
    assert!(flipped_at > 300.0 + PATROL_RANGE);
    assert!(flipped_at <= 300.0 + PATROL_RANGE + PATROL_SPEED);

    // Return leg: strictly decreasing until just past start_x.
    let mut last_x = flipped_at;
    let mut returned_at = None;
    for _ in 0..200 {
        game.tick(InputState::idle());
        let (x, direction) = patrols(&mut game)[0];
        if direction > 0.0 {
            returned_at = Some(x);
            break;
        }
        assert!(x < last_x);
        last_x = x;
    }
    let returned_at = returned_at.unwrap_or_else(|| panic!("patrol never turned back"));
    assert!(returned_at < 300.0);
    assert!(returned_at >= 300.0 - PATROL_SPEED);
}

#[test]
fn test_opposed_patrols_diverge_then_reverse() {
    let mut game = started(common::room());
    for direction in [1.0, -1.0] {
        game.world.spawn(DynamicBundle {
            position: Position(Vec2::new(400.0, 200.0)),
            size: BodySize(Vec2::splat(TILE_SIZE)),
            body: DynamicBody::Patrol {
                speed: PATROL_SPEED,
                direction,
                start_x: 300.0,
                range: 200.0,
            },
        });
    }

    // Both inside the track: the gap between them widens every tick.
    let mut last_gap = 0.0;
    for _ in 0..90 {
        game.tick(InputState::idle());
        let xs = patrols(&mut game);
        let gap = (xs[0].0 - xs[1].0).abs();
        assert!(gap > last_gap);
        last_gap = gap;
    }

    // The left-runner started 100 px from its bound, so by now it has
    // reversed; the gap shrinks again.
    common::run(&mut game, InputState::idle(), 40);
    game.tick(InputState::idle());
    let xs = patrols(&mut game);
    let gap = (xs[0].0 - xs[1].0).abs();
    assert!(gap < 200.0 + 90.0 + 90.0);
    assert!(xs.iter().all(|(x, _)| (299.0..=501.0).contains(x)));
}

#[test]
fn test_platform_carries_player() {
    let mut cells = common::grid(12, 20);
    cells[6][5] = 8; // platform at (250, 300)
    let mut game = started(platformer::level::LevelTemplate::new(cells));

    // Drop the player onto the platform from just above.
    place_player(&mut game, Vec2::new(280.0, 240.0));
    for _ in 0..40 {
        game.tick(InputState::idle());
        if player_state(&mut game).on_ground {
            break;
        }
    }
    assert!(player_state(&mut game).on_ground, "player never landed");

    // Riding: carried sideways with no input at the platform's speed.
    let before = player_position(&mut game).x;
    common::run(&mut game, InputState::idle(), 5);
    let after = player_position(&mut game).x;
    assert!((after - before - 5.0).abs() < 1e-3);
    assert!(player_state(&mut game).on_ground);
}

#[test]
fn test_shooter_faces_player() {
    let mut cells = common::grid(10, 16);
    cells[8][8] = 9; // shooter at x = 400
    let mut game = started(platformer::level::LevelTemplate::new(cells));

    place_player(&mut game, Vec2::new(50.0, common::FLOOR_REST_Y));
    game.tick(InputState::idle());
    assert_eq!(shooter_facing(&mut game), Some(Facing::Left));

    place_player(&mut game, Vec2::new(600.0, common::FLOOR_REST_Y));
    game.tick(InputState::idle());
    assert_eq!(shooter_facing(&mut game), Some(Facing::Right));

    // Exactly level with the turret resolves to the right.
    place_player(&mut game, Vec2::new(400.0, 200.0));
    game.tick(InputState::idle());
    assert_eq!(shooter_facing(&mut game), Some(Facing::Right));
}
