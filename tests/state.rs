mod common;

use glam::Vec2;
use platformer::{
    input::InputState,
    render::{Overlay, RenderFrame},
    systems::components::{DynamicBody, Position},
    systems::{Backdrop, GameStage},
};
use pretty_assertions::assert_eq;

use common::{place_player, player_health, player_position, room, started};

fn patrol_x(game: &mut platformer::game::Game) -> f32 {
    let mut query = game.world.query::<(&Position, &DynamicBody)>();
    query
        .iter(&game.world)
        .find_map(|(position, body)| {
            matches!(body, DynamicBody::Patrol { .. }).then_some(position.0.x)
        })
        .unwrap()
}

#[test]
fn test_boots_into_home() {
    let mut game = common::game(vec![room()]);
    assert_eq!(game.stage(), GameStage::Home);

    // Idling at the title: stage holds, backdrop keeps scrolling.
    game.tick(InputState::idle());
    let scroll = game.world.resource::<Backdrop>().scroll;
    game.tick(InputState::idle());
    assert_eq!(game.stage(), GameStage::Home);
    assert!(game.world.resource::<Backdrop>().scroll > scroll);

    let frame = RenderFrame::extract(&mut game);
    assert!(matches!(frame.overlay, Overlay::Home { .. }));
}

#[test]
fn test_pause_intent_ignored_at_home() {
    let mut game = common::game(vec![room()]);
    game.tick(InputState::pause());
    assert_eq!(game.stage(), GameStage::Home);
}

#[test]
fn test_pause_freezes_the_world() {
    let mut cells = common::grid(10, 16);
    cells[8][6] = 5;
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    common::run(&mut game, InputState::idle(), 10);

    game.tick(InputState::pause());
    assert_eq!(game.stage(), GameStage::Paused);

    let player_frozen = player_position(&mut game);
    let patrol_frozen = patrol_x(&mut game);
    common::run(&mut game, InputState::idle(), 10);
    assert_eq!(player_position(&mut game), player_frozen);
    assert_eq!(patrol_x(&mut game), patrol_frozen);

    let frame = RenderFrame::extract(&mut game);
    assert_eq!(frame.overlay, Overlay::Paused);

    // Unpause: the world moves again.
    game.tick(InputState::pause());
    assert_eq!(game.stage(), GameStage::Playing);
    game.tick(InputState::idle());
    assert!(patrol_x(&mut game) != patrol_frozen);
}

#[test]
fn test_confirm_also_resumes_from_pause() {
    let mut game = started(room());
    game.tick(InputState::pause());
    assert_eq!(game.stage(), GameStage::Paused);
    game.tick(InputState::confirm());
    assert_eq!(game.stage(), GameStage::Playing);
}

#[test]
fn test_exit_from_pause_returns_home() {
    let mut game = started(room());
    game.tick(InputState::pause());
    game.tick(InputState {
        exit: true,
        ..InputState::idle()
    });
    assert_eq!(game.stage(), GameStage::Home);

    // And home can start a fresh session.
    game.tick(InputState::confirm());
    assert_eq!(game.stage(), GameStage::Playing);
}

#[test]
fn test_defeat_is_one_way_until_restart() {
    let mut cells = common::grid(10, 16);
    cells[8][4] = 6; // spikes
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    place_player(&mut game, Vec2::new(100.0, common::FLOOR_REST_Y));
    common::set_player_health(&mut game, 1);

    for _ in 0..40 {
        game.tick(InputState::walk_right());
        if game.stage() != GameStage::Playing {
            break;
        }
    }
    assert_eq!(game.stage(), GameStage::GameOver { victory: false });
    assert_eq!(player_health(&mut game), 0);

    let frame = RenderFrame::extract(&mut game);
    assert_eq!(
        frame.overlay,
        Overlay::Outcome {
            message: "Game Over",
            final_score: None,
        }
    );

    // Ticks in the terminal stage change nothing until a restart.
    let frozen = player_position(&mut game);
    let outputs = common::run(&mut game, InputState::walk_right(), 5);
    assert_eq!(player_position(&mut game), frozen);
    assert!(outputs.iter().all(|output| output.cues.is_empty()));

    game.tick(InputState::confirm());
    assert_eq!(game.stage(), GameStage::Playing);
    assert_eq!(player_health(&mut game), 3);
}

#[test]
fn test_victory_overlay_reports_final_score() {
    let mut cells = common::grid(10, 16);
    cells[8][3] = 3; // coin on the way
    cells[8][6] = 2; // goal
    let mut game = started(platformer::level::LevelTemplate::new(cells));
    place_player(&mut game, Vec2::new(100.0, common::FLOOR_REST_Y));

    for _ in 0..60 {
        game.tick(InputState::walk_right());
        if game.stage() != GameStage::Playing {
            break;
        }
    }
    assert_eq!(game.stage(), GameStage::GameOver { victory: true });

    let frame = RenderFrame::extract(&mut game);
    assert_eq!(
        frame.overlay,
        Overlay::Outcome {
            message: "You Win!",
            final_score: Some(100),
        }
    );
}
