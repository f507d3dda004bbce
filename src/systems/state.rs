//! The stage state machine and the control system that owns its
//! transitions.

use bevy_ecs::{
    event::EventWriter,
    query::With,
    resource::Resource,
    system::{Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    constants::{BACKDROP_SCROLL_SPEED, START_AMMO},
    events::LoadLevel,
    input::InputState,
    systems::components::{Ammo, Health, PlayerControlled, Score},
};

/// Which top-level mode the game is in. Gameplay systems only run during
/// `Playing`; the control system always runs and performs transitions.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStage {
    #[default]
    Home,
    Playing,
    Paused,
    GameOver {
        victory: bool,
    },
}

impl GameStage {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// Vertical scroll offset of the home screen backdrop. Presentation
/// state only, but it lives here so the core stays the single source of
/// truth for everything the render frame carries.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub scroll: f32,
}

/// Applies stage transitions from this tick's intents. Starting a
/// session (from Home or GameOver) resets score, ammo, and health and
/// requests level zero; out-of-place intents are ignored.
pub fn control_system(
    input: Res<InputState>,
    mut stage: ResMut<GameStage>,
    mut score: ResMut<Score>,
    mut ammo: ResMut<Ammo>,
    mut players: Query<&mut Health, With<PlayerControlled>>,
    mut loads: EventWriter<LoadLevel>,
) {
    let next = match *stage {
        GameStage::Home | GameStage::GameOver { .. } if input.confirm => {
            score.0 = 0;
            ammo.0 = START_AMMO;
            if let Ok(mut health) = players.single_mut() {
                health.current = health.max;
            }
            loads.write(LoadLevel(0));
            info!("session started");
            Some(GameStage::Playing)
        }
        GameStage::Playing if input.pause => Some(GameStage::Paused),
        GameStage::Paused if input.exit => Some(GameStage::Home),
        GameStage::Paused if input.pause || input.confirm => Some(GameStage::Playing),
        _ => None,
    };

    if let Some(next) = next {
        debug!(from = ?*stage, to = ?next, "stage transition");
        *stage = next;
    }
}

/// Scrolls the home screen backdrop, wrapping at the viewport height.
pub fn backdrop_system(config: Res<crate::config::Config>, mut backdrop: ResMut<Backdrop>) {
    backdrop.scroll += BACKDROP_SCROLL_SPEED;
    if backdrop.scroll >= config.viewport.y {
        backdrop.scroll = 0.0;
    }
}
