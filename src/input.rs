//! Input intents. The embedder translates raw device events into an
//! [`InputState`] and hands it to [`crate::game::Game::tick`]; the core
//! never sees keycodes.

use bevy_ecs::resource::Resource;

/// Intent flags for one tick.
///
/// `left`/`right`/`jump_held` are level-triggered (true while held);
/// the `*_pressed`, `pause`, `confirm`, and `exit` flags are
/// edge-triggered and should be true only on the tick the intent fires.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub fire_pressed: bool,
    pub pause: bool,
    pub confirm: bool,
    pub exit: bool,
}

impl InputState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }

    pub fn walk_left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn walk_right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }
}
