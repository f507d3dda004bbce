pub mod camera;
pub mod components;
pub mod damage;
pub mod dynamic;
pub mod interact;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod spawn;
pub mod state;

pub use camera::{camera_system, CameraState};
pub use damage::{damage_system, touch_damage_system};
pub use dynamic::dynamic_body_system;
pub use interact::interact_system;
pub use particle::particle_system;
pub use player::player_movement_system;
pub use projectile::{fire_system, projectile_system};
pub use spawn::load_level_system;
pub use state::{backdrop_system, control_system, Backdrop, GameStage};
