//! The simulation root: owns the ECS world and schedule and exposes the
//! tick-level API the embedder drives.

use bevy_ecs::{
    event::{EventRegistry, Events},
    schedule::{IntoScheduleConfigs, Schedule, SystemSet},
    system::Res,
    world::World,
};
use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};
use smallvec::SmallVec;
use tracing::{error, info, trace};

use crate::{
    config::Config,
    constants::{MAX_HEALTH, PLAYER_SIZE, START_AMMO},
    error::{GameError, GameResult},
    events::{AudioEvent, LoadLevel, PlayerHit},
    input::InputState,
    level::{Level, LevelSet, LevelTemplate},
    systems::{
        backdrop_system, camera_system,
        components::{Ammo, BodySize, EffectsRng, Health, PlayerBundle, PlayerControlled,
            PlayerState, Position, Score, Velocity},
        control_system, damage_system, dynamic_body_system, fire_system, interact_system,
        load_level_system, particle_system, player_movement_system, projectile_system,
        touch_damage_system, Backdrop, CameraState, GameStage,
    },
};

/// Fixed seed so effect jitter is reproducible across runs.
const EFFECTS_SEED: u64 = 0x706c_6174;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum ScheduleSet {
    Gameplay,
}

/// Everything one tick produced that the embedder must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    pub stage: GameStage,
    pub cues: SmallVec<[AudioEvent; 8]>,
}

pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl Game {
    /// Validates every level template up front (fail fast, before any
    /// tick runs), then builds the world with level zero live and the
    /// player spawned at its spawn point.
    pub fn new(levels: Vec<LevelTemplate>, config: Config) -> GameResult<Self> {
        if levels.is_empty() {
            return Err(GameError::InvalidState("empty level set".into()));
        }
        for (index, template) in levels.iter().enumerate() {
            if let Err(err) = template.validate() {
                error!(index, %err, "level template rejected");
                return Err(err.into());
            }
        }

        let mut world = World::new();
        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, levels, config)?;
        Self::spawn_player(&mut world);

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        info!("game initialized");
        Ok(Self { world, schedule })
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<AudioEvent>(world);
        EventRegistry::register_event::<PlayerHit>(world);
        EventRegistry::register_event::<LoadLevel>(world);
        EventRegistry::register_event::<GameError>(world);
    }

    fn insert_resources(
        world: &mut World,
        levels: Vec<LevelTemplate>,
        config: Config,
    ) -> GameResult<()> {
        let level = Level::from_template(&levels[0], 0)?;
        world.insert_resource(config);
        world.insert_resource(level);
        world.insert_resource(LevelSet(levels));
        world.insert_resource(GameStage::default());
        world.insert_resource(Score::default());
        world.insert_resource(Ammo(START_AMMO));
        world.insert_resource(CameraState::default());
        world.insert_resource(Backdrop::default());
        world.insert_resource(InputState::default());
        world.insert_resource(EffectsRng(SmallRng::seed_from_u64(EFFECTS_SEED)));
        Ok(())
    }

    fn spawn_player(world: &mut World) {
        let spawn = world.resource::<Level>().spawn_point();
        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(spawn),
            velocity: Velocity(Vec2::ZERO),
            size: BodySize(PLAYER_SIZE),
            state: PlayerState::default(),
            health: Health::full(MAX_HEALTH),
        });
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.add_systems(
            (
                control_system,
                load_level_system,
                backdrop_system
                    .run_if(|stage: Res<GameStage>| matches!(*stage, GameStage::Home)),
                (
                    player_movement_system,
                    interact_system,
                    touch_damage_system,
                    fire_system,
                    projectile_system,
                    particle_system,
                    dynamic_body_system,
                    damage_system,
                    camera_system,
                )
                    .chain()
                    .in_set(ScheduleSet::Gameplay),
            )
                .chain(),
        );
        schedule.configure_sets(
            ScheduleSet::Gameplay.run_if(|stage: Res<GameStage>| stage.is_playing()),
        );
    }

    /// Runs one simulation tick against this tick's input intents and
    /// returns what the embedder must act on: the (possibly changed)
    /// stage and the audio cues emitted this tick.
    pub fn tick(&mut self, input: InputState) -> TickOutput {
        self.world.insert_resource(input);
        self.schedule.run(&mut self.world);

        let cues: SmallVec<[AudioEvent; 8]> = self
            .world
            .resource_mut::<Events<AudioEvent>>()
            .drain()
            .collect();
        for cue in &cues {
            trace!(cue = %cue, "audio cue");
        }

        for fault in self.world.resource_mut::<Events<GameError>>().drain() {
            error!(fault = %fault, "tick fault");
        }

        // Manual double-buffer advance: events written late in a tick
        // (e.g. a goal reaching for the next level) stay readable for
        // exactly one more tick.
        self.world.resource_mut::<Events<PlayerHit>>().update();
        self.world.resource_mut::<Events<LoadLevel>>().update();

        TickOutput {
            stage: *self.world.resource::<GameStage>(),
            cues,
        }
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }
}
