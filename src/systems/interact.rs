//! Tile interactions: goals, pickups, and spikes, resolved against every
//! cell the player's body overlaps this tick.

use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    constants::{COIN_SCORE, GUN_PICKUP_AMMO},
    events::{AudioEvent, LoadLevel, PlayerHit},
    level::{Level, LevelSet, Tile},
    systems::{
        components::{body_aabb, Ammo, BodySize, PlayerControlled, Position, Score},
        state::GameStage,
    },
};

pub fn interact_system(
    mut level: ResMut<Level>,
    levels: Res<LevelSet>,
    mut score: ResMut<Score>,
    mut ammo: ResMut<Ammo>,
    mut stage: ResMut<GameStage>,
    players: Query<(&Position, &BodySize), With<PlayerControlled>>,
    mut loads: EventWriter<LoadLevel>,
    mut hits: EventWriter<PlayerHit>,
    mut cues: EventWriter<AudioEvent>,
) {
    let Ok((position, body)) = players.single() else {
        return;
    };
    let aabb = body_aabb(position, body);

    // Collected up front so pickups can mutate the grid mid-scan.
    let touched: Vec<(usize, usize, Tile)> = level
        .tiles_overlapping(&aabb)
        .map(|(row, col, tile, _)| (row, col, tile))
        .collect();

    for (row, col, tile) in touched {
        match tile {
            Tile::Goal => {
                if level.index + 1 >= levels.0.len() {
                    info!(score = score.0, "final goal reached");
                    *stage = GameStage::GameOver { victory: true };
                } else {
                    loads.write(LoadLevel(level.index + 1));
                }
                return;
            }
            Tile::Coin => {
                score.0 += COIN_SCORE;
                level.clear(row, col);
                debug!(score = score.0, "coin collected");
                cues.write(AudioEvent::Coin);
            }
            Tile::Gun => {
                ammo.0 += GUN_PICKUP_AMMO;
                level.clear(row, col);
                debug!(ammo = ammo.0, "gun picked up");
                cues.write(AudioEvent::GunPickup);
            }
            Tile::Spikes => {
                hits.write(PlayerHit { amount: 1 });
                return;
            }
            _ => {}
        }
    }
}
