//! Level data: raw templates supplied by the embedder, validation, and
//! the live grid the simulation runs against.

pub mod tile;

use bevy_ecs::resource::Resource;
use glam::Vec2;
use smallvec::SmallVec;

use crate::{
    constants::{DEFAULT_SPAWN, TILE_SIZE},
    error::LevelError,
    geometry::Aabb,
};

pub use tile::{Solidity, Tile};

/// Raw level data as supplied by the embedder: a grid of tile codes and
/// an optional spawn cell. Validated once, up front, in `Game::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTemplate {
    pub rows: Vec<Vec<u8>>,
    pub spawn: Option<(usize, usize)>,
}

impl LevelTemplate {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows, spawn: None }
    }

    pub fn with_spawn(mut self, row: usize, col: usize) -> Self {
        self.spawn = Some((row, col));
        self
    }

    /// Checks the grid is rectangular, non-empty, uses only known tile
    /// codes, contains a goal, and that the spawn cell (if any) is in
    /// bounds.
    pub fn validate(&self) -> Result<(), LevelError> {
        let Some(first) = self.rows.first() else {
            return Err(LevelError::EmptyGrid);
        };
        if first.is_empty() {
            return Err(LevelError::EmptyGrid);
        }

        let expected = first.len();
        let mut has_goal = false;
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LevelError::NotRectangular {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            for &code in cells {
                if Tile::from_code(code)? == Tile::Goal {
                    has_goal = true;
                }
            }
        }
        if !has_goal {
            return Err(LevelError::MissingGoal);
        }

        if let Some((row, col)) = self.spawn {
            if row >= self.rows.len() || col >= expected {
                return Err(LevelError::SpawnOutOfBounds { row, col });
            }
        }
        Ok(())
    }
}

/// The ordered set of levels making up one game, validated at startup.
#[derive(Resource, Debug, Clone)]
pub struct LevelSet(pub Vec<LevelTemplate>);

/// The kind of dynamic object a marker tile stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Patrol,
    Platform,
    Shooter,
}

/// A dynamic object extracted from the grid at load time, positioned at
/// its marker cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicSpawn {
    pub kind: SpawnKind,
    pub position: Vec2,
}

/// A live, mutable level instance. Pickups are consumed by zeroing their
/// cell, so each load deep-copies the template grid.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub index: usize,
    tiles: Vec<Vec<Tile>>,
    width_px: f32,
    spawn_cell: (usize, usize),
    spawns: SmallVec<[DynamicSpawn; 8]>,
}

impl Level {
    /// Instantiates a template: decodes the grid, consumes marker tiles
    /// (row-major) into the dynamic spawn list, and resolves the spawn
    /// cell. The template itself is left untouched.
    pub fn from_template(template: &LevelTemplate, index: usize) -> Result<Self, LevelError> {
        let mut tiles = Vec::with_capacity(template.rows.len());
        let mut spawns = SmallVec::new();

        for (row, cells) in template.rows.iter().enumerate() {
            let mut decoded = Vec::with_capacity(cells.len());
            for (col, &code) in cells.iter().enumerate() {
                let tile = Tile::from_code(code)?;
                if tile.is_marker() {
                    let kind = match tile {
                        Tile::PatrolMarker => SpawnKind::Patrol,
                        Tile::PlatformMarker => SpawnKind::Platform,
                        _ => SpawnKind::Shooter,
                    };
                    spawns.push(DynamicSpawn {
                        kind,
                        position: Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
                    });
                    decoded.push(Tile::Empty);
                } else {
                    decoded.push(tile);
                }
            }
            tiles.push(decoded);
        }

        let cols = tiles.first().map(Vec::len).unwrap_or(0);
        Ok(Self {
            index,
            width_px: cols as f32 * TILE_SIZE,
            spawn_cell: template.spawn.unwrap_or(DEFAULT_SPAWN),
            tiles,
            spawns,
        })
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map(Vec::len).unwrap_or(0)
    }

    /// Level width in pixels; the right-hand camera clamp and the bullet
    /// prune bound.
    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.tiles.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Consumes a pickup by emptying its cell.
    pub fn clear(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.tiles.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *cell = Tile::Empty;
        }
    }

    pub fn spawns(&self) -> &[DynamicSpawn] {
        &self.spawns
    }

    /// Player spawn point in pixels (top-left of the spawn cell).
    pub fn spawn_point(&self) -> Vec2 {
        let (row, col) = self.spawn_cell;
        Vec2::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE)
    }

    /// All grid cells whose box strictly overlaps `aabb`, with the cell's
    /// own box. Coordinates outside the grid yield nothing.
    pub fn tiles_overlapping<'a>(
        &'a self,
        aabb: &'a Aabb,
    ) -> impl Iterator<Item = (usize, usize, Tile, Aabb)> + 'a {
        let first_col = (aabb.min.x / TILE_SIZE).floor().max(0.0) as usize;
        let last_col = ((aabb.max().x / TILE_SIZE).ceil().max(0.0) as usize).min(self.cols());
        let first_row = (aabb.min.y / TILE_SIZE).floor().max(0.0) as usize;
        let last_row = ((aabb.max().y / TILE_SIZE).ceil().max(0.0) as usize).min(self.rows());

        (first_row..last_row).flat_map(move |row| {
            (first_col..last_col).filter_map(move |col| {
                let tile = self.tiles[row][col];
                let cell = Aabb::new(
                    col as f32 * TILE_SIZE,
                    row as f32 * TILE_SIZE,
                    TILE_SIZE,
                    TILE_SIZE,
                );
                aabb.overlaps(&cell).then_some((row, col, tile, cell))
            })
        })
    }

    /// Solid cells overlapping `aabb` under the given solidity mask.
    pub fn solid_overlaps(&self, aabb: &Aabb, mask: Solidity) -> Vec<Aabb> {
        self.tiles_overlapping(aabb)
            .filter(|(_, _, tile, _)| tile.solidity().intersects(mask))
            .map(|(_, _, _, cell)| cell)
            .collect()
    }
}
