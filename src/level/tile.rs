use bitflags::bitflags;
use strum_macros::EnumIter;

use crate::error::LevelError;

bitflags! {
    /// Classes of tile that block movement. Which classes are active is a
    /// [`crate::config::Config`] field, so phantom walls can be toggled
    /// between decorative and solid per game.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Solidity: u8 {
        const WALLS = 1 << 0;
        const PHANTOM = 1 << 1;
    }
}

/// One cell of the level grid. The numeric codes are the level data
/// format; markers are consumed into dynamic objects at load time and
/// never survive into a live grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Tile {
    Empty,
    Wall,
    Goal,
    Coin,
    Gun,
    PatrolMarker,
    Spikes,
    PhantomWall,
    PlatformMarker,
    ShooterMarker,
}

impl Tile {
    pub fn from_code(code: u8) -> Result<Self, LevelError> {
        Ok(match code {
            0 => Tile::Empty,
            1 => Tile::Wall,
            2 => Tile::Goal,
            3 => Tile::Coin,
            4 => Tile::Gun,
            5 => Tile::PatrolMarker,
            6 => Tile::Spikes,
            7 => Tile::PhantomWall,
            8 => Tile::PlatformMarker,
            9 => Tile::ShooterMarker,
            _ => return Err(LevelError::UnknownTileCode(code)),
        })
    }

    pub fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Wall => 1,
            Tile::Goal => 2,
            Tile::Coin => 3,
            Tile::Gun => 4,
            Tile::PatrolMarker => 5,
            Tile::Spikes => 6,
            Tile::PhantomWall => 7,
            Tile::PlatformMarker => 8,
            Tile::ShooterMarker => 9,
        }
    }

    pub fn solidity(self) -> Solidity {
        match self {
            Tile::Wall => Solidity::WALLS,
            Tile::PhantomWall => Solidity::PHANTOM,
            _ => Solidity::empty(),
        }
    }

    /// Markers stand in for dynamic objects in level data.
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Tile::PatrolMarker | Tile::PlatformMarker | Tile::ShooterMarker
        )
    }
}
