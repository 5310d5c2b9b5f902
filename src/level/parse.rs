use serde::Deserialize;

use crate::entity::Kind;
use crate::event::MessageSlot;
use crate::grid::Grid;
use crate::levels::LevelSource;
use crate::position::Position;

use super::{Level, LevelError, Outcome};

#[derive(Deserialize)]
pub(crate) struct LevelMetadata {
    pub(crate) name: String,
    /// Move budget; 0 means unlimited.
    #[serde(default)]
    pub(crate) moves: i32,
}

impl LevelMetadata {
    pub(crate) fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Level {
    /// Builds a level from a character map and its JSON metadata. Rows
    /// shorter than the widest one are padded with space; an unrecognized
    /// character is logged and treated as space. The map must be fully
    /// enclosed by walls; the simulation relies on that border.
    pub fn load(source: &LevelSource<'_>) -> Result<Level, LevelError> {
        let metadata = LevelMetadata::parse(source.metadata)?;
        let map = source.map.trim_matches('\n');
        let rows: Vec<Vec<char>> = map.lines().map(|line| line.chars().collect()).collect();
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LevelError::EmptyMap);
        }

        let mut grid = Grid::new(width, height);
        let mut player = None;
        for x in 0..width {
            for y in 0..height {
                let code = rows[y].get(x).copied().unwrap_or(' ');
                let kind = Kind::from_code(code).unwrap_or_else(|| {
                    log::warn!("unknown map character {code:?} at ({x}, {y}), treating as space");
                    Kind::Space
                });
                let id = grid.spawn(kind);
                grid.set(Position::new(x, y), id);
                if kind == Kind::Player {
                    player = Some(id);
                }
            }
        }
        let player = player.ok_or(LevelError::NoPlayer)?;

        let mut level = Level {
            grid,
            triggers: Vec::new(),
            player,
            monster: None,
            babies: Vec::new(),
            arrival: Position::new(0, 0),
            score: 0,
            moves: 0,
            max_moves: 0,
            treasure: 0,
            max_treasure: 0,
            outcome: Outcome::InProgress,
        };
        if metadata.moves != 0 {
            level.add_moves(metadata.moves);
        }
        level.init_cells();

        level.message(
            MessageSlot::Title,
            format!("Level {}: {}", source.number, metadata.name),
        );
        level.message(
            MessageSlot::Status,
            "Use arrow keys to move, space to stand still".to_string(),
        );
        level.message(MessageSlot::Score, String::new());
        level.message(MessageSlot::Moves, String::new());
        Ok(level)
    }
}
