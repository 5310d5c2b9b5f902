use std::fmt;

use thiserror::Error;

use crate::direction::Direction;
use crate::entity::{EntityId, Kind};
use crate::event::{DisplayEvent, MessageSlot};
use crate::grid::Grid;
use crate::position::Position;

mod arrow;
mod baby;
mod balloon;
mod boulder;
mod collide;
mod monster;
mod parse;
mod player;

#[cfg(test)]
mod tests;

/// How the player died, with the classic status-line wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Landmine,
    Boulder,
    Arrow,
    Bomb,
    Monster,
    BabyMonsters,
    Starvation,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeathCause::Landmine => "Killed by an exploding landmine",
            DeathCause::Boulder => "Killed by a falling boulder",
            DeathCause::Arrow => "Killed by a speeding arrow",
            DeathCause::Bomb => "Killed by an exploding bomb",
            DeathCause::Monster => "Killed by a hungry monster",
            DeathCause::BabyMonsters => "Killed by the little monsters",
            DeathCause::Starvation => "Killed by running out of time",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost(DeathCause),
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level map is empty")]
    EmptyMap,
    #[error("level map has no player cell")]
    NoPlayer,
    #[error("invalid level metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Scan order for reaction candidates around a disturbed cell.
const MAJORS: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// Cells to re-examine after an entity moves in the given direction: its own
/// vacated cell plus the five neighbors it may have been supporting. Listed
/// in examination order; they are pushed onto the LIFO stack in reverse.
fn behind_list(d: Direction) -> [Direction; 6] {
    use Direction::*;
    match d {
        Up => [Here, Down, Right, Left, DownRight, DownLeft],
        Down => [Here, Up, Left, Right, UpLeft, UpRight],
        Left => [Here, Right, Down, Up, DownRight, UpRight],
        Right => [Here, Left, Up, Down, UpLeft, DownLeft],
        _ => unreachable!("no cascade list for {d:?}"),
    }
}

/// One level of the game in play: the grid, the turn counters, and the
/// trigger stack that drives chain reactions. One call to [`Level::run`]
/// advances the world by one player turn.
pub struct Level {
    pub(crate) grid: Grid,
    pub(crate) triggers: Vec<Position>,
    pub(crate) player: EntityId,
    pub(crate) monster: Option<EntityId>,
    pub(crate) babies: Vec<EntityId>,
    pub(crate) arrival: Position,
    pub(crate) score: i32,
    pub(crate) moves: i32,
    pub(crate) max_moves: i32,
    pub(crate) treasure: i32,
    pub(crate) max_treasure: i32,
    pub(crate) outcome: Outcome,
}

impl Level {
    /// Advances the world by one turn: the player acts in `d`, then the
    /// monster takes a chase step, then every registered follower takes a
    /// wall-following step. Each actor's chain reaction runs to completion
    /// before the next actor moves.
    pub fn run(&mut self, d: Direction) -> Outcome {
        self.action(self.player, d);
        if let Some(monster) = self.monster {
            self.action(monster, d);
        }
        let babies = self.babies.clone();
        for baby in babies {
            self.action(baby, d);
            if self.babies.contains(&baby) {
                self.baby_show(baby);
            }
        }
        if self.outcome == Outcome::InProgress {
            self.add_treasure(0);
            self.add_score(0);
        }
        self.outcome
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Treasures still uncollected.
    pub fn treasure_remaining(&self) -> i32 {
        self.treasure
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Drains the display journal accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<DisplayEvent> {
        self.grid.take_events()
    }

    /// One actor's move plus the full chain reaction it sets off. The stack
    /// drains depth-first; a terminal outcome abandons whatever is left.
    fn action(&mut self, actor: EntityId, d: Direction) {
        if self.outcome != Outcome::InProgress {
            return;
        }
        self.act(actor, d);
        while let Some(pos) = self.triggers.pop() {
            if self.outcome != Outcome::InProgress {
                break;
            }
            self.trigger(pos);
        }
        self.triggers.clear();
    }

    fn act(&mut self, it: EntityId, dir: Direction) -> bool {
        match self.grid.kind(it) {
            Kind::Player => self.player_act(it, dir),
            Kind::Boulder => self.boulder_act(it, dir),
            Kind::LeftArrow => self.arrow_act(it, dir, Direction::Left),
            Kind::RightArrow => self.arrow_act(it, dir, Direction::Right),
            Kind::Balloon => self.balloon_act(it, dir),
            Kind::Monster => self.monster_act(it),
            Kind::BabyMonster => self.baby_act(it),
            _ => false,
        }
    }

    pub(crate) fn collide(&mut self, it: EntityId, other: EntityId) {
        match self.grid.kind(it) {
            Kind::Space => self.space_collide(it, other),
            Kind::Earth => self.earth_collide(it, other),
            Kind::Exit => self.exit_collide(it, other),
            Kind::Player => self.player_collide(it, other),
            Kind::Treasure => self.treasure_collide(it, other),
            Kind::Cage => self.cage_collide(it, other),
            Kind::Landmine => self.landmine_collide(it, other),
            Kind::Teleport => self.teleport_collide(it, other),
            Kind::TimeCapsule => self.capsule_collide(it, other),
            Kind::Balloon => self.balloon_collide(it, other),
            Kind::Monster => self.monster_collide(it, other),
            Kind::BabyMonster => self.baby_collide(it, other),
            _ => {}
        }
    }

    /// Gives every neighbor of a disturbed cell one chance to react. The
    /// first reaction wins; monsters and followers never react to cascades,
    /// and the player is only ever moved by explicit input.
    fn trigger(&mut self, pos: Position) {
        let it = self.grid.get(pos);
        if self.grid.kind(it) == Kind::Wall {
            return;
        }
        for dir in MAJORS {
            let candidate = self.grid.find(it, dir.opposite());
            match self.grid.kind(candidate) {
                Kind::Monster | Kind::BabyMonster | Kind::Player => {}
                _ => {
                    if self.act(candidate, dir) {
                        break;
                    }
                }
            }
        }
    }

    /// Schedules the neighbor of `it` in `dir` for re-examination. Skipped
    /// when `it` has left the grid (popped, eaten, hidden).
    pub(crate) fn enqueue(&mut self, it: EntityId, dir: Direction) {
        let Some(pos) = self.grid.position(it) else {
            return;
        };
        self.triggers.push(pos + dir.delta());
    }

    /// Pushes the cascade cells for a move in `d`, relative to the mover's
    /// current cell, without moving anything.
    pub(crate) fn start_triggers(&mut self, it: EntityId, d: Direction) {
        if d == Direction::Here {
            return;
        }
        for dir in behind_list(d).into_iter().rev() {
            self.enqueue(it, dir);
        }
    }

    /// Primitive move: `it` leaves a fresh space behind and collides with
    /// the occupant of the target cell. Emits one animation step.
    pub(crate) fn move_entity(&mut self, it: EntityId, dir: Direction) {
        let target = self.grid.find(it, dir);
        let space = self.grid.spawn(Kind::Space);
        self.grid.replace(it, space);
        self.collide(target, it);
        self.grid.push_event(DisplayEvent::Step);
    }

    /// Move in `md` and schedule the cascade for an action in `d`. The two
    /// differ when something slips diagonally while falling or flying.
    pub(crate) fn move_and_trigger(&mut self, it: EntityId, md: Direction, d: Direction) {
        if d == Direction::Here {
            return;
        }
        self.start_triggers(it, d);
        self.move_entity(it, md);
    }

    pub(crate) fn kind_at(&self, it: EntityId, dir: Direction) -> Kind {
        self.grid.kind(self.grid.find(it, dir))
    }

    pub(crate) fn add_score(&mut self, n: i32) -> i32 {
        self.score += n;
        self.message(MessageSlot::Score, format!("Score: {}", self.score));
        self.score
    }

    /// Adjusts the move budget. Positive grants raise the ceiling as well;
    /// only spending a move refreshes the status line.
    pub(crate) fn add_moves(&mut self, n: i32) -> i32 {
        self.moves += n;
        if n > 0 {
            self.max_moves += n;
        }
        if n >= 0 {
            return self.moves;
        }
        let used = self.max_moves - self.moves;
        let text = if self.max_moves <= 0 {
            format!("Moves: {used}")
        } else {
            format!("Moves: {used}/{}", self.max_moves)
        };
        self.message(MessageSlot::Moves, text);
        self.moves
    }

    pub(crate) fn add_treasure(&mut self, n: i32) -> i32 {
        self.treasure += n;
        if self.treasure > self.max_treasure {
            self.max_treasure = self.treasure;
        }
        let found = self.max_treasure - self.treasure;
        self.message(
            MessageSlot::Status,
            format!("Stars found: {found}/{}", self.max_treasure),
        );
        self.treasure
    }

    pub(crate) fn message(&mut self, slot: MessageSlot, text: String) {
        self.grid.push_event(DisplayEvent::Message { slot, text });
    }

    pub(crate) fn succeed(&mut self) {
        self.message(MessageSlot::Status, "Success!".to_string());
        self.outcome = Outcome::Won;
        self.triggers.clear();
    }

    pub(crate) fn fail(&mut self, cause: DeathCause) {
        self.message(MessageSlot::Status, cause.to_string());
        self.outcome = Outcome::Lost(cause);
        self.triggers.clear();
    }

    pub(crate) fn del_baby(&mut self, baby: EntityId) {
        self.babies.retain(|&b| b != baby);
    }

    /// Per-kind setup once the whole map is placed, in the same column-major
    /// order the cells were populated.
    pub(crate) fn init_cells(&mut self) {
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                let it = self.grid.get(Position::new(x, y));
                self.init_cell(it);
            }
        }
    }

    fn init_cell(&mut self, it: EntityId) {
        match self.grid.kind(it) {
            Kind::Treasure | Kind::Cage => {
                self.add_treasure(1);
            }
            Kind::Arrival => {
                self.arrival = self.grid.position(it).expect("arrival is on the grid");
                let space = self.grid.spawn(Kind::Space);
                self.grid.replace(it, space);
            }
            Kind::Monster => self.monster = Some(it),
            Kind::BabyMonster => self.baby_init(it),
            _ => {}
        }
    }
}
