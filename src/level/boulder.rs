use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::Level;

impl Level {
    /// Gravity. A boulder falls straight down when the cell below gives way,
    /// rolls diagonally off another boulder when a whole side is clear, and
    /// slips off a deflector toward its open side. A boulder that just
    /// settled loses its moving flag and is harmless until disturbed again.
    pub(crate) fn boulder_act(&mut self, it: EntityId, dir: Direction) -> bool {
        use Direction::*;

        if dir != Down {
            return false;
        }
        if self.grid.nowhere(it) {
            // Swallowed by a bomb while being pushed.
            return false;
        }
        let below = self.kind_at(it, Down);
        if self.boulder_viable(it) {
            self.move_and_trigger(it, Down, Down);
            self.grid.entity_mut(it).moving = true;
        } else if below == Kind::Boulder
            && self.kind_at(it, Left) == Kind::Space
            && self.kind_at(it, DownLeft) == Kind::Space
        {
            self.move_and_trigger(it, DownLeft, Down);
            self.grid.entity_mut(it).moving = true;
        } else if below == Kind::Boulder
            && self.kind_at(it, Right) == Kind::Space
            && self.kind_at(it, DownRight) == Kind::Space
        {
            self.move_and_trigger(it, DownRight, Down);
            self.grid.entity_mut(it).moving = true;
        } else if below == Kind::LeftDeflector
            && self.kind_at(it, Left) == Kind::Space
            && self.kind_at(it, DownLeft) == Kind::Space
        {
            self.move_and_trigger(it, DownLeft, Down);
            self.grid.entity_mut(it).moving = true;
        } else if below == Kind::RightDeflector
            && self.kind_at(it, Right) == Kind::Space
            && self.kind_at(it, DownRight) == Kind::Space
        {
            self.move_and_trigger(it, DownRight, Down);
            self.grid.entity_mut(it).moving = true;
        } else {
            self.grid.entity_mut(it).moving = false;
            return false;
        }
        self.enqueue(it, Down);
        true
    }

    fn boulder_viable(&self, it: EntityId) -> bool {
        match self.kind_at(it, Direction::Down) {
            Kind::Space | Kind::Bomb | Kind::Monster => true,
            Kind::Player => self.grid.entity(it).moving,
            _ => false,
        }
    }
}
