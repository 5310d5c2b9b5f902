use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::Level;

impl Level {
    /// Greedy chase: step along the axis with the larger gap to the player,
    /// falling back to the other axis when blocked. The monster moves without
    /// pushing a cascade; it disturbs nothing but its victim.
    pub(crate) fn monster_act(&mut self, it: EntityId) -> bool {
        use Direction::*;

        let mut horizontal = Right;
        let mut vertical = Down;
        let mut dx = self.grid.distance(it, self.player, true);
        let mut dy = self.grid.distance(it, self.player, false);
        if dx < 0 {
            horizontal = Left;
            dx = -dx;
        }
        if dy < 0 {
            vertical = Up;
            dy = -dy;
        }
        if dx > dy && self.monster_viable(it, horizontal) {
            self.move_entity(it, horizontal);
        } else if self.monster_viable(it, vertical) {
            self.move_entity(it, vertical);
        } else if self.monster_viable(it, horizontal) {
            self.move_entity(it, horizontal);
        } else {
            return false;
        }
        true
    }

    fn monster_viable(&self, it: EntityId, dir: Direction) -> bool {
        matches!(self.kind_at(it, dir), Kind::Space | Kind::Player)
    }

    /// Something heavy or sharp reached the monster: it dies and whatever
    /// killed it takes its cell.
    pub(crate) fn monster_collide(&mut self, it: EntityId, other: EntityId) {
        self.grid.replace(it, other);
        self.monster = None;
        self.add_score(100);
    }
}
