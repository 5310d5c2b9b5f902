use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::Level;

/// Collision handlers for the passive kinds: entities that never act on
/// their own but react when something moves onto them. Active kinds keep
/// their collide handlers next to their act logic.
impl Level {
    pub(crate) fn space_collide(&mut self, it: EntityId, other: EntityId) {
        self.grid.replace(it, other);
    }

    pub(crate) fn earth_collide(&mut self, it: EntityId, other: EntityId) {
        if self.grid.kind(other) == Kind::Player {
            self.add_score(1);
        }
        self.grid.replace(it, other);
    }

    pub(crate) fn treasure_collide(&mut self, it: EntityId, other: EntityId) {
        self.add_treasure(-1);
        self.add_score(10);
        self.grid.replace(it, other);
    }

    /// A follower walked into the cage: it is captured for good and the cage
    /// turns into a star.
    pub(crate) fn cage_collide(&mut self, it: EntityId, other: EntityId) {
        self.del_baby(other);
        self.add_score(20);
        let treasure = self.grid.spawn(Kind::Treasure);
        self.grid.replace(it, treasure);
    }

    pub(crate) fn landmine_collide(&mut self, it: EntityId, other: EntityId) {
        self.grid.replace(it, other);
        if self.grid.kind(other) == Kind::Player {
            self.player_collide(other, it);
        }
    }

    /// Relocates the player to the arrival cell. Both ends of the jump are
    /// disturbed: the departure cell and the arrival cell with its four
    /// diagonal neighbors each get exactly one cascade visit.
    pub(crate) fn teleport_collide(&mut self, it: EntityId, other: EntityId) {
        use Direction::*;

        self.add_score(20);
        let target = self.grid.get(self.arrival);
        self.enqueue(target, UpLeft);
        self.enqueue(target, DownLeft);
        self.enqueue(target, DownRight);
        self.enqueue(target, UpRight);
        self.enqueue(target, Here);
        self.enqueue(it, Here);
        let space = self.grid.spawn(Kind::Space);
        self.grid.replace(it, space);
        self.grid.replace(target, other);
    }

    pub(crate) fn capsule_collide(&mut self, it: EntityId, other: EntityId) {
        self.add_score(5);
        self.add_moves(250);
        self.grid.replace(it, other);
    }

    /// Reaching the exit with every star found wins the level. The gate in
    /// `player_viable` means the count is always zero here, so the finishing
    /// bonus always pays out.
    pub(crate) fn exit_collide(&mut self, _it: EntityId, _other: EntityId) {
        if self.add_treasure(0) == 0 {
            self.add_score(250);
        }
        self.succeed();
    }
}
