use crate::direction::Direction;
use crate::entity::{BabyState, EntityId, Kind};
use crate::event::DisplayEvent;

use super::Level;

/// Wall-following little monsters. A follower glides over the board rather
/// than displacing it: whatever it stands on is remembered and restored when
/// it moves away. While its own cascade runs it hides entirely (the covered
/// entity shows through) and the turn loop rematerializes it afterwards.
/// Two followers meeting stack in one cell; hiding the top one reveals the
/// bottom one.
impl Level {
    pub(crate) fn baby_init(&mut self, it: EntityId) {
        let pos = self.grid.position(it).expect("follower is on the grid");
        let under = self.grid.spawn(Kind::Space);
        self.grid.entity_mut(it).baby = Some(BabyState {
            facing: Direction::Right,
            recent: pos,
            under: Some(under),
        });
        let facing = self.initial_facing(it);
        self.baby_mut(it).facing = facing;
        self.babies.push(it);
    }

    /// Pick the first blocked side going Up, Right, Down, Left and keep the
    /// wall it implies on the left hand.
    fn initial_facing(&mut self, it: EntityId) -> Direction {
        use Direction::*;
        if !self.baby_viable(it, Up) {
            Right
        } else if !self.baby_viable(it, Right) {
            Down
        } else if !self.baby_viable(it, Down) {
            Left
        } else if !self.baby_viable(it, Left) {
            Up
        } else {
            Right
        }
    }

    /// One wall-following step: prefer turning left, then straight on, then
    /// right, then doubling back unless the way back is solid wall.
    pub(crate) fn baby_act(&mut self, it: EntityId) -> bool {
        if self.grid.nowhere(it) {
            self.baby_show(it);
        }
        let ahead = self.baby_ref(it).facing;
        let left = ahead.turn_left();
        let right = left.opposite();
        let back = ahead.opposite();
        let dir = if self.baby_viable(it, left) {
            left
        } else if self.baby_viable(it, ahead) {
            ahead
        } else if self.baby_viable(it, right) {
            right
        } else if self.kind_at(it, back) != Kind::Wall {
            back
        } else {
            return false;
        };
        self.baby_mut(it).facing = dir;
        self.start_triggers(it, dir);
        self.baby_move(it, dir);
        self.baby_hide(it);
        true
    }

    fn baby_viable(&self, it: EntityId, dir: Direction) -> bool {
        matches!(
            self.kind_at(it, dir),
            Kind::Space | Kind::Earth | Kind::Player | Kind::Cage | Kind::BabyMonster
        )
    }

    fn baby_move(&mut self, it: EntityId, dir: Direction) {
        let target = self.grid.find(it, dir);
        self.baby_hide(it);
        let target_pos = self.grid.position(target).expect("target is on the grid");
        self.baby_mut(it).recent = target_pos;
        if matches!(self.grid.kind(target), Kind::Player | Kind::Cage) {
            self.collide(target, it);
            return;
        }
        self.baby_show(it);
        self.grid.push_event(DisplayEvent::Step);
    }

    /// Takes the follower off the grid, restoring the entity it covered.
    pub(crate) fn baby_hide(&mut self, it: EntityId) {
        if self.grid.nowhere(it) {
            return;
        }
        let pos = self.grid.position(it).expect("follower is on the grid");
        self.baby_mut(it).recent = pos;
        let under = self.baby_mut(it).under.take().expect("follower covers an entity");
        self.grid.replace(it, under);
    }

    /// Puts a hidden follower back at its remembered cell, covering the
    /// occupant. A follower already there hides first; its own covered
    /// entity is never a follower, so one unstacking step suffices.
    pub(crate) fn baby_show(&mut self, it: EntityId) {
        if !self.grid.nowhere(it) {
            return;
        }
        let recent = self.baby_ref(it).recent;
        let mut occupant = self.grid.get(recent);
        if self.grid.kind(occupant) == Kind::BabyMonster {
            self.baby_hide(occupant);
            occupant = self.grid.get(recent);
        }
        self.baby_mut(it).under = Some(occupant);
        self.grid.replace(occupant, it);
    }

    /// Something reached the follower's cell. It yields the cell and, if the
    /// visitor was the player, the player regrets the visit.
    pub(crate) fn baby_collide(&mut self, it: EntityId, other: EntityId) {
        let pos = self.grid.position(it).expect("follower is on the grid");
        self.baby_mut(it).recent = pos;
        self.grid.replace(it, other);
        if self.grid.kind(other) == Kind::Player {
            self.player_collide(other, it);
        }
    }

    fn baby_ref(&self, it: EntityId) -> &BabyState {
        self.grid.entity(it).baby.as_ref().expect("not a follower")
    }

    fn baby_mut(&mut self, it: EntityId) -> &mut BabyState {
        self.grid
            .entity_mut(it)
            .baby
            .as_mut()
            .expect("not a follower")
    }
}
