use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::{DeathCause, Level};

impl Level {
    /// The only actor driven by input. Pushing a boulder, arrow or balloon
    /// moves the pushed object first, then the player, then lets the object
    /// resume its own motion (fall, fly, rise). Otherwise the player walks
    /// wherever walkable. Every turn spends one move from the budget, acted
    /// or not.
    pub(crate) fn player_act(&mut self, it: EntityId, dir: Direction) -> bool {
        use Direction::*;

        let ahead = self.grid.find(it, dir);
        let ahead_kind = self.grid.kind(ahead);
        let next = if ahead_kind == Kind::Wall {
            ahead
        } else {
            self.grid.find(ahead, dir)
        };
        let next_kind = self.grid.kind(next);

        let mut acted = true;
        if matches!(dir, Left | Right)
            && ahead_kind == Kind::Boulder
            && matches!(next_kind, Kind::Space | Kind::Bomb | Kind::Monster)
        {
            self.move_entity(ahead, dir);
            self.move_and_trigger(it, dir, dir);
            self.act(ahead, Down);
        } else if matches!(dir, Up | Down)
            && matches!(ahead_kind, Kind::LeftArrow | Kind::RightArrow)
            && next_kind == Kind::Space
        {
            self.move_entity(ahead, dir);
            self.move_and_trigger(it, dir, dir);
            let flight = if ahead_kind == Kind::LeftArrow { Left } else { Right };
            self.act(ahead, flight);
        } else if matches!(dir, Left | Right)
            && ahead_kind == Kind::Balloon
            && next_kind == Kind::Space
        {
            self.move_entity(ahead, dir);
            self.move_and_trigger(it, dir, dir);
            self.act(ahead, Up);
        } else if self.player_viable(it, dir) {
            self.move_and_trigger(it, dir, dir);
        } else {
            acted = false;
        }

        let moves = self.add_moves(-1);
        if moves == 0 && !self.grid.nowhere(it) {
            // Out of time. The on-grid check covers a death earlier this act.
            self.player_collide(it, it);
        }
        acted
    }

    fn player_viable(&mut self, it: EntityId, dir: Direction) -> bool {
        match self.kind_at(it, dir) {
            Kind::Space
            | Kind::Earth
            | Kind::Treasure
            | Kind::Landmine
            | Kind::Teleport
            | Kind::TimeCapsule
            | Kind::BabyMonster => true,
            Kind::Exit => self.add_treasure(0) == 0,
            _ => false,
        }
    }

    /// Something lethal reached the player. The corpse stays on the board;
    /// `other` names the killer for the status line. The player colliding
    /// with itself means the move budget ran out.
    pub(crate) fn player_collide(&mut self, it: EntityId, other: EntityId) {
        let dead = self.grid.spawn(Kind::Dead);
        self.grid.replace(it, dead);
        let cause = match self.grid.kind(other) {
            Kind::Landmine => DeathCause::Landmine,
            Kind::Boulder => DeathCause::Boulder,
            Kind::LeftArrow | Kind::RightArrow => DeathCause::Arrow,
            Kind::Bomb => DeathCause::Bomb,
            Kind::Monster => DeathCause::Monster,
            Kind::BabyMonster => DeathCause::BabyMonsters,
            Kind::Player => DeathCause::Starvation,
            kind => unreachable!("player killed by {kind:?}"),
        };
        self.fail(cause);
    }
}
