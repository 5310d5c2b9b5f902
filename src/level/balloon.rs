use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::Level;

impl Level {
    /// Buoyancy, the mirror image of a boulder but gentler: a balloon never
    /// carries momentum and never harms anything. It drifts up into space,
    /// squeezes around a boulder overhead, and is shunted sideways by a
    /// deflector (re-entering the cascade on the horizontal axis).
    pub(crate) fn balloon_act(&mut self, it: EntityId, dir: Direction) -> bool {
        use Direction::*;

        if dir != Up {
            return false;
        }
        if self.grid.nowhere(it) {
            return false;
        }
        match self.kind_at(it, Up) {
            Kind::Space => self.move_and_trigger(it, Up, Up),
            Kind::Boulder => {
                if self.kind_at(it, Left) == Kind::Space
                    && self.kind_at(it, UpLeft) == Kind::Space
                {
                    self.move_and_trigger(it, UpLeft, Up);
                } else if self.kind_at(it, Right) == Kind::Space
                    && self.kind_at(it, UpRight) == Kind::Space
                {
                    self.move_and_trigger(it, UpRight, Up);
                } else {
                    return false;
                }
            }
            Kind::LeftDeflector => {
                if self.kind_at(it, Right) != Kind::Space
                    || self.kind_at(it, UpRight) != Kind::Space
                {
                    return false;
                }
                self.move_and_trigger(it, UpRight, Right);
            }
            Kind::RightDeflector => {
                if self.kind_at(it, Left) != Kind::Space
                    || self.kind_at(it, UpLeft) != Kind::Space
                {
                    return false;
                }
                self.move_and_trigger(it, UpLeft, Left);
            }
            _ => return false,
        }
        self.enqueue(it, Up);
        true
    }

    /// Only an arrow ever reaches a balloon's cell: the balloon pops and the
    /// arrow flies on through.
    pub(crate) fn balloon_collide(&mut self, it: EntityId, other: EntityId) {
        self.grid.replace(it, other);
    }
}
