use crate::direction::Direction;
use crate::entity::{EntityId, Kind};

use super::Level;

impl Level {
    /// Horizontal flight. An arrow only ever responds to its own travel
    /// direction (`own`). It flies into open cells, detonates monsters, pops
    /// balloons, squeezes diagonally around a boulder blocking its path, and
    /// bounces off deflectors onto the vertical axis. Deflected flight does
    /// not count as moving, so a deflected arrow cannot kill.
    pub(crate) fn arrow_act(&mut self, it: EntityId, dir: Direction, own: Direction) -> bool {
        use Direction::*;

        if dir != own {
            return false;
        }
        if self.grid.nowhere(it) {
            return false;
        }
        let ahead = self.kind_at(it, own);
        let (up_diag, down_diag) = if own == Left {
            (UpLeft, DownLeft)
        } else {
            (UpRight, DownRight)
        };
        // A deflector sends an arrow of its own handedness downward and the
        // opposite one upward.
        let (down_deflector, up_deflector) = if own == Left {
            (Kind::LeftDeflector, Kind::RightDeflector)
        } else {
            (Kind::RightDeflector, Kind::LeftDeflector)
        };

        if self.arrow_viable(it, own) {
            self.move_and_trigger(it, own, own);
            self.grid.entity_mut(it).moving = true;
        } else if ahead == Kind::Boulder
            && self.kind_at(it, Up) == Kind::Space
            && self.kind_at(it, up_diag) == Kind::Space
        {
            self.move_and_trigger(it, up_diag, own);
            self.grid.entity_mut(it).moving = true;
        } else if ahead == Kind::Boulder
            && self.kind_at(it, Down) == Kind::Space
            && self.kind_at(it, down_diag) == Kind::Space
        {
            self.move_and_trigger(it, down_diag, own);
            self.grid.entity_mut(it).moving = true;
        } else if ahead == down_deflector
            && self.kind_at(it, Down) == Kind::Space
            && matches!(self.kind_at(it, down_diag), Kind::Space | Kind::Balloon)
        {
            self.move_and_trigger(it, down_diag, Down);
        } else if ahead == up_deflector
            && self.kind_at(it, Up) == Kind::Space
            && matches!(self.kind_at(it, up_diag), Kind::Space | Kind::Balloon)
        {
            self.move_and_trigger(it, up_diag, Up);
        } else {
            self.grid.entity_mut(it).moving = false;
            return false;
        }
        self.enqueue(it, own);
        true
    }

    fn arrow_viable(&self, it: EntityId, own: Direction) -> bool {
        match self.kind_at(it, own) {
            Kind::Space | Kind::Bomb | Kind::Monster | Kind::Balloon => true,
            Kind::Player => self.grid.entity(it).moving,
            _ => false,
        }
    }
}
