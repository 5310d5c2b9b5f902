use std::collections::HashMap;

use crate::direction::Direction;
use crate::entity::{Entity, EntityId, Kind};
use crate::event::DisplayEvent;
use crate::position::Position;

/// Cell matrix plus the arena of all entities ever spawned for this level.
/// Each occupied cell holds exactly one entity id; the id-to-position index
/// is the inverse of the matrix. Entities displaced from the board (eaten
/// earth, collected treasure, hidden followers) stay in the arena with no
/// position entry.
///
/// The simulation trusts its level data: cell lookups outside the walled play
/// area and index inconsistencies are bugs, not recoverable conditions, so
/// they panic.
pub(crate) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<EntityId>>>,
    positions: HashMap<EntityId, Position>,
    entities: HashMap<EntityId, Entity>,
    events: Vec<DisplayEvent>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; width]; height],
            positions: HashMap::new(),
            entities: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Creates a new entity off the grid and returns its id.
    pub(crate) fn spawn(&mut self, kind: Kind) -> EntityId {
        let id = EntityId::next();
        self.entities.insert(id, Entity::new(kind));
        id
    }

    pub(crate) fn entity(&self, id: EntityId) -> &Entity {
        self.entities.get(&id).expect("unknown entity id")
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        self.entities.get_mut(&id).expect("unknown entity id")
    }

    pub(crate) fn kind(&self, id: EntityId) -> Kind {
        self.entity(id).kind
    }

    pub(crate) fn get(&self, pos: Position) -> EntityId {
        self.cells[pos.y as usize][pos.x as usize].expect("unoccupied grid cell")
    }

    /// Places `id` at `pos`, displacing whatever occupied the cell. The
    /// displaced entity becomes off-grid. Placing an entity that still
    /// occupies another cell would fork its identity, so that panics.
    pub(crate) fn set(&mut self, pos: Position, id: EntityId) {
        assert!(
            !self.positions.contains_key(&id),
            "entity in two places at once"
        );
        let old = self.cells[pos.y as usize][pos.x as usize].replace(id);
        self.positions.insert(id, pos);
        if let Some(old) = old {
            self.positions.remove(&old);
        }
        let icon = self.kind(id).icon();
        self.events.push(DisplayEvent::Draw { pos, icon });
    }

    pub(crate) fn position(&self, id: EntityId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn nowhere(&self, id: EntityId) -> bool {
        !self.positions.contains_key(&id)
    }

    /// The occupant of the cell next to `id` in `dir`. `id` must be on the
    /// grid; the walled border keeps the neighbor in bounds.
    pub(crate) fn find(&self, id: EntityId, dir: Direction) -> EntityId {
        let pos = self.position(id).expect("entity is off the grid");
        self.get(pos + dir.delta())
    }

    /// Puts `other` where `id` currently stands; `id` leaves the grid.
    pub(crate) fn replace(&mut self, id: EntityId, other: EntityId) {
        let pos = self.position(id).expect("entity is off the grid");
        self.set(pos, other);
    }

    /// Signed distance from `from` to `to` along one axis.
    pub(crate) fn distance(&self, from: EntityId, to: EntityId, horizontal: bool) -> i32 {
        let a = self.position(from).expect("entity is off the grid");
        let b = self.position(to).expect("entity is off the grid");
        let delta = b - a;
        if horizontal { delta.dx } else { delta.dy }
    }

    pub(crate) fn push_event(&mut self, event: DisplayEvent) {
        self.events.push(event);
    }

    pub(crate) fn take_events(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn check_consistency(&self) {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(id) = cell {
                    assert_eq!(self.positions.get(id), Some(&Position::new(x, y)));
                }
            }
        }
        for (id, pos) in &self.positions {
            assert_eq!(self.cells[pos.y as usize][pos.x as usize], Some(*id));
        }
    }
}
