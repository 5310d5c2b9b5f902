use std::sync::atomic::{AtomicU32, Ordering};

use crate::direction::Direction;
use crate::position::Position;

/// Process-unique entity identity. Ids are handed out monotonically and never
/// reused, so references held across a level reload can never alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntityId(u32);

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

impl EntityId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Every cell holds exactly one entity of one of these kinds. `Bomb` and
/// `Thingy` are inert pass-through kinds: things can be pushed into them and
/// are swallowed, but they never react themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Space,
    Wall,
    Rock,
    Earth,
    RightDeflector,
    LeftDeflector,
    Treasure,
    Cage,
    Landmine,
    Bomb,
    Teleport,
    TimeCapsule,
    Exit,
    Arrival,
    Boulder,
    LeftArrow,
    RightArrow,
    Balloon,
    Player,
    Dead,
    Monster,
    BabyMonster,
    Thingy,
}

impl Kind {
    pub(crate) fn from_code(code: char) -> Option<Self> {
        Some(match code {
            ' ' => Kind::Space,
            '#' => Kind::Wall,
            '=' => Kind::Rock,
            ':' => Kind::Earth,
            '\\' => Kind::RightDeflector,
            '/' => Kind::LeftDeflector,
            '*' => Kind::Treasure,
            '+' => Kind::Cage,
            '!' => Kind::Landmine,
            'B' => Kind::Bomb,
            'T' => Kind::Teleport,
            'C' => Kind::TimeCapsule,
            'X' => Kind::Exit,
            'A' => Kind::Arrival,
            'O' => Kind::Boulder,
            '<' => Kind::LeftArrow,
            '>' => Kind::RightArrow,
            '^' => Kind::Balloon,
            '@' => Kind::Player,
            '?' => Kind::Dead,
            'M' => Kind::Monster,
            'S' => Kind::BabyMonster,
            '~' => Kind::Thingy,
            _ => return None,
        })
    }

    /// Sprite name a presentation layer keys on. An arrival marker renders as
    /// plain space; it only exists long enough for level init to record it.
    pub(crate) fn icon(self) -> &'static str {
        match self {
            Kind::Space => "space",
            Kind::Wall => "wall",
            Kind::Rock => "rock",
            Kind::Earth => "earth",
            Kind::RightDeflector => "rightdeflector",
            Kind::LeftDeflector => "leftdeflector",
            Kind::Treasure => "treasure",
            Kind::Cage => "cage",
            Kind::Landmine => "landmine",
            Kind::Bomb => "bomb",
            Kind::Teleport => "teleport",
            Kind::TimeCapsule => "time",
            Kind::Exit => "exit",
            Kind::Arrival => "space",
            Kind::Boulder => "boulder",
            Kind::LeftArrow => "leftarrow",
            Kind::RightArrow => "rightarrow",
            Kind::Balloon => "balloon",
            Kind::Player => "player",
            Kind::Dead => "dead",
            Kind::Monster => "monster",
            Kind::BabyMonster => "baby",
            Kind::Thingy => "thingy",
        }
    }
}

/// Wall-follower bookkeeping, present on BabyMonster entities only.
#[derive(Clone, Debug)]
pub(crate) struct BabyState {
    /// Current heading; always one of the four axis directions.
    pub(crate) facing: Direction,
    /// Cell to rematerialize at while hidden.
    pub(crate) recent: Position,
    /// Entity covered by this follower, shown again when it hides.
    pub(crate) under: Option<EntityId>,
}

#[derive(Clone, Debug)]
pub(crate) struct Entity {
    pub(crate) kind: Kind,
    /// Set while a boulder or arrow is in flight; a stationary one cannot
    /// crush the player.
    pub(crate) moving: bool,
    pub(crate) baby: Option<BabyState>,
}

impl Entity {
    pub(crate) fn new(kind: Kind) -> Self {
        Self {
            kind,
            moving: false,
            baby: None,
        }
    }
}
