pub(crate) mod entity;
pub(crate) mod grid;

pub mod direction;
pub mod event;
pub mod level;
pub mod levels;
pub mod position;

pub use direction::Direction;
pub use event::{DisplayEvent, MessageSlot};
pub use level::{DeathCause, Level, LevelError, Outcome};
pub use position::Position;
