use crate::position::Position;

/// One of the four status lines a presentation layer shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageSlot {
    Title,
    Status,
    Score,
    Moves,
}

/// Journal entry emitted by the simulation. The engine never blocks on the
/// presentation layer; it appends events and keeps computing. Replaying the
/// journal in order reproduces the turn visually: `Draw` paints one cell,
/// `Step` marks the boundary between two animation frames, and `Message`
/// refreshes a status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    Draw { pos: Position, icon: &'static str },
    Step,
    Message { slot: MessageSlot, text: String },
}
