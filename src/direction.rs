use crate::position::PositionDelta;

/// A compass direction, including `Here` for standing still. Directions are
/// plain values; the grid does all coordinate arithmetic with their deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Here,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub fn delta(self) -> PositionDelta {
        match self {
            Direction::Here => PositionDelta::new(0, 0),
            Direction::Up => PositionDelta::new(0, -1),
            Direction::Down => PositionDelta::new(0, 1),
            Direction::Left => PositionDelta::new(-1, 0),
            Direction::Right => PositionDelta::new(1, 0),
            Direction::UpLeft => PositionDelta::new(-1, -1),
            Direction::UpRight => PositionDelta::new(1, -1),
            Direction::DownLeft => PositionDelta::new(-1, 1),
            Direction::DownRight => PositionDelta::new(1, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Here => Direction::Here,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// The direction on the left hand of an entity heading this way.
    /// Only meaningful for the four axis directions.
    pub(crate) fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
            Direction::Right => Direction::Up,
            _ => unreachable!("turn_left on non-axis direction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 9] = [
        Direction::Here,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[test]
    fn opposite_is_an_involution() {
        for dir in ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let there = dir.delta();
            let back = dir.opposite().delta();
            assert_eq!(there.dx + back.dx, 0);
            assert_eq!(there.dy + back.dy, 0);
        }
    }

    #[test]
    fn turn_left_cycles_through_all_axes() {
        let mut dir = Direction::Right;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.turn_left();
        }
        assert_eq!(dir, Direction::Right);
        assert_eq!(
            seen,
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Left,
                Direction::Down
            ]
        );
    }
}
