//! Raw input keys, decoupled from any particular frontend.

/// A key press the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Inventory,
    Menu,
}

impl InputKey {
    /// The movement delta for a directional key, None otherwise.
    ///
    /// Positive `y` points down, matching the map's row order.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Self::Up => Some((0, -1)),
            Self::Down => Some((0, 1)),
            Self::Left => Some((-1, 0)),
            Self::Right => Some((1, 0)),
            Self::Inventory | Self::Menu => None,
        }
    }
}
