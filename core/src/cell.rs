use serde::{Deserialize, Serialize};

/// Contents of one board cell, fixed when the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The cell holds a bomb.
    Bomb,
    /// No bomb; carries the count of bomb-holding neighbors.
    Clear(u16),
}

impl Cell {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Character shown for this cell when it is visible: `.` for bombs, a
    /// blank for zero, one base-36 digit otherwise (`#` past 35).
    pub fn symbol(self) -> char {
        match self {
            Self::Bomb => '.',
            Self::Clear(0) => ' ',
            Self::Clear(count) => char::from_digit(count as u32, 36).unwrap_or('#'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_follow_the_display_rules() {
        assert_eq!(Cell::Bomb.symbol(), '.');
        assert_eq!(Cell::Clear(0).symbol(), ' ');
        assert_eq!(Cell::Clear(3).symbol(), '3');
        assert_eq!(Cell::Clear(26).symbol(), 'q');
        assert_eq!(Cell::Clear(100).symbol(), '#');
    }
}
