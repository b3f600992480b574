//! Two-valued cell state

use serde::{Deserialize, Serialize};

/// State of a single cell.
///
/// Serialized as its numeric value (`0` dead, `1` live).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Live = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Live
    }

    pub fn is_dead(self) -> bool {
        !self.is_alive()
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Live),
            other => Err(format!("invalid cell value {}, expected 0 or 1", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_exclusive() {
        assert!(Cell::Live.is_alive());
        assert!(!Cell::Live.is_dead());
        assert!(Cell::Dead.is_dead());
        assert!(!Cell::Dead.is_alive());
    }

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(u8::from(Cell::Dead), 0);
        assert_eq!(u8::from(Cell::Live), 1);
        assert_eq!(Cell::try_from(1), Ok(Cell::Live));
        assert!(Cell::try_from(2).is_err());
        assert_eq!(serde_json::to_string(&Cell::Live).unwrap(), "1");
    }
}
