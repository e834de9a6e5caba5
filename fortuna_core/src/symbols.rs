use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Bar,
    Bell,
    Lemon,
    Cherry,
}

impl Symbol {
    /// The reel alphabet; every spin draws uniformly from this table.
    pub const ALL: [Symbol; 4] = [Symbol::Bar, Symbol::Bell, Symbol::Lemon, Symbol::Cherry];

    pub fn from_index(i: u8) -> Self {
        match i % 4 {
            0 => Symbol::Bar,
            1 => Symbol::Bell,
            2 => Symbol::Lemon,
            _ => Symbol::Cherry,
        }
    }

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::Bar => 0,
            Symbol::Bell => 1,
            Symbol::Lemon => 2,
            Symbol::Cherry => 3,
        }
    }
}

/// The ordered 3-symbol outcome of one spin.
pub type Combination = [Symbol; 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for sym in Symbol::ALL {
            assert_eq!(Symbol::from_index(sym.to_index()), sym);
        }
    }
}
