use crate::symbols::{Combination, Symbol};
use serde::{Deserialize, Serialize};

/// One cell of a paytable rule: either a specific symbol or a wildcard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPattern {
    Exact(Symbol),
    Any,
}

impl SymbolPattern {
    fn matches(self, symbol: Symbol) -> bool {
        match self {
            SymbolPattern::Exact(expected) => expected == symbol,
            SymbolPattern::Any => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub pattern: [SymbolPattern; 3],
    pub payout: u64,
}

impl PaytableEntry {
    fn matches(&self, combination: &Combination) -> bool {
        self.pattern
            .iter()
            .zip(combination.iter())
            .all(|(cell, &symbol)| cell.matches(symbol))
    }
}

/// Ordered payout rules. Entry order encodes precedence: the first entry
/// whose pattern matches wins, so more specific rules must come first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    pub fn classic() -> Self {
        use Symbol::*;
        use SymbolPattern::{Any, Exact};
        Self(vec![
            PaytableEntry {
                pattern: [Exact(Bar), Exact(Bar), Exact(Bar)],
                payout: 20,
            },
            PaytableEntry {
                pattern: [Exact(Bell), Exact(Bell), Exact(Bell)],
                payout: 15,
            },
            PaytableEntry {
                pattern: [Exact(Lemon), Exact(Lemon), Exact(Lemon)],
                payout: 5,
            },
            PaytableEntry {
                pattern: [Exact(Cherry), Exact(Cherry), Exact(Cherry)],
                payout: 3,
            },
            PaytableEntry {
                pattern: [Exact(Cherry), Exact(Cherry), Any],
                payout: 2,
            },
            PaytableEntry {
                pattern: [Exact(Cherry), Any, Any],
                payout: 1,
            },
        ])
    }

    /// Net credit for a combination; 0 when no rule matches.
    pub fn payout(&self, combination: &Combination) -> u64 {
        self.0
            .iter()
            .find(|entry| entry.matches(combination))
            .map(|entry| entry.payout)
            .unwrap_or(0)
    }
}
