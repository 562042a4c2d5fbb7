//! Player registry: display names keyed by symbol.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

pub const DEFAULT_X_NAME: &str = "Player 1";
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Symbol -> display name mapping.
///
/// Holds an entry for both symbols, so a lookup can never miss. Updates go
/// through [`PlayerRegistry::with_name`], which returns a replacement value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    #[serde(rename = "X", default = "default_x")]
    x: String,
    #[serde(rename = "O", default = "default_o")]
    o: String,
}

fn default_x() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_o() -> String {
    DEFAULT_O_NAME.to_string()
}

impl PlayerRegistry {
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// A copy with one entry replaced; the other entry is carried over.
    pub fn with_name(&self, symbol: Symbol, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        match symbol {
            Symbol::X => next.x = name.into(),
            Symbol::O => next.o = name.into(),
        }
        next
    }

    /// `(symbol, name)` pairs in X, O order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        Symbol::ALL.into_iter().map(|s| (s, self.name(s)))
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
