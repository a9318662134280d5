//! Per-player elixir balances.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::types::Player;

/// Upper bound of every balance.
pub const MAX_ELIXIR: u8 = 10;

/// Elixir balances of both players, each in `0..=MAX_ELIXIR`.
///
/// Serialized as `{"1": n, "2": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "LedgerRepr", into = "LedgerRepr")]
pub struct ElixirLedger {
    balances: [u8; 2],
}

impl ElixirLedger {
    /// Both players at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { balances: [0, 0] }
    }

    /// Start from explicit balances, clamped to [`MAX_ELIXIR`].
    #[must_use]
    pub fn with_balances(one: u8, two: u8) -> Self {
        Self {
            balances: [one.min(MAX_ELIXIR), two.min(MAX_ELIXIR)],
        }
    }

    /// Current balance of `player`.
    #[must_use]
    pub const fn balance(&self, player: Player) -> u8 {
        self.balances[player.index()]
    }

    /// Add one to every balance that is below the cap.
    pub fn regenerate(&mut self) {
        for balance in &mut self.balances {
            if *balance < MAX_ELIXIR {
                *balance += 1;
            }
        }
    }

    /// Returns true if `player` holds at least `cost`.
    #[must_use]
    pub const fn can_afford(&self, player: Player, cost: u8) -> bool {
        self.balance(player) >= cost
    }

    /// Subtract `cost` from `player`'s balance.
    ///
    /// Fails without touching the balance when `player` cannot afford it.
    pub fn debit(&mut self, player: Player, cost: u8) -> Result<(), LedgerError> {
        let balance = self.balance(player);
        let remaining = balance.checked_sub(cost).ok_or(LedgerError::Overdraft {
            player,
            balance,
            cost,
        })?;
        self.balances[player.index()] = remaining;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct LedgerRepr {
    #[serde(rename = "1")]
    one: u8,
    #[serde(rename = "2")]
    two: u8,
}

impl From<LedgerRepr> for ElixirLedger {
    fn from(repr: LedgerRepr) -> Self {
        Self::with_balances(repr.one, repr.two)
    }
}

impl From<ElixirLedger> for LedgerRepr {
    fn from(ledger: ElixirLedger) -> Self {
        Self {
            one: ledger.balance(Player::One),
            two: ledger.balance(Player::Two),
        }
    }
}
