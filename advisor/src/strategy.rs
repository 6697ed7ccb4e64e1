mod basic;
mod chart;
mod hilo;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use basic::BasicStrategy;
pub use chart::{ChartEntry, ChartKey, HandShape};
pub use hilo::{CountState, HiLoStrategy};

use crate::{Action, Card, Hand, Rules, StrategyError};

pub trait Strategy {
    /// How much to wager before the next round is dealt.
    fn amount_to_bet(&self, rules: &Rules) -> u32;

    /// The next move for `hand` against the dealer's up card.
    fn next_action(
        &self,
        hand: &Hand,
        dealer_up_card: &Card,
        rules: &Rules,
    ) -> Result<Action, StrategyError>;
}

/// Names a player may pick a strategy by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum StrategyKind {
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "hilo")]
    HiLo,
}
