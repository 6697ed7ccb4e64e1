pub mod advisor;
pub mod card;
mod error;
pub mod hand;
pub mod shoe;
pub mod strategy;
pub mod table;

use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use advisor::Advisor;
pub use card::{Card, Rank, Suit};
pub use error::StrategyError;
pub use hand::{Hand, HandTotal};
pub use strategy::{BasicStrategy, CountState, HiLoStrategy, Strategy, StrategyKind};
pub use table::{CardObserver, Seat, Table};

/// The rule set of one game. Read-only to every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub minimum_bet: u32,
    pub number_of_decks: u8,
    pub surrender_allowed: bool,
    pub double_on_9_10_11_only: bool,
    pub double_on_10_11_only: bool,
    pub double_after_split: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            minimum_bet: 5,
            number_of_decks: 1,
            surrender_allowed: false,
            double_on_9_10_11_only: false,
            double_on_10_11_only: false,
            double_after_split: true,
        }
    }
}

impl Rules {
    /// Collapses the two restriction flags. The 9-10-11 restriction wins when
    /// both are set.
    pub fn double_policy(&self) -> DoublePolicy {
        if self.double_on_9_10_11_only {
            DoublePolicy::NineTenElevenOnly
        } else if self.double_on_10_11_only {
            DoublePolicy::TenElevenOnly
        } else {
            DoublePolicy::AnyTwo
        }
    }

    pub fn set_double_policy(&mut self, policy: DoublePolicy) {
        self.double_on_9_10_11_only = policy == DoublePolicy::NineTenElevenOnly;
        self.double_on_10_11_only = policy == DoublePolicy::TenElevenOnly;
    }

    /// Number of cards in a full shoe.
    pub fn shoe_size(&self) -> u32 {
        52 * self.number_of_decks as u32
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "surrender_allowed={}, double_on_9_10_11_only={}, double_on_10_11_only={}, \
             double_after_split={}, minimum_bet={}, number_of_decks={}",
            self.surrender_allowed,
            self.double_on_9_10_11_only,
            self.double_on_10_11_only,
            self.double_after_split,
            self.minimum_bet,
            self.number_of_decks,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum DoublePolicy {
    AnyTwo,
    NineTenElevenOnly,
    TenElevenOnly,
}

/// What the player should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Stand,
    Hit,
    DoubleDown,
    Split,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Stand => "Stand",
            Action::Hit => "Hit",
            Action::DoubleDown => "Double Down",
            Action::Split => "Split",
        };
        write!(f, "{}", name)
    }
}
