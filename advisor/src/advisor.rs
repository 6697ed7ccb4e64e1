use std::cell::RefCell;
use std::rc::Rc;

use crate::strategy::{BasicStrategy, CountState, HiLoStrategy, Strategy, StrategyKind};
use crate::{Action, Card, Hand, Rules, StrategyError, Table};

/// The strategy a player at a table follows.
#[derive(Debug, Clone)]
pub enum Advisor {
    Basic(BasicStrategy),
    HiLo(Rc<RefCell<HiLoStrategy>>),
}

impl Advisor {
    /// Builds the strategy named by `kind`. A counting strategy registers
    /// itself with the table so it sees every card dealt from now on.
    pub fn attach(kind: StrategyKind, table: &mut Table) -> Advisor {
        log::debug!("attaching {} strategy", kind);
        match kind {
            StrategyKind::Basic => Advisor::Basic(BasicStrategy::new()),
            StrategyKind::HiLo => Advisor::HiLo(HiLoStrategy::attach(table)),
        }
    }

    pub fn compute_action(
        &self,
        hand: &Hand,
        dealer_up_card: &Card,
        rules: &Rules,
    ) -> Result<Action, StrategyError> {
        match self {
            Advisor::Basic(strategy) => strategy.next_action(hand, dealer_up_card, rules),
            Advisor::HiLo(strategy) => strategy.borrow().next_action(hand, dealer_up_card, rules),
        }
    }

    pub fn compute_bet(&self, rules: &Rules) -> u32 {
        match self {
            Advisor::Basic(strategy) => strategy.amount_to_bet(rules),
            Advisor::HiLo(strategy) => strategy.borrow().amount_to_bet(rules),
        }
    }

    /// The count behind the bet, if this strategy keeps one.
    pub fn count_state(&self) -> Option<CountState> {
        match self {
            Advisor::Basic(_) => None,
            Advisor::HiLo(strategy) => Some(strategy.borrow().count_state()),
        }
    }
}

impl std::fmt::Display for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisor::Basic(_) => write!(f, "Basic Strategy"),
            Advisor::HiLo(_) => write!(f, "Hi-Lo Strategy"),
        }
    }
}
