use std::cell::RefCell;
use std::rc::Rc;

use super::{BasicStrategy, Strategy};
use crate::{Action, Card, CardObserver, Hand, Rank, Rules, StrategyError, Table};

/// Units to wager, indexed by true count from 0 upwards. Anything above the
/// last entry bets the last entry.
const BET_SPREAD: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Running count and cards left in the shoe the count was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountState {
    pub running_count: i32,
    pub cards_remaining: u32,
}

impl CountState {
    /// The state of a freshly shuffled shoe.
    pub fn fresh(number_of_decks: u8) -> Self {
        CountState {
            running_count: 0,
            cards_remaining: 52 * number_of_decks as u32,
        }
    }

    /// Running count per deck remaining, rounded half up. Zero when no cards
    /// are left to count against.
    pub fn true_count(&self) -> i32 {
        if self.cards_remaining == 0 {
            return 0;
        }
        let decks_remaining = self.cards_remaining as f64 / 52.0;
        (self.running_count as f64 / decks_remaining + 0.5).floor() as i32
    }

    /// Bet units for the current true count.
    pub fn units(&self) -> u32 {
        let index = self.true_count().clamp(0, BET_SPREAD.len() as i32 - 1);
        BET_SPREAD[index as usize]
    }
}

fn hi_lo_tag(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Hi-Lo card counting. Plays exactly like `BasicStrategy` but spreads its
/// bet with the true count of every card seen at the table.
#[derive(Debug, Clone)]
pub struct HiLoStrategy {
    basic: BasicStrategy,
    number_of_decks: u8,
    count: CountState,
}

impl HiLoStrategy {
    fn new(rules: &Rules) -> Self {
        HiLoStrategy {
            basic: BasicStrategy::new(),
            number_of_decks: rules.number_of_decks,
            count: CountState::fresh(rules.number_of_decks),
        }
    }

    /// Creates a strategy for the table's rules and registers it to see every
    /// card the table deals.
    pub fn attach(table: &mut Table) -> Rc<RefCell<HiLoStrategy>> {
        let strategy = Rc::new(RefCell::new(HiLoStrategy::new(table.rules())));
        table.register_observer(strategy.clone());
        strategy
    }

    pub fn running_count(&self) -> i32 {
        self.count.running_count
    }

    pub fn cards_remaining(&self) -> u32 {
        self.count.cards_remaining
    }

    pub fn count_state(&self) -> CountState {
        self.count
    }
}

impl CardObserver for HiLoStrategy {
    fn on_card_dealt(&mut self, card: Card) {
        self.count.running_count += hi_lo_tag(card.rank);
        self.count.cards_remaining = self.count.cards_remaining.saturating_sub(1);
        log::trace!(
            "{} dealt, running count {}, {} cards left",
            card,
            self.count.running_count,
            self.count.cards_remaining
        );

        if self.count.cards_remaining == 0 {
            log::info!("shoe exhausted, starting a new count");
            self.count = CountState::fresh(self.number_of_decks);
        }
    }
}

impl Strategy for HiLoStrategy {
    fn amount_to_bet(&self, rules: &Rules) -> u32 {
        rules.minimum_bet.saturating_mul(self.count.units())
    }

    fn next_action(
        &self,
        hand: &Hand,
        dealer_up_card: &Card,
        rules: &Rules,
    ) -> Result<Action, StrategyError> {
        self.basic.next_action(hand, dealer_up_card, rules)
    }
}
