use super::chart::{Chart, ChartEntry, ChartKey};
use super::Strategy;
use crate::{Action, Card, DoublePolicy, Hand, Rules, StrategyError};

/// Plays the basic strategy charts against the dealer's up card and always
/// bets the table minimum.
#[derive(Debug, Clone)]
pub struct BasicStrategy {
    chart: Chart,
}

impl BasicStrategy {
    pub fn new() -> BasicStrategy {
        BasicStrategy {
            chart: Chart::basic(),
        }
    }

    fn resolve(&self, entry: ChartEntry, hand: &Hand, rules: &Rules) -> Action {
        match entry {
            ChartEntry::Hit => Action::Hit,
            ChartEntry::Stand => Action::Stand,
            ChartEntry::Split => Action::Split,
            // Surrender is never offered, whatever the rules say.
            ChartEntry::Surrender => Action::Stand,
            ChartEntry::DoubleOrHit => {
                if can_double(hand, rules) {
                    Action::DoubleDown
                } else {
                    Action::Hit
                }
            }
            ChartEntry::DoubleOrStand => {
                if can_double(hand, rules) {
                    Action::DoubleDown
                } else {
                    Action::Stand
                }
            }
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BasicStrategy {
    fn amount_to_bet(&self, rules: &Rules) -> u32 {
        rules.minimum_bet
    }

    fn next_action(
        &self,
        hand: &Hand,
        dealer_up_card: &Card,
        rules: &Rules,
    ) -> Result<Action, StrategyError> {
        let total = hand.total();
        if total.value > 21 {
            return Err(StrategyError::HandBust { total: total.value });
        }
        if total.value == 21 {
            return Ok(Action::Stand);
        }

        let key = ChartKey::for_hand(hand, total, dealer_up_card)?;
        let entry = self.chart.lookup(key)?;
        let action = self.resolve(entry, hand, rules);
        log::debug!(
            "{:?} {} against {}: {:?} -> {}",
            key.shape,
            key.player,
            dealer_up_card,
            entry,
            action
        );
        Ok(action)
    }
}

/// Doubling is only possible on the first two cards, after a split only when
/// the rules allow it, and within the rules' total restriction.
fn can_double(hand: &Hand, rules: &Rules) -> bool {
    if hand.len() != 2 {
        return false;
    }
    if hand.came_from_split() && !rules.double_after_split {
        return false;
    }

    match rules.double_policy() {
        DoublePolicy::AnyTwo => true,
        DoublePolicy::NineTenElevenOnly => (9..=11).contains(&hand.total().value),
        // This restriction never grants a double.
        DoublePolicy::TenElevenOnly => false,
    }
}
