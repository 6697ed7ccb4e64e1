use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::{Card, Hand, HandTotal, StrategyError};

pub const DEALER_UP_CARDS: RangeInclusive<u8> = 2..=11;
pub const HARD_TOTALS: RangeInclusive<u8> = 5..=20;
pub const SOFT_TOTALS: RangeInclusive<u8> = 13..=20;
pub const PAIR_VALUES: RangeInclusive<u8> = 2..=11;

/// Which of the three charts a hand is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandShape {
    Hard,
    Soft,
    Pair,
}

/// One cell of a chart. The two double entries fall back when the rules or
/// the hand forbid doubling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEntry {
    Hit,
    Stand,
    Split,
    Surrender,
    DoubleOrHit,
    DoubleOrStand,
}

/// `player` is the hard total, the soft total, or the value of one card of
/// the pair. `dealer` is the value of the dealer's up card, Ace being 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub shape: HandShape,
    pub player: u8,
    pub dealer: u8,
}

impl ChartKey {
    pub fn new(shape: HandShape, player: u8, dealer: u8) -> Self {
        ChartKey {
            shape,
            player,
            dealer,
        }
    }

    /// Pairs first, then soft totals, then hard totals. Totals below the first
    /// row of a chart (a lone card) use that first row.
    pub fn for_hand(
        hand: &Hand,
        total: HandTotal,
        dealer_up_card: &Card,
    ) -> Result<Self, StrategyError> {
        let dealer = dealer_up_card.value();
        let player = u8::try_from(total.value)
            .map_err(|_| StrategyError::HandBust { total: total.value })?;
        let key = if hand.is_pair() {
            ChartKey::new(HandShape::Pair, hand.cards()[0].value(), dealer)
        } else if total.soft {
            ChartKey::new(HandShape::Soft, player.max(*SOFT_TOTALS.start()), dealer)
        } else {
            ChartKey::new(HandShape::Hard, player.max(*HARD_TOTALS.start()), dealer)
        };
        Ok(key)
    }
}

const H: ChartEntry = ChartEntry::Hit;
const S: ChartEntry = ChartEntry::Stand;
const P: ChartEntry = ChartEntry::Split;
const R: ChartEntry = ChartEntry::Surrender;
const DH: ChartEntry = ChartEntry::DoubleOrHit;
const DS: ChartEntry = ChartEntry::DoubleOrStand;

// Columns are dealer 2, 3, 4, 5, 6, 7, 8, 9, 10, A.
const HARD_CHART: [[ChartEntry; 10]; 16] = [
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, H, H], // 9
    [H, DH, DH, DH, DH, H, H, H, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, DH, H],
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, R, H],
    [S, S, S, S, S, H, H, R, R, R], // 16
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S], // 20
];

const SOFT_CHART: [[ChartEntry; 10]; 8] = [
    [H, H, H, DH, DH, H, H, H, H, H], // Ace + 2
    [H, H, H, DH, DH, H, H, H, H, H],
    [H, H, DH, DH, DH, H, H, H, H, H],
    [H, H, DH, DH, DH, H, H, H, H, H],
    [H, DH, DH, DH, DH, H, H, H, H, H],
    [S, DS, DS, DS, DS, S, S, H, H, H],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S], // Ace + 9
];

const PAIR_CHART: [[ChartEntry; 10]; 10] = [
    [P, P, P, P, P, P, H, H, H, H], // Double 2
    [P, P, P, P, P, P, H, H, H, H],
    [H, H, H, P, P, H, H, H, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, H, H],
    [P, P, P, P, P, H, H, H, H, H],
    [P, P, P, P, P, P, H, H, H, H],
    [P, P, P, P, P, P, P, P, P, P],
    [P, P, P, P, P, S, P, P, S, S],
    [S, S, S, S, S, S, S, S, S, S], // Double 10
    [P, P, P, P, P, P, P, P, P, P], // Double Ace
];

/// The hard, soft and pair charts behind one lookup.
#[derive(Debug, Clone)]
pub struct Chart {
    cells: HashMap<ChartKey, ChartEntry>,
}

impl Chart {
    pub fn basic() -> Self {
        let mut chart = Chart {
            cells: HashMap::with_capacity(
                10 * (HARD_CHART.len() + SOFT_CHART.len() + PAIR_CHART.len()),
            ),
        };
        chart.insert_rows(HandShape::Hard, HARD_TOTALS, &HARD_CHART);
        chart.insert_rows(HandShape::Soft, SOFT_TOTALS, &SOFT_CHART);
        chart.insert_rows(HandShape::Pair, PAIR_VALUES, &PAIR_CHART);
        chart
    }

    fn insert_rows(
        &mut self,
        shape: HandShape,
        players: RangeInclusive<u8>,
        rows: &[[ChartEntry; 10]],
    ) {
        for (player, row) in players.zip(rows) {
            for (dealer, entry) in DEALER_UP_CARDS.zip(row) {
                self.cells
                    .insert(ChartKey::new(shape, player, dealer), *entry);
            }
        }
    }

    pub fn lookup(&self, key: ChartKey) -> Result<ChartEntry, StrategyError> {
        self.cells
            .get(&key)
            .copied()
            .ok_or(StrategyError::MissingChartCell {
                shape: key.shape,
                player: key.player,
                dealer: key.dealer,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use strum::IntoEnumIterator;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds)
    }

    #[test]
    fn chart_has_one_cell_per_key() {
        assert_eq!(Chart::basic().cells.len(), 10 * (16 + 8 + 10));
    }

    #[test]
    fn every_dealer_rank_is_covered() {
        let chart = Chart::basic();
        for rank in Rank::iter() {
            let dealer = rank.value();
            for player in HARD_TOTALS {
                assert!(chart.lookup(ChartKey::new(HandShape::Hard, player, dealer)).is_ok());
            }
            for player in SOFT_TOTALS {
                assert!(chart.lookup(ChartKey::new(HandShape::Soft, player, dealer)).is_ok());
            }
            for pair in Rank::iter() {
                let key = ChartKey::new(HandShape::Pair, pair.value(), dealer);
                assert!(chart.lookup(key).is_ok());
            }
        }
    }

    #[test]
    fn missing_cell_is_reported() {
        let key = ChartKey::new(HandShape::Soft, 12, 2);
        assert_eq!(
            Chart::basic().lookup(key),
            Err(StrategyError::MissingChartCell {
                shape: HandShape::Soft,
                player: 12,
                dealer: 2
            })
        );
    }

    #[test]
    fn sampled_cells() {
        let chart = Chart::basic();
        let cell = |shape, player, dealer| chart.lookup(ChartKey::new(shape, player, dealer)).unwrap();
        assert_eq!(cell(HandShape::Hard, 11, 2), ChartEntry::DoubleOrHit);
        assert_eq!(cell(HandShape::Hard, 11, 11), ChartEntry::Hit);
        assert_eq!(cell(HandShape::Hard, 10, 2), ChartEntry::Hit);
        assert_eq!(cell(HandShape::Hard, 9, 7), ChartEntry::DoubleOrHit);
        assert_eq!(cell(HandShape::Hard, 12, 4), ChartEntry::Stand);
        assert_eq!(cell(HandShape::Hard, 15, 10), ChartEntry::Surrender);
        assert_eq!(cell(HandShape::Hard, 16, 9), ChartEntry::Surrender);
        assert_eq!(cell(HandShape::Hard, 17, 11), ChartEntry::Stand);
        assert_eq!(cell(HandShape::Soft, 18, 3), ChartEntry::DoubleOrStand);
        assert_eq!(cell(HandShape::Soft, 18, 9), ChartEntry::Hit);
        assert_eq!(cell(HandShape::Soft, 18, 11), ChartEntry::Hit);
        assert_eq!(cell(HandShape::Soft, 13, 10), ChartEntry::Hit);
        assert_eq!(cell(HandShape::Pair, 5, 9), ChartEntry::DoubleOrHit);
        assert_eq!(cell(HandShape::Pair, 9, 7), ChartEntry::Stand);
        assert_eq!(cell(HandShape::Pair, 11, 11), ChartEntry::Split);
    }

    #[test]
    fn key_prefers_pair_over_soft() {
        let mut hand = Hand::new();
        hand.add(card(Rank::Ace));
        hand.add(card(Rank::Ace));
        let key = ChartKey::for_hand(&hand, hand.total(), &card(Rank::Six)).unwrap();
        assert_eq!(key, ChartKey::new(HandShape::Pair, 11, 6));
    }

    #[test]
    fn key_uses_soft_total() {
        let mut hand = Hand::new();
        hand.add(card(Rank::Ace));
        hand.add(card(Rank::Seven));
        let key = ChartKey::for_hand(&hand, hand.total(), &card(Rank::Ace)).unwrap();
        assert_eq!(key, ChartKey::new(HandShape::Soft, 18, 11));
    }

    #[test]
    fn key_for_a_total_past_255_is_a_bust() {
        let mut hand = Hand::new();
        for _ in 0..26 {
            hand.add(card(Rank::Queen));
        }
        assert_eq!(
            ChartKey::for_hand(&hand, hand.total(), &card(Rank::Two)),
            Err(StrategyError::HandBust { total: 260 })
        );
    }

    #[test]
    fn lone_cards_use_first_row() {
        let mut hand = Hand::new();
        hand.add(card(Rank::Two));
        let key = ChartKey::for_hand(&hand, hand.total(), &card(Rank::King)).unwrap();
        assert_eq!(key, ChartKey::new(HandShape::Hard, 5, 10));

        let mut hand = Hand::new();
        hand.add(card(Rank::Ace));
        let key = ChartKey::for_hand(&hand, hand.total(), &card(Rank::King)).unwrap();
        assert_eq!(key, ChartKey::new(HandShape::Soft, 13, 10));
    }
}
