use crate::card::Card;

/// Best total of a hand, and whether an ace still counts as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTotal {
    pub value: u32,
    pub soft: bool,
}

impl std::fmt::Display for HandTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.soft { "Soft" } else { "Hard" };
        write!(f, "({} {})", kind, self.value)
    }
}

/// The cards dealt to one player or the dealer during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    came_from_split: bool,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(3),
            came_from_split: false,
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Computes the total. Aces start at 11 and drop to 1 one at a time while
    /// the hand would otherwise bust.
    pub fn total(&self) -> HandTotal {
        let mut value: u32 = self.cards.iter().map(|card| card.value() as u32).sum();
        let aces = self.number_of_aces();

        let mut downgraded = 0;
        while value > 21 && downgraded < aces {
            value -= 10;
            downgraded += 1;
        }

        HandTotal {
            value,
            soft: downgraded < aces,
        }
    }

    /// Exactly two cards of the same rank. Hands that grew past two cards
    /// never count, even if they started as a pair.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn came_from_split(&self) -> bool {
        self.came_from_split
    }

    pub fn set_came_from_split(&mut self, came_from_split: bool) {
        self.came_from_split = came_from_split;
    }

    /// Empties the hand for the next round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.came_from_split = false;
    }

    fn number_of_aces(&self) -> usize {
        self.cards.iter().filter(|card| card.is_ace()).count()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(
            f,
            " {} came_from_split={}",
            self.total(),
            self.came_from_split
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use strum::IntoEnumIterator;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for rank in ranks {
            hand.add(Card::new(*rank, Suit::Clubs));
        }
        hand
    }

    #[test]
    fn single_card_totals() {
        for rank in Rank::iter() {
            let hand = hand_of(&[rank]);
            assert_eq!(hand.total().value, u32::from(rank.value()));
        }
    }

    #[test]
    fn empty_hand_is_zero_and_hard() {
        let total = Hand::new().total();
        assert_eq!(total, HandTotal { value: 0, soft: false });
    }

    #[test]
    fn hands_without_aces_are_hard_literal_sums() {
        let hand = hand_of(&[Rank::Two, Rank::King, Rank::Queen]);
        assert_eq!(hand.total(), HandTotal { value: 22, soft: false });

        let hand = hand_of(&[Rank::Four, Rank::Five, Rank::Six, Rank::Three]);
        assert_eq!(hand.total(), HandTotal { value: 18, soft: false });
    }

    #[test]
    fn one_ace_with_small_cards_is_soft() {
        let hand = hand_of(&[Rank::Ace, Rank::Six]);
        assert_eq!(hand.total(), HandTotal { value: 17, soft: true });

        let hand = hand_of(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Five]);
        assert_eq!(hand.total(), HandTotal { value: 21, soft: true });
    }

    #[test]
    fn ace_and_king_is_soft_21() {
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.total(), HandTotal { value: 21, soft: true });
    }

    #[test]
    fn ace_forced_down_is_hard() {
        let hand = hand_of(&[Rank::Two, Rank::King, Rank::Ace]);
        assert_eq!(hand.total(), HandTotal { value: 13, soft: false });
    }

    #[test]
    fn two_aces_and_a_two_is_soft_14() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Two]);
        assert_eq!(hand.total(), HandTotal { value: 14, soft: true });
    }

    #[test]
    fn four_aces_is_soft_14() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(hand.total(), HandTotal { value: 14, soft: true });
    }

    #[test]
    fn every_ace_downgraded_can_still_bust() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        assert_eq!(hand.total(), HandTotal { value: 22, soft: false });
    }

    #[test]
    fn huge_totals_are_not_capped() {
        let hand = hand_of(&[Rank::King; 26]);
        assert_eq!(hand.total(), HandTotal { value: 260, soft: false });
    }

    #[test]
    fn pair_needs_exactly_two_equal_ranks() {
        assert!(hand_of(&[Rank::Two, Rank::Two]).is_pair());
        assert!(!hand_of(&[Rank::Two, Rank::Two, Rank::Three]).is_pair());
        assert!(!hand_of(&[Rank::Two, Rank::King]).is_pair());
        assert!(!hand_of(&[Rank::Jack, Rank::Queen]).is_pair());
        assert!(!hand_of(&[Rank::Eight]).is_pair());
    }

    #[test]
    fn clear_resets_cards_and_split_flag() {
        let mut hand = hand_of(&[Rank::Eight, Rank::Three]);
        hand.set_came_from_split(true);
        hand.clear();
        assert!(hand.is_empty());
        assert!(!hand.came_from_split());
    }

    #[test]
    fn display_lists_cards_and_total() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::Ace, Suit::Hearts));
        hand.add(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.to_string(), "A♥, 7♠ (Soft 18) came_from_split=false");
    }
}
