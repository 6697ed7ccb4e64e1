use std::cell::RefCell;
use std::rc::Rc;

use crate::{Card, Hand, Rules};

/// Anything that wants to see each card as it is dealt.
pub trait CardObserver {
    fn on_card_dealt(&mut self, card: Card);
}

/// Who a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Dealer,
    Player(usize),
}

/// One game of blackjack: its rules, the dealer and player hands, and the
/// observers told about every card dealt.
pub struct Table {
    rules: Rules,
    dealer_hand: Hand,
    player_hands: Vec<Hand>,
    observers: Vec<Rc<RefCell<dyn CardObserver>>>,
}

impl Table {
    pub fn new(rules: Rules) -> Self {
        Table {
            rules,
            dealer_hand: Hand::new(),
            player_hands: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Seats a new player with an empty hand.
    pub fn add_player(&mut self) -> Seat {
        self.player_hands.push(Hand::new());
        Seat::Player(self.player_hands.len() - 1)
    }

    /// Observers are notified in the order they were registered.
    pub fn register_observer(&mut self, observer: Rc<RefCell<dyn CardObserver>>) {
        self.observers.push(observer);
    }

    /// Gives `card` to `seat`, then tells every observer about it.
    ///
    /// Panics if `seat` is a player that was never added.
    pub fn deal(&mut self, card: Card, seat: Seat) {
        self.hand_mut(seat).add(card);
        for observer in &self.observers {
            observer.borrow_mut().on_card_dealt(card);
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Dealer => &self.dealer_hand,
            Seat::Player(index) => &self.player_hands[index],
        }
    }

    pub fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Dealer => &mut self.dealer_hand,
            Seat::Player(index) => &mut self.player_hands[index],
        }
    }

    /// The dealer's first card, the only one the players see.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_hand.cards().first().copied()
    }

    /// Clears every hand. Observers keep their state.
    pub fn clear_hands(&mut self) {
        self.dealer_hand.clear();
        for hand in &mut self.player_hands {
            hand.clear();
        }
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("rules", &self.rules)
            .field("dealer_hand", &self.dealer_hand)
            .field("player_hands", &self.player_hands)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, Card)>>>,
    }

    impl CardObserver for Recorder {
        fn on_card_dealt(&mut self, card: Card) {
            self.log.borrow_mut().push((self.name, card));
        }
    }

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    #[test]
    fn deal_goes_to_the_right_hand() {
        let mut table = Table::new(Rules::default());
        let first = table.add_player();
        let second = table.add_player();
        assert_eq!(first, Seat::Player(0));
        assert_eq!(second, Seat::Player(1));

        table.deal(card(Rank::Two), first);
        table.deal(card(Rank::Nine), Seat::Dealer);
        table.deal(card(Rank::King), second);
        table.deal(card(Rank::Five), Seat::Dealer);

        assert_eq!(table.hand(first).cards(), &[card(Rank::Two)]);
        assert_eq!(table.hand(second).cards(), &[card(Rank::King)]);
        assert_eq!(table.hand(Seat::Dealer).len(), 2);
        assert_eq!(table.dealer_up_card(), Some(card(Rank::Nine)));
    }

    #[test]
    fn observers_hear_every_card_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut table = Table::new(Rules::default());
        let player = table.add_player();
        table.register_observer(Rc::new(RefCell::new(Recorder {
            name: "first",
            log: log.clone(),
        })));
        table.register_observer(Rc::new(RefCell::new(Recorder {
            name: "second",
            log: log.clone(),
        })));

        table.deal(card(Rank::Ace), player);
        table.deal(card(Rank::Six), Seat::Dealer);

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", card(Rank::Ace)),
                ("second", card(Rank::Ace)),
                ("first", card(Rank::Six)),
                ("second", card(Rank::Six)),
            ]
        );
    }

    #[test]
    fn no_up_card_before_the_dealer_is_dealt() {
        let table = Table::new(Rules::default());
        assert_eq!(table.dealer_up_card(), None);
    }

    #[test]
    fn clear_hands_empties_everyone() {
        let mut table = Table::new(Rules::default());
        let player = table.add_player();
        table.deal(card(Rank::Four), player);
        table.deal(card(Rank::Four), Seat::Dealer);
        table.hand_mut(player).set_came_from_split(true);
        table.clear_hands();
        assert!(table.hand(player).is_empty());
        assert!(!table.hand(player).came_from_split());
        assert_eq!(table.dealer_up_card(), None);
    }
}
