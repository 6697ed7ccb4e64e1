use crate::{Card, Rank, Suit};

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Represents a shoe in the real world.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    current_index: usize,
}

impl Shoe {
    /// Creates a new shoe with ordered cards.
    pub fn new(number_of_decks: u8) -> Shoe {
        let mut cards = Vec::with_capacity(number_of_decks as usize * 52);
        for _ in 0..number_of_decks {
            for suit in Suit::iter() {
                for rank in Rank::iter() {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Shoe {
            cards,
            current_index: 0,
        }
    }

    /// Returns the dealt cards back into the shoe and shuffles.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut thread_rng());
        self.current_index = 0;
    }

    /// Deals a card if the shoe is not empty. Returns None if empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.current_index).copied();
        if card.is_some() {
            self.current_index += 1;
        }
        card
    }

    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.current_index
    }
}
