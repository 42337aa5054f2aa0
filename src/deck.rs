use std::collections::VecDeque;

use rand::Rng;

use crate::{
    card::{Card, Rank, Suit},
    error::DealError,
    hand::Hand,
};

pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// A single 52-card deck, dealt from the front.
#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Fresh deck, shuffled once.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Fresh deck in suit-major order, unshuffled.
    pub fn ordered() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Deck that deals exactly `cards`, first element first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }

    /// Draws a uniformly random card out of the remaining pile until the
    /// pile is empty. The draw range shrinks by one on every pick.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut pile: Vec<Card> = self.cards.drain(..).collect();
        let mut shuffled = VecDeque::with_capacity(pile.len());
        while !pile.is_empty() {
            let pick = rng.gen_range(0..pile.len());
            shuffled.push_back(pile.remove(pick));
        }
        self.cards = shuffled;
    }

    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::DeckExhausted)
    }

    /// Moves the next card into `hand`. On an empty deck neither side changes.
    pub fn deal_to(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        let card = self.deal()?;
        log::debug!("dealt {card} to {}", hand.name());
        hand.take_card(card);
        Ok(())
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
