use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;

use crate::{
    card::Card,
    config::TableConfig,
    deck::Deck,
    error::ConfigError,
    hand::{Hand, BLACKJACK},
};

const INITIAL_CARDS: usize = 2;

/// Whether a player's final total beats the dealer's. Busted players always
/// lose, a busted dealer loses to everyone else, and ties go to the dealer.
pub fn beats_dealer(player_score: u32, dealer_score: u32) -> bool {
    if player_score > BLACKJACK {
        false
    } else if dealer_score > BLACKJACK {
        true
    } else {
        player_score > dealer_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    InitialDeal,
    Draw,
}

/// A card a seat should have received but the deck had run out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedDeal {
    pub player: String,
    pub stage: Stage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    pub name: String,
    pub cards: Vec<Card>,
    pub score: u32,
    pub busted: bool,
    pub is_dealer: bool,
    pub beat_dealer: bool,
}

impl From<Hand> for HandRecord {
    fn from(hand: Hand) -> Self {
        let score = hand.score();
        let is_dealer = hand.is_dealer();
        let beat_dealer = hand.beat_dealer();
        let name = hand.name().to_string();
        HandRecord {
            name,
            score,
            busted: score > BLACKJACK,
            is_dealer,
            beat_dealer,
            cards: hand.into_cards(),
        }
    }
}

/// Final state of a round, dealer first and then players by name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub dealer: String,
    pub hands: Vec<HandRecord>,
    pub missed_deals: Vec<MissedDeal>,
}

impl RoundResult {
    pub fn hand(&self, name: &str) -> Option<&HandRecord> {
        self.hands.iter().find(|hand| hand.name == name)
    }
}

/// One table for one round. [`Table::run`] consumes it.
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    hands: Vec<Hand>,
    dealer: usize,
    missed_deals: Vec<MissedDeal>,
}

impl Table {
    /// Shuffled deck and a dealer picked uniformly at random.
    pub fn new<R: Rng + ?Sized>(config: &TableConfig, rng: &mut R) -> Self {
        let deck = Deck::new(rng);
        let dealer = rng.gen_range(0..config.names().len());
        Table::seat(config, dealer, deck)
    }

    /// Table with a fixed dealer and a prepared deck, dealt in the given order.
    pub fn stacked(config: &TableConfig, dealer: &str, deck: Deck) -> Result<Self, ConfigError> {
        let dealer = config
            .names()
            .iter()
            .position(|name| name == dealer)
            .ok_or_else(|| ConfigError::UnknownPlayer(dealer.to_string()))?;
        Ok(Table::seat(config, dealer, deck))
    }

    fn seat(config: &TableConfig, dealer: usize, deck: Deck) -> Self {
        let hands = config
            .names()
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                if seat == dealer {
                    Hand::dealer(name.as_str())
                } else {
                    Hand::new(name.as_str())
                }
            })
            .collect();
        Table {
            deck,
            hands,
            dealer,
            missed_deals: Vec::new(),
        }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn dealer(&self) -> &Hand {
        &self.hands[self.dealer]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Dealer first, then players by name.
    fn presentation_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.hands.len()).collect();
        order.sort_by(|&left, &right| {
            let (left, right) = (&self.hands[left], &self.hands[right]);
            match (left.is_dealer(), right.is_dealer()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => left.name().cmp(right.name()),
            }
        });
        order
    }

    /// Reverse of the presentation order: the dealer deals itself last and
    /// plays last, after every player has seen its up-card.
    fn deal_order(&self) -> Vec<usize> {
        let mut order = self.presentation_order();
        order.reverse();
        order
    }

    pub fn run(mut self) -> RoundResult {
        let order = self.deal_order();
        log::info!(
            "round starts: {} seats, {} dealing",
            self.hands.len(),
            self.dealer().name()
        );

        for _ in 0..INITIAL_CARDS {
            for &seat in &order {
                self.deal_to(seat, Stage::InitialDeal);
            }
        }
        for &seat in &order {
            self.draw_phase(seat);
        }
        self.set_winners();

        log::info!(
            "round over: dealer {} on {}, {} card(s) left",
            self.dealer().name(),
            self.dealer().score(),
            self.deck.remaining_cards()
        );
        self.into_result()
    }

    fn deal_to(&mut self, seat: usize, stage: Stage) -> bool {
        match self.deck.deal_to(&mut self.hands[seat]) {
            Ok(()) => true,
            Err(err) => {
                let player = self.hands[seat].name().to_string();
                log::warn!("{err}: {player} gets no card");
                self.missed_deals.push(MissedDeal { player, stage });
                false
            }
        }
    }

    fn draw_phase(&mut self, seat: usize) {
        loop {
            let (hand, dealer) = seat_and_dealer(&mut self.hands, seat, self.dealer);
            if !hand.want_card(dealer) || !self.deal_to(seat, Stage::Draw) {
                break;
            }
        }
    }

    fn set_winners(&mut self) {
        let dealer_score = self.dealer().score();
        for hand in self.hands.iter_mut().filter(|hand| !hand.is_dealer()) {
            let beat = beats_dealer(hand.score(), dealer_score);
            hand.set_beat_dealer(beat);
        }
    }

    fn into_result(self) -> RoundResult {
        let order = self.presentation_order();
        let dealer = self.dealer().name().to_string();
        let mut seats: Vec<Option<Hand>> = self.hands.into_iter().map(Some).collect();
        let hands = order
            .into_iter()
            .filter_map(|seat| seats[seat].take())
            .map(HandRecord::from)
            .collect();
        RoundResult {
            dealer,
            hands,
            missed_deals: self.missed_deals,
        }
    }
}

/// Mutable access to one seat alongside the dealer's hand. `None` when the
/// seat is the dealer's own.
fn seat_and_dealer(hands: &mut [Hand], seat: usize, dealer: usize) -> (&mut Hand, Option<&Hand>) {
    match seat.cmp(&dealer) {
        Ordering::Equal => (&mut hands[seat], None),
        Ordering::Less => {
            let (left, right) = hands.split_at_mut(dealer);
            (&mut left[seat], Some(&right[0]))
        }
        Ordering::Greater => {
            let (left, right) = hands.split_at_mut(seat);
            (&mut right[0], Some(&left[dealer]))
        }
    }
}
