//! The same game as a chain of pure functions.
//!
//! Nothing here mutates its input: every step takes the cards drawn so far
//! and returns a new hand together with a new drawn-card list. Each hand
//! gets exactly two cards, there is no draw phase and Aces always count 11.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::{
    card::{Rank, Suit},
    deck::DECK_SIZE,
    error::DealError,
    table::beats_dealer,
};

/// A card by identity only. Values are plain data here, so it is `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardFace {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardFace {
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Every card handed out so far, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drawn(Vec<CardFace>);

impl Drawn {
    pub fn contains(&self, card: &CardFace) -> bool {
        self.0.contains(card)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn with(&self, card: CardFace) -> Drawn {
        let mut next = self.0.clone();
        next.push(card);
        Drawn(next)
    }
}

/// Picks a random suit and rank, trying again while that card is already out.
pub fn draw_card<R: Rng + ?Sized>(
    drawn: &Drawn,
    rng: &mut R,
) -> Result<(CardFace, Drawn), DealError> {
    if drawn.len() >= DECK_SIZE {
        return Err(DealError::DeckExhausted);
    }
    let card = loop {
        let candidate = CardFace {
            suit: Suit::ALL[rng.gen_range(0..Suit::ALL.len())],
            rank: Rank::ALL[rng.gen_range(0..Rank::ALL.len())],
        };
        if !drawn.contains(&candidate) {
            break candidate;
        }
    };
    Ok((card, drawn.with(card)))
}

pub fn add_to_hand<R: Rng + ?Sized>(
    hand: &[CardFace],
    drawn: &Drawn,
    rng: &mut R,
) -> Result<(Vec<CardFace>, Drawn), DealError> {
    let (card, drawn) = draw_card(drawn, rng)?;
    let mut next = hand.to_vec();
    next.push(card);
    Ok((next, drawn))
}

/// A fresh two-card hand.
pub fn make_holder<R: Rng + ?Sized>(
    drawn: &Drawn,
    rng: &mut R,
) -> Result<(Vec<CardFace>, Drawn), DealError> {
    let (hand, drawn) = add_to_hand(&[], drawn, rng)?;
    add_to_hand(&hand, &drawn, rng)
}

pub fn make_players<R: Rng + ?Sized>(
    count: usize,
    drawn: &Drawn,
    rng: &mut R,
) -> Result<(Vec<Vec<CardFace>>, Drawn), DealError> {
    (0..count).try_fold((Vec::with_capacity(count), drawn.clone()), |(mut players, drawn), _| {
        let (hand, drawn) = make_holder(&drawn, rng)?;
        players.push(hand);
        Ok((players, drawn))
    })
}

pub fn calc_score(hand: &[CardFace]) -> u32 {
    hand.iter().map(|card| u32::from(card.value())).sum()
}

pub fn calc_all_scores(hands: &[Vec<CardFace>]) -> Vec<u32> {
    hands.iter().map(|hand| calc_score(hand)).collect()
}

pub fn compare_scores(dealer_total: u32, player_totals: &[u32]) -> Vec<bool> {
    player_totals
        .iter()
        .map(|&total| beats_dealer(total, dealer_total))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalRound {
    pub dealer: Vec<CardFace>,
    pub dealer_score: u32,
    pub names: Vec<String>,
    pub players: Vec<Vec<CardFace>>,
    pub player_scores: Vec<u32>,
    pub player_wins: Vec<bool>,
}

/// Dealer first, then one hand per name. Fails only when the deck cannot
/// cover every hand.
pub fn play<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<FunctionalRound, DealError> {
    let (dealer, drawn) = make_holder(&Drawn::default(), rng)?;
    let (players, drawn) = make_players(names.len(), &drawn, rng)?;
    log::debug!("functional round drew {} cards", drawn.len());

    let dealer_score = calc_score(&dealer);
    let player_scores = calc_all_scores(&players);
    let player_wins = compare_scores(dealer_score, &player_scores);
    Ok(FunctionalRound {
        dealer,
        dealer_score,
        names: names.to_vec(),
        players,
        player_scores,
        player_wins,
    })
}
