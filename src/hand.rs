use crate::card::Card;

pub const BLACKJACK: u32 = 21;
const DEALER_DRAWS_BELOW: u32 = 16;
const SAFE_TO_DRAW: u32 = 11;
const STAND_ON: u32 = 17;
const DEALER_WEAK_UP_CARD: u32 = 6;

/// One seat at the table: a name, the cards it holds and its role.
#[derive(Debug)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
    is_dealer: bool,
    beat_dealer: bool,
}

impl Hand {
    pub fn new(name: impl Into<String>) -> Self {
        Hand {
            name: name.into(),
            cards: Vec::new(),
            is_dealer: false,
            beat_dealer: false,
        }
    }

    pub fn dealer(name: impl Into<String>) -> Self {
        Hand {
            is_dealer: true,
            ..Hand::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_dealer(&self) -> bool {
        self.is_dealer
    }

    pub fn beat_dealer(&self) -> bool {
        self.beat_dealer
    }

    pub(crate) fn set_beat_dealer(&mut self, beat: bool) {
        self.beat_dealer = beat;
    }

    /// The dealer's first card, which everyone else gets to see.
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn score(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value())).sum()
    }

    pub fn is_busted(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn take_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Counts every Ace in the hand as 1, all at once.
    pub fn check_for_ace(&mut self) {
        self.cards.iter_mut().for_each(Card::demote_ace);
    }

    /// Decides whether this hand takes another card.
    ///
    /// A busted hand first drops its Aces to 1. The dealer then draws below
    /// 16, anyone draws at 11 or less and stands at 17 or more. In between, a
    /// player stands against a dealer up-card of 6 or less and draws otherwise.
    ///
    /// `dealer` is `None` when this hand is the dealer; its own first card is
    /// the up-card then.
    pub fn want_card(&mut self, dealer: Option<&Hand>) -> bool {
        if self.is_busted() {
            self.check_for_ace();
        }
        let score = self.score();
        let up_card = dealer
            .unwrap_or(&*self)
            .up_card()
            .map_or(0, |card| u32::from(card.value()));

        let wants = if (self.is_dealer && score < DEALER_DRAWS_BELOW) || score <= SAFE_TO_DRAW {
            true
        } else if score >= STAND_ON {
            false
        } else {
            up_card > DEALER_WEAK_UP_CARD
        };
        log::debug!(
            "{} at {score} against up-card {up_card}: {}",
            self.name,
            if wants { "hit" } else { "stand" }
        );
        wants
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::card::{Rank, Suit};

    fn dealt(mut hand: Hand, ranks: &[Rank]) -> Hand {
        for &rank in ranks {
            hand.take_card(Card::new(Suit::Spades, rank));
        }
        hand
    }

    fn hand_of(name: &str, ranks: &[Rank]) -> Hand {
        dealt(Hand::new(name), ranks)
    }

    fn dealer_of(ranks: &[Rank]) -> Hand {
        dealt(Hand::dealer("House"), ranks)
    }

    #[test]
    fn score_is_the_sum_of_values() {
        let hand = hand_of("Ann", &[Rank::King, Rank::Seven, Rank::Two]);
        assert_eq!(hand.score(), 19);
        assert_eq!(hand.score(), 19);
        assert!(!hand.is_busted());
    }

    #[test]
    fn check_for_ace_demotes_every_ace_and_is_idempotent() {
        let mut hand = hand_of("Ann", &[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.score(), 31);
        hand.check_for_ace();
        assert_eq!(hand.score(), 11);
        hand.check_for_ace();
        assert_eq!(hand.score(), 11);
    }

    #[test]
    fn aces_stay_high_until_the_hand_busts() {
        let dealer = dealer_of(&[Rank::Ten]);
        let mut hand = hand_of("Ann", &[Rank::Ace, Rank::Seven]);
        assert!(!hand.want_card(Some(&dealer)));
        assert_eq!(hand.score(), 18);
        assert!(hand.cards().iter().all(|c| c.value() != 1));

        hand.take_card(Card::new(Suit::Hearts, Rank::Five));
        assert!(hand.want_card(Some(&dealer)));
        assert_eq!(hand.score(), 13);
    }

    #[test]
    fn busted_hand_without_aces_stays_busted() {
        let dealer = dealer_of(&[Rank::Two]);
        let mut hand = hand_of("Ann", &[Rank::King, Rank::Queen, Rank::Five]);
        assert!(!hand.want_card(Some(&dealer)));
        assert_eq!(hand.score(), 25);
    }

    #[rstest]
    #[case::low_total_always_draws(&[Rank::Five, Rank::Six], Rank::Two, true)]
    #[case::seventeen_stands(&[Rank::Ten, Rank::Seven], Rank::Ace, false)]
    #[case::stiff_against_weak_up_card(&[Rank::Ten, Rank::Two], Rank::Six, false)]
    #[case::stiff_against_strong_up_card(&[Rank::Ten, Rank::Two], Rank::Seven, true)]
    #[case::sixteen_against_ace(&[Rank::Ten, Rank::Six], Rank::Ace, true)]
    #[case::sixteen_against_four(&[Rank::Ten, Rank::Six], Rank::Four, false)]
    fn player_policy(#[case] cards: &[Rank], #[case] up: Rank, #[case] expected: bool) {
        let dealer = dealer_of(&[up, Rank::Nine]);
        let mut hand = hand_of("Ann", cards);
        assert_eq!(hand.want_card(Some(&dealer)), expected);
    }

    #[rstest]
    #[case::fifteen_draws(&[Rank::Ten, Rank::Five], true)]
    #[case::twelve_draws_even_with_weak_up_card(&[Rank::Two, Rank::Ten], true)]
    #[case::sixteen_with_weak_up_card_stands(&[Rank::Six, Rank::Ten], false)]
    #[case::sixteen_with_strong_up_card_draws(&[Rank::Ten, Rank::Six], true)]
    #[case::seventeen_stands(&[Rank::Ten, Rank::Seven], false)]
    fn dealer_policy(#[case] cards: &[Rank], #[case] expected: bool) {
        let mut dealer = dealer_of(cards);
        assert_eq!(dealer.want_card(None), expected);
    }

    #[test]
    fn dealer_reads_its_own_up_card_after_demotion() {
        // A, 5, K busts at 26, softens to 16 and the demoted Ace up-card is weak.
        let mut dealer = dealer_of(&[Rank::Ace, Rank::Five, Rank::King]);
        assert!(!dealer.want_card(None));
        assert_eq!(dealer.score(), 16);

        // A, 5 is a soft 16 and the Ace still counts 11.
        let mut dealer = dealer_of(&[Rank::Ace, Rank::Five]);
        assert!(dealer.want_card(None));
    }

    #[test]
    fn missing_up_card_counts_as_weak() {
        let dealer = dealer_of(&[]);
        let mut hand = hand_of("Ann", &[Rank::Ten, Rank::Three]);
        assert!(!hand.want_card(Some(&dealer)));
    }

    #[test]
    fn constructors_set_role() {
        assert!(Hand::dealer("House").is_dealer());
        let hand = Hand::new("Ann");
        assert!(!hand.is_dealer());
        assert!(!hand.beat_dealer());
        assert!(hand.up_card().is_none());
    }
}
