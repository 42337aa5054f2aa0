use std::fmt;

use crate::{
    functional::FunctionalRound,
    hand::BLACKJACK,
    table::{HandRecord, RoundResult, Stage},
};

const RULE: &str = "=====================";
const WELCOME: &str = "Welcome to Blackjack!";

fn banner(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{WELCOME}")?;
    writeln!(f, "{RULE}")
}

/// One hand's block in the end-of-round report.
pub struct HandView<'a> {
    pub hand: &'a HandRecord,
    pub dealer: &'a str,
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.hand;
        writeln!(f, "===== {} =====", hand.name)?;
        for card in &hand.cards {
            writeln!(f, "[{card}]")?;
        }
        writeln!(f, "Total score = {}", hand.score)?;
        if hand.busted {
            writeln!(f, "Busted! 💣💥")?;
        }
        if hand.is_dealer {
            writeln!(f, "⭐⭐   -Is the dealer- ⭐⭐")
        } else if hand.beat_dealer {
            writeln!(f, "Beat the dealer ({})", self.dealer)
        } else {
            writeln!(f, "Lost to the dealer ({})", self.dealer)
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f)?;
        for hand in &self.hands {
            writeln!(f)?;
            write!(f, "{}", HandView { hand, dealer: &self.dealer })?;
        }
        for missed in &self.missed_deals {
            let stage = match missed.stage {
                Stage::InitialDeal => "initial deal",
                Stage::Draw => "draw",
            };
            writeln!(f)?;
            writeln!(f, "Deck ran out: {} missed a card ({stage})", missed.player)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionalRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f)?;
        writeln!(f)?;
        writeln!(f, "===== The Dealer =====")?;
        writeln!(f, "{}", join(&self.dealer))?;
        writeln!(f, "Dealer's score: {}", self.dealer_score)?;
        if self.dealer_score > BLACKJACK {
            writeln!(f, "Busted!")?;
        }

        let seats = self
            .names
            .iter()
            .zip(&self.players)
            .zip(self.player_scores.iter().zip(&self.player_wins));
        for ((name, hand), (score, won)) in seats {
            writeln!(f)?;
            writeln!(f, "===== {name} =====")?;
            writeln!(f, "{}", join(hand))?;
            writeln!(f, "Player's score: {score}")?;
            if *score > BLACKJACK {
                writeln!(f, "Busted!")?;
            }
            if *won {
                writeln!(f, "Beat the dealer!")?;
            } else {
                writeln!(f, "Lost to the dealer!")?;
            }
        }
        Ok(())
    }
}

fn join<T: fmt::Display>(cards: &[T]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
