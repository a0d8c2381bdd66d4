//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// Lowest rank (Ace).
pub const ACE: u8 = 1;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// Highest rank (King).
pub const KING: u8 = 13;

/// Returns the short label for a rank (`A`, `2`..`10`, `J`, `Q`, `K`).
///
/// Ranks outside 1..=13 render as `?`.
#[must_use]
pub const fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Position of the card in the deck it was built with (0..52).
    pub id: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank or the id.
    #[must_use]
    pub const fn new(id: u8, suit: Suit, rank: u8) -> Self {
        Self { id, suit, rank }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds an unshuffled 52-card deck.
///
/// Cards are ordered by suit (hearts, diamonds, clubs, spades) and then by
/// rank from Ace to King, with ids `0..52` assigned in that order.
///
/// ```
/// use rulecards::card::{build_deck, DECK_SIZE};
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[51].id, 51);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id: u8 = 0;

    for suit in Suit::ALL {
        for rank in ACE..=KING {
            cards.push(Card::new(next_id, suit, rank));
            next_id += 1;
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `cards`.
///
/// The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns the color of a card: red for hearts and diamonds, black otherwise.
#[must_use]
pub const fn color_of(card: &Card) -> Color {
    card.color()
}
