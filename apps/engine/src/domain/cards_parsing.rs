//! Card token parsing and formatting.
//!
//! Tokens are the face token (`"AS"`, `"TD"`, `"SJ"`, `"BJ"`) optionally
//! followed by a deck digit (`0` or `1`). A missing digit means deck 0, so
//! fixtures can stay terse while serialized state round-trips exactly.

use crate::domain::cards_types::{Card, JokerKind, Rank, Suit};
use crate::errors::DomainError;

/// Format a card as its canonical token, deck digit included.
pub fn format_card(card: Card) -> String {
    format!("{}{}", card.face(), card.deck())
}

/// Parse a card token. Accepts `"AS"`, `"AS1"`, `"SJ"`, `"BJ0"`, etc.
pub fn parse_card(token: &str) -> Result<Card, DomainError> {
    let bad = || DomainError::ParseCard(token.to_string());

    let chars: Vec<char> = token.chars().collect();
    let (face, deck_ch) = match chars.len() {
        2 => (&chars[..2], None),
        3 => (&chars[..2], Some(chars[2])),
        _ => return Err(bad()),
    };

    let deck = match deck_ch {
        None => 0,
        Some('0') => 0,
        Some('1') => 1,
        Some(_) => return Err(bad()),
    };

    match (face[0], face[1]) {
        ('S', 'J') => return Ok(Card::joker(JokerKind::Small, deck)),
        ('B', 'J') => return Ok(Card::joker(JokerKind::Big, deck)),
        _ => {}
    }

    let rank = match face[0] {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return Err(bad()),
    };
    let suit = match face[1] {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        _ => return Err(bad()),
    };
    Ok(Card::suited(suit, rank, deck))
}

/// Parse a whitespace-separated list of card tokens.
pub fn parse_hand(tokens: &str) -> Result<Vec<Card>, DomainError> {
    tokens.split_whitespace().map(parse_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suited_and_jokers() {
        assert_eq!(
            parse_card("AS").unwrap(),
            Card::suited(Suit::Spades, Rank::Ace, 0)
        );
        assert_eq!(
            parse_card("TD1").unwrap(),
            Card::suited(Suit::Diamonds, Rank::Ten, 1)
        );
        assert_eq!(parse_card("SJ").unwrap(), Card::joker(JokerKind::Small, 0));
        assert_eq!(parse_card("BJ1").unwrap(), Card::joker(JokerKind::Big, 1));
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["1H", "10H", "Ah", "ZZ", "", "AS2", "ASX", "SJ9"] {
            assert!(parse_card(tok).is_err(), "token {tok:?} should fail");
        }
    }

    #[test]
    fn format_round_trips() {
        for tok in ["AS0", "TD1", "SJ0", "BJ1", "5C0"] {
            let card = parse_card(tok).unwrap();
            assert_eq!(format_card(card), tok);
        }
    }

    #[test]
    fn parse_hand_splits_on_whitespace() {
        let hand = parse_hand("AS KS  QD1\nSJ").unwrap();
        assert_eq!(hand.len(), 4);
        assert_eq!(hand[2].deck(), 1);
    }
}
