//! Trick resolution scenarios.

use crate::domain::cards_types::Rank;
use crate::domain::fixtures::{hand, spades_two, trick};
use crate::domain::tricks::play_would_beat;
use crate::domain::trump::TrumpInfo;

#[test]
fn trump_rank_pair_beats_trump_suit_pair() {
    // Trump = (2, Spades): the 2C pair outranks the QS pair.
    let trump = spades_two();
    let t = trick(0, &[(0, "QS QS1"), (1, "2C 2C1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(1));
}

#[test]
fn joker_pair_ladder() {
    // BJ pair > SJ pair > 2S pair.
    let trump = spades_two();
    let t = trick(0, &[(0, "2S 2S1"), (1, "SJ SJ1"), (2, "BJ BJ1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(2));

    let t = trick(0, &[(0, "SJ SJ1"), (1, "2S 2S1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(0));
}

#[test]
fn first_played_wins_equal_strength() {
    // Two off-suit trump-rank singles tie; the earlier play holds.
    let trump = spades_two();
    let t = trick(0, &[(0, "2H"), (1, "2C")], &trump);
    assert_eq!(t.winning_player(&trump), Some(0));
}

#[test]
fn any_trump_beats_a_non_trump_lead() {
    let trump = spades_two();
    let t = trick(0, &[(0, "AH"), (1, "3S")], &trump);
    assert_eq!(t.winning_player(&trump), Some(1));
}

#[test]
fn off_suit_non_trump_never_beats_the_lead() {
    let trump = spades_two();
    let t = trick(0, &[(0, "9H"), (1, "AC"), (2, "AD")], &trump);
    assert_eq!(t.winning_player(&trump), Some(0));
}

#[test]
fn shape_mismatch_cannot_take_a_pair_lead() {
    let trump = spades_two();
    // Two loose diamonds, even high ones, never beat a led pair.
    let t = trick(0, &[(0, "8D 8D1"), (1, "AD KD")], &trump);
    assert_eq!(t.winning_player(&trump), Some(0));
}

#[test]
fn trump_tractor_takes_a_non_trump_tractor_lead() {
    let trump = spades_two();
    let t = trick(0, &[(0, "7H 7H1 8H 8H1"), (1, "3S 3S1 4S 4S1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(1));

    // Two unconnected trump pairs do not match the tractor shape.
    let t = trick(0, &[(0, "7H 7H1 8H 8H1"), (1, "3S 3S1 5S 5S1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(0));
}

#[test]
fn same_suit_higher_pair_takes_over() {
    let trump = spades_two();
    let t = trick(0, &[(0, "8D 8D1"), (1, "JD JD1"), (2, "9D 9D1")], &trump);
    assert_eq!(t.winning_player(&trump), Some(1));
}

#[test]
fn trick_points_sum_all_cards() {
    let trump = spades_two();
    let t = trick(
        0,
        &[(0, "5H"), (1, "TH"), (2, "KH"), (3, "3H")],
        &trump,
    );
    assert_eq!(t.points(), 25);
    assert_eq!(t.winning_player(&trump), Some(2));
}

#[test]
fn higher_trump_tractor_beats_a_lower_one() {
    let trump = spades_two();
    let t = trick(
        0,
        &[(0, "3S 3S1 4S 4S1"), (1, "7S 7S1 8S 8S1")],
        &trump,
    );
    assert_eq!(t.winning_player(&trump), Some(1));
}

#[test]
fn play_would_beat_matches_trick_resolution() {
    let trump = spades_two();
    let lead = hand("8D 8D1");
    assert!(play_would_beat(&hand("JD JD1"), &lead, &lead, &trump));
    assert!(!play_would_beat(&hand("7D 7D1"), &lead, &lead, &trump));
    assert!(play_would_beat(&hand("3S 3S1"), &lead, &lead, &trump));
    assert!(!play_would_beat(&hand("AC KC"), &lead, &lead, &trump));
}

#[test]
fn no_trump_round_only_jokers_and_rank_are_trump() {
    let trump = TrumpInfo::new(Rank::Five, None);
    let t = trick(0, &[(0, "AH"), (1, "5C"), (2, "KH")], &trump);
    assert_eq!(t.winning_player(&trump), Some(1));

    assert!(!trump.is_trump(crate::domain::fixtures::card("AS")));
}
