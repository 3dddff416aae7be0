//! Strategist: the layered, deterministic AI.
//!
//! Every follow decision runs the same pipeline: suit-availability analysis
//! classifies the position into one of four scenarios, and the scenario
//! handler decides between contributing points to a secure teammate,
//! beating the current winner at an affordable price, or disposing of the
//! cheapest cards. Memory of played cards drives guaranteed-winner and
//! void reasoning; position in the trick (2nd/3rd/4th) tightens or loosens
//! the spend cap.

use crate::domain::cards_types::Card;
use crate::domain::combos::{identify_combos, Combo};
use crate::domain::declarations::TrumpDeclaration;
use crate::domain::player_view::SeatView;
use crate::domain::plays::legal_follow_with_order;
use crate::domain::tricks::{
    decompose_units, dominant_card, matches_shape, play_would_beat, uniform_group, TrickPlay,
};
use crate::domain::trump::EffectiveSuit;
use crate::domain::values::{combo_value, strategic_value, ValueMode};

use super::analysis::{analyze_suit_availability, FollowScenario, SuitAvailability};
use super::memory::CardMemory;
use super::trait_def::{AiError, AiPlayer};
use super::{declaring, kitty_swap, leading};

/// Per-card strategic spend the AI will accept to take a trick, by how
/// rich the trick already is.
const SPEND_CAP_RICH: i32 = 150;
const SPEND_CAP_POOR: i32 = 100;
/// Tricks at or above this many points count as rich.
const RICH_TRICK_POINTS: u32 = 10;
/// Trick points worth feeding to a winning teammate.
const CONTRIBUTE_MIN_POINTS: u32 = 5;
/// A winning teammate play below this basic value is weak enough to
/// overtake pre-emptively.
const WEAK_LEAD_BASIC: i32 = 10;

pub struct Strategist {
    // Reserved for tie-breaking knobs; decisions are strictly
    // deterministic today.
    _seed: Option<u64>,
}

impl Strategist {
    pub const NAME: &'static str = "Strategist";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }
}

impl AiPlayer for Strategist {
    fn choose_play(&self, view: &SeatView<'_>, memory: &CardMemory) -> Result<Vec<Card>, AiError> {
        let play = match view.leading_cards() {
            None => leading::choose_lead(view, memory),
            Some(leading) => follow(view, memory, leading),
        };
        if play.is_empty() {
            return Err(AiError::InvalidMove("empty play selected".into()));
        }
        Ok(play)
    }

    fn choose_kitty_swap(&self, view: &SeatView<'_>) -> Result<Vec<Card>, AiError> {
        Ok(kitty_swap::select_kitty(view))
    }

    fn choose_declaration(
        &self,
        view: &SeatView<'_>,
        options: &[TrumpDeclaration],
    ) -> Result<Option<TrumpDeclaration>, AiError> {
        Ok(declaring::choose_declaration(view, options))
    }
}

struct FollowContext<'a> {
    view: &'a SeatView<'a>,
    memory: &'a CardMemory,
    leading: &'a [Card],
    analysis: &'a SuitAvailability,
    trick_points: u32,
    winning: Option<&'a TrickPlay>,
    winner_is_teammate: bool,
    position: usize,
}

fn follow(view: &SeatView<'_>, memory: &CardMemory, leading: &[Card]) -> Vec<Card> {
    let analysis = analyze_suit_availability(leading, view.hand, view.trump);
    let winning = view.current_winning_play();
    let ctx = FollowContext {
        view,
        memory,
        leading,
        analysis: &analysis,
        trick_points: view.trick_points(),
        winning,
        winner_is_teammate: winning.map_or(false, |p| view.is_teammate(p.player)),
        position: view.position_in_trick(),
    };

    match analysis.scenario {
        FollowScenario::ValidCombos => handle_valid_combos(&ctx),
        FollowScenario::EnoughRemaining => handle_enough_remaining(&ctx),
        FollowScenario::Insufficient => handle_insufficient(&ctx),
        FollowScenario::Void => handle_void(&ctx),
    }
}

// ---------- Scenario handlers ----------

fn handle_valid_combos(ctx: &FollowContext<'_>) -> Vec<Card> {
    let combos = &ctx.analysis.valid_combos;
    if combos.len() == 1 {
        return combos[0].cards.clone();
    }

    if should_contribute(ctx) {
        return best_by_contribution(combos, ctx);
    }

    if let Some(winning) = ctx.winning {
        let overtake_weak_teammate = ctx.winner_is_teammate
            && winning_is_weak(ctx, winning)
            && !winner_is_secure(ctx, winning);
        if !ctx.winner_is_teammate || overtake_weak_teammate {
            let beating: Vec<&Combo> = combos
                .iter()
                .filter(|c| {
                    play_would_beat(&c.cards, &winning.cards, ctx.leading, ctx.view.trump)
                })
                .collect();
            if let Some(choice) = pick_affordable_winner(ctx, &beating) {
                return choice;
            }
        }
    }

    // Dispose: the cheapest matching combo.
    combos
        .iter()
        .min_by_key(|c| combo_value(&c.cards, ctx.view.trump, ValueMode::Strategic))
        .map(|c| c.cards.clone())
        .unwrap_or_default()
}

fn handle_enough_remaining(ctx: &FollowContext<'_>) -> Vec<Card> {
    let trump = ctx.view.trump;
    if should_contribute(ctx) {
        legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
            -(strategic_value(c, trump, ValueMode::Contribute) as i64)
        })
    } else {
        legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
            strategic_value(c, trump, ValueMode::Strategic) as i64
        })
    }
}

fn handle_insufficient(ctx: &FollowContext<'_>) -> Vec<Card> {
    let trump = ctx.view.trump;
    if should_contribute(ctx) {
        // Point-preferring shortfall fill; trump point cards are fair game.
        legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
            -(strategic_value(c, trump, ValueMode::Contribute) as i64)
        })
    } else {
        // Keep trump out of the fill while non-trump disposables exist.
        legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
            let penalty = if trump.is_trump(c) { 1000 } else { 0 };
            penalty + strategic_value(c, trump, ValueMode::Strategic) as i64
        })
    }
}

fn handle_void(ctx: &FollowContext<'_>) -> Vec<Card> {
    let trump = ctx.view.trump;

    if should_contribute(ctx) {
        return legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
            -(strategic_value(c, trump, ValueMode::Contribute) as i64)
        });
    }

    if ctx.analysis.group != EffectiveSuit::Trump {
        if let Some(choice) = consider_trumping(ctx) {
            return choice;
        }
    }

    // Dispose, trump last.
    legal_follow_with_order(ctx.leading, ctx.view.hand, trump, |c| {
        let penalty = if trump.is_trump(c) { 1000 } else { 0 };
        penalty + strategic_value(c, trump, ValueMode::Strategic) as i64
    })
}

/// Void in a non-trump lead: weigh a ruff against saving the trump.
fn consider_trumping(ctx: &FollowContext<'_>) -> Option<Vec<Card>> {
    let trump = ctx.view.trump;
    let winning = ctx.winning?;
    if ctx.winner_is_teammate {
        return None;
    }

    let lead_units = decompose_units(ctx.leading, trump);
    let beating: Vec<Combo> = identify_combos(ctx.view.hand, trump)
        .into_iter()
        .filter(|c| {
            c.len() == ctx.analysis.required_len
                && uniform_group(&c.cards, trump) == Some(EffectiveSuit::Trump)
                && matches_shape(&lead_units, &c.cards, trump)
                && play_would_beat(&c.cards, &winning.cards, ctx.leading, trump)
        })
        .collect();
    if beating.is_empty() {
        return None;
    }
    let cheapest = |set: &[&Combo]| -> Option<Vec<Card>> {
        set.iter()
            .min_by_key(|c| combo_value(&c.cards, trump, ValueMode::Strategic))
            .map(|c| c.cards.clone())
    };
    let all: Vec<&Combo> = beating.iter().collect();

    let leading_is_tractor = lead_units.len() == 1 && lead_units[0].pair_count() >= 2;
    if leading_is_tractor {
        // A tractor ruff is a heavy commitment: only for rich tricks or
        // from the exposed second seat.
        if ctx.trick_points >= RICH_TRICK_POINTS || ctx.position == 1 {
            return cheapest(&all);
        }
        return None;
    }

    // Pair or single lead.
    let next_opponent_void = ctx
        .view
        .seats_after()
        .into_iter()
        .find(|&seat| !ctx.view.is_teammate(seat))
        .is_some_and(|seat| ctx.memory.is_void(seat, ctx.analysis.group));
    if ctx.position == 3 || next_opponent_void {
        return cheapest(&all);
    }
    if ctx.trick_points >= RICH_TRICK_POINTS {
        return cheapest(&all);
    }
    // Second seat estimates what the suit can still deliver; a drained
    // suit is not worth any trump at all.
    if ctx.position == 1 {
        let potential = match ctx.analysis.group {
            EffectiveSuit::Plain(suit) => ctx.memory.suit_point_potential(suit),
            EffectiveSuit::Trump => 0,
        };
        if potential < 20 {
            return None;
        }
    }

    // Low-point trick: spend a medium trump or nothing. Wasting a joker or
    // a rank card here loses more than the trick is worth.
    let medium: Vec<&Combo> = beating
        .iter()
        .filter(|c| {
            c.cards.iter().all(|&card| {
                let v = strategic_value(card, trump, ValueMode::Strategic);
                v > SPEND_CAP_POOR && v < SPEND_CAP_RICH
            })
        })
        .collect();
    cheapest(&medium)
}

// ---------- Shared decision helpers ----------

/// Feed points only when the trick is worth feeding and the teammate is
/// expected to hold the trick.
fn should_contribute(ctx: &FollowContext<'_>) -> bool {
    let Some(winning) = ctx.winning else {
        return false;
    };
    if !ctx.winner_is_teammate {
        return false;
    }
    let worth_it = ctx.trick_points >= CONTRIBUTE_MIN_POINTS || winning_is_strong(ctx, winning);
    worth_it && winner_is_secure(ctx, winning)
}

fn winning_is_strong(ctx: &FollowContext<'_>, winning: &TrickPlay) -> bool {
    let trump = ctx.view.trump;
    let dominant = dominant_card(&winning.cards, trump);
    strategic_value(dominant, trump, ValueMode::Strategic) >= 110
        || ctx
            .memory
            .is_guaranteed_winner(dominant, trump, ctx.view.hand)
}

fn winning_is_weak(ctx: &FollowContext<'_>, winning: &TrickPlay) -> bool {
    let dominant = dominant_card(&winning.cards, ctx.view.trump);
    strategic_value(dominant, ctx.view.trump, ValueMode::Basic) < WEAK_LEAD_BASIC
}

/// No remaining opponent is likely to beat the current winner.
fn winner_is_secure(ctx: &FollowContext<'_>, winning: &TrickPlay) -> bool {
    if ctx.view.is_last_to_play() {
        return true;
    }
    let trump = ctx.view.trump;
    let dominant = dominant_card(&winning.cards, trump);
    if ctx.memory.is_guaranteed_winner(dominant, trump, ctx.view.hand) {
        return true;
    }
    let winner_trumped = uniform_group(&winning.cards, trump) == Some(EffectiveSuit::Trump);
    winner_trumped
        && ctx
            .view
            .seats_after()
            .into_iter()
            .filter(|&seat| !ctx.view.is_teammate(seat))
            .all(|seat| ctx.memory.is_void(seat, EffectiveSuit::Trump))
}

fn best_by_contribution(combos: &[Combo], ctx: &FollowContext<'_>) -> Vec<Card> {
    let trump = ctx.view.trump;
    combos
        .iter()
        .max_by_key(|c| {
            (
                combo_value(&c.cards, trump, ValueMode::Contribute),
                std::cmp::Reverse(combo_value(&c.cards, trump, ValueMode::Strategic)),
            )
        })
        .map(|c| c.cards.clone())
        .unwrap_or_default()
}

/// The cheapest beating combo the position justifies: the fourth seat
/// computes exactly, earlier seats respect the spend cap.
fn pick_affordable_winner(ctx: &FollowContext<'_>, beating: &[&Combo]) -> Option<Vec<Card>> {
    if beating.is_empty() {
        return None;
    }
    let trump = ctx.view.trump;
    let cheapest = |set: &[&Combo]| -> Option<Vec<Card>> {
        set.iter()
            .min_by_key(|c| combo_value(&c.cards, trump, ValueMode::Strategic))
            .map(|c| c.cards.clone())
    };

    if ctx.position == 3 {
        // Last seat sees everything: win if the trick is worth anything.
        if ctx.trick_points > 0 {
            return cheapest(beating);
        }
        return None;
    }

    let cap = if ctx.trick_points >= RICH_TRICK_POINTS {
        SPEND_CAP_RICH
    } else {
        SPEND_CAP_POOR
    };
    let affordable: Vec<&Combo> = beating
        .iter()
        .copied()
        .filter(|c| {
            c.cards
                .iter()
                .all(|&card| strategic_value(card, trump, ValueMode::Strategic) <= cap)
        })
        .collect();
    cheapest(&affordable)
}
