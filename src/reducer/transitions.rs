//! State transitions, one function per action.
//!
//! Each function assumes the action already passed
//! [`check_action`](crate::enforcement::check_action) and builds a new
//! `GameState` from the old one.

use crate::ids::IdGenerator;
use crate::model::{Card, CurrentRound, GamePhase, GameState, PlayedCard, Player, Round, Suit};
use crate::rules::{
    calculate_card_distribution, count_active_players, default_player_name, find_round_winner,
    next_active_player_index,
};
use tracing::{debug, info};

fn normalize_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                default_player_name(i)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

pub(crate) fn start_game<I: IdGenerator + ?Sized>(
    state: &GameState,
    player_names: &[String],
    ids: &I,
) -> GameState {
    let distribution = calculate_card_distribution(player_names.len());
    let players: Vec<Player> = normalize_names(player_names)
        .into_iter()
        .zip(distribution)
        .map(|(name, count)| Player::new(ids.generate(), name, count))
        .collect();

    let Some(lead) = players.first() else {
        return state.clone();
    };

    // The first round is always spades, opened by the first seat.
    let current_round = CurrentRound::open(lead.id.clone(), 0, Some(Suit::Spades));

    info!(players = players.len(), "Game started");

    GameState {
        phase: GamePhase::Playing,
        players,
        rounds: Vec::new(),
        current_round: Some(current_round),
        current_lead_player_index: 0,
        round_number: 1,
        is_first_round: true,
        pending_ace_of_spades_selection: false,
        used_cards: Vec::new(),
        my_player_id: None,
        pending_hand_input: true,
    }
}

pub(crate) fn set_my_player(state: &GameState, player_id: &str) -> GameState {
    GameState {
        my_player_id: Some(player_id.to_string()),
        ..state.clone()
    }
}

/// Record the tracked player's hand and push the count correction onto the
/// other players, one card per seat in seat order, pass after pass until it
/// is absorbed.
pub(crate) fn set_my_hand(state: &GameState, cards: &[Card]) -> GameState {
    let Some(my_id) = state.my_player_id.as_deref() else {
        return state.clone();
    };

    let actual = cards.len() as i64;
    let assumed = state
        .player(my_id)
        .map_or(actual, |p| i64::from(p.card_count));

    let mut players = state.players.clone();
    if let Some(me) = players.iter_mut().find(|p| p.id == my_id) {
        me.hand = cards.to_vec();
        settle_card_count(me, cards.len() as u32, state.round_number);
    }
    absorb_correction(&mut players, my_id, assumed - actual, state.round_number);

    // The turn cannot rest on a player the correction just emptied.
    let current_round = state.current_round.as_ref().map(|round| {
        let stuck = players
            .get(round.current_turn_player_index)
            .is_some_and(|p| p.is_safe);
        if stuck && !round.is_complete {
            CurrentRound {
                current_turn_player_index: next_active_player_index(
                    &players,
                    round.current_turn_player_index,
                ),
                ..round.clone()
            }
        } else {
            round.clone()
        }
    });

    GameState {
        players,
        current_round,
        pending_hand_input: false,
        ..state.clone()
    }
}

/// Move `delta` cards onto (or, when negative, off) every player except
/// `skip_id`. Empty hands cannot give cards up.
fn absorb_correction(players: &mut [Player], skip_id: &str, mut delta: i64, round_number: u32) {
    while delta != 0 {
        let mut moved = false;
        for player in players.iter_mut().filter(|p| p.id != skip_id) {
            if delta == 0 {
                break;
            }
            if delta < 0 && player.card_count == 0 {
                continue;
            }
            let step = delta.signum();
            let count = (i64::from(player.card_count) + step) as u32;
            settle_card_count(player, count, round_number);
            delta -= step;
            moved = true;
        }
        if !moved {
            debug!(unabsorbed = delta, "Hand size correction exceeded other players");
            return;
        }
    }
}

/// Set a count and keep the safe flag and finishing round in step with it.
fn settle_card_count(player: &mut Player, count: u32, round_number: u32) {
    player.card_count = count;
    player.is_safe = count == 0;
    player.finished_round = if count == 0 {
        player.finished_round.or(Some(round_number))
    } else {
        None
    };
}

pub(crate) fn set_led_suit(state: &GameState, suit: Suit) -> GameState {
    let Some(round) = &state.current_round else {
        return state.clone();
    };
    debug!(suit = suit.name(), "Led suit chosen");
    GameState {
        current_round: Some(CurrentRound {
            led_suit: Some(suit),
            ..round.clone()
        }),
        ..state.clone()
    }
}

pub(crate) fn play_card(state: &GameState, player_id: &str, card: Card) -> GameState {
    let Some(round) = &state.current_round else {
        return state.clone();
    };
    let Some(led_suit) = round.led_suit else {
        return state.clone();
    };

    // First-round off-suit cards are plain discards.
    let triggers_thulla = card.suit != led_suit && !state.is_first_round;
    let is_thulla = round.is_thulla || triggers_thulla;

    let mut plays = round.plays.clone();
    plays.push(PlayedCard {
        player_id: player_id.to_string(),
        card,
        is_off_suit: triggers_thulla,
    });

    let players: Vec<Player> = state
        .players
        .iter()
        .map(|p| {
            if p.id != player_id {
                return p.clone();
            }
            let card_count = p.card_count.saturating_sub(1);
            let mut missing_suits = p.missing_suits.clone();
            if triggers_thulla && !missing_suits.contains(&led_suit) {
                missing_suits.push(led_suit);
            }
            Player {
                card_count,
                is_safe: card_count == 0,
                finished_round: if card_count == 0 {
                    Some(state.round_number)
                } else {
                    p.finished_round
                },
                hand: p.hand.iter().copied().filter(|c| *c != card).collect(),
                missing_suits,
                ..p.clone()
            }
        })
        .collect();

    // Compare against the players who were active before this play.
    let active_before = count_active_players(&state.players);
    let is_complete = is_thulla || plays.len() >= active_before;

    let current_turn_player_index = if is_complete {
        round.current_turn_player_index
    } else {
        next_active_player_index(&players, round.current_turn_player_index)
    };

    debug!(
        player = player_id,
        card = %card,
        off_suit = triggers_thulla,
        complete = is_complete,
        "Card played"
    );
    if triggers_thulla {
        info!(
            player = player_id,
            led_suit = led_suit.name(),
            round = state.round_number,
            "Thulla"
        );
    }

    GameState {
        players,
        current_round: Some(CurrentRound {
            plays,
            is_thulla,
            is_complete,
            current_turn_player_index,
            ..round.clone()
        }),
        ..state.clone()
    }
}

pub(crate) fn finalize_round(state: &GameState) -> GameState {
    let Some(round) = &state.current_round else {
        return state.clone();
    };
    let Some(led_suit) = round.led_suit else {
        return state.clone();
    };
    let Some(winner_id) = find_round_winner(&round.plays, led_suit) else {
        return state.clone();
    };
    let winner_id = winner_id.to_string();

    let was_thulla = round.is_thulla;
    let picked_up = if was_thulla { round.plays.len() as u32 } else { 0 };

    let mut players = state.players.clone();
    let mut used_cards = state.used_cards.clone();
    if was_thulla {
        if let Some(winner) = players.iter_mut().find(|p| p.id == winner_id) {
            winner.card_count += picked_up;
            winner.is_safe = false;
            winner.finished_round = None;
            winner.hand.extend(round.cards().copied());
        }
    } else {
        used_cards.extend(round.cards().copied());
    }

    let mut rounds = state.rounds.clone();
    rounds.push(Round {
        round_number: state.round_number,
        lead_player_id: round.lead_player_id.clone(),
        led_suit,
        plays: round.plays.clone(),
        was_thulla,
        winner_id: winner_id.clone(),
        cards_picked_up: picked_up,
    });
    let round_number = state.round_number + 1;

    info!(
        round = state.round_number,
        winner = %winner_id,
        thulla = was_thulla,
        picked_up,
        "Round finalized"
    );

    let active: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active())
        .map(|(i, _)| i)
        .collect();

    if active.len() <= 1 {
        if let [loser] = active.as_slice() {
            players[*loser].is_loser = true;
            info!(loser = %players[*loser].name, "Game over");
        } else {
            info!("Game over without a loser");
        }
        return GameState {
            phase: GamePhase::GameOver,
            players,
            rounds,
            current_round: None,
            round_number,
            used_cards,
            ..state.clone()
        };
    }

    // Round one was forced spades, so the Ace of Spades holder leads next.
    if state.is_first_round {
        return GameState {
            players,
            rounds,
            current_round: None,
            round_number,
            is_first_round: false,
            pending_ace_of_spades_selection: true,
            used_cards,
            ..state.clone()
        };
    }

    let winner_index = players
        .iter()
        .position(|p| p.id == winner_id)
        .unwrap_or(state.current_lead_player_index);

    GameState {
        players,
        rounds,
        current_round: Some(CurrentRound::open(winner_id, winner_index, None)),
        current_lead_player_index: winner_index,
        round_number,
        used_cards,
        ..state.clone()
    }
}

pub(crate) fn select_ace_of_spades_holder(state: &GameState, player_id: &str) -> GameState {
    let Some(holder_index) = state.player_index(player_id) else {
        return state.clone();
    };
    debug!(player = player_id, "Ace of Spades holder leads");
    GameState {
        current_round: Some(CurrentRound::open(player_id, holder_index, None)),
        current_lead_player_index: holder_index,
        pending_ace_of_spades_selection: false,
        ..state.clone()
    }
}

pub(crate) fn undo_last_play(state: &GameState) -> GameState {
    let Some(round) = &state.current_round else {
        return state.clone();
    };
    let mut plays = round.plays.clone();
    let Some(last) = plays.pop() else {
        return state.clone();
    };

    let players = state
        .players
        .iter()
        .map(|p| {
            if p.id != last.player_id {
                return p.clone();
            }
            let tracked =
                !p.hand.is_empty() || state.my_player_id.as_deref() == Some(p.id.as_str());
            let mut hand = p.hand.clone();
            if tracked {
                hand.push(last.card);
            }
            let missing_suits = match round.led_suit {
                Some(led) if last.is_off_suit => {
                    p.missing_suits.iter().copied().filter(|s| *s != led).collect()
                }
                _ => p.missing_suits.clone(),
            };
            Player {
                card_count: p.card_count + 1,
                is_safe: false,
                finished_round: p
                    .finished_round
                    .filter(|&finished| finished != state.round_number),
                hand,
                missing_suits,
                ..p.clone()
            }
        })
        .collect();

    let is_thulla = plays.iter().any(|p| p.is_off_suit);
    let current_turn_player_index = state
        .player_index(&last.player_id)
        .unwrap_or(round.current_turn_player_index);

    debug!(player = %last.player_id, card = %last.card, "Play undone");

    GameState {
        players,
        current_round: Some(CurrentRound {
            plays,
            is_thulla,
            is_complete: false,
            current_turn_player_index,
            ..round.clone()
        }),
        ..state.clone()
    }
}
