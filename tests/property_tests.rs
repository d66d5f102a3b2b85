//! Property-based tests for the reducer and its supporting types.
//!
//! These tests use proptest to drive random action sequences through
//! `reduce` and check the invariants that must hold for every reachable
//! state.

mod common;

use chrono::Utc;
use proptest::prelude::*;
use thulla::core::{State, StateHistory, StateTransition};
use thulla::enforcement::check_action;
use thulla::rules::{calculate_card_distribution, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use thulla::{reduce, Action, Card, GamePhase, GameState, Rank, SequentialIdGenerator, Suit};

/// One random user input, resolved against the state it is applied to.
#[derive(Clone, Debug)]
enum Step {
    Play { seat: usize, card: Card },
    /// Current turn player plays the led suit.
    Follow { rank: Rank },
    Lead { suit: Suit },
    Finalize,
    AceHolder { seat: usize },
    Undo,
    Track { seat: usize },
    /// Tracked player reports their hand.
    Hand { cards: Vec<Card> },
}

fn arbitrary_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn arbitrary_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

prop_compose! {
    fn arbitrary_card()(suit in arbitrary_suit(), rank in arbitrary_rank()) -> Card {
        Card::new(suit, rank)
    }
}

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => arbitrary_rank().prop_map(|rank| Step::Follow { rank }),
        2 => (0..MAX_PLAYERS, arbitrary_card()).prop_map(|(seat, card)| Step::Play { seat, card }),
        1 => arbitrary_suit().prop_map(|suit| Step::Lead { suit }),
        2 => Just(Step::Finalize),
        1 => (0..MAX_PLAYERS).prop_map(|seat| Step::AceHolder { seat }),
        1 => Just(Step::Undo),
        1 => (0..MAX_PLAYERS).prop_map(|seat| Step::Track { seat }),
        1 => prop::sample::subsequence(full_deck(), 0..=30).prop_map(|cards| Step::Hand { cards }),
    ]
}

fn arbitrary_phase() -> impl Strategy<Value = GamePhase> {
    prop::sample::select(vec![GamePhase::Setup, GamePhase::Playing, GamePhase::GameOver])
}

fn seat_id(state: &GameState, seat: usize) -> String {
    if state.players.is_empty() {
        return String::new();
    }
    state.players[seat % state.players.len()].id.clone()
}

fn to_action(step: &Step, state: &GameState) -> Action {
    match step {
        Step::Play { seat, card } => Action::play_card(seat_id(state, *seat), *card),
        Step::Follow { rank } => {
            let player = state
                .current_turn_player()
                .map(|p| p.id.clone())
                .unwrap_or_default();
            let suit = state
                .current_round
                .as_ref()
                .and_then(|r| r.led_suit)
                .unwrap_or(Suit::Spades);
            Action::play_card(player, Card::new(suit, *rank))
        }
        Step::Lead { suit } => Action::SetLedSuit { suit: *suit },
        Step::Finalize => Action::FinalizeRound,
        Step::AceHolder { seat } => Action::SelectAceOfSpadesHolder {
            player_id: seat_id(state, *seat),
        },
        Step::Undo => Action::UndoLastPlay,
        Step::Track { seat } => Action::SetMyPlayer {
            player_id: seat_id(state, *seat),
        },
        Step::Hand { cards } => Action::SetMyHand {
            cards: cards.clone(),
        },
    }
}

/// Start a game and apply every step, returning each intermediate state.
fn play_out(player_count: usize, steps: &[Step]) -> Vec<GameState> {
    common::init_logging();
    let ids = SequentialIdGenerator::new("p");
    let names: Vec<String> = (1..=player_count).map(|i| format!("P{i}")).collect();
    let mut state = reduce(&GameState::default(), &Action::start_game(names), &ids);

    let mut trail = vec![state.clone()];
    for step in steps {
        state = reduce(&state, &to_action(step, &state), &ids);
        trail.push(state.clone());
    }
    trail
}

/// Missing-suit order depends on play history, not on game meaning.
fn normalized(state: &GameState) -> GameState {
    let mut state = state.clone();
    for player in &mut state.players {
        player.missing_suits.sort_by_key(|s| s.name());
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distribution_deals_the_whole_deck(n in MIN_PLAYERS..=MAX_PLAYERS) {
        let counts = calculate_card_distribution(n);
        prop_assert_eq!(counts.len(), n);
        prop_assert_eq!(counts.iter().sum::<u32>(), DECK_SIZE);

        let base = DECK_SIZE / n as u32;
        let extra = (DECK_SIZE % n as u32) as usize;
        prop_assert!(counts[..extra].iter().all(|&c| c == base + 1));
        prop_assert!(counts[extra..].iter().all(|&c| c == base));
    }

    #[test]
    fn cards_are_conserved(
        n in MIN_PLAYERS..=MAX_PLAYERS,
        steps in prop::collection::vec(arbitrary_step(), 0..200)
    ) {
        for state in play_out(n, &steps) {
            prop_assert_eq!(state.cards_in_circulation(), DECK_SIZE);
            for player in &state.players {
                prop_assert_eq!(player.is_safe, player.card_count == 0);
            }
        }
    }

    #[test]
    fn rejected_actions_leave_state_untouched(
        n in MIN_PLAYERS..=MAX_PLAYERS,
        steps in prop::collection::vec(arbitrary_step(), 1..120)
    ) {
        let trail = play_out(n, &steps);
        for (step, pair) in steps.iter().zip(trail.windows(2)) {
            let action = to_action(step, &pair[0]);
            if check_action(&pair[0], &action).is_failure() {
                prop_assert_eq!(&pair[1], &pair[0]);
            }
        }
    }

    #[test]
    fn game_over_has_at_most_one_loser(
        n in MIN_PLAYERS..=MAX_PLAYERS,
        steps in prop::collection::vec(arbitrary_step(), 0..300)
    ) {
        for state in play_out(n, &steps) {
            let losers = state.players.iter().filter(|p| p.is_loser).count();
            if state.is_over() {
                prop_assert!(state.current_round.is_none());
                prop_assert!(losers <= 1);
                prop_assert_eq!(losers, state.active_player_count());
            } else {
                prop_assert_eq!(losers, 0);
            }
        }
    }

    #[test]
    fn turn_index_points_at_a_seat(
        n in MIN_PLAYERS..=MAX_PLAYERS,
        steps in prop::collection::vec(arbitrary_step(), 0..150)
    ) {
        for state in play_out(n, &steps) {
            if let Some(round) = &state.current_round {
                prop_assert!(round.current_turn_player_index < state.players.len());
                prop_assert!(state.player(&round.lead_player_id).is_some());
            }
        }
    }

    #[test]
    fn undo_then_replay_restores_the_play(
        n in MIN_PLAYERS..=MAX_PLAYERS,
        steps in prop::collection::vec(arbitrary_step(), 0..100),
        card in arbitrary_card()
    ) {
        let ids = SequentialIdGenerator::new("q");
        let trail = play_out(n, &steps);
        let Some(before) = trail.last() else {
            return Ok(());
        };
        let Some(player) = before.current_turn_player().map(|p| p.id.clone()) else {
            return Ok(());
        };

        let play = Action::play_card(player, card);
        let played = reduce(before, &play, &ids);
        prop_assume!(played != *before);

        let undone = reduce(&played, &Action::UndoLastPlay, &ids);
        let replayed = reduce(&undone, &play, &ids);
        prop_assert_eq!(normalized(&replayed), normalized(&played));
    }

    #[test]
    fn history_preserves_order(
        phases in prop::collection::vec(arbitrary_phase(), 1..10)
    ) {
        let mut history = StateHistory::new();
        let mut expected = vec![GamePhase::Setup];

        for (i, to) in phases.iter().enumerate() {
            let from = if i == 0 { GamePhase::Setup } else { phases[i - 1] };
            history = history.record(StateTransition {
                from,
                to: *to,
                timestamp: Utc::now(),
                round_number: i as u32,
            });
            expected.push(*to);
        }

        let path = history.get_path();
        prop_assert_eq!(path.len(), expected.len());
        for (got, want) in path.iter().zip(&expected) {
            prop_assert_eq!(*got, want);
        }
    }

    #[test]
    fn history_record_is_pure(from in arbitrary_phase(), to in arbitrary_phase()) {
        let history = StateHistory::new();
        let next = history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            round_number: 1,
        });

        prop_assert_eq!(history.transitions().len(), 0);
        prop_assert_eq!(next.transitions().len(), 1);
        prop_assert_eq!(next.last().map(|t| t.to.name()), Some(to.name()));
    }
}
