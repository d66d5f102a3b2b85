//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use thulla::{reduce, Action, Card, GameState, Rank, SequentialIdGenerator, Suit};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Drives the reducer with deterministic ids `p-1`, `p-2`, ...
pub struct Game {
    pub ids: SequentialIdGenerator,
    pub state: GameState,
}

impl Game {
    pub fn start(names: &[&str]) -> Self {
        init_logging();
        let ids = SequentialIdGenerator::new("p");
        let state = reduce(
            &GameState::default(),
            &Action::start_game(names.iter().copied()),
            &ids,
        );
        Self { ids, state }
    }

    pub fn apply(&mut self, action: Action) -> &GameState {
        self.state = reduce(&self.state, &action, &self.ids);
        &self.state
    }

    pub fn play(&mut self, player: &str, card: Card) -> &GameState {
        self.apply(Action::play_card(player, card))
    }

    pub fn lead(&mut self, suit: Suit) -> &GameState {
        self.apply(Action::SetLedSuit { suit })
    }

    pub fn finalize(&mut self) -> &GameState {
        self.apply(Action::FinalizeRound)
    }

    pub fn count(&self, player: &str) -> u32 {
        self.state.player(player).map_or(0, |p| p.card_count)
    }
}
