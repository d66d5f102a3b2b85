//! Pure helpers shared by the reducer and read models.

use crate::model::{Card, PlayedCard, Player, Suit};

/// Cards in the deck being tracked.
pub const DECK_SIZE: u32 = 52;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 8;

/// Split the deck as evenly as possible.
///
/// The first `52 % n` players get one extra card.
///
/// ```
/// use thulla::rules::calculate_card_distribution;
///
/// assert_eq!(calculate_card_distribution(3), vec![18, 17, 17]);
/// assert_eq!(calculate_card_distribution(4), vec![13; 4]);
/// ```
pub fn calculate_card_distribution(player_count: usize) -> Vec<u32> {
    if player_count == 0 {
        return Vec::new();
    }
    let n = player_count as u32;
    let base = DECK_SIZE / n;
    let remainder = (DECK_SIZE % n) as usize;
    (0..player_count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Human readable summary of the deal, e.g. `"17-18 cards each"`.
pub fn describe_distribution(player_count: usize) -> String {
    if player_count == 0 {
        return String::from("no players");
    }
    let n = player_count as u32;
    let base = DECK_SIZE / n;
    if DECK_SIZE % n == 0 {
        format!("{base} cards each")
    } else {
        format!("{base}-{} cards each", base + 1)
    }
}

/// Name given to a seat left blank at setup. `index` is 0-based.
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

/// Rank difference `a - b`. Only meaningful within a single suit.
pub fn compare_cards(a: &Card, b: &Card) -> i32 {
    i32::from(a.rank.value()) - i32::from(b.rank.value())
}

/// Player holding the highest card of the led suit.
///
/// Off-suit plays never win. On equal ranks the earlier play wins.
/// Returns `None` when nobody followed suit.
pub fn find_round_winner(plays: &[PlayedCard], led_suit: Suit) -> Option<&str> {
    let mut best: Option<&PlayedCard> = None;
    for play in plays.iter().filter(|p| p.card.suit == led_suit) {
        match best {
            Some(current) if compare_cards(&play.card, &current.card) <= 0 => {}
            _ => best = Some(play),
        }
    }
    best.map(|p| p.player_id.as_str())
}

/// Next seat after `current_index` whose player is not safe.
///
/// Wraps around the table at most once; if no other player is active the
/// index comes back unchanged.
pub fn next_active_player_index(players: &[Player], current_index: usize) -> usize {
    let len = players.len();
    if len == 0 {
        return current_index;
    }
    let mut next = (current_index + 1) % len;
    for _ in 0..len {
        if !players[next].is_safe {
            return next;
        }
        next = (next + 1) % len;
        if next == current_index {
            return next;
        }
    }
    current_index
}

/// Players still holding cards.
pub fn count_active_players(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_active()).count()
}
