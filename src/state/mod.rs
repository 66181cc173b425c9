//! Per-session game state.
//!
//! `GameState` records what has been named so far, the active trailing
//! letter constraint, and whether (and for whom) the game has ended. It
//! never touches city records - "used" membership lives here and only
//! here, while the catalog stays immutable, so the available pool is
//! always computed as catalog minus used set.
//!
//! Uses `im` persistent collections so the resolver can return a next
//! state cheaply instead of mutating in place. Only the resolver mutates
//! a state: the mutators are `pub(crate)`.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::Player;

/// View of the turn state machine.
///
/// `NotStarted -> InProgress -> Finished`; `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No move has been made; no letter constraint is active.
    NotStarted,
    /// At least one city has been named.
    InProgress,
    /// The game ended with a winner. No transitions leave this phase.
    Finished(Player),
}

/// Mutable record of a single game session.
///
/// Invariants (enforced by the resolver, never by direct mutation):
/// - `used` contains no duplicates and only normalized catalog keys;
/// - `pending_letter` is `None` only before the first move or when the
///   last-named city's name consists entirely of excluded letters;
/// - once `terminal`, the state never changes again.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Normalized names in move order.
    used: Vector<String>,
    /// Membership index over `used`.
    used_set: ImHashSet<String>,
    /// Letter the next city must start with, if constrained.
    pending_letter: Option<char>,
    terminal: bool,
    winner: Option<Player>,
}

impl GameState {
    /// Fresh state: nothing used, no constraint, game live.
    #[must_use]
    pub fn new() -> Self {
        Self {
            used: Vector::new(),
            used_set: ImHashSet::new(),
            pending_letter: None,
            terminal: false,
            winner: None,
        }
    }

    /// Normalized names in move order.
    pub fn used_names(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.used.len()
    }

    /// Check whether a normalized name has already been played.
    #[must_use]
    pub fn is_used(&self, normalized: &str) -> bool {
        self.used_set.contains(normalized)
    }

    /// The letter the next city must start with, if any.
    #[must_use]
    pub fn pending_letter(&self) -> Option<char> {
        self.pending_letter
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match self.winner {
            Some(winner) => GamePhase::Finished(winner),
            None if self.used.is_empty() => GamePhase::NotStarted,
            None => GamePhase::InProgress,
        }
    }

    /// Append an accepted move and install the new letter constraint.
    ///
    /// Resolver-only. The caller has already checked that `normalized` is
    /// a catalog key and not yet used.
    pub(crate) fn record_move(&mut self, normalized: String, chain_letter: Option<char>) {
        debug_assert!(!self.terminal, "no moves after Finished");
        debug_assert!(!self.used_set.contains(&normalized), "duplicate move");

        self.used_set.insert(normalized.clone());
        self.used.push_back(normalized);
        self.pending_letter = chain_letter;
    }

    /// Mark the game finished with a winner. Resolver-only.
    pub(crate) fn finish(&mut self, winner: Player) {
        debug_assert!(!self.terminal, "already Finished");
        self.terminal = true;
        self.winner = Some(winner);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
