//! The move resolver - the heart of the turn state machine.
//!
//! `resolve_move` is a pure function: it takes the current state, the
//! catalog, the rules, a proposed name, and the mover, and returns the
//! next state together with the outcome. It never mutates its inputs and
//! never fails - every rejection is data. The session loop replaces its
//! state with the returned one; nothing else writes to `GameState`.

use serde::{Deserialize, Serialize};

use crate::catalog::CityCatalog;
use crate::core::Player;
use crate::rules::{normalize, ChainRules};
use crate::state::GameState;

/// Why a proposed move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The name is not in the catalog.
    UnknownName { proposed: String },
    /// The city was already named earlier in this session.
    AlreadyUsed { name: String },
    /// The name does not start with the pending letter.
    WrongLetter { expected: char, found: Option<char> },
    /// The game was already over when the move arrived.
    GameOver,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::UnknownName { proposed } => {
                write!(f, "'{proposed}' is not a known city")
            }
            RejectReason::AlreadyUsed { name } => {
                write!(f, "'{name}' was already named")
            }
            RejectReason::WrongLetter { expected, found } => match found {
                Some(found) => write!(f, "expected a city starting with '{expected}', got '{found}'"),
                None => write!(f, "expected a city starting with '{expected}'"),
            },
            RejectReason::GameOver => write!(f, "the game is already over"),
        }
    }
}

/// Outcome of a resolved move.
///
/// Whether the game ended is read off the returned state, not the
/// outcome: an accepted move can still finish the game (forced loss for
/// the rival), and under sudden death a rejection does too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was legal; `chain_letter` is the new constraint.
    Accepted { chain_letter: Option<char> },
    /// The move was illegal.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Whether the move was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Next state plus outcome, as returned by [`resolve_move`].
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The state after the move. Replaces the caller's state.
    pub state: GameState,
    /// What happened to the proposed move.
    pub outcome: MoveOutcome,
}

/// Validate a proposed move and compute the next state.
///
/// Steps:
/// 1. normalize the proposal;
/// 2. unknown or reused names, and names that miss the pending letter,
///    are rejected - under sudden death the rival of `mover` wins
///    immediately, in lenient mode the state comes back unchanged;
/// 3. an accepted name joins the used pool and its trailing letter
///    becomes the new constraint;
/// 4. if no available city can answer the new constraint, the rival has
///    no legal reply and `mover` wins (forced loss).
///
/// Calling on a finished state returns it unchanged with
/// `Rejected(GameOver)`; `Finished` has no outgoing transitions.
#[must_use]
pub fn resolve_move(
    state: &GameState,
    catalog: &CityCatalog,
    rules: &ChainRules,
    proposed: &str,
    mover: Player,
) -> Resolution {
    if state.is_terminal() {
        return Resolution {
            state: state.clone(),
            outcome: MoveOutcome::Rejected(RejectReason::GameOver),
        };
    }

    let normalized = normalize(proposed);

    let reason = if !catalog.contains(&normalized) {
        Some(RejectReason::UnknownName {
            proposed: proposed.trim().to_string(),
        })
    } else if state.is_used(&normalized) {
        Some(RejectReason::AlreadyUsed {
            name: normalized.clone(),
        })
    } else {
        match (state.pending_letter(), normalized.chars().next()) {
            (Some(expected), found) if found != Some(expected) => {
                Some(RejectReason::WrongLetter { expected, found })
            }
            _ => None,
        }
    };

    if let Some(reason) = reason {
        let mut next = state.clone();
        if rules.is_sudden_death() {
            next.finish(mover.rival());
        }
        return Resolution {
            state: next,
            outcome: MoveOutcome::Rejected(reason),
        };
    }

    let chain_letter = rules.chain_letter(&normalized);

    let mut next = state.clone();
    next.record_move(normalized, chain_letter);

    // Forced loss: the rival is about to move and has no legal reply.
    if catalog.candidates(&next, chain_letter).next().is_none() {
        next.finish(mover);
    }

    Resolution {
        state: next,
        outcome: MoveOutcome::Accepted { chain_letter },
    }
}

/// Terminal transition for a player with no legal continuation.
///
/// Used by the session when the opponent strategy returns no move: the
/// stranded player loses, the rival wins. A no-op on an already-finished
/// state.
#[must_use]
pub fn resolve_forfeit(state: &GameState, stranded: Player) -> GameState {
    let mut next = state.clone();
    if !next.is_terminal() {
        next.finish(stranded.rival());
    }
    next
}
