//! Session orchestration.
//!
//! The session owns the catalog (read-only after construction) and the
//! game state (single writer: every state change goes through the
//! resolver). It sequences turns - human move, then opponent reply - and
//! exposes the queries a presentation layer needs. It holds no game
//! logic of its own and never prints; rendering outcomes is the host's
//! job.

use serde::{Deserialize, Serialize};

use crate::catalog::CityCatalog;
use crate::core::{GameRng, Player};
use crate::error::ConfigError;
use crate::rules::{resolve_forfeit, resolve_move, ChainRules, MoveOutcome};
use crate::state::GameState;
use crate::strategy::OpponentStrategy;

/// Session parameters.
///
/// `seed` fixes the opponent's random picks, so a whole match replays
/// deterministically. `opponent_opens` reproduces the reference game's
/// "computer goes first" option.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the opponent's RNG.
    pub seed: u64,
    /// Opponent move-selection policy.
    pub strategy: OpponentStrategy,
    /// Chain rules: exclusion set and rejection policy.
    pub rules: ChainRules,
    /// Whether the opponent makes the opening move.
    pub opponent_opens: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            strategy: OpponentStrategy::default(),
            rules: ChainRules::default(),
            opponent_opens: false,
        }
    }
}

/// Where the session stands.
///
/// `Quit` is a soft exit: the human walked away between turns, nobody
/// won. It is deliberately not a `Finished` phase of the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The game is live and awaiting a move.
    Active,
    /// The human quit; no winner.
    Quit,
    /// The game ended with a winner.
    Finished(Player),
}

/// What happened to a submitted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Whether the move was accepted.
    pub accepted: bool,
    /// Human-readable rejection reason, when rejected.
    pub reason: Option<String>,
    /// Whether the game is over after this move.
    pub terminal: bool,
    /// The winner, if the game is over.
    pub winner: Option<Player>,
}

/// The opponent's turn: its pick (original spelling) and the resolution.
///
/// `city` is `None` when the opponent had no legal move, which ends the
/// game in the human's favor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentReply {
    /// The city the opponent named, if any.
    pub city: Option<String>,
    /// Resolution of the opponent's move (or of its forfeit).
    pub report: MoveReport,
}

/// A single human-versus-opponent match over one catalog.
#[derive(Debug)]
pub struct Session {
    catalog: CityCatalog,
    state: GameState,
    rules: ChainRules,
    strategy: OpponentStrategy,
    rng: GameRng,
    opponent_opens: bool,
    quit: bool,
}

impl Session {
    /// Start a session over a catalog.
    ///
    /// Fails with `ConfigError::EmptyCatalog` before any move is accepted
    /// if there is nothing to play with.
    pub fn new(catalog: CityCatalog, config: SessionConfig) -> Result<Self, ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        Ok(Self {
            catalog,
            state: GameState::new(),
            rng: GameRng::new(config.seed),
            rules: config.rules,
            strategy: config.strategy,
            opponent_opens: config.opponent_opens,
            quit: false,
        })
    }

    /// Make the opponent's opening move, if so configured.
    ///
    /// Call once, before the first human move. Returns `None` when the
    /// human opens or the opening was already made.
    pub fn open_if_opponent_first(&mut self) -> Option<OpponentReply> {
        if self.opponent_opens && self.state.move_count() == 0 && self.status() == SessionStatus::Active {
            Some(self.opponent_turn())
        } else {
            None
        }
    }

    /// Submit a move for a player.
    ///
    /// This is the only way a name enters the game. The session replaces
    /// its state with the resolver's result; rejections come back as data
    /// in the report.
    pub fn submit_move(&mut self, player: Player, name: &str) -> MoveReport {
        if self.quit {
            return MoveReport {
                accepted: false,
                reason: Some("the session was quit".to_string()),
                terminal: false,
                winner: None,
            };
        }

        let resolution = resolve_move(&self.state, &self.catalog, &self.rules, name, player);
        self.state = resolution.state;
        self.report_for(&resolution.outcome)
    }

    /// Run the opponent's turn: pick a city and resolve it.
    ///
    /// A stranded opponent (no candidate for the pending letter) forfeits
    /// and the human wins on the spot.
    pub fn opponent_turn(&mut self) -> OpponentReply {
        let pick = self
            .strategy
            .select_move(&self.state, &self.catalog, &mut self.rng)
            .map(|record| record.name().to_string());

        match pick {
            Some(name) => {
                let report = self.submit_move(Player::Opponent, &name);
                OpponentReply { city: Some(name), report }
            }
            None => {
                self.state = resolve_forfeit(&self.state, Player::Opponent);
                OpponentReply {
                    city: None,
                    report: MoveReport {
                        accepted: false,
                        reason: Some("opponent has no available move".to_string()),
                        terminal: self.state.is_terminal(),
                        winner: self.state.winner(),
                    },
                }
            }
        }
    }

    /// One full round: the human's move, then the opponent's reply if the
    /// game is still live.
    ///
    /// In lenient mode a rejected human move produces no reply - the
    /// caller re-prompts the same player.
    pub fn play_turn(&mut self, name: &str) -> (MoveReport, Option<OpponentReply>) {
        let human = self.submit_move(Player::Human, name);
        if human.accepted && !human.terminal {
            let reply = self.opponent_turn();
            (human, Some(reply))
        } else {
            (human, None)
        }
    }

    /// Quit the session without declaring a winner.
    ///
    /// Cooperative: takes effect between turns, never interrupts a
    /// resolution. A no-op once the game has finished.
    pub fn quit(&mut self) {
        if !self.state.is_terminal() {
            self.quit = true;
        }
    }

    /// Where the session stands.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.state.winner() {
            Some(winner) => SessionStatus::Finished(winner),
            None if self.quit => SessionStatus::Quit,
            None => SessionStatus::Active,
        }
    }

    /// The letter the next city must start with, if constrained.
    #[must_use]
    pub fn pending_letter(&self) -> Option<char> {
        self.state.pending_letter()
    }

    /// How many catalog cities are still unnamed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.catalog.remaining(&self.state)
    }

    /// Whether the game has ended with a winner.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.state.move_count()
    }

    /// Read-only view of the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The catalog this session plays over.
    #[must_use]
    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    fn report_for(&self, outcome: &MoveOutcome) -> MoveReport {
        MoveReport {
            accepted: outcome.is_accepted(),
            reason: match outcome {
                MoveOutcome::Rejected(reason) => Some(reason.to_string()),
                MoveOutcome::Accepted { .. } => None,
            },
            terminal: self.state.is_terminal(),
            winner: self.state.winner(),
        }
    }
}
