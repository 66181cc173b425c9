//! Player identity.
//!
//! The game is strictly two-sided: a human and a scripted opponent.
//! A closed enum keeps winner bookkeeping total - there is no "player 3"
//! to account for anywhere.

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player, moving via `Session::submit_move`.
    Human,
    /// The scripted opponent, moving via `OpponentStrategy`.
    Opponent,
}

impl Player {
    /// The other side.
    ///
    /// ```
    /// use city_chain::core::Player;
    ///
    /// assert_eq!(Player::Human.rival(), Player::Opponent);
    /// assert_eq!(Player::Opponent.rival(), Player::Human);
    /// ```
    #[must_use]
    pub const fn rival(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Opponent => write!(f, "opponent"),
        }
    }
}
