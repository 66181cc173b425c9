//! Chain rules: normalization, the trailing-letter function, and the
//! move resolver.
//!
//! The trailing letter of a name is the letter the next city must start
//! with. Some letters never begin a city name in the target locale
//! (Russian: "ь", "ъ", "ы"), so the scan runs from the end of the name
//! and skips them. A name made entirely of excluded letters chains to
//! nothing: the next mover is unconstrained.

pub mod resolver;

pub use resolver::{resolve_forfeit, resolve_move, MoveOutcome, RejectReason, Resolution};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Letters that never begin a Russian city name.
pub const DEFAULT_EXCLUSIONS: [char; 3] = ['ь', 'ъ', 'ы'];

/// Normalize a name: trim surrounding whitespace, case-fold.
///
/// Every name the engine compares, stores, or looks up goes through this
/// first. Pure and idempotent.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Rules of the chain: the exclusion set and the rejection policy.
///
/// ## Sudden death
///
/// The reference game ends the whole match the moment a player names an
/// unknown, reused, or wrongly-lettered city - the rival wins on the
/// spot. That is the default here. `lenient()` switches to re-prompt
/// behavior: a rejected move leaves the state untouched and the game
/// live.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRules {
    excluded: FxHashSet<char>,
    sudden_death: bool,
}

impl ChainRules {
    /// Rules with the default Russian exclusion set and sudden death on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            excluded: DEFAULT_EXCLUSIONS.into_iter().collect(),
            sudden_death: true,
        }
    }

    /// Replace the exclusion set (builder pattern).
    #[must_use]
    pub fn with_exclusions(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.excluded = letters.into_iter().collect();
        self
    }

    /// Switch to re-prompt mode: rejections no longer end the game.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.sudden_death = false;
        self
    }

    /// Whether a rejected move ends the game.
    #[must_use]
    pub fn is_sudden_death(&self) -> bool {
        self.sudden_death
    }

    /// Check whether a letter is in the exclusion set.
    #[must_use]
    pub fn is_excluded(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    /// The trailing-letter function.
    ///
    /// Scans the normalized name from the end, skipping excluded letters,
    /// and returns the first survivor. `None` means the whole name is
    /// excluded letters and the next city is unconstrained.
    ///
    /// Pure: same name and exclusion set, same answer.
    #[must_use]
    pub fn chain_letter(&self, name: &str) -> Option<char> {
        normalize(name).chars().rev().find(|c| !self.excluded.contains(c))
    }
}

impl Default for ChainRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Reno  "), "reno");
        assert_eq!(normalize("МОСКВА"), "москва");
        assert_eq!(normalize(normalize("  Тверь").as_str()), "тверь");
    }

    #[test]
    fn test_chain_letter_plain() {
        let rules = ChainRules::new();
        assert_eq!(rules.chain_letter("Омск"), Some('к'));
        assert_eq!(rules.chain_letter("Reno"), Some('o'));
    }

    #[test]
    fn test_chain_letter_skips_exclusions() {
        let rules = ChainRules::new();
        // "Тверь" ends in the soft sign; chains on 'р'.
        assert_eq!(rules.chain_letter("Тверь"), Some('р'));
        // "Чебоксары" ends in 'ы'; chains on 'р'.
        assert_eq!(rules.chain_letter("Чебоксары"), Some('р'));
    }

    #[test]
    fn test_chain_letter_all_excluded() {
        let rules = ChainRules::new();
        assert_eq!(rules.chain_letter("ьъы"), None);
    }

    #[test]
    fn test_chain_letter_is_deterministic() {
        let rules = ChainRules::new();
        for _ in 0..10 {
            assert_eq!(rules.chain_letter("Пермь"), Some('м'));
        }
    }

    #[test]
    fn test_custom_exclusions() {
        let rules = ChainRules::new().with_exclusions(['o', 'n']);
        assert_eq!(rules.chain_letter("Reno"), Some('e'));
        assert_eq!(rules.chain_letter("noon"), None);
        assert!(rules.is_excluded('o'));
        assert!(!rules.is_excluded('r'));
    }

    #[test]
    fn test_lenient_toggle() {
        assert!(ChainRules::new().is_sudden_death());
        assert!(!ChainRules::new().lenient().is_sudden_death());
    }
}
