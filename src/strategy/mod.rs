//! Opponent move selection.
//!
//! A closed set of policies rather than a trait object: callers pick a
//! variant, and alternative policies slot in without virtual dispatch.
//! Selection never mutates game state - it only reads the available pool
//! and returns a pick. Randomness comes in as an explicit `GameRng` so
//! matches replay deterministically under a fixed seed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{CityCatalog, CityRecord};
use crate::core::GameRng;
use crate::state::GameState;

/// Move-selection policy for the scripted opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentStrategy {
    /// Uniform-random pick over the legal candidates (reference behavior).
    #[default]
    UniformRandom,
    /// Longest candidate name first; earliest catalog entry breaks ties.
    LongestName,
    /// Smallest population first; earliest catalog entry breaks ties.
    LeastPopulation,
}

impl OpponentStrategy {
    /// Pick the opponent's next city, or `None` if no legal move exists.
    ///
    /// On the opening move (no pending letter) the whole available pool
    /// qualifies; afterwards only cities starting with the pending letter
    /// do. `None` is not an error - it means the opponent is stranded and
    /// the session treats it as an immediate loss for the opponent.
    #[must_use]
    pub fn select_move<'a>(
        &self,
        state: &'a GameState,
        catalog: &'a CityCatalog,
        rng: &mut GameRng,
    ) -> Option<&'a CityRecord> {
        let candidates: SmallVec<[&CityRecord; 16]> =
            catalog.candidates(state, state.pending_letter()).collect();
        if candidates.is_empty() {
            return None;
        }

        match self {
            OpponentStrategy::UniformRandom => rng.choose(&candidates).copied(),
            OpponentStrategy::LongestName => {
                let mut best = candidates[0];
                for &candidate in &candidates[1..] {
                    if candidate.normalized().chars().count() > best.normalized().chars().count() {
                        best = candidate;
                    }
                }
                Some(best)
            }
            OpponentStrategy::LeastPopulation => {
                candidates.iter().copied().min_by_key(|c| c.population())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCity;
    use crate::core::Player;
    use crate::rules::{resolve_move, ChainRules};

    fn catalog() -> CityCatalog {
        CityCatalog::build(vec![
            RawCity::new("Садово", 100),
            RawCity::new("Омск", 1_125_695),
            RawCity::new("Орёл", 303_696),
            RawCity::new("Оренбург", 572_188),
            RawCity::new("Казань", 1_308_660),
        ])
        .unwrap()
    }

    /// State after the human opens with "Садово": pending letter is 'о'.
    fn state_expecting_o(catalog: &CityCatalog) -> GameState {
        let res = resolve_move(&GameState::new(), catalog, &ChainRules::new(), "Садово", Player::Human);
        assert!(res.outcome.is_accepted());
        res.state
    }

    #[test]
    fn test_opening_move_uses_full_pool() {
        let catalog = catalog();
        let state = GameState::new();
        let mut rng = GameRng::new(42);

        let pick = OpponentStrategy::UniformRandom
            .select_move(&state, &catalog, &mut rng)
            .unwrap();
        assert!(catalog.contains(pick.name()));
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let catalog = CityCatalog::build(vec![]).unwrap();
        let state = GameState::new();
        let mut rng = GameRng::new(42);

        let pick = OpponentStrategy::UniformRandom.select_move(&state, &catalog, &mut rng);
        assert!(pick.is_none());
    }

    #[test]
    fn test_uniform_random_is_seeded() {
        let catalog = catalog();

        let pick1 = OpponentStrategy::UniformRandom
            .select_move(&GameState::new(), &catalog, &mut GameRng::new(7))
            .unwrap()
            .name()
            .to_string();
        let pick2 = OpponentStrategy::UniformRandom
            .select_move(&GameState::new(), &catalog, &mut GameRng::new(7))
            .unwrap()
            .name()
            .to_string();

        assert_eq!(pick1, pick2);
    }

    #[test]
    fn test_respects_pending_letter() {
        let catalog = catalog();
        let state = state_expecting_o(&catalog);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let pick = OpponentStrategy::UniformRandom
                .select_move(&state, &catalog, &mut rng)
                .unwrap();
            assert_eq!(pick.first_letter(), Some('о'));
        }
    }

    #[test]
    fn test_longest_name() {
        let catalog = catalog();
        let state = state_expecting_o(&catalog);
        let mut rng = GameRng::new(42);

        let pick = OpponentStrategy::LongestName
            .select_move(&state, &catalog, &mut rng)
            .unwrap();
        assert_eq!(pick.name(), "Оренбург");
    }

    #[test]
    fn test_least_population() {
        let catalog = catalog();
        let state = state_expecting_o(&catalog);
        let mut rng = GameRng::new(42);

        let pick = OpponentStrategy::LeastPopulation
            .select_move(&state, &catalog, &mut rng)
            .unwrap();
        assert_eq!(pick.name(), "Орёл");
    }

    #[test]
    fn test_stranded_when_no_candidate_matches() {
        // Constraint letter with no available city: every strategy is stranded.
        let catalog = catalog();
        let mut state = GameState::new();
        state.record_move("казань".to_string(), Some('z'));
        let mut rng = GameRng::new(42);

        for strategy in [
            OpponentStrategy::UniformRandom,
            OpponentStrategy::LongestName,
            OpponentStrategy::LeastPopulation,
        ] {
            assert!(strategy.select_move(&state, &catalog, &mut rng).is_none());
        }
    }
}
