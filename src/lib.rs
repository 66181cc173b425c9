//! # city-chain
//!
//! A turn-based word-chain ("Cities") game engine: a human and a scripted
//! opponent alternately name cities, and each name must start with the
//! trailing letter of the previous one. Repeats and rule violations end
//! the game.
//!
//! ## Design Principles
//!
//! 1. **Immutable catalog, owned state**: the city catalog is validated
//!    once and never mutated; which cities have been used lives only in
//!    `GameState`. Two sessions over one catalog cannot interfere.
//!
//! 2. **Rejections are data**: after construction the engine never fails.
//!    Unknown names, reuse, wrong letters, and stranded players all come
//!    back as outcome values, not errors.
//!
//! 3. **Deterministic by seed**: the opponent's randomness is an explicit
//!    `GameRng` parameter. A fixed seed replays an identical match.
//!
//! 4. **No I/O**: the engine consumes already-deserialized records and
//!    returns outcome values. Loading datasets and rendering results
//!    belong to the host.
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG
//! - `catalog`: raw records, validation, the immutable city catalog
//! - `rules`: normalization, the trailing-letter function, the move resolver
//! - `state`: per-session game state and phases
//! - `strategy`: opponent move-selection policies
//! - `session`: the turn loop and host-facing move/query API
//! - `error`: the fatal error taxonomy (construction time only)
//!
//! ## Example
//!
//! ```
//! use city_chain::{CityCatalog, RawCity, Session, SessionConfig};
//!
//! let catalog = CityCatalog::build(vec![
//!     RawCity::new("Reno", 264_165),
//!     RawCity::new("Omaha", 486_051),
//!     RawCity::new("Austin", 961_855),
//! ])
//! .unwrap();
//!
//! let mut session = Session::new(catalog, SessionConfig::default()).unwrap();
//! let (report, reply) = session.play_turn("Reno");
//! assert!(report.accepted);
//! // The only legal reply to 'o' is Omaha.
//! assert_eq!(reply.unwrap().city.as_deref(), Some("Omaha"));
//! ```

pub mod catalog;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod state;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, Player};

pub use crate::catalog::{
    AttributeKey, AttributeValue, Attributes, CityCatalog, CityRecord, RawCity,
};

pub use crate::rules::{
    normalize, resolve_forfeit, resolve_move, ChainRules, MoveOutcome, RejectReason, Resolution,
    DEFAULT_EXCLUSIONS,
};

pub use crate::state::{GamePhase, GameState};

pub use crate::strategy::OpponentStrategy;

pub use crate::session::{MoveReport, OpponentReply, Session, SessionConfig, SessionStatus};

pub use crate::error::{CatalogError, ConfigError};
