//! Deterministic turn-step engine for the Rugline simulation.
//!
//! The engine is a small functional API over [`GameState`] values: every
//! entry point is a pure, terminating function that takes a state (plus the
//! content pack and the run's RNG stream) and returns a fresh successor
//! value. There is no I/O, no global state, and no error path in normal
//! operation — invalid inputs degrade to safe no-ops.
//!
//! # Entry points
//!
//! - [`initial_state`] -- build the starting snapshot and deal the first menu
//! - [`step`] -- run one full ordinary turn
//! - [`resolve_crisis_option`] -- resolve a pending crisis
//! - [`calculate_final_score`] -- score a (terminal) state
//! - [`evaluate_ending`] -- pick the narrative ending for a terminal state
//!
//! # Determinism
//!
//! All randomness flows through one caller-owned [`Mulberry32`] stream
//! (or any other `RngCore`), threaded explicitly into every function that
//! rolls. Same seed, same choices, same states — bit for bit.
//!
//! [`GameState`]: rugline_types::GameState

pub mod crisis;
pub mod market;
pub mod menu;
pub mod rng;
pub mod score;
pub mod select;
pub mod severity;
pub mod step;

#[cfg(test)]
pub(crate) mod testutil;

pub use crisis::{CrisisResolution, crisis_probability, resolve_crisis_option};
pub use market::{PRICE_FLOOR, TVL_FLOOR};
pub use menu::sample_menu;
pub use rng::{Mulberry32, unit};
pub use score::{ComboResult, EndingSummary, ScoreBreakdown, calculate_final_score, evaluate_ending};
pub use select::{pick_index, sample_without_replacement};
pub use severity::{Severity, SeverityTier, roll_severity};
pub use step::{initial_state, step};
