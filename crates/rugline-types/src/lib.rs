//! Shared type definitions for the Rugline simulation.
//!
//! This crate is the single source of truth for the types that cross the
//! engine boundary. Snapshot types ([`GameState`] and friends) flow
//! downstream to `TypeScript` via `ts-rs` for the web presentation layer;
//! content contracts ([`ActionDef`], [`EventDef`], [`CrisisDef`], ...) are
//! plain tables of value objects with function fields, consumed read-only
//! by the engine.
//!
//! # Modules
//!
//! - [`state`] -- the run snapshot: `GameState`, `HiddenState`, `RunConfig`
//! - [`content`] -- content-pack contracts and load-time validation

pub mod content;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use content::{
    ActionCategory, ActionDef, ComboDef, ContentError, ContentPack, CrisisDef, CrisisOption,
    CrisisOutcome, CrisisSeverity, EndingCategory, EndingDef, EventDef, SeasonDef,
};
pub use state::{GameState, HiddenState, RunConfig};
