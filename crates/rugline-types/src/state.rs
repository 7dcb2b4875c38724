//! Run snapshot types.
//!
//! A [`GameState`] is a plain value: the engine creates one with
//! `initial_state`, and every subsequent entry point returns a fresh
//! successor value. The presentation layer holds the latest snapshot
//! read-only and never mutates it. Everything here serializes, so a
//! snapshot can be inspected, diffed, or shipped to the web UI as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Hidden multipliers tracked per run but never shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HiddenState {
    /// Accumulated risk of the treasury flows being noticed. Unbounded
    /// upward; only ratchets down through a handful of crisis outcomes.
    pub audit_risk: f64,
    /// Founder composure. Can go negative; low values feed mutiny-flavored
    /// events and crises.
    pub founder_stability: f64,
    /// How well the community remembers past incidents. Never negative.
    pub community_memory: f64,
    /// Fraction of the official treasury held in stablecoins, in `[0, 1]`.
    /// The stable fraction is insulated from token price swings.
    pub stablecoin_ratio: f64,
}

/// Full state of one run.
///
/// Owned exclusively by the engine; replaced, never mutated in place.
/// The engine has no hidden internal state beyond this value and the
/// caller-supplied RNG stream, which is what makes a completed run
/// replayable from `(seed, action choices, crisis-option choices)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Completed ordinary turns. Crisis resolution does not advance this.
    pub turn: u32,
    /// Turn budget; reaching it ends the run as a natural conclusion.
    pub max_turns: u32,
    /// Display name of the chain.
    pub chain_name: String,
    /// Display name of the founder.
    pub founder_name: String,
    /// Token ticker, uppercased and truncated to four characters.
    pub ticker: String,
    /// Token price in USD. Always positive (floored by the market model).
    pub token_price: f64,
    /// Total value locked in USD. Floored at a minimum liquidity value.
    pub tvl: f64,
    /// Protocol treasury in USD. Never negative.
    pub official_treasury: f64,
    /// Value extracted off-chain so far; the base score. Never negative.
    pub siphoned: f64,
    /// Community anger, conventionally `[0, 100]`.
    pub rage: f64,
    /// Regulatory attention, conventionally `[0, 100]`.
    pub heat: f64,
    /// Credibility, conventionally `[0, 100]`.
    pub cred: f64,
    /// Technology hype, conventionally `[0, 100]`.
    pub tech_hype: f64,
    /// Active season id; a pure lookup into the content pack.
    pub season_id: String,
    /// Hidden multipliers.
    pub hidden: HiddenState,
    /// This turn's offered action menu, re-sampled every turn.
    pub available_actions: Vec<String>,
    /// Every action applied this run, append-only. Scoring input.
    pub used_action_ids: Vec<String>,
    /// Number of crises raised this run.
    pub crisis_count: u32,
    /// Narrative trace, most recent first. The engine appends and never
    /// reads it back for logic decisions.
    pub log: Vec<String>,
    /// Sliding window (max 5) of recently applied event ids, most recent
    /// first.
    pub recent_events: Vec<String>,
    /// Terminal flag. Once set, the state is frozen.
    pub game_over: bool,
    /// Human-readable cause of the terminal state.
    pub game_over_reason: Option<String>,
    /// Id of the crisis awaiting resolution, if any. While set, ordinary
    /// turn steps are refused.
    pub pending_crisis: Option<String>,
    /// Whether the normalization pass caps meters at 100 (`true`) or
    /// enforces floors only, letting meters overflow (`false`).
    pub meters_capped: bool,
}

impl GameState {
    /// Number of event ids retained in [`Self::recent_events`].
    pub const RECENT_EVENTS_WINDOW: usize = 5;
}

/// Run setup accepted by `initial_state`.
///
/// All fields are free-form; absent fields take the documented defaults.
/// The ticker is uppercased and truncated to four characters on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Chain display name. Default `"ZooChain"`.
    pub chain_name: String,
    /// Founder display name. Default `"You"`.
    pub founder_name: String,
    /// Token ticker. Default `"ZOO"`.
    pub ticker: String,
    /// Season id. Default `"meme_summer"`.
    pub season_id: String,
    /// Turn budget. Default 20.
    pub max_turns: u32,
    /// Cap meters at 100 after every transform. Default `true`.
    pub meters_capped: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            chain_name: String::from("ZooChain"),
            founder_name: String::from("You"),
            ticker: String::from("ZOO"),
            season_id: String::from("meme_summer"),
            max_turns: 20,
            meters_capped: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.chain_name, "ZooChain");
        assert_eq!(config.ticker, "ZOO");
        assert_eq!(config.season_id, "meme_summer");
        assert_eq!(config.max_turns, 20);
        assert!(config.meters_capped);
    }

    #[test]
    fn game_state_round_trips_through_json() {
        let state = GameState {
            turn: 3,
            max_turns: 20,
            chain_name: String::from("FrogFi"),
            founder_name: String::from("0xAndy"),
            ticker: String::from("FROG"),
            token_price: 1.25,
            tvl: 500_000_000.0,
            official_treasury: 900_000_000.0,
            siphoned: 100_000_000.0,
            rage: 24.5,
            heat: 11.0,
            cred: 58.2,
            tech_hype: 44.0,
            season_id: String::from("meme_summer"),
            hidden: HiddenState {
                audit_risk: 0.1,
                founder_stability: 0.95,
                community_memory: 0.0,
                stablecoin_ratio: 0.3,
            },
            available_actions: vec![String::from("siphon_advisory")],
            used_action_ids: vec![String::from("siphon_advisory")],
            crisis_count: 1,
            log: vec![String::from("You siphoned funds.")],
            recent_events: vec![String::from("vc_tweetstorm")],
            game_over: false,
            game_over_reason: None,
            pending_crisis: Some(String::from("bridge_exploit_rumour")),
            meters_capped: true,
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
