//! Shared fixtures for the engine's unit tests.

use rugline_types::{GameState, HiddenState};

/// The canonical fresh-run snapshot used across unit tests: the `ZOO`
/// starting board with an empty menu and no history.
pub(crate) fn baseline_state() -> GameState {
    GameState {
        turn: 0,
        max_turns: 20,
        chain_name: String::from("ZooChain"),
        founder_name: String::from("You"),
        ticker: String::from("ZOO"),
        token_price: 1.0,
        tvl: 500_000_000.0,
        official_treasury: 1_000_000_000.0,
        siphoned: 0.0,
        rage: 20.0,
        heat: 10.0,
        cred: 60.0,
        tech_hype: 40.0,
        season_id: String::from("meme_summer"),
        hidden: HiddenState {
            audit_risk: 0.0,
            founder_stability: 1.0,
            community_memory: 0.0,
            stablecoin_ratio: 0.3,
        },
        available_actions: Vec::new(),
        used_action_ids: Vec::new(),
        crisis_count: 0,
        log: Vec::new(),
        recent_events: Vec::new(),
        game_over: false,
        game_over_reason: None,
        pending_crisis: None,
        meters_capped: true,
    }
}
