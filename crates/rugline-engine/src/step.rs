//! The turn-step pipeline.
//!
//! One ordinary turn runs these phases in fixed order:
//!
//! 1. Guards -- frozen or crisis-pending states are returned unchanged.
//! 2. Turn increment.
//! 3. Action resolution -- severity roll, transform, meter-delta rescale.
//! 4. Passive drift, then the market model.
//! 5. Crisis gate (only if none pending).
//! 6. Event gate (sharply damped after a defensive action).
//! 7. Next-turn menu sampling.
//! 8. Termination check.
//!
//! Every phase is a pure pass over [`GameState`]; the only effects are the
//! returned successor value and draws consumed from the caller's stream.

use rand::RngCore;
use rugline_types::{ContentPack, GameState, HiddenState, RunConfig};
use tracing::debug;

use crate::market::{PRICE_FLOOR, TVL_FLOOR, apply_drift, apply_market};
use crate::menu::sample_menu;
use crate::rng::unit;
use crate::select::pick_index;
use crate::severity::{rescale_meters, roll_severity};

/// Chance that a random event still fires on the turn a defensive action
/// was played (instead of the usual certainty).
const DEFENSIVE_EVENT_CHANCE: f64 = 0.3;

/// Conventional upper bound for the four pressure meters.
const METER_CAP: f64 = 100.0;

/// Build the starting snapshot for a run and deal the first action menu.
///
/// Config fields are free-form; the ticker is uppercased and truncated to
/// four characters. The RNG parameter exists only to deal the first menu —
/// pass the same stream you will thread through [`step`].
pub fn initial_state(
    config: &RunConfig,
    content: &ContentPack,
    rng: &mut dyn RngCore,
) -> GameState {
    let ticker: String = config.ticker.to_uppercase().chars().take(4).collect();
    let mut state = GameState {
        turn: 0,
        max_turns: config.max_turns,
        chain_name: config.chain_name.clone(),
        founder_name: config.founder_name.clone(),
        ticker,
        token_price: 1.0,
        tvl: 500_000_000.0,
        official_treasury: 1_000_000_000.0,
        siphoned: 0.0,
        rage: 20.0,
        heat: 10.0,
        cred: 60.0,
        tech_hype: 40.0,
        season_id: config.season_id.clone(),
        hidden: HiddenState {
            audit_risk: 0.0,
            founder_stability: 1.0,
            community_memory: 0.0,
            stablecoin_ratio: 0.3,
        },
        available_actions: Vec::new(),
        used_action_ids: Vec::new(),
        crisis_count: 0,
        log: vec![format!(
            "Welcome to {}. The foundation treasury is now yours to 'manage'.",
            config.chain_name
        )],
        recent_events: Vec::new(),
        game_over: false,
        game_over_reason: None,
        pending_crisis: None,
        meters_capped: config.meters_capped,
    };
    state.available_actions = sample_menu(content, &state, rng);
    state
}

/// Run one full ordinary turn.
///
/// No-op (the state is returned unchanged) when the run is frozen or a
/// crisis is pending — the caller must resolve the crisis first. An action
/// id that resolves against neither the menu nor the global table still
/// advances (and counts) the turn, but applies no transform.
///
/// A state already past a termination threshold (possible only when the
/// caller mutated it out-of-band — reachable states are always checked on
/// the way out) is frozen on the spot, without playing the turn.
pub fn step(
    content: &ContentPack,
    state: &GameState,
    action_id: &str,
    rng: &mut dyn RngCore,
) -> GameState {
    if state.game_over || state.pending_crisis.is_some() {
        return state.clone();
    }
    let entry = check_game_over(state.clone());
    if entry.game_over {
        return entry;
    }

    let season = content.season(&state.season_id);
    let mut next = state.clone();
    next.turn = next.turn.saturating_add(1);

    // Resolve against the offered menu, tolerating menu/selection races by
    // falling back to the global table.
    if !next.available_actions.iter().any(|id| id == action_id) {
        debug!(action = action_id, "action not in the offered menu; using global lookup");
    }
    let action = content.action(action_id);
    if let Some(action) = action {
        let severity = roll_severity(rng);
        let pre = next.clone();
        let applied = (action.apply)(&pre, rng);
        next = normalize(rescale_meters(&pre, applied, severity.multiplier));
        next.used_action_ids.push(action_id.to_string());
        next.log.insert(0, format!("{} → {}", severity.tier, action.name));
    } else {
        debug!(action = action_id, "unknown action id; turn advances with no transform");
    }

    next = normalize(apply_drift(&next, season));
    next = normalize(apply_market(&next, season, rng));

    if next.pending_crisis.is_none() {
        next = crate::crisis::maybe_raise_crisis(content, &next, season, rng);
    }

    let defensive = action.is_some_and(|a| a.defensive);
    if !defensive || unit(rng) < DEFENSIVE_EVENT_CHANCE {
        next = draw_event(content, next, season, rng);
    }

    next.available_actions = sample_menu(content, &next, rng);

    check_game_over(next)
}

/// Roll one weighted event draw and apply the winner, if any.
fn draw_event(
    content: &ContentPack,
    state: GameState,
    season: &rugline_types::SeasonDef,
    rng: &mut dyn RngCore,
) -> GameState {
    let weights: Vec<f64> = content
        .events
        .iter()
        .map(|event| {
            let base = (event.weight)(&state, season);
            if base > 0.0 {
                base * season.event_weight_mod(event.id)
            } else {
                0.0
            }
        })
        .collect();
    let Some(index) = pick_index(&weights, rng) else {
        return state;
    };
    let Some(event) = content.events.get(index) else {
        return state;
    };

    debug!(event = event.id, "event applied");
    let mut next = normalize((event.apply)(&state));
    next.recent_events.insert(0, event.id.to_string());
    next.recent_events.truncate(GameState::RECENT_EVENTS_WINDOW);
    next
}

/// Re-impose the engine's bounds after a transform.
///
/// Floors always apply: meters and money at zero, price and TVL at their
/// market floors, hidden ratchets at zero, the stablecoin ratio inside
/// `[0, 1]`. The meter cap at 100 applies only when the run was configured
/// with capped meters. `founder_stability` is deliberately unbounded in
/// both directions.
pub fn normalize(mut state: GameState) -> GameState {
    let cap = if state.meters_capped { METER_CAP } else { f64::INFINITY };
    state.rage = state.rage.clamp(0.0, cap);
    state.heat = state.heat.clamp(0.0, cap);
    state.cred = state.cred.clamp(0.0, cap);
    state.tech_hype = state.tech_hype.clamp(0.0, cap);
    state.official_treasury = state.official_treasury.max(0.0);
    state.siphoned = state.siphoned.max(0.0);
    state.token_price = state.token_price.max(PRICE_FLOOR);
    state.tvl = state.tvl.max(TVL_FLOOR);
    state.hidden.audit_risk = state.hidden.audit_risk.max(0.0);
    state.hidden.community_memory = state.hidden.community_memory.max(0.0);
    state.hidden.stablecoin_ratio = state.hidden.stablecoin_ratio.clamp(0.0, 1.0);
    state
}

/// Evaluate the termination conditions in priority order and freeze the
/// state on the first match. Exactly one reason is ever recorded.
fn check_game_over(mut state: GameState) -> GameState {
    if state.game_over {
        return state;
    }
    let reason = if state.rage >= 100.0 {
        Some(String::from("DAO coup: the community overthrew you."))
    } else if state.heat >= 100.0 {
        Some(String::from("Regulatory shutdown: the treasury is frozen."))
    } else if state.cred <= 0.0 {
        Some(String::from("Credibility collapse: nobody believes you anymore."))
    } else if state.official_treasury <= 0.0 {
        Some(String::from("Official treasury empty: no more games to play."))
    } else if state.turn >= state.max_turns {
        Some(format!(
            "Regime change: your era is over after {} governance cycles.",
            state.max_turns
        ))
    } else {
        None
    };

    if let Some(reason) = reason {
        debug!(reason = %reason, turn = state.turn, "run ended");
        state.game_over = true;
        state.game_over_reason = Some(reason);
    }
    state
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use crate::testutil::baseline_state;

    #[test]
    fn normalize_caps_meters_when_configured() {
        let mut state = baseline_state();
        state.rage = 140.0;
        state.cred = -5.0;
        let normalized = normalize(state);
        assert_eq!(normalized.rage, 100.0);
        assert_eq!(normalized.cred, 0.0);
    }

    #[test]
    fn normalize_leaves_overflow_when_uncapped() {
        let mut state = baseline_state();
        state.meters_capped = false;
        state.rage = 140.0;
        let normalized = normalize(state);
        assert_eq!(normalized.rage, 140.0);
    }

    #[test]
    fn normalize_floors_money_and_ratchets() {
        let mut state = baseline_state();
        state.official_treasury = -10.0;
        state.siphoned = -1.0;
        state.token_price = 0.0001;
        state.tvl = 5.0;
        state.hidden.audit_risk = -0.2;
        state.hidden.stablecoin_ratio = 1.7;
        let normalized = normalize(state);
        assert_eq!(normalized.official_treasury, 0.0);
        assert_eq!(normalized.siphoned, 0.0);
        assert_eq!(normalized.token_price, PRICE_FLOOR);
        assert_eq!(normalized.tvl, TVL_FLOOR);
        assert_eq!(normalized.hidden.audit_risk, 0.0);
        assert_eq!(normalized.hidden.stablecoin_ratio, 1.0);
    }

    #[test]
    fn normalize_keeps_founder_stability_unbounded() {
        let mut state = baseline_state();
        state.hidden.founder_stability = -0.75;
        let normalized = normalize(state);
        assert_eq!(normalized.hidden.founder_stability, -0.75);
    }

    #[test]
    fn game_over_priority_records_exactly_one_reason() {
        // Every threshold crossed at once; rage wins the tie-break.
        let mut state = baseline_state();
        state.meters_capped = false;
        state.rage = 120.0;
        state.heat = 120.0;
        state.cred = 0.0;
        state.official_treasury = 0.0;
        state.turn = 50;
        let ended = check_game_over(state);
        assert!(ended.game_over);
        assert!(ended.game_over_reason.unwrap().contains("DAO coup"));
    }

    #[test]
    fn turn_budget_ends_the_run() {
        let mut state = baseline_state();
        state.turn = state.max_turns;
        let ended = check_game_over(state);
        assert!(ended.game_over);
        assert!(ended.game_over_reason.unwrap().contains("Regime change"));
    }

    #[test]
    fn already_frozen_states_keep_their_reason() {
        let mut state = baseline_state();
        state.game_over = true;
        state.game_over_reason = Some(String::from("original reason"));
        state.rage = 150.0;
        let ended = check_game_over(state);
        assert_eq!(ended.game_over_reason.as_deref(), Some("original reason"));
    }

    #[test]
    fn ticker_is_uppercased_and_truncated() {
        let content = ContentPack {
            actions: &[],
            events: &[],
            crises: &[],
            seasons: &[],
            endings: &[],
            combos: &[],
        };
        let config = RunConfig {
            ticker: String::from("frogger"),
            ..RunConfig::default()
        };
        let mut rng = Mulberry32::new(1);
        let state = initial_state(&config, &content, &mut rng);
        assert_eq!(state.ticker, "FROG");
    }
}
