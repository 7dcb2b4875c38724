//! The crisis sub-state-machine.
//!
//! States: `NONE -> PENDING -> NONE`, never nested. At most one crisis is
//! pending at a time; while one is, ordinary turn steps are refused and
//! only option resolution may mutate state. Resolution never advances the
//! turn counter.
//!
//! Option resolution is two-phase: `resolve` may consume randomness and
//! only then fixes the narrative and the transform, which is applied
//! immediately. The two phases are never collapsed or memoized — offering
//! an option fixes nothing.

use rand::RngCore;
use rugline_types::{ContentPack, GameState, SeasonDef};
use tracing::debug;

use crate::rng::unit;
use crate::select::pick_index;
use crate::step::normalize;

/// Baseline per-turn crisis probability before state pressure.
const BASE_PROBABILITY: f64 = 0.05;

/// Per-turn probability of a crisis for the given state and season.
pub fn crisis_probability(state: &GameState, season: &SeasonDef) -> f64 {
    let base = BASE_PROBABILITY
        + state.rage * 0.001
        + state.heat * 0.001
        + (100.0 - state.cred) * 0.0005
        + state.hidden.audit_risk * 0.2;
    base * season.crisis_factor
}

/// Roll the crisis gate and, on a hit, select and raise a crisis.
///
/// Consumes one draw for the gate and, only on a hit, one more for the
/// selection. No-op (gate draw still consumed) when the gate misses or no
/// crisis is eligible.
pub fn maybe_raise_crisis(
    content: &ContentPack,
    state: &GameState,
    season: &SeasonDef,
    rng: &mut dyn RngCore,
) -> GameState {
    let adjusted = crisis_probability(state, season);
    if unit(rng) > adjusted {
        return state.clone();
    }

    let weights: Vec<f64> = content.crises.iter().map(|c| (c.weight)(state)).collect();
    let Some(index) = pick_index(&weights, rng) else {
        return state.clone();
    };
    let Some(crisis) = content.crises.get(index) else {
        return state.clone();
    };

    debug!(crisis = crisis.id, probability = adjusted, "crisis raised");
    let mut next = state.clone();
    next.pending_crisis = Some(crisis.id.to_string());
    next.crisis_count = next.crisis_count.saturating_add(1);
    next.log.insert(0, format!("Crisis triggered: {}", crisis.name));
    next
}

/// A resolved crisis: the successor state and the outcome narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct CrisisResolution {
    /// The successor state, with the pending crisis cleared.
    pub state: GameState,
    /// The narrative of how the chosen option played out. Empty when the
    /// call was a no-op.
    pub narrative: String,
}

/// Resolve the pending crisis with the chosen option.
///
/// Fail-closed semantics: with no pending crisis, an id that no longer
/// resolves against the content pack, or an unknown option id, the state
/// is returned unchanged (crisis still pending) with an empty narrative.
/// A frozen (`game_over`) state is returned unchanged as well.
pub fn resolve_crisis_option(
    content: &ContentPack,
    state: &GameState,
    option_id: &str,
    rng: &mut dyn RngCore,
) -> CrisisResolution {
    let unchanged = || CrisisResolution {
        state: state.clone(),
        narrative: String::new(),
    };

    if state.game_over {
        return unchanged();
    }
    let Some(pending_id) = state.pending_crisis.as_deref() else {
        return unchanged();
    };
    let Some(crisis) = content.crisis(pending_id) else {
        debug!(crisis = pending_id, "pending crisis unknown to content pack");
        return unchanged();
    };
    let Some(option) = crisis.option(option_id) else {
        debug!(crisis = pending_id, option = option_id, "unknown crisis option");
        return unchanged();
    };

    let outcome = (option.resolve)(state, rng);
    let mut next = normalize((outcome.apply)(state));
    next.pending_crisis = None;
    next.log.insert(0, format!("[CRISIS] {}", outcome.narrative));
    CrisisResolution {
        state: next,
        narrative: outcome.narrative,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use crate::testutil::baseline_state;
    use rugline_types::{CrisisDef, CrisisOption, CrisisOutcome, CrisisSeverity};

    fn always(_s: &GameState) -> f64 {
        1.0
    }

    fn calm_down(s: &GameState) -> GameState {
        let mut next = s.clone();
        next.rage -= 10.0;
        next
    }

    fn resolve_calm(_s: &GameState, _rng: &mut dyn RngCore) -> CrisisOutcome {
        CrisisOutcome {
            narrative: String::from("The mob simmers down."),
            apply: calm_down,
        }
    }

    static TEST_CRISES: &[CrisisDef] = &[CrisisDef {
        id: "test_crisis",
        name: "Test Crisis",
        description: "",
        severity: CrisisSeverity::Low,
        weight: always,
        options: &[CrisisOption {
            id: "calm",
            label: "Calm everyone down",
            resolve: resolve_calm,
        }],
    }];

    fn pack() -> ContentPack {
        ContentPack {
            actions: &[],
            events: &[],
            crises: TEST_CRISES,
            seasons: &[],
            endings: &[],
            combos: &[],
        }
    }

    #[test]
    fn probability_grows_with_pressure() {
        let calm = baseline_state();
        let mut hot = baseline_state();
        hot.rage = 90.0;
        hot.heat = 70.0;
        hot.cred = 10.0;
        hot.hidden.audit_risk = 0.5;
        let season = SeasonDef::NEUTRAL;
        assert!(crisis_probability(&hot, &season) > crisis_probability(&calm, &season));
    }

    #[test]
    fn season_factor_scales_probability() {
        let state = baseline_state();
        let mut spicy = SeasonDef::NEUTRAL;
        spicy.crisis_factor = 1.3;
        assert!(
            crisis_probability(&state, &spicy)
                > crisis_probability(&state, &SeasonDef::NEUTRAL)
        );
    }

    #[test]
    fn raising_a_crisis_blocks_and_counts() {
        // audit_risk 5.0 pushes the gate probability past 1, so the first
        // draw always hits.
        let mut state = baseline_state();
        state.hidden.audit_risk = 5.0;
        let mut rng = Mulberry32::new(1);
        let next = maybe_raise_crisis(&pack(), &state, &SeasonDef::NEUTRAL, &mut rng);
        assert_eq!(next.pending_crisis.as_deref(), Some("test_crisis"));
        assert_eq!(next.crisis_count, 1);
        assert!(next.log.first().unwrap().contains("Crisis triggered"));
    }

    #[test]
    fn resolution_clears_pending_and_applies_transform() {
        let mut state = baseline_state();
        state.pending_crisis = Some(String::from("test_crisis"));
        let mut rng = Mulberry32::new(1);
        let resolution = resolve_crisis_option(&pack(), &state, "calm", &mut rng);
        assert_eq!(resolution.state.pending_crisis, None);
        assert_eq!(resolution.state.rage, state.rage - 10.0);
        assert_eq!(resolution.narrative, "The mob simmers down.");
        assert_eq!(resolution.state.turn, state.turn, "resolution must not advance the turn");
        assert!(resolution.state.log.first().unwrap().starts_with("[CRISIS]"));
    }

    #[test]
    fn unknown_option_fails_closed() {
        let mut state = baseline_state();
        state.pending_crisis = Some(String::from("test_crisis"));
        let mut rng = Mulberry32::new(1);
        let resolution = resolve_crisis_option(&pack(), &state, "nonsense", &mut rng);
        assert_eq!(resolution.state, state);
        assert!(resolution.narrative.is_empty());
        assert_eq!(resolution.state.pending_crisis.as_deref(), Some("test_crisis"));
    }

    #[test]
    fn no_pending_crisis_is_a_no_op() {
        let state = baseline_state();
        let mut rng = Mulberry32::new(1);
        let resolution = resolve_crisis_option(&pack(), &state, "calm", &mut rng);
        assert_eq!(resolution.state, state);
        assert!(resolution.narrative.is_empty());
    }

    #[test]
    fn frozen_state_is_a_no_op() {
        let mut state = baseline_state();
        state.game_over = true;
        state.pending_crisis = Some(String::from("test_crisis"));
        let mut rng = Mulberry32::new(1);
        let resolution = resolve_crisis_option(&pack(), &state, "calm", &mut rng);
        assert_eq!(resolution.state, state);
    }
}
